use crate::core::error::{Result, TextIoError};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::any::Any;

pub fn xml_pretty(raw: &str) -> String {
    try_xml_pretty(raw).unwrap_or_else(|e| e.to_string())
}

/// Like [`xml_pretty`] for a value of any type. Only `String` and `&str`
/// hold XML; anything else produces the type-mismatch error text.
pub fn xml_pretty_any<T: Any>(value: &T) -> String {
    try_xml_pretty_any(value).unwrap_or_else(|e| e.to_string())
}

pub fn try_xml_pretty_any<T: Any>(value: &T) -> Result<String> {
    let value = value as &dyn Any;
    if let Some(raw) = value.downcast_ref::<String>() {
        return try_xml_pretty(raw);
    }
    if let Some(raw) = value.downcast_ref::<&str>() {
        return try_xml_pretty(raw);
    }
    Err(TextIoError::TypeMismatch {
        expected: "string",
        found: std::any::type_name::<T>(),
    })
}

pub fn try_xml_pretty(raw: &str) -> Result<String> {
    try_xml_pretty_with(raw, 4)
}

pub fn try_xml_pretty_with(raw: &str, indent: usize) -> Result<String> {
    let mut reader = Reader::from_str(raw);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);
    let mut depth = 0usize;

    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Eof => break,
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            // layout between tags is replaced by the writer's indentation
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => continue,
            _ => {}
        }
        writer
            .write_event(event)
            .map_err(|e| TextIoError::Xml(e.to_string()))?;
    }

    if depth > 0 {
        return Err(TextIoError::Xml(format!(
            "unexpected end of input, {} element(s) left open",
            depth
        )));
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_pretty_indents_nested_elements() {
        assert_eq!(
            xml_pretty("<a><b>x</b><c/></a>"),
            "<a>\n    <b>x</b>\n    <c/>\n</a>"
        );
    }

    #[test]
    fn test_xml_pretty_discards_existing_layout() {
        let raw = "<a>\n      <b>x</b>\n\t<c/>\n</a>";
        assert_eq!(xml_pretty(raw), "<a>\n    <b>x</b>\n    <c/>\n</a>");
    }

    #[test]
    fn test_xml_pretty_keeps_mixed_content_text() {
        assert_eq!(
            xml_pretty("<p>Hello <b>world</b> again</p>"),
            "<p>Hello <b>world</b> again</p>"
        );
        assert_eq!(xml_pretty("<a> padded text </a>"), "<a> padded text </a>");
    }

    #[test]
    fn test_xml_pretty_custom_indent() {
        assert_eq!(
            try_xml_pretty_with("<a><b/></a>", 2).unwrap(),
            "<a>\n  <b/>\n</a>"
        );
    }

    #[test]
    fn test_xml_pretty_empty_input() {
        assert_eq!(xml_pretty(""), "");
    }

    #[test]
    fn test_mismatched_tags_return_error_text() {
        let err = try_xml_pretty("<a><b></a>").unwrap_err();
        assert!(matches!(err, TextIoError::Xml(_)));
        assert_eq!(xml_pretty("<a><b></a>"), err.to_string());
    }

    #[test]
    fn test_unclosed_element_is_an_error() {
        assert!(matches!(try_xml_pretty("<a><b>x</b>"), Err(TextIoError::Xml(_))));
        assert!(!xml_pretty("<a>").is_empty());
    }

    #[test]
    fn test_xml_pretty_any_accepts_strings() {
        let owned = String::from("<a><b/></a>");
        assert_eq!(xml_pretty_any(&owned), "<a>\n    <b/>\n</a>");
        assert_eq!(xml_pretty_any(&"<a/>"), "<a/>");
    }

    #[test]
    fn test_xml_pretty_any_rejects_other_types() {
        assert!(matches!(
            try_xml_pretty_any(&42u32),
            Err(TextIoError::TypeMismatch { expected: "string", found: "u32" })
        ));
        assert_eq!(
            xml_pretty_any(&42u32),
            "Type mismatch: expected string, found u32"
        );
    }
}
