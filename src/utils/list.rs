pub fn exists_in_list(query: &str, list: &[String]) -> bool {
    list.iter().any(|l| l == query)
}

pub fn append_if_unique(mut list: Vec<String>, value: &str) -> Vec<String> {
    if !exists_in_list(value, &list) {
        list.push(value.to_string());
    }
    list
}

/// Joins the non-empty entries with `", "` for printing.
///
/// Trailing commas and spaces are trimmed from the result, so an entry that
/// itself ends in `,` or ` ` loses those characters when it comes last.
pub fn concat_list_nicely<S: AsRef<str>>(list: &[S]) -> String {
    let mut res = String::new();
    for entry in list.iter().map(|e| e.as_ref()).filter(|e| !e.is_empty()) {
        res.push_str(entry);
        res.push_str(", ");
    }
    res.trim_end_matches([',', ' ']).to_string()
}

pub fn split_lines<S: AsRef<str>>(lines: &[S], sep: &str) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|l| l.as_ref().split(sep).map(str::to_string).collect())
        .collect()
}
