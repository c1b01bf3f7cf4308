pub mod json;
pub mod table;
pub mod xml;

pub use json::{json_flat, json_pretty, try_json_flat, try_json_pretty, try_json_pretty_with};
pub use table::{tab_flex, tab_flex_to, TabWriter};
pub use xml::{
    try_xml_pretty, try_xml_pretty_any, try_xml_pretty_with, xml_pretty, xml_pretty_any,
};
