pub mod core;
pub mod format;
pub mod io;
pub mod utils;

pub use crate::core::{Result, TableConfig, TextConfig, TextConfigBuilder, TextIoError};

pub use utils::{
    append_if_unique, concat_list_nicely, exists_in_list, file_exists, split_lines,
    validate_filepath,
};

pub use io::{
    comma_sep, line_in_file_contains, load_lines, new_csv_file, read_csv_file, read_file_bytes,
    read_from_stdin, read_lines_from_stdin, with_new_csv_file, CsvFile,
};

pub use format::{json_flat, json_pretty, tab_flex, xml_pretty, xml_pretty_any};

pub mod prelude {
    pub use crate::core::{Result, TextConfig, TextIoError};
    pub use crate::format::{json_flat, json_pretty, tab_flex, xml_pretty};
    pub use crate::io::{comma_sep, load_lines, read_csv_file};
}
