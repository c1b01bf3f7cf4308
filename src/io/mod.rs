pub mod csv;
pub mod lines;
pub mod stdin;

pub use self::csv::{
    comma_sep, new_csv_file, read_csv_file, try_new_csv_file, with_new_csv_file, CsvFile,
};
pub use lines::{line_in_file_contains, load_lines, read_file_bytes, try_load_lines};
pub use stdin::{read_from_stdin, read_line_from, read_lines_from, read_lines_from_stdin};
