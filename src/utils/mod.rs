pub mod list;
pub mod path;

pub use list::{append_if_unique, concat_list_nicely, exists_in_list, split_lines};
pub use path::{absolute_path, file_exists, try_validate_filepath, validate_filepath};
