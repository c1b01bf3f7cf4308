use crate::output::OutputFormatter;
use std::io;
use std::path::{Path, PathBuf};
use textkit::core::{Result, TextConfig, TextIoError};
use textkit::format::{json_flat, tab_flex_to, try_json_pretty_with, try_xml_pretty_with};
use textkit::io::{
    line_in_file_contains, load_lines, read_csv_file, read_file_bytes, read_from_stdin,
    read_lines_from_stdin, with_new_csv_file,
};
use textkit::utils::{concat_list_nicely, file_exists, split_lines, validate_filepath};

pub struct CommandExecutor {
    config: TextConfig,
    formatter: OutputFormatter,
}

impl CommandExecutor {
    pub fn new(config: TextConfig, use_colors: bool, verbose: bool) -> Self {
        Self {
            config,
            formatter: OutputFormatter::new(use_colors, verbose),
        }
    }

    pub fn exists(&self, path: PathBuf) -> Result<()> {
        if file_exists(&path) {
            self.formatter
                .print_success(&format!("{} exists", path.display()));
        } else {
            self.formatter
                .print_warning(&format!("{} does not exist", path.display()));
        }
        Ok(())
    }

    pub fn validate(&self, path: PathBuf) -> Result<()> {
        let validated = validate_filepath(&path);
        if validated.is_empty() {
            return Err(TextIoError::PathNotFound(path));
        }
        println!("{}", validated);
        Ok(())
    }

    pub fn lines(&self, path: PathBuf) -> Result<()> {
        let lines = load_lines(&path);
        self.formatter.print_lines(&lines);
        Ok(())
    }

    pub fn grep(&self, path: PathBuf, needle: String) -> Result<()> {
        let (indices, lines) = line_in_file_contains(&path, &needle);
        if lines.is_empty() {
            self.formatter
                .print_info(&format!("No lines in {} contain '{}'", path.display(), needle));
            return Ok(());
        }

        let rows: Vec<Vec<String>> = indices
            .iter()
            .zip(lines)
            .map(|(i, line)| vec![i.to_string(), line])
            .collect();
        self.render(&["line", "text"], &rows)
    }

    pub fn bytes(&self, path: PathBuf) -> Result<()> {
        let bytes = self.read(&path)?;
        println!("{}", bytes.len());
        Ok(())
    }

    pub fn csv(&self, path: PathBuf) -> Result<()> {
        let mut rows = read_csv_file(&path);
        if rows.is_empty() {
            self.formatter
                .print_info(&format!("No records read from {}", path.display()));
            return Ok(());
        }

        let headers = rows.remove(0);
        if self.formatter.is_verbose() {
            self.formatter
                .print_detail(&format!("columns: {}", concat_list_nicely(&headers)));
        }
        self.render(&headers, &rows)
    }

    pub fn write_csv(&self, path: PathBuf, headers: Vec<String>, sep: String) -> Result<()> {
        self.formatter
            .print_header(&format!("Rows for {}", concat_list_nicely(&headers)));
        self.formatter.print_info(&format!(
            "One row per line, fields separated by '{}'. Finish with two blank lines.",
            sep
        ));

        let lines = read_lines_from_stdin();
        let rows = split_lines(&lines, &sep);

        let written = with_new_csv_file(&path, |file| {
            file.write_record(&headers)?;
            for row in &rows {
                file.write_record(row)?;
            }
            Ok(rows.len() + 1)
        })?;

        self.formatter
            .print_success(&format!("Wrote {} lines to {}", written, path.display()));
        Ok(())
    }

    pub fn json(&self, path: PathBuf, flat: bool) -> Result<()> {
        let bytes = self.read(&path)?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)?;

        if flat {
            println!("{}", json_flat(&value));
        } else {
            println!("{}", try_json_pretty_with(&value, self.config.json_indent)?);
        }
        Ok(())
    }

    pub fn xml(&self, path: PathBuf) -> Result<()> {
        let bytes = self.read(&path)?;
        let raw = String::from_utf8_lossy(&bytes);
        println!("{}", try_xml_pretty_with(&raw, self.config.xml_indent)?);
        Ok(())
    }

    pub fn ask(&self, prompt: Option<String>) -> Result<()> {
        if let Some(prompt) = prompt {
            self.formatter.print_info(&prompt);
        }
        let answer = read_from_stdin();
        println!("{}", answer);
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        read_file_bytes(path).ok_or_else(|| TextIoError::PathNotFound(path.to_path_buf()))
    }

    fn render(&self, headers: &[impl AsRef<str>], rows: &[Vec<String>]) -> Result<()> {
        let headers: Vec<&str> = headers.iter().map(|h| h.as_ref()).collect();
        let stdout = io::stdout();
        tab_flex_to(stdout.lock(), &self.config.table, &headers, rows)?;
        Ok(())
    }
}
