use crate::core::error::Result;
use crate::utils::path::try_validate_filepath;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads a file into memory and returns its lines, each trimmed of
/// surrounding whitespace. An unreadable path yields an empty vector; a read
/// error part way through yields the lines read before it.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    let file = match try_validate_filepath(path).and_then(|abs| Ok(File::open(abs)?)) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("opening '{}' - {}", path.display(), e);
            return Vec::new();
        }
    };
    collect_lines(BufReader::new(file), path)
}

pub fn try_load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(try_validate_filepath(path)?)?;
    let mut lines = Vec::new();
    scan_lines(BufReader::new(file), &mut lines)?;
    Ok(lines)
}

fn collect_lines<R: BufRead>(reader: R, path: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    if let Err(e) = scan_lines(reader, &mut lines) {
        log::warn!("reading '{}' - {}", path.display(), e);
    }
    lines
}

fn scan_lines<R: BufRead>(reader: R, lines: &mut Vec<String>) -> io::Result<()> {
    for line in reader.split(b'\n') {
        let line = line?;
        lines.push(String::from_utf8_lossy(&line).trim().to_string());
    }
    Ok(())
}

pub fn line_in_file_contains<P: AsRef<Path>>(path: P, needle: &str) -> (Vec<usize>, Vec<String>) {
    let mut indices = Vec::new();
    let mut matches = Vec::new();

    for (n, line) in load_lines(path).into_iter().enumerate() {
        if line.contains(needle) {
            indices.push(n);
            matches.push(line);
        }
    }

    if matches.is_empty() {
        log::info!("no matches");
    }
    (indices, matches)
}

pub fn read_file_bytes<P: AsRef<Path>>(path: P) -> Option<Vec<u8>> {
    let path = path.as_ref();
    match try_validate_filepath(path).and_then(|abs| Ok(std::fs::read(abs)?)) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::warn!("reading '{}' - {}", path.display(), e);
            None
        }
    }
}
