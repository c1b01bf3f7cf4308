use std::io::{self, BufRead, BufReader};

const STDIN_BUFFER_SIZE: usize = 1024 * 1024;

/// Reads lines from standard input until two blank lines (or two
/// end-of-stream signals) arrive back to back.
pub fn read_lines_from_stdin() -> Vec<String> {
    let stdin = io::stdin();
    read_lines_from(BufReader::with_capacity(STDIN_BUFFER_SIZE, stdin.lock()))
}

pub fn read_lines_from<R: BufRead>(mut reader: R) -> Vec<String> {
    let mut lines = Vec::new();
    let mut skip = false;

    loop {
        let line = match next_line(&mut reader) {
            Ok(Some(line)) => line,
            Ok(None) => {
                if skip {
                    break;
                }
                skip = true;
                continue;
            }
            Err(e) => {
                log::warn!("reading - {}", e);
                return lines;
            }
        };

        if line.is_empty() {
            if skip {
                break;
            }
            skip = true;
            continue;
        }

        skip = false;
        lines.push(line);
    }

    lines
}

/// # Panics
///
/// Panics on any read failure other than end-of-stream.
pub fn read_from_stdin() -> String {
    let stdin = io::stdin();
    read_line_from(BufReader::with_capacity(STDIN_BUFFER_SIZE, stdin.lock()))
}

pub fn read_line_from<R: BufRead>(mut reader: R) -> String {
    match next_line(&mut reader) {
        Ok(line) => line.unwrap_or_default(),
        Err(e) => panic!("reading line - {}", e),
    }
}

// `None` at end of stream.
fn next_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
