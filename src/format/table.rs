use crate::core::config::TableConfig;
use std::fmt::Display;
use std::io::{self, Write};

pub struct TabWriter<W: Write> {
    out: W,
    config: TableConfig,
    buf: Vec<u8>,
}

struct Line {
    cells: Vec<String>,
    trailing: String,
    newline: bool,
}

impl<W: Write> TabWriter<W> {
    pub fn new(out: W, config: TableConfig) -> Self {
        Self {
            out,
            config,
            buf: Vec::new(),
        }
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        let Self { out, .. } = self;
        Ok(out)
    }

    fn parse_lines(&self) -> Vec<Line> {
        let text = String::from_utf8_lossy(&self.buf);
        let mut lines = Vec::new();
        let mut rest: &str = &text;

        while !rest.is_empty() {
            let (raw, newline) = match rest.find('\n') {
                Some(pos) => {
                    let raw = &rest[..pos];
                    rest = &rest[pos + 1..];
                    (raw, true)
                }
                None => {
                    let raw = rest;
                    rest = "";
                    (raw, false)
                }
            };

            let mut cells: Vec<String> = raw.split('\t').map(str::to_string).collect();
            let trailing = cells.pop().unwrap_or_default();
            lines.push(Line {
                cells,
                trailing,
                newline,
            });
        }
        lines
    }

    fn column_widths(&self, lines: &[Line]) -> Vec<Vec<usize>> {
        let mut widths: Vec<Vec<usize>> = lines.iter().map(|l| vec![0; l.cells.len()]).collect();
        self.format_block(lines, &mut widths, 0, 0, lines.len());
        widths
    }

    fn format_block(
        &self,
        lines: &[Line],
        widths: &mut [Vec<usize>],
        column: usize,
        start: usize,
        end: usize,
    ) {
        let mut i = start;
        while i < end {
            if lines[i].cells.len() <= column {
                i += 1;
                continue;
            }

            let block_start = i;
            let mut width = self.config.min_width;
            while i < end && lines[i].cells.len() > column {
                let cell_width = lines[i].cells[column].chars().count() + self.config.padding;
                width = width.max(cell_width);
                i += 1;
            }

            for row in widths.iter_mut().take(i).skip(block_start) {
                row[column] = width;
            }
            self.format_block(lines, widths, column + 1, block_start, i);
        }
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let lines = self.parse_lines();
        let widths = self.column_widths(&lines);
        let pad = self.config.pad_char;

        for (line, line_widths) in lines.iter().zip(widths.iter()) {
            let mut rendered = String::new();
            for (cell, width) in line.cells.iter().zip(line_widths.iter()) {
                rendered.push_str(cell);
                let fill = width.saturating_sub(cell.chars().count());
                rendered.extend(std::iter::repeat(pad).take(fill));
            }
            rendered.push_str(&line.trailing);
            if line.newline {
                rendered.push('\n');
            }
            self.out.write_all(rendered.as_bytes())?;
        }

        self.buf.clear();
        self.out.flush()
    }
}

fn dashes<H: Display>(header: &H) -> String {
    "-".repeat(header.to_string().chars().count())
}

/// Rows shorter than `headers` get empty cells, longer rows are cut.
pub fn tab_flex<H: Display, V: Display>(headers: &[H], rows: &[Vec<V>]) {
    let stdout = io::stdout();
    if let Err(e) = tab_flex_to(stdout.lock(), &TableConfig::default(), headers, rows) {
        log::warn!("writing table - {}", e);
    }
}

pub fn tab_flex_to<W, H, V>(out: W, config: &TableConfig, headers: &[H], rows: &[Vec<V>]) -> io::Result<()>
where
    W: Write,
    H: Display,
    V: Display,
{
    let mut tw = TabWriter::new(out, config.clone());

    for h in headers {
        write!(tw, "{}\t", h)?;
    }
    writeln!(tw)?;

    for h in headers {
        write!(tw, "{}\t", dashes(h))?;
    }
    writeln!(tw)?;

    for row in rows {
        for i in 0..headers.len() {
            match row.get(i) {
                Some(v) => write!(tw, "{}\t", v)?,
                None => write!(tw, "\t")?,
            }
        }
        writeln!(tw)?;
    }

    for h in headers {
        write!(tw, "{}\t", dashes(h))?;
    }
    writeln!(tw)?;

    tw.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<H: Display, V: Display>(headers: &[H], rows: &[Vec<V>]) -> String {
        let mut out = Vec::new();
        tab_flex_to(&mut out, &TableConfig::default(), headers, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tab_flex_layout() {
        let out = render(&["A", "BB"], &[vec!["1", "2"], vec!["3"]]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "A       BB      ");
        assert_eq!(lines[1], "-       --      ");
        assert_eq!(lines[2], "1       2       ");
        assert_eq!(lines[3], "3               ");
        assert_eq!(lines[4], lines[1]);
    }

    #[test]
    fn test_wide_cells_expand_column() {
        let out = render(&["id", "name"], &[vec!["1", "a rather long name"]]);
        let lines: Vec<&str> = out.lines().collect();

        // 18 characters + 2 padding
        assert_eq!(lines[0], format!("id      {:<20}", "name"));
        assert_eq!(lines[1], format!("--      {:<20}", "----"));
        assert_eq!(lines[2], format!("1       {:<20}", "a rather long name"));
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let out = render(&["only"], &[vec![1, 2, 3]]);
        assert_eq!(out, "only    \n----    \n1       \n----    \n");
    }

    #[test]
    fn test_dash_row_tracks_header_length() {
        let out = render(&["a very long header"], &Vec::<Vec<String>>::new());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].trim_end(), "-".repeat(18));
    }

    #[test]
    fn test_custom_config() {
        let config = TableConfig {
            min_width: 0,
            padding: 1,
            pad_char: '.',
        };
        let mut out = Vec::new();
        tab_flex_to(&mut out, &config, &["k", "v"], &[vec!["key", "value"]]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "k...v.....\n-...-.....\nkey.value.\n-...-.....\n"
        );
    }

    #[test]
    fn test_tab_writer_blocks_reset_on_lines_without_cells() {
        let mut tw = TabWriter::new(Vec::new(), TableConfig::default());
        write!(tw, "a\tb\nlonger-than-eight\tc\nplain line\nx\ty\n").unwrap();
        let out = String::from_utf8(tw.into_inner().unwrap()).unwrap();

        assert_eq!(
            out,
            "a                  b\nlonger-than-eight  c\nplain line\nx       y\n"
        );
    }

    #[test]
    fn test_tab_flex_to_stdout() {
        tab_flex(&["A", "BB"], &[vec!["1", "2"], vec!["3"]]);
    }

    #[test]
    fn test_tab_writer_counts_characters_not_bytes() {
        let mut tw = TabWriter::new(Vec::new(), TableConfig::default());
        write!(tw, "héllo\tx\n").unwrap();
        let out = String::from_utf8(tw.into_inner().unwrap()).unwrap();
        assert_eq!(out, "héllo   x\n");
    }
}
