use crate::core::error::{Result, TextIoError};
use crate::utils::path::{absolute_path, file_exists, try_validate_filepath};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Reads every record of a comma-delimited file.
///
/// The first malformed record stops the read; the rows gathered up to that
/// point are returned and the error is logged. A `"` inside an unquoted field,
/// or text after a closing quote, makes the record malformed.
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Vec<Vec<String>> {
    let path = path.as_ref();
    let data = match try_validate_filepath(path).and_then(|abs| Ok(fs::read(abs)?)) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("opening '{}' - {}", path.display(), e);
            return Vec::new();
        }
    };

    let bare = find_bare_quote(&data);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                if let Some(offset) = bare.filter(|&o| (o as u64) < reader.position().byte()) {
                    log::warn!("reading - bare \" in non-quoted field at byte {}", offset);
                    break;
                }
                rows.push(record.iter().map(str::to_string).collect());
            }
            Err(e) => {
                log::warn!("reading - {}", e);
                break;
            }
        }
    }
    rows
}

// Offset of the first quote the csv crate would otherwise tolerate.
fn find_bare_quote(data: &[u8]) -> Option<usize> {
    let mut quoted = false;
    let mut field_start = true;
    let mut i = 0;

    while i < data.len() {
        let b = data[i];
        if quoted {
            if b == b'"' {
                if data.get(i + 1) == Some(&b'"') {
                    i += 2;
                    continue;
                }
                quoted = false;
                match data.get(i + 1) {
                    None | Some(b',') | Some(b'\n') | Some(b'\r') => {}
                    Some(_) => return Some(i + 1),
                }
            }
        } else {
            match b {
                b'"' if field_start => quoted = true,
                b'"' => return Some(i),
                b',' | b'\n' | b'\r' => {
                    field_start = true;
                    i += 1;
                    continue;
                }
                _ => {}
            }
        }
        field_start = false;
        i += 1;
    }
    None
}

pub struct CsvFile {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl CsvFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_record<I, T>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for CsvFile {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            log::warn!("flushing '{}' - {}", self.path.display(), e);
        }
    }
}

pub fn new_csv_file<P: AsRef<Path>>(path: P) -> Option<CsvFile> {
    match try_new_csv_file(path) {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

pub fn try_new_csv_file<P: AsRef<Path>>(path: P) -> Result<CsvFile> {
    let path = path.as_ref();
    let abs = absolute_path(path)?;

    if file_exists(&abs) {
        return Err(TextIoError::AlreadyExists(abs));
    }

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&abs)?;

    log::debug!("created csv file '{}'", abs.display());

    Ok(CsvFile {
        writer: WriterBuilder::new().flexible(true).from_writer(file),
        path: abs,
    })
}

pub fn with_new_csv_file<P, F, T>(path: P, f: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut CsvFile) -> Result<T>,
{
    let mut file = try_new_csv_file(path)?;
    let result = f(&mut file);
    let flushed = file.flush();
    let value = result?;
    flushed?;
    Ok(value)
}

/// Rows are not checked against the header count.
pub fn comma_sep<P, S>(path: P, headers: &[S], rows: &[Vec<S>])
where
    P: AsRef<Path>,
    S: AsRef<[u8]>,
{
    let path = path.as_ref();
    let mut file = match new_csv_file(path) {
        Some(file) => file,
        None => {
            log::warn!("failed to write new csv");
            return;
        }
    };

    if let Err(e) = file.write_record(headers) {
        log::warn!("failed writing csv headers - {}", e);
        return;
    }

    for (i, row) in rows.iter().enumerate() {
        if let Err(e) = file.write_record(row) {
            log::warn!("writing row '{}' to csv - {}", i, e);
        }
    }

    if let Err(e) = file.flush() {
        log::warn!("flushing '{}' - {}", file.path().display(), e);
        return;
    }
    log::info!("wrote '{}' lines to '{}'", rows.len() + 1, path.display());
}
