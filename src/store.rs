// src/store.rs
//
// Raw tables on disk: header row + string cells. Typed records are built on
// top of this in `bars::dataset`.

use std::{fs, io::{self, BufWriter, Write}, path::{Path, PathBuf}};

use crate::csv::{self, parse_rows, split_header};
use crate::error::LoadError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    #[inline] pub fn row_count(&self) -> usize { self.rows.len() }

    /// Index of a named column (exact match).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// `.tsv` / `.tab` files are tab-separated, everything else comma.
pub fn delimiter_for(path: &Path) -> char {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("tsv" | "tab") => '\t',
        _ => ',',
    }
}

/// Read a delimited table with a header row; see [`delimiter_for`].
pub fn load_table(path: &Path) -> Result<DataSet, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sep = delimiter_for(path);
    let (headers, rows) = split_header(parse_rows(&text, sep)).ok_or(LoadError::Empty)?;
    let headers = headers.into_iter().map(|h| s!(h.trim())).collect();
    logd!("Store: read {} ({} rows)", path.display(), rows.len());
    Ok(DataSet { headers, rows })
}

/// Write a table (header + rows), creating parent directories.
pub fn save_table(path: &Path, ds: &DataSet, sep: char) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    csv::write_row(&mut out, &ds.headers, sep)?;
    for row in &ds.rows {
        csv::write_row(&mut out, row, sep)?;
    }
    out.flush()?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
