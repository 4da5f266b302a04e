// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{GuideError, Result};

/// Write the rendered document. Creates the parent directory if needed and
/// replaces any previous file. Returns the final path written to.
pub fn write_document(path: &Path, document: &str) -> Result<PathBuf> {
    ensure_parent(path)?;
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    out.write_all(document.as_bytes())?;
    out.flush()?;
    Ok(path.to_path_buf())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(GuideError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

/// User-typed path → PathBuf; a trailing separator means "directory, use `default_filename`".
pub fn resolve_out_path(user: &str, default_filename: &str) -> PathBuf {
    let user = user.trim();
    if user.is_empty() { return PathBuf::from(default_filename); }
    let p = PathBuf::from(normalize_separators(user));
    if looks_like_dir_hint(user) || p.is_dir() {
        p.join(default_filename)
    } else {
        p
    }
}

fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
