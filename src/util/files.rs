use serde::de::DeserializeOwned;

use std::{ffi, fs, path};

use crate::{Error, Result};

/// Create a file for writing, truncating any older file at the same
/// location. Parent directories are created as needed.
pub fn create_file_w(file: &ffi::OsStr) -> Result<fs::File> {
    let os_file = path::Path::new(file);

    if let Some(parent) = os_file.parent() {
        if !parent.as_os_str().is_empty() {
            err_at!(IOError, fs::create_dir_all(parent))?;
        }
    }

    let mut opts = fs::OpenOptions::new();
    err_at!(
        IOError,
        opts.write(true).create(true).truncate(true).open(os_file),
        "create {:?}",
        file
    )
}

/// open file for reading.
pub fn open_file_r(file: &ffi::OsStr) -> Result<fs::File> {
    let os_file = path::Path::new(file);
    err_at!(
        IOError,
        fs::OpenOptions::new().read(true).open(os_file),
        "open {:?}",
        file
    )
}

/// Load toml file and parse it into type `T`.
pub fn load_toml<P, T>(loc: P) -> Result<T>
where
    P: AsRef<path::Path>,
    T: DeserializeOwned,
{
    let loc = loc.as_ref();
    let data = err_at!(InvalidFile, fs::read(loc), "{:?}", loc)?;
    let text = err_at!(FailConvert, std::str::from_utf8(&data), "{:?}", loc)?;
    err_at!(FailConvert, toml::from_str(text), "{:?}", loc)
}

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;
