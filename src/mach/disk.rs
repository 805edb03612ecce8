use crate::error;
use crate::lang::Error;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Error>;

/// Program files default to the `.bas` extension.
pub fn file_name(name: &str) -> PathBuf {
    let mut path = PathBuf::from(name);
    if path.extension().is_none() {
        path.set_extension("bas");
    }
    path
}

pub fn load(name: &str) -> Result<String> {
    let path = file_name(name);
    match fs::read_to_string(&path) {
        Ok(source) => Ok(source),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound; format!("FAILED TO OPEN {}", name))),
            _ => Err(error!(DiskIoError; format!("FAILED TO LOAD {}; {}", name, error))),
        },
    }
}

pub fn save<'a, I: IntoIterator<Item = &'a str>>(name: &str, lines: I) -> Result<()> {
    let path = file_name(name);
    let mut file = match File::create(&path) {
        Ok(file) => file,
        Err(_) => {
            return Err(error!(DiskIoError; format!("COULD NOT OPEN {} FOR SAVE", name)));
        }
    };
    for line in lines {
        if let Err(error) = writeln!(file, "{}", line) {
            return Err(error!(DiskIoError; error.to_string()));
        }
    }
    Ok(())
}

/// Regular files in `dir` as upper case (name, extension) pairs, sorted.
pub fn catalog(dir: &Path) -> Result<Vec<(String, String)>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => return Err(error!(DiskIoError; error.to_string())),
    };
    let mut files = vec![];
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => return Err(error!(DiskIoError; error.to_string())),
        };
        match entry.file_type() {
            Ok(t) if t.is_file() => {}
            _ => continue,
        }
        let name = entry.file_name().to_string_lossy().to_ascii_uppercase();
        files.push(match name.find('.') {
            Some(dot) => (name[..dot].to_string(), name[dot + 1..].to_string()),
            None => (name, String::new()),
        });
    }
    files.sort();
    Ok(files)
}
