use log::warn;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("no input provided")]
    Missing,
    #[error("error opening file {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
}

/// The list file when one is given, otherwise stdin as long as something is
/// piped or redirected into it.
pub fn open_input(list: Option<&Path>) -> Result<Box<dyn BufRead>, InputError> {
    match list {
        Some(path) => {
            let file = File::open(path).map_err(|source| InputError::Open { path: path.to_path_buf(), source })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None if io::stdin().is_terminal() => Err(InputError::Missing),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// One hostname per line, trimmed. Blank lines are kept. A read error ends
/// the list early.
pub fn read_hostnames<R: BufRead>(reader: R) -> Vec<String> {
    let mut hostnames = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => hostnames.push(line.trim().to_string()),
            Err(e) => {
                warn!("Error reading input: {}", e);
                break;
            }
        }
    }
    hostnames
}
