use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ScanError};

/// One line of input with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub content: String,
}

impl Line {
    /// True when the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Iterator over the numbered lines of a JSON-Lines stream.
///
/// `\n` and `\r\n` terminators are stripped. Input must be UTF-8; the first
/// undecodable line yields `Err(ScanError::Read)` and ends iteration.
pub struct JsonLines<R> {
    inner: std::io::Lines<R>,
    next_number: usize,
    failed: bool,
}

impl JsonLines<BufReader<File>> {
    /// Open a file for scanning.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ScanError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            next_number: 1,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for JsonLines<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let number = self.next_number;
        match self.inner.next()? {
            Ok(content) => {
                self.next_number += 1;
                Some(Ok(Line { number, content }))
            }
            Err(source) => {
                self.failed = true;
                Some(Err(ScanError::Read {
                    line: number,
                    source,
                }))
            }
        }
    }
}
