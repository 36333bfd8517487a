use crate::core::record_header::RecordHeader;
use crate::core::records::{Record, RecordError};
use crate::streams::Stream;
use crate::utils::file_parsing::is_blank;
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reads `id<TAB>party<TAB>votes` rows from a file, one record per non-blank line.
///
/// The stream keeps one line of lookahead so that [`Stream::has_more_records`]
/// stays exact when the file ends in blank lines.
pub struct TsvFileStream {
    path: PathBuf,
    header: Arc<RecordHeader>,
    reader: BufReader<File>,
    line_number: usize,
    pending: Option<Result<(usize, String), Error>>,
}

impl TsvFileStream {
    pub fn new<P: AsRef<Path>>(path: P, header: Arc<RecordHeader>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let reader = BufReader::new(File::open(&path)?);
        let mut stream = Self {
            path,
            header,
            reader,
            line_number: 0,
            pending: None,
        };
        stream.advance();
        Ok(stream)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn advance(&mut self) {
        let mut buf = String::new();
        self.pending = loop {
            buf.clear();
            match self.reader.read_line(&mut buf) {
                Ok(0) => break None,
                Ok(_) => {
                    self.line_number += 1;
                    if is_blank(&buf) {
                        continue;
                    }
                    break Some(Ok((self.line_number, std::mem::take(&mut buf))));
                }
                Err(e) => break Some(Err(e)),
            }
        };
    }
}

impl Stream for TsvFileStream {
    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn has_more_records(&self) -> bool {
        self.pending.is_some()
    }

    fn next_record(&mut self) -> Option<Result<Record, RecordError>> {
        match self.pending.take()? {
            Ok((line_number, line)) => {
                self.advance();
                Some(Record::parse_line(&line, line_number, &self.header))
            }
            // a failed read ends the stream
            Err(e) => Some(Err(RecordError::Io(e))),
        }
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.reader = BufReader::new(File::open(&self.path)?);
        self.line_number = 0;
        self.advance();
        Ok(())
    }
}

/// Loads every record of the file, rejecting it at the first malformed row.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    header: Arc<RecordHeader>,
) -> Result<Vec<Record>, RecordError> {
    let mut stream = TsvFileStream::new(path, header)?;
    let mut records = Vec::new();
    while let Some(record) = stream.next_record() {
        records.push(record?);
    }
    Ok(records)
}
