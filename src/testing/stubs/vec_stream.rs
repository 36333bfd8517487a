use crate::core::record_header::RecordHeader;
use crate::core::records::{Record, RecordError};
use crate::streams::Stream;
use crate::testing::dummies::header_with_width;
use std::io::Error;
use std::sync::Arc;

/// In-memory stream over already-built records.
pub struct VecStream {
    pub header: Arc<RecordHeader>,
    pub records: Vec<Record>,
    idx: usize,
}

impl VecStream {
    pub fn new(records: Vec<Record>) -> Self {
        let width = records.first().map_or(0, Record::width);
        Self {
            header: header_with_width(width),
            records,
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn has_more_records(&self) -> bool {
        self.idx < self.records.len()
    }

    fn next_record(&mut self) -> Option<Result<Record, RecordError>> {
        let record = self.records.get(self.idx)?.clone();
        self.idx += 1;
        Some(Ok(record))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
