use crate::core::record_header::RecordHeader;
use crate::core::records::{Record, RecordError};
use std::io::Error;

/// Pull-based interface for sources that produce [`Record`]s.
///
/// All returned records must conform to the same, immutable
/// [`RecordHeader`] for the lifetime of the stream.
pub trait Stream {
    /// Returns the stream header (relation name and attribute names).
    fn header(&self) -> &RecordHeader;

    /// Indicates whether the stream may produce more records.
    ///
    /// This call should be cheap and side effect free. If it returns `false`,
    /// a subsequent call to [`next_record`](Stream::next_record) must return `None`.
    fn has_more_records(&self) -> bool;

    /// Produces the next record, or `None` once the source is exhausted.
    ///
    /// A malformed row is yielded as `Some(Err(..))`; the caller decides
    /// whether to skip it or abandon the source.
    fn next_record(&mut self) -> Option<Result<Record, RecordError>>;

    /// Resets the stream to its first record. The header must remain unchanged.
    fn restart(&mut self) -> Result<(), Error>;
}
