mod records;

pub use records::{header_with_width, parse_records, rec, record, voting_header};
