use crate::core::attributes::{Category, TernaryValue};
use crate::core::record_header::RecordHeader;
use crate::core::records::Record;
use std::str::FromStr;
use std::sync::Arc;

pub fn header_with_width(width: usize) -> Arc<RecordHeader> {
    Arc::new(RecordHeader::with_issue_letters("votes".into(), width))
}

/// The ten-issue header of the reference voting dataset.
pub fn voting_header() -> Arc<RecordHeader> {
    header_with_width(10)
}

pub fn record(id: &str, label: Category, votes: &[TernaryValue]) -> Record {
    Record::new(id, label, votes.to_vec(), &header_with_width(votes.len()))
        .expect("fixture record is valid")
}

/// Builds a record from its textual form, e.g. `rec("r1", "D", "+-.")`.
pub fn rec(id: &str, label: &str, votes: &str) -> Record {
    let label = Category::from_str(label).expect("fixture label is D or R");
    let votes: Vec<TernaryValue> = votes
        .chars()
        .map(|c| TernaryValue::try_from(c).expect("fixture vote is one of + - ."))
        .collect();
    record(id, label, &votes)
}

pub fn parse_records(rows: &[(&str, &str, &str)]) -> Vec<Record> {
    rows.iter()
        .map(|(id, label, votes)| rec(id, label, votes))
        .collect()
}
