use crate::core::attributes::{Category, TernaryValue};
use crate::core::record_header::RecordHeader;
use crate::core::records::RecordError;
use crate::utils::file_parsing::{split_tsv_line, strip_surrounding_quotes};
use std::fmt;
use std::str::FromStr;

/// One labeled voting record.
///
/// Records are validated against a [`RecordHeader`] when built and are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    label: Category,
    attributes: Vec<TernaryValue>,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        label: Category,
        attributes: Vec<TernaryValue>,
        header: &RecordHeader,
    ) -> Result<Self, RecordError> {
        Self::validated(id.into(), label, attributes, header, 0)
    }

    /// Parses a `[id, party, votes]` row; `line_number` only feeds error reports.
    pub fn parse_line(line: &str, line_number: usize, header: &RecordHeader) -> Result<Self, RecordError> {
        let fields = split_tsv_line(line);
        if fields.len() != 3 {
            return Err(RecordError::FieldCount {
                line: line_number,
                found: fields.len(),
            });
        }

        let id = strip_surrounding_quotes(&fields[0]).to_string();
        let raw_label = strip_surrounding_quotes(&fields[1]);
        let label = Category::from_str(raw_label).map_err(|_| RecordError::UnknownCategory {
            line: line_number,
            label: raw_label.to_string(),
        })?;

        let votes = strip_surrounding_quotes(&fields[2]);
        let mut attributes = Vec::with_capacity(header.width());
        for (position, symbol) in votes.chars().enumerate() {
            let value = TernaryValue::try_from(symbol).map_err(|symbol| RecordError::InvalidVote {
                line: line_number,
                symbol,
                position,
            })?;
            attributes.push(value);
        }

        Self::validated(id, label, attributes, header, line_number)
    }

    fn validated(
        id: String,
        label: Category,
        attributes: Vec<TernaryValue>,
        header: &RecordHeader,
        line: usize,
    ) -> Result<Self, RecordError> {
        if id.is_empty() {
            return Err(RecordError::EmptyId { line });
        }
        if attributes.len() != header.width() {
            return Err(RecordError::Width {
                line,
                expected: header.width(),
                found: attributes.len(),
            });
        }
        Ok(Self {
            id,
            label,
            attributes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Category {
        self.label
    }

    pub fn attributes(&self) -> &[TernaryValue] {
        &self.attributes
    }

    pub fn value_at_index(&self, index: usize) -> Option<TernaryValue> {
        self.attributes.get(index).copied()
    }

    pub fn width(&self) -> usize {
        self.attributes.len()
    }
}

/// Writes the record back in its `id<TAB>party<TAB>votes` dataset form.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t", self.id, self.label)?;
        for v in &self.attributes {
            write!(f, "{}", v.symbol())?;
        }
        Ok(())
    }
}
