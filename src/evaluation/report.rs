use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// Outcome of one held-out record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveOneOutEntry {
    pub omitted_id: String,
    pub accuracy: Option<f64>,
    pub error: Option<String>,
}

impl LeaveOneOutEntry {
    pub fn scored(omitted_id: impl Into<String>, accuracy: f64) -> Self {
        Self {
            omitted_id: omitted_id.into(),
            accuracy: Some(accuracy),
            error: None,
        }
    }

    pub fn failed(omitted_id: impl Into<String>, error: impl ToString) -> Self {
        Self {
            omitted_id: omitted_id.into(),
            accuracy: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaveOneOutReport {
    generated_at: DateTime<Utc>,
    entries: Vec<LeaveOneOutEntry>,
}

impl LeaveOneOutReport {
    pub fn push(&mut self, entry: LeaveOneOutEntry) {
        self.entries.push(entry)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<&LeaveOneOutEntry> {
        self.entries.last()
    }
    pub fn entries(&self) -> &[LeaveOneOutEntry] {
        &self.entries
    }
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Mean over the entries that produced an accuracy; `None` if none did.
    pub fn mean_accuracy(&self) -> Option<f64> {
        let scored: Vec<f64> = self.entries.iter().filter_map(|e| e.accuracy).collect();
        if scored.is_empty() {
            None
        } else {
            Some(scored.iter().sum::<f64>() / scored.len() as f64)
        }
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ReportFormat) -> Result<(), Error> {
        match fmt {
            ReportFormat::Csv => self.export_with_delimiter(path, ','),
            ReportFormat::Tsv => self.export_with_delimiter(path, '\t'),
            ReportFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "omitted_id{d}accuracy{d}error", d = delimiter)?;
        for e in &self.entries {
            let accuracy = e.accuracy.map(|a| format!("{a:.12}")).unwrap_or_default();
            let error = e
                .error
                .as_deref()
                .unwrap_or_default()
                .replace([delimiter, '\n'], " ");
            writeln!(w, "{}{d}{}{d}{}", e.omitted_id, accuracy, error, d = delimiter)?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)?;
        w.flush()
    }
}

impl Default for LeaveOneOutReport {
    fn default() -> Self {
        Self {
            generated_at: Utc::now(),
            entries: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn two_rows() -> LeaveOneOutReport {
        let mut r = LeaveOneOutReport::default();
        r.push(LeaveOneOutEntry::scored("x1", 0.75));
        r.push(LeaveOneOutEntry::failed("x2", "node #3: leaf has no predicted label"));
        r
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let r = LeaveOneOutReport::default();
        assert_eq!(r.len(), 0);
        assert!(r.is_empty());
        assert!(r.latest().is_none());
        assert_eq!(r.mean_accuracy(), None);
    }

    #[test]
    fn mean_skips_failed_entries() {
        let mut r = two_rows();
        r.push(LeaveOneOutEntry::scored("x3", 0.25));
        assert_eq!(r.len(), 3);
        assert_eq!(r.mean_accuracy(), Some(0.5));
        assert_eq!(r.latest().unwrap().omitted_id, "x3");
    }

    #[test]
    fn export_csv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), ReportFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
omitted_id,accuracy,error
x1,0.750000000000,
x2,,node #3: leaf has no predicted label
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), ReportFormat::Tsv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
omitted_id\taccuracy\terror
x1\t0.750000000000\t
x2\t\tnode #3: leaf has no predicted label
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_json_keeps_field_order() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), ReportFormat::Json).unwrap();

        let got: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        let keys: Vec<&str> = got.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["generated_at", "entries"]);
        assert_eq!(got["entries"][0]["accuracy"], 0.75);
        assert!(got["entries"][0]["error"].is_null());
        assert!(got["entries"][1]["accuracy"].is_null());
    }

    #[test]
    fn format_parses_from_lowercase() {
        assert_eq!("tsv".parse::<ReportFormat>().unwrap(), ReportFormat::Tsv);
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}
