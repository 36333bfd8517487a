use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// How dataset lines are dealt into training/tuning/testing subsets.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PartitionScheme {
    /// First two thirds train (every 4th of those tunes), the rest tests.
    Holdout,
    /// Every 4th line tunes, the rest train; no testing subset.
    #[default]
    EveryFourth,
}

/// Positional, disjoint split of an ordered dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub training: Vec<T>,
    pub tuning: Vec<T>,
    pub testing: Vec<T>,
}

impl<T> Partition<T> {
    pub fn new(items: Vec<T>, scheme: PartitionScheme) -> Self {
        match scheme {
            PartitionScheme::Holdout => Self::holdout(items),
            PartitionScheme::EveryFourth => Self::every_fourth(items),
        }
    }

    /// `floor(n * 2 / 3)` leading items are training candidates, the rest
    /// are testing; then every 4th training candidate (index 0, 4, 8, ...)
    /// moves to tuning.
    pub fn holdout(items: Vec<T>) -> Self {
        let limit = items.len() * 2 / 3;
        let mut items = items;
        let testing = items.split_off(limit);
        let (training, tuning) = deal_every_fourth(items);
        Self {
            training,
            tuning,
            testing,
        }
    }

    /// Every 4th item (index 0, 4, 8, ...) tunes, the others train.
    pub fn every_fourth(items: Vec<T>) -> Self {
        let (training, tuning) = deal_every_fourth(items);
        Self {
            training,
            tuning,
            testing: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.training.len() + self.tuning.len() + self.testing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Partition<U> {
        Partition {
            training: self.training.into_iter().map(&mut f).collect(),
            tuning: self.tuning.into_iter().map(&mut f).collect(),
            testing: self.testing.into_iter().map(&mut f).collect(),
        }
    }
}

fn deal_every_fourth<T>(items: Vec<T>) -> (Vec<T>, Vec<T>) {
    let mut training = Vec::with_capacity(items.len());
    let mut tuning = Vec::with_capacity(items.len() / 4 + 1);
    for (i, item) in items.into_iter().enumerate() {
        if i % 4 == 0 {
            tuning.push(item);
        } else {
            training.push(item);
        }
    }
    (training, tuning)
}

/// Writes `training.txt`, `tuning.txt` and `testing.txt` into `dir`, one item
/// per line. The directory is created if missing.
pub fn write_partition<P, T>(dir: P, partition: &Partition<T>) -> Result<(), Error>
where
    P: AsRef<Path>,
    T: fmt::Display,
{
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    write_lines(dir.join("training.txt"), &partition.training)?;
    write_lines(dir.join("tuning.txt"), &partition.tuning)?;
    write_lines(dir.join("testing.txt"), &partition.testing)
}

fn write_lines<P: AsRef<Path>, T: fmt::Display>(path: P, items: &[T]) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    for item in items {
        writeln!(w, "{item}")?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holdout_matches_the_positional_split() {
        let p = Partition::holdout((0..10).collect::<Vec<_>>());
        // limit = floor(20 / 3) = 6
        assert_eq!(p.testing, vec![6, 7, 8, 9]);
        assert_eq!(p.tuning, vec![0, 4]);
        assert_eq!(p.training, vec![1, 2, 3, 5]);
        assert_eq!(p.len(), 10);
    }

    #[test]
    fn every_fourth_has_no_testing_subset() {
        let p = Partition::every_fourth((0..9).collect::<Vec<_>>());
        assert_eq!(p.tuning, vec![0, 4, 8]);
        assert_eq!(p.training, vec![1, 2, 3, 5, 6, 7]);
        assert!(p.testing.is_empty());
    }

    #[test]
    fn small_inputs() {
        let p = Partition::holdout(vec!["only"]);
        assert_eq!(p.testing, vec!["only"]);
        assert!(p.training.is_empty() && p.tuning.is_empty());

        let p: Partition<u8> = Partition::new(Vec::new(), PartitionScheme::Holdout);
        assert!(p.is_empty());
    }

    #[test]
    fn map_keeps_the_split() {
        let p = Partition::every_fourth(vec![1, 2, 3, 4, 5]).map(|x| x * 10);
        assert_eq!(p.tuning, vec![10, 50]);
        assert_eq!(p.training, vec![20, 30, 40]);
    }

    #[test]
    fn writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("parts");
        let p = Partition::holdout(
            ["a", "b", "c", "d", "e", "f"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
        );
        write_partition(&out, &p).unwrap();

        assert_eq!(fs::read_to_string(out.join("tuning.txt")).unwrap(), "a\n");
        assert_eq!(fs::read_to_string(out.join("training.txt")).unwrap(), "b\nc\nd\n");
        assert_eq!(fs::read_to_string(out.join("testing.txt")).unwrap(), "e\nf\n");
    }

    #[test]
    fn scheme_names_are_kebab_case() {
        assert_eq!(PartitionScheme::EveryFourth.to_string(), "every-fourth");
        assert_eq!("holdout".parse::<PartitionScheme>().unwrap(), PartitionScheme::Holdout);
        let json = serde_json::to_string(&PartitionScheme::EveryFourth).unwrap();
        assert_eq!(json, "\"every-fourth\"");
    }
}
