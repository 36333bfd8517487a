use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Number of class labels a record can carry.
pub const NUMBER_OF_CATEGORIES: usize = 2;

/// Party affiliation of a representative, the class being predicted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Category {
    #[serde(rename = "D")]
    #[strum(to_string = "D")]
    Democrat,
    #[serde(rename = "R")]
    #[strum(to_string = "R")]
    Republican,
}

impl Category {
    /// Position of this label inside a class distribution vector.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Category::Democrat => 0,
            Category::Republican => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Category::Democrat),
            1 => Some(Category::Republican),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_and_displays_party_letters() {
        assert_eq!(Category::from_str("D").unwrap(), Category::Democrat);
        assert_eq!(Category::from_str("R").unwrap(), Category::Republican);
        assert!(Category::from_str("I").is_err());
        assert_eq!(Category::Democrat.to_string(), "D");
        assert_eq!(Category::Republican.to_string(), "R");
    }

    #[test]
    fn index_round_trips_for_every_category() {
        for c in Category::iter() {
            assert_eq!(Category::from_index(c.index()), Some(c));
        }
        assert_eq!(Category::from_index(NUMBER_OF_CATEGORIES), None);
    }

    #[test]
    fn serde_uses_party_letters() {
        let json = serde_json::to_string(&Category::Republican).unwrap();
        assert_eq!(json, "\"R\"");
        let back: Category = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(back, Category::Democrat);
    }
}
