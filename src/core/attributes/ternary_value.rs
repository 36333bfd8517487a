use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Number of branches below every decision node, one per [`TernaryValue`].
pub const NUMBER_OF_BRANCHES: usize = 3;

/// A single voting position.
///
/// The declaration order (`Plus`, `Minus`, `Dot`) is the canonical branch
/// order used when a node is split.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum TernaryValue {
    #[serde(rename = "+")]
    #[strum(to_string = "+")]
    Plus,
    #[serde(rename = "-")]
    #[strum(to_string = "-")]
    Minus,
    #[serde(rename = ".")]
    #[strum(to_string = ".")]
    Dot,
}

impl TernaryValue {
    pub const ALL: [TernaryValue; NUMBER_OF_BRANCHES] =
        [TernaryValue::Plus, TernaryValue::Minus, TernaryValue::Dot];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            TernaryValue::Plus => 0,
            TernaryValue::Minus => 1,
            TernaryValue::Dot => 2,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            TernaryValue::Plus => '+',
            TernaryValue::Minus => '-',
            TernaryValue::Dot => '.',
        }
    }
}

impl TryFrom<char> for TernaryValue {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(TernaryValue::Plus),
            '-' => Ok(TernaryValue::Minus),
            '.' => Ok(TernaryValue::Dot),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn canonical_order_is_plus_minus_dot() {
        let order: Vec<TernaryValue> = TernaryValue::iter().collect();
        assert_eq!(order, TernaryValue::ALL.to_vec());
        for (i, v) in TernaryValue::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }

    #[test]
    fn symbols_convert_both_ways() {
        for v in TernaryValue::ALL {
            assert_eq!(TernaryValue::try_from(v.symbol()), Ok(v));
            assert_eq!(v.to_string(), v.symbol().to_string());
        }
        assert_eq!(TernaryValue::try_from('x'), Err('x'));
    }
}
