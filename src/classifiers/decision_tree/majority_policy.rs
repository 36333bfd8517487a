use crate::core::attributes::Category;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumString, IntoStaticStr};

/// What induction does at a node that must become a leaf but has no
/// majority of its own and no ancestor with one (for example an empty
/// branch below a tied root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "label", rename_all = "kebab-case")]
#[strum_discriminants(name(DegenerateMajorityKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum DegenerateMajorityPolicy {
    /// Abort induction with `TreeError::DegenerateMajority`.
    Error,
    /// Label the node with a fixed category.
    DefaultLabel(Category),
}

impl Default for DegenerateMajorityPolicy {
    fn default() -> Self {
        DegenerateMajorityPolicy::DefaultLabel(Category::Democrat)
    }
}
