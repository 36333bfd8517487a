use crate::classifiers::decision_tree::{DecisionTree, NodeId};
use crate::core::attributes::{Category, TernaryValue};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// What a rendered line says about its node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodeContent {
    Split {
        attribute_index: usize,
        attribute_name: String,
    },
    Leaf {
        label: Category,
    },
}

/// One node of a tree dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    pub depth: usize,
    pub branch: Option<TernaryValue>,
    pub content: NodeContent,
}

/// Pre-order listing of a tree, decoupled from any output stream.
///
/// The [`Display`] form indents each node by its depth and prints the
/// incoming branch value followed by `Issue <name>:` for decision nodes or
/// the predicted label for leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeDump {
    pub lines: Vec<TreeLine>,
}

impl TreeDump {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl DecisionTree {
    pub fn dump(&self) -> TreeDump {
        let mut lines = Vec::new();
        self.dump_into(self.root(), 0, &mut lines);
        TreeDump { lines }
    }

    fn dump_into(&self, id: NodeId, depth: usize, lines: &mut Vec<TreeLine>) {
        let node = self.node(id);
        let content = match (node.is_leaf(), node.predicted_label(), node.split_attribute()) {
            (true, Some(label), _) => NodeContent::Leaf { label },
            (false, _, Some(attribute_index)) => NodeContent::Split {
                attribute_index,
                attribute_name: self
                    .header()
                    .attribute_name(attribute_index)
                    .map(str::to_string)
                    .unwrap_or_else(|| attribute_index.to_string()),
            },
            // Unfinished nodes are never produced by induction.
            _ => return,
        };
        lines.push(TreeLine {
            depth,
            branch: node.incoming_branch_value(),
            content,
        });
        if !node.is_leaf() {
            for &child in node.children() {
                self.dump_into(child, depth + 1, lines);
            }
        }
    }
}

impl Display for TreeLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:width$}", "", width = self.depth)?;
        if let Some(branch) = self.branch {
            write!(f, "{branch} ")?;
        }
        match &self.content {
            NodeContent::Split { attribute_name, .. } => write!(f, "Issue {attribute_name}:"),
            NodeContent::Leaf { label } => write!(f, "{label}"),
        }
    }
}

impl Display for TreeDump {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
