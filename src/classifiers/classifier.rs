use crate::classifiers::decision_tree::TreeError;
use crate::core::attributes::Category;
use crate::core::records::Record;

pub trait Classifier {
    fn classify(&self, record: &Record) -> Result<Category, TreeError>;
}
