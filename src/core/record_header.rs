/// Schema shared by every record of a dataset.
///
/// The width (number of voting positions) is fixed for the lifetime of the
/// dataset; records of any other width are rejected when they are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub relation_name: String,
    pub attribute_names: Vec<String>,
}

impl RecordHeader {
    pub fn new(relation_name: String, attribute_names: Vec<String>) -> RecordHeader {
        RecordHeader {
            relation_name,
            attribute_names,
        }
    }

    /// Header whose attributes are named `A`, `B`, `C`, ... in column order.
    pub fn with_issue_letters(relation_name: String, width: usize) -> RecordHeader {
        let attribute_names = (0..width).map(issue_name).collect();
        RecordHeader::new(relation_name, attribute_names)
    }

    pub fn width(&self) -> usize {
        self.attribute_names.len()
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attribute_name(&self, index: usize) -> Option<&str> {
        self.attribute_names.get(index).map(String::as_str)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attribute_names.iter().position(|n| n == name)
    }
}

fn issue_name(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("I{index}")
    }
}
