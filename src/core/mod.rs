pub mod attributes;
pub mod record_header;
pub mod records;
