mod error;
mod record;

pub use error::RecordError;
pub use record::Record;
