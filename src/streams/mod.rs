pub mod partition;
pub mod stream;
pub mod tsv_file_stream;

pub use partition::{Partition, PartitionScheme, write_partition};
pub use stream::Stream;
pub use tsv_file_stream::{TsvFileStream, read_records};
