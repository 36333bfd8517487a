pub mod constant_classifier;
pub mod scripted_driver;
pub mod vec_stream;

pub use constant_classifier::ConstantClassifier;
pub use scripted_driver::ScriptedDriver;
pub use vec_stream::VecStream;
