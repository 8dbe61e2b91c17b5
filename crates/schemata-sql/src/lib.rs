pub mod serializer;
pub use serializer::Serializer;

pub use schemata_core::stmt::{self, Statement};
