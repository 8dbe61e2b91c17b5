pub use schemata_core::driver::*;
