pub mod result;
pub mod slice;

pub mod prelude {
    pub use crate::{assert_err, assert_ok, assert_unique};
}
