mod connect;
mod pool;

pub use connect::*;
pub use pool::*;
