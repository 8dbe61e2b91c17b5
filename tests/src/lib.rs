mod isolation;
pub use isolation::TestIsolation;

pub use logging_driver::LoggingDriver;

pub use mem::MemDriver;


pub use std_util::*;

/// Routes `log` output through `env_logger`. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
