use std::sync::atomic::{AtomicU32, Ordering};

/// Generates unique schema names for test isolation.
///
/// Each test gets names in the format: `{kind}_{process_id}_{test_counter}`
/// This ensures that tests running in parallel (within or across processes) never
/// interfere with each other's source schemas or provisioned schemas.
#[derive(Clone, Debug)]
pub struct TestIsolation {
    process_id: u32,
    test_counter: u32,
}

// Global counter shared across all tests in this process
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

impl TestIsolation {
    /// Create a new test isolation instance with a unique counter.
    pub fn new() -> Self {
        Self {
            process_id: std::process::id(),
            test_counter: TEST_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Schema holding this test's template tables.
    pub fn source_schema(&self) -> String {
        format!("src_{}_{}", self.process_id, self.test_counter)
    }

    /// Prefix for schemas the factory provisions during this test.
    pub fn prefix(&self) -> String {
        format!("fx_{}_{}", self.process_id, self.test_counter)
    }

    /// Check if a schema name was provisioned with this instance's prefix.
    pub fn owns_schema(&self, schema: &str) -> bool {
        schema
            .strip_prefix(&self.prefix())
            .and_then(|rest| rest.strip_prefix('_'))
            .is_some_and(|n| n.parse::<u64>().is_ok())
    }
}

impl Default for TestIsolation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolation_generates_unique_names() {
        let isolation1 = TestIsolation::new();
        let isolation2 = TestIsolation::new();

        assert_ne!(isolation1.source_schema(), isolation2.source_schema());
        assert_ne!(isolation1.prefix(), isolation2.prefix());
        assert!(isolation1.source_schema().starts_with("src_"));
        assert!(isolation1.prefix().starts_with("fx_"));
    }

    #[test]
    fn isolation_owns_schema() {
        let isolation = TestIsolation::new();
        let schema = format!("{}_0", isolation.prefix());

        assert!(isolation.owns_schema(&schema));
        assert!(!isolation.owns_schema(&isolation.source_schema()));

        // Different isolation instance shouldn't own the schema
        let other_isolation = TestIsolation::new();
        assert!(!other_isolation.owns_schema(&schema));
    }

    #[test]
    fn names_fit_in_a_postgresql_identifier() {
        let isolation = TestIsolation::new();
        let longest = format!("{}_{}", isolation.prefix(), u64::MAX);
        assert!(longest.len() <= 63);
    }
}
