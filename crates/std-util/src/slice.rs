/// Asserts that every element of a collection is distinct.
///
/// Accepts anything that iterates over `Hash + Eq + Debug` items. Panics naming the first
/// duplicate found.
#[macro_export]
macro_rules! assert_unique {
    ($e:expr) => {{
        let items = &$e;
        let mut seen = std::collections::HashSet::new();
        for item in items {
            if !seen.insert(item) {
                panic!("expected unique items; duplicate={:?}", item);
            }
        }
    }};
}
