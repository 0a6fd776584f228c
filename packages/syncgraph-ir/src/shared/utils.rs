//! Small collection helpers

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Remove duplicates, keeping the first occurrence of each item
pub fn dedup_preserving_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = FxHashSet::default();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
