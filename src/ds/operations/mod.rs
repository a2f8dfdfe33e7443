pub mod classify;
pub mod clone;
pub mod merge;
pub mod test_and_comparison;
