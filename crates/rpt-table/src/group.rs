//! Run-length grouping over an ordered key sequence.
//!
//! General helper behind the two-level spanning header row: consecutive
//! equal keys collapse into one `(key, run length)` pair, and the run
//! lengths always sum to the input length.

/// Collapse consecutive equal keys into `(key, run length)` pairs.
pub fn group_runs<T: PartialEq>(keys: &[T]) -> Vec<(&T, usize)> {
    let mut runs: Vec<(&T, usize)> = Vec::new();
    for key in keys {
        match runs.last_mut() {
            Some((current, span)) if *current == key => *span += 1,
            _ => runs.push((key, 1)),
        }
    }
    runs
}
