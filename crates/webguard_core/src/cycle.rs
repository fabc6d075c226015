/// Result of comparing a freshly computed fingerprint against the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// No prior observation exists; record the current state, never notify.
    Bootstrap,
    /// Fingerprints match; nothing to record, nothing to send.
    Unchanged,
    /// Fingerprints differ; record the new state and alert the operator.
    Changed,
}

/// Pure compare step of a monitor cycle.
///
/// Absence of a stored fingerprint is a distinct state from a mismatch: the
/// very first observation must never raise an alert. The function has no side
/// effects, so classifying the same inputs twice yields the same answer.
pub fn classify(stored_fingerprint: Option<&str>, new_fingerprint: &str) -> Comparison {
    match stored_fingerprint {
        None => Comparison::Bootstrap,
        Some(stored) if stored == new_fingerprint => Comparison::Unchanged,
        Some(_) => Comparison::Changed,
    }
}
