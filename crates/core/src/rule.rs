//! Daily rule trait: the advance-one-day contract.

/// Rule execution semantics (pure, deterministic).
///
/// A rule advances some mutable subject by exactly one simulated day. The
/// rule borrows the subject exclusively for the duration of one call and
/// holds nothing afterwards.
///
/// Rules must not perform IO or side effects beyond mutating the subject.
/// Applying a rule is a one-way transition: there is no inverse operation
/// and no idempotence guarantee.
pub trait DailyRule {
    /// The state a rule advances.
    type Subject;

    /// Advance the subject by one day, mutating it in place.
    fn advance_one_day(&self, subject: &mut Self::Subject);
}
