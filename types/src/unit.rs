//! The no-value outcome specialization.

use crate::OutcomeKind;

/// Outcome of an operation that produces no value: a success flag plus an
/// optional message.
///
/// Same contract as [`Outcome`] with the flag standing in for "has a value",
/// minus every value-typed accessor. One asymmetry is deliberate:
/// `UnitOutcome::default()` is a plain success (there is no value it could be
/// missing), while `Outcome::default()` is the invalid sentinel. The
/// no-message failure state is unreachable - [`error`](Self::error) always
/// supplies a message.
///
/// [`Outcome`]: crate::Outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutcome<M = String> {
    succeeded: bool,
    message: Option<M>,
}

/// Plain success, same as [`UnitOutcome::success`].
impl<M> Default for UnitOutcome<M> {
    fn default() -> Self {
        Self {
            succeeded: true,
            message: None,
        }
    }
}

impl<M> UnitOutcome<M> {
    /// The operation completed with nothing to report.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// The operation completed, with a message the caller should surface.
    #[must_use]
    pub fn warning(message: impl Into<M>) -> Self {
        Self {
            succeeded: true,
            message: Some(message.into()),
        }
    }

    /// The operation failed; the message explains why.
    #[must_use]
    pub fn error(message: impl Into<M>) -> Self {
        Self {
            succeeded: false,
            message: Some(message.into()),
        }
    }

    /// The success/failure flag for use in conditionals. A warning still
    /// counts as success.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// Always true for constructed values: success and warning set the flag,
    /// error supplies a message.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.succeeded || self.has_message()
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.succeeded && !self.has_message()
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.succeeded && self.has_message()
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.succeeded && self.has_message()
    }

    /// Classification with the flag standing in for value presence. Never
    /// returns [`OutcomeKind::Invalid`] for a constructed value; the match
    /// covers the unreachable flag/message combination only for totality.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match (self.succeeded, self.message.is_some()) {
            (true, false) => OutcomeKind::Plain,
            (true, true) => OutcomeKind::Warning,
            (false, true) => OutcomeKind::Error,
            (false, false) => OutcomeKind::Invalid,
        }
    }

    /// Borrows the attached message.
    ///
    /// # Panics
    ///
    /// Panics when [`has_message`](Self::has_message) is false.
    #[must_use]
    pub fn message(&self) -> &M {
        self.message
            .as_ref()
            .expect("message() called on a unit outcome that holds no message")
    }

    /// Mutably borrows the attached message.
    ///
    /// # Panics
    ///
    /// Panics when [`has_message`](Self::has_message) is false.
    #[must_use]
    pub fn message_mut(&mut self) -> &mut M {
        self.message
            .as_mut()
            .expect("message_mut() called on a unit outcome that holds no message")
    }

    /// Moves the attached message out, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics when [`has_message`](Self::has_message) is false.
    #[must_use]
    pub fn into_message(self) -> M {
        self.message
            .expect("into_message() called on a unit outcome that holds no message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_plain_success_not_a_sentinel() {
        let outcome: UnitOutcome = UnitOutcome::default();
        assert!(outcome.succeeded());
        assert!(!outcome.has_message());
        assert!(outcome.is_valid());
        assert!(outcome.is_plain());
        assert_eq!(outcome.kind(), OutcomeKind::Plain);
    }

    #[test]
    fn success_and_default_agree() {
        assert_eq!(UnitOutcome::<String>::success(), UnitOutcome::default());
    }

    #[test]
    fn warning_keeps_the_success_flag() {
        let outcome: UnitOutcome = UnitOutcome::warning("careful");
        assert!(outcome.succeeded());
        assert!(outcome.is_warning());
        assert!(!outcome.is_plain());
        assert!(!outcome.is_error());
        assert_eq!(outcome.kind(), OutcomeKind::Warning);
        assert_eq!(outcome.message(), "careful");
    }

    #[test]
    fn error_clears_the_success_flag() {
        let outcome: UnitOutcome = UnitOutcome::error("broken");
        assert!(!outcome.succeeded());
        assert!(outcome.is_error());
        assert!(outcome.is_valid());
        assert_eq!(outcome.kind(), OutcomeKind::Error);
        assert_eq!(outcome.message(), "broken");
    }

    #[test]
    fn exactly_one_classification_holds_per_state() {
        let outcomes: [UnitOutcome; 3] = [
            UnitOutcome::success(),
            UnitOutcome::warning("careful"),
            UnitOutcome::error("broken"),
        ];
        for outcome in outcomes {
            let classified = [outcome.is_plain(), outcome.is_warning(), outcome.is_error()];
            assert!(outcome.is_valid());
            assert_eq!(classified.iter().filter(|&&hit| hit).count(), 1);
            assert_ne!(outcome.kind(), OutcomeKind::Invalid);
        }
    }

    #[test]
    #[should_panic(expected = "holds no message")]
    fn message_access_without_a_message_panics() {
        let outcome: UnitOutcome = UnitOutcome::success();
        let _ = outcome.message();
    }

    #[test]
    fn message_mut_updates_in_place() {
        let mut outcome: UnitOutcome = UnitOutcome::warning("first");
        outcome.message_mut().push_str(", then more");
        assert_eq!(outcome.message(), "first, then more");
    }

    #[test]
    fn into_message_moves_the_message_out() {
        let outcome: UnitOutcome = UnitOutcome::error("gone");
        assert_eq!(outcome.into_message(), "gone");
    }

    #[test]
    fn clone_duplicates_flag_and_message() {
        let original: UnitOutcome = UnitOutcome::warning("careful");
        let copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.succeeded(), original.succeeded());
        assert_eq!(copy.message(), original.message());
    }
}
