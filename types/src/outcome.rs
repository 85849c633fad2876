//! The value-bearing outcome container.
//!
//! [`Outcome`] carries the result of an operation as data: a value, an
//! optional diagnostic message, or a message alone. Callers branch on the
//! classification queries instead of catching anything.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Classification of an outcome's logical state.
///
/// Exactly one kind applies to any container at any time. `Invalid` is only
/// reachable through default construction of a value-bearing [`Outcome`];
/// see the default-state notes on [`Outcome`] and [`UnitOutcome`].
///
/// [`UnitOutcome`]: crate::UnitOutcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Default-constructed, not yet assigned. Neither slot populated.
    Invalid,
    /// A value with no diagnostic attached.
    Plain,
    /// A usable value, plus a message the caller should surface.
    Warning,
    /// No value; the message explains why.
    Error,
}

impl OutcomeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::Invalid => "invalid",
            OutcomeKind::Plain => "plain",
            OutcomeKind::Warning => "warning",
            OutcomeKind::Error => "error",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function result carried as data: a value, a value plus an advisory
/// message, or a mandatory message and no value.
///
/// The two slots are independent, but construction keeps the state space
/// closed: [`error`](Self::error) always supplies a message and
/// [`warning`](Self::warning) always supplies both, so the only way to reach
/// the no-value/no-message state is [`Outcome::default`].
///
/// # Invariants
///
/// - **invalid**: neither slot populated - the default-constructed sentinel,
///   distinct from any real result.
/// - **plain success**: value present, message absent.
/// - **warning**: value and message both present.
/// - **error**: message present, value absent.
///
/// Reading an absent slot panics; guard with [`has_value`](Self::has_value) /
/// [`has_message`](Self::has_message) or [`succeeded`](Self::succeeded)
/// first. The message type defaults to `String`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T, M = String> {
    value: Option<T>,
    message: Option<M>,
}

/// The invalid sentinel. Implemented by hand so neither `T: Default` nor
/// `M: Default` is required.
impl<T, M> Default for Outcome<T, M> {
    fn default() -> Self {
        Self {
            value: None,
            message: None,
        }
    }
}

impl<T, M> Outcome<T, M> {
    /// Plain success: a value with no diagnostic attached.
    #[must_use]
    pub fn success(value: T) -> Self {
        Self {
            value: Some(value),
            message: None,
        }
    }

    /// A usable value accompanied by an advisory message.
    #[must_use]
    pub fn warning(value: T, message: impl Into<M>) -> Self {
        Self {
            value: Some(value),
            message: Some(message.into()),
        }
    }

    /// Failure: no value, and a message explaining why.
    #[must_use]
    pub fn error(message: impl Into<M>) -> Self {
        Self {
            value: None,
            message: Some(message.into()),
        }
    }

    /// Replaces the held value and clears any prior message.
    ///
    /// Equivalent to overwriting the container with a fresh plain success:
    /// a warning or error never survives assignment of a bare value.
    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
        self.message = None;
    }

    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// False only for the default-constructed sentinel.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.has_value() || self.has_message()
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.has_value() && !self.has_message()
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.has_value() && self.has_message()
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.has_value() && self.has_message()
    }

    /// The success/failure flag for use in conditionals.
    ///
    /// Identical to [`has_value`](Self::has_value): a warning still counts
    /// as success, an error never does.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.has_value()
    }

    /// Total 4-way classification; agrees with the individual predicates.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match (self.value.is_some(), self.message.is_some()) {
            (false, false) => OutcomeKind::Invalid,
            (true, false) => OutcomeKind::Plain,
            (true, true) => OutcomeKind::Warning,
            (false, true) => OutcomeKind::Error,
        }
    }

    /// Borrows the held value.
    ///
    /// # Panics
    ///
    /// Panics when [`has_value`](Self::has_value) is false.
    #[must_use]
    pub fn value(&self) -> &T {
        self.value
            .as_ref()
            .expect("value() called on an outcome that holds no value")
    }

    /// Mutably borrows the held value.
    ///
    /// # Panics
    ///
    /// Panics when [`has_value`](Self::has_value) is false.
    #[must_use]
    pub fn value_mut(&mut self) -> &mut T {
        self.value
            .as_mut()
            .expect("value_mut() called on an outcome that holds no value")
    }

    /// Moves the held value out, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics when [`has_value`](Self::has_value) is false.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
            .expect("into_value() called on an outcome that holds no value")
    }

    /// A copy of the held value if present, else the fallback. Never mutates
    /// the container.
    #[must_use]
    pub fn value_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match &self.value {
            Some(value) => value.clone(),
            None => fallback,
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
            .expect("message() called on an outcome that holds no message")
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
            .expect("message_mut() called on an outcome that holds no message")
    }

    /// Moves the attached message out, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics when [`has_message`](Self::has_message) is false.
    #[must_use]
    pub fn into_message(self) -> M {
        self.message
            .expect("into_message() called on an outcome that holds no message")
    }
}

/// The implicit success path: a bare value converts to a plain-success
/// outcome, message absent.
impl<T, M> From<T> for Outcome<T, M> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

/// Member pass-through to the held value, with the same precondition as
/// [`Outcome::value`].
impl<T, M> Deref for Outcome<T, M> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

impl<T, M> DerefMut for Outcome<T, M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value_mut()
    }
}
