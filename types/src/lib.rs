//! Status-carrying outcome types.
//!
//! A function that can partially succeed returns an [`Outcome`] instead of
//! unwinding: a clean value, a value accompanied by an advisory message, or a
//! mandatory message and no value. [`UnitOutcome`] covers operations that
//! produce no value. Status is data the caller branches on; reading a slot
//! that is not populated is a programming error and panics.
//!
//! This crate contains pure value types with no IO, no async, and no runtime
//! dependencies. Everything here can be used from any layer of an application.
//!
//! ```
//! use outcome_types::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(0) => Outcome::warning(0, "port 0 asks the OS to pick one"),
//!         Ok(port) => Outcome::success(port),
//!         Err(_) => Outcome::error(format!("not a port number: {raw}")),
//!     }
//! }
//!
//! let port = parse_port("8080");
//! assert!(port.succeeded());
//! assert_eq!(*port, 8080);
//!
//! let bad = parse_port("eighty");
//! assert!(bad.is_error());
//! assert_eq!(bad.message(), "not a port number: eighty");
//! ```

mod outcome;
mod unit;

pub use outcome::{Outcome, OutcomeKind};
pub use unit::UnitOutcome;
