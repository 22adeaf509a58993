//! Guarded and unguarded division for divide-by-zero (CWE-369) test cases.
//!
//! The guarded path ([`safe_divide`] and friends) checks the denominator and
//! reports a [`DivisionError`] instead of dividing. The unguarded path
//! ([`divide_unchecked`] and friends) is the defect under test: it divides
//! unconditionally and faults on zero.
//!
//! A [`Case`] ties a denominator [`Source`] to one of those sinks, and a
//! [`Harness`] runs it and records a [`Report`].

pub mod case;
pub mod demo;
pub mod error;
pub mod guard;
pub mod sink;
pub mod source;

pub use case::{Case, Harness, Operation, Outcome, Path, Report};
pub use error::{DivisionError, SourceError};
pub use guard::{FLOAT_EPSILON, safe_divide, safe_divide_float, safe_remainder};
pub use sink::{divide_float_unchecked, divide_unchecked, remainder_unchecked};
pub use source::{Denominator, Source};
