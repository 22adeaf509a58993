//! Test cases: a source feeding a guarded or unguarded sink.

use std::any::Any;
use std::fmt;
use std::io::BufRead;
use std::panic::{self, UnwindSafe};

use rand::RngCore;

use crate::source::SourceInput;
use crate::{Denominator, DivisionError, Source, SourceError, guard, sink};

/// The arithmetic a case performs on its denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Divide,
    Modulo,
    FloatDivide,
}

/// Whether the denominator is checked before the operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    Guarded,
    Unguarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub numerator: i32,
    pub source: Source,
    pub operation: Operation,
    pub path: Path,
}

/// What happened when a case ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(i32),
    /// The guard refused to divide.
    Rejected(DivisionError),
    /// The unguarded sink faulted; holds the panic message.
    Fault(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub case: Case,
    pub denominator: Denominator,
    pub outcome: Outcome,
}

impl Report {
    pub fn is_fault(&self) -> bool {
        matches!(self.outcome, Outcome::Fault(_))
    }
}

impl Operation {
    fn symbol(self) -> char {
        match self {
            Operation::Divide | Operation::FloatDivide => '/',
            Operation::Modulo => '%',
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = self.case.numerator;
        let op = self.case.operation.symbol();
        let denominator = self.denominator;
        match &self.outcome {
            Outcome::Value(value) => write!(f, "{numerator}{op}{denominator} = {value}"),
            Outcome::Rejected(err) => write!(f, "{err}"),
            Outcome::Fault(message) => {
                write!(f, "{numerator}{op}{denominator} faulted: {message}")
            }
        }
    }
}

/// Runs cases against a console reader and a random number generator.
pub struct Harness<'a> {
    input: SourceInput<'a>,
    catch_faults: bool,
}

impl<'a> Harness<'a> {
    /// Faults are caught by default.
    pub fn new(reader: &'a mut dyn BufRead, rng: &'a mut dyn RngCore) -> Self {
        Self {
            input: SourceInput { reader, rng },
            catch_faults: true,
        }
    }

    /// With `false`, a fault in the unguarded sink unwinds out of [`Harness::run`].
    pub fn catch_faults(mut self, catch_faults: bool) -> Self {
        self.catch_faults = catch_faults;
        self
    }

    pub fn run(&mut self, case: &Case) -> Result<Report, SourceError> {
        let numerator = case.numerator;
        let denominator = match case.operation {
            Operation::Divide | Operation::Modulo => {
                Denominator::Int(case.source.read_int(&mut self.input)?)
            }
            Operation::FloatDivide => {
                Denominator::Float(case.source.read_float(&mut self.input)?)
            }
        };
        tracing::debug!(source = %case.source, %denominator, path = ?case.path, "running case");

        let outcome = match (case.path, denominator) {
            (Path::Guarded, Denominator::Int(d)) => {
                let result = match case.operation {
                    Operation::Modulo => guard::safe_remainder(numerator, d),
                    _ => guard::safe_divide(numerator, d),
                };
                result.map_or_else(Outcome::Rejected, Outcome::Value)
            }
            (Path::Guarded, Denominator::Float(d)) => {
                guard::safe_divide_float(f64::from(numerator), d)
                    .map_or_else(Outcome::Rejected, Outcome::Value)
            }
            (Path::Unguarded, Denominator::Int(d)) => match case.operation {
                Operation::Modulo => self.call(move || sink::remainder_unchecked(numerator, d)),
                _ => self.call(move || sink::divide_unchecked(numerator, d)),
            },
            (Path::Unguarded, Denominator::Float(d)) => {
                self.call(move || sink::divide_float_unchecked(f64::from(numerator), d))
            }
        };

        if let Outcome::Fault(message) = &outcome {
            tracing::warn!(%numerator, %denominator, "unguarded sink faulted: {message}");
        }

        Ok(Report {
            case: *case,
            denominator,
            outcome,
        })
    }

    fn call<F>(&self, f: F) -> Outcome
    where
        F: FnOnce() -> i32 + UnwindSafe,
    {
        if !self.catch_faults {
            return Outcome::Value(f());
        }
        match panic::catch_unwind(f) {
            Ok(value) => Outcome::Value(value),
            Err(payload) => Outcome::Fault(panic_message(payload.as_ref())),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown fault".to_owned()
    }
}
