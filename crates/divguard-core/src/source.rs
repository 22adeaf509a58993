//! Where a test case gets its denominator from.

use std::fmt;
use std::io::BufRead;

use rand::{Rng, RngCore};

use crate::SourceError;

/// Origin of the denominator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Hard-coded zero.
    Zero,
    /// Hard-coded value, normally non-zero.
    Fixed(i32),
    /// A random 32-bit integer. Zero is possible.
    Random,
    /// One line read from the console.
    Console,
}

/// The value a [`Source`] produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Denominator {
    Int(i32),
    Float(f64),
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denominator::Int(value) => write!(f, "{value}"),
            Denominator::Float(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Zero => f.write_str("zero"),
            Source::Fixed(value) => write!(f, "fixed({value})"),
            Source::Random => f.write_str("random"),
            Source::Console => f.write_str("console"),
        }
    }
}

/// Readers a [`Source`] may draw from.
pub struct SourceInput<'a> {
    pub reader: &'a mut dyn BufRead,
    pub rng: &'a mut dyn RngCore,
}

impl Source {
    pub fn read_int(&self, input: &mut SourceInput<'_>) -> Result<i32, SourceError> {
        match self {
            Source::Zero => Ok(0),
            Source::Fixed(value) => Ok(*value),
            Source::Random => Ok(input.rng.random::<i32>()),
            Source::Console => {
                let line = read_line(input.reader)?;
                line.parse()
                    .map_err(|_| SourceError::InvalidNumber { input: line })
            }
        }
    }

    pub fn read_float(&self, input: &mut SourceInput<'_>) -> Result<f64, SourceError> {
        match self {
            Source::Zero => Ok(0.0),
            Source::Fixed(value) => Ok(f64::from(*value)),
            Source::Random => Ok(f64::from(input.rng.random::<i32>())),
            Source::Console => {
                let line = read_line(input.reader)?;
                line.parse()
                    .map_err(|_| SourceError::InvalidNumber { input: line })
            }
        }
    }
}

fn read_line(reader: &mut dyn BufRead) -> Result<String, SourceError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(SourceError::EndOfInput);
    }
    Ok(buf.trim().to_owned())
}
