//! The fixed demonstration scenario: a hard-coded zero sent through the
//! guarded sink, then through the unguarded one.

use crate::{Case, Operation, Path, Source};

/// Constant helper. Stands in for the side values the guarded sink is handed
/// alongside its denominator; they carry no behavior.
pub const fn acknowledge() -> i32 {
    1
}

pub fn cases(numerator: i32) -> [Case; 2] {
    [
        Case {
            numerator,
            source: Source::Zero,
            operation: Operation::Divide,
            path: Path::Guarded,
        },
        Case {
            numerator,
            source: Source::Zero,
            operation: Operation::Divide,
            path: Path::Unguarded,
        },
    ]
}
