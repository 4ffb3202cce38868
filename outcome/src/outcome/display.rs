//! Human-readable rendering of outcomes.

use std::fmt;

use super::{Outcome, ValueOutcome};
use crate::error::write_numbered;

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_successful() {
            return f.write_str("succeeded");
        }
        match self.errors() {
            [] => f.write_str("failed"),
            [only] => write!(f, "failed: {only}"),
            many => {
                writeln!(f, "failed:")?;
                write_numbered(f, many)
            }
        }
    }
}

impl<T> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.status(), f)
    }
}
