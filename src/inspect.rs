//! Human readable labels for otherwise opaque values.

use crate::Term;

/// `"<label> as [<kind>: <name>]"`, e.g. `TRUE as [function: select_first]`.
pub fn describe(value: &Term, label: &str) -> String {
    format!(
        "{label} as [{}: {}]",
        value.kind(),
        value.name().unwrap_or("anonymous")
    )
}

pub trait Inspect {
    fn inspect(&self, label: &str) -> String;
}

impl Inspect for Term {
    fn inspect(&self, label: &str) -> String {
        describe(self, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app,
        boolean::{AND, FALSE, TRUE},
        numeral::{ONE, ZERO},
    };

    #[test]
    fn booleans_show_their_selector() {
        assert_eq!(TRUE.inspect("TRUE"), "TRUE as [function: select_first]");
        assert_eq!(FALSE.inspect("FALSE"), "FALSE as [function: select_second]");
    }

    #[test]
    fn aliases_show_the_underlying_function() {
        assert_eq!(describe(&ZERO, "ZERO"), "ZERO as [function: identity]");
        assert_eq!(describe(&AND, "and"), "and as [function: AND]");
    }

    #[test]
    fn anonymous_and_stuck_values() {
        assert_eq!(describe(&ONE, "ONE"), "ONE as [function: anonymous]");
        let stuck = app!(Term::atom("x"), Term::atom("y"));
        assert_eq!(describe(&stuck, "xy"), "xy as [application: anonymous]");
        assert_eq!(describe(&Term::atom("x"), "x"), "x as [atom: x]");
    }
}
