//! Primitive combinators. Everything else is built from these by application.

use std::sync::LazyLock;

use crate::{Term, app};

/// `λx.x`
pub static IDENTITY: LazyLock<Term> = LazyLock::new(|| Term::function("identity", |x| x));

/// `λs.(s s)`
///
/// Applying it to itself never returns: the call stack is exhausted.
pub static SELF_APPLY: LazyLock<Term> =
    LazyLock::new(|| Term::function("self_apply", |s| app!(s, s)));

/// `λfunc.λarg.(func arg)`
pub static APPLY: LazyLock<Term> =
    LazyLock::new(|| Term::function("apply", |func| Term::lambda(move |arg| func.apply(arg))));

/// `λfirst.λsecond.first`
pub static SELECT_FIRST: LazyLock<Term> = LazyLock::new(|| {
    Term::function("select_first", |first| {
        Term::lambda(move |_second| first.clone())
    })
});

/// `λfirst.λsecond.second`
pub static SELECT_SECOND: LazyLock<Term> = LazyLock::new(|| {
    Term::function("select_second", |_first| Term::lambda(|second| second))
});

/// `λfirst.λsecond.λfunc.((func first) second)`
pub static MAKE_PAIR: LazyLock<Term> = LazyLock::new(|| {
    Term::function3("make_pair", |first, second, func| app!(func, first, second))
});

pub fn make_pair(first: &Term, second: &Term) -> Term {
    app!(MAKE_PAIR, *first, *second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> (Term, Term) {
        (Term::atom("a"), Term::atom("b"))
    }

    #[test]
    fn identity_returns_its_argument() {
        let (a, _) = markers();
        assert!(app!(IDENTITY, a).same(&a));
        assert!(app!(IDENTITY, IDENTITY).same(&IDENTITY));
    }

    #[test]
    fn self_apply_feeds_a_value_to_itself() {
        let (a, _) = markers();
        let stuck = app!(SELF_APPLY, a);
        assert!(stuck.same(&app!(a, a)));
        assert!(app!(SELF_APPLY, IDENTITY).same(&IDENTITY));
    }

    #[test]
    fn apply_is_plain_application() {
        let (a, _) = markers();
        assert!(app!(APPLY, IDENTITY, a).same(&a));
        assert!(app!(APPLY, SELECT_FIRST, a, IDENTITY).same(&a));
    }

    #[test]
    fn selectors_pick_opposite_arguments() {
        let (a, b) = markers();
        assert!(app!(SELECT_FIRST, a, b).same(&a));
        assert!(app!(SELECT_SECOND, a, b).same(&b));
        assert!(!SELECT_FIRST.same(&SELECT_SECOND));
        assert_ne!(SELECT_FIRST.name(), SELECT_SECOND.name());
    }

    #[test]
    fn pairs_hand_their_halves_to_the_chooser() {
        let (a, b) = markers();
        let pair = make_pair(&a, &b);
        assert!(app!(pair, SELECT_FIRST).same(&a));
        assert!(app!(pair, SELECT_SECOND).same(&b));
        assert_eq!(app!(pair, Term::atom("f")).to_string(), "f a b");
    }
}
