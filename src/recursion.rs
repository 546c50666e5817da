//! Recursion without named self-reference.
//!
//! `recursive f` behaves as `f (recursive f)`. Evaluation here is eager, so
//! the self-application is wrapped as `λn.(s s n)` and only unfolds when the
//! recursive reference is itself applied:
//!
//! ```text
//! def recursive = λf.(λs.(f λn.(s s n)) λs.(f λn.(s s n)))
//! ```
//!
//! The unwrapped `λf.(λs.(f (s s)) λs.(f (s s)))` unfolds forever before `f`
//! ever runs and is not provided.
//!
//! A step function must also keep its recursive arm from being evaluated
//! when the base case holds: both arms go through [`delay`] and the chosen
//! one is run with [`force`].

use std::sync::LazyLock;

use crate::{Term, app, combinator::IDENTITY};

pub static RECURSIVE: LazyLock<Term> = LazyLock::new(|| {
    Term::function("recursive", |f| {
        let unfold = Term::lambda(move |s| {
            let again = Term::lambda(move |n| app!(s, s, n));
            f.apply(again)
        });
        app!(unfold, unfold)
    })
});

pub fn recursive(f: &Term) -> Term {
    app!(RECURSIVE, *f)
}

/// `λ_.value`, computed only when applied.
pub fn delay(value: impl Fn() -> Term + Send + Sync + 'static) -> Term {
    Term::lambda(move |_| value())
}

/// Runs a [`delay`]ed arm.
pub fn force(arm: &Term) -> Term {
    app!(*arm, IDENTITY)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{
        boolean::{FALSE, TRUE},
        numeral::{FIVE, ZERO, iszero, pred},
    };

    /// `λf.λn.(iszero n) (λ_.true) (λ_.(f (pred n))) identity`, reaching the
    /// base case by walking down to zero.
    fn countdown() -> Term {
        Term::function2("countdown", |f, n| {
            let base = delay(|| TRUE.clone());
            let test = iszero(&n);
            let step = delay(move || app!(f, pred(&n)));
            force(&app!(test, base, step))
        })
    }

    #[test]
    fn reaches_the_base_case() {
        let walk = recursive(&countdown());
        assert!(app!(walk, FIVE).same(&TRUE));
        assert!(app!(walk, ZERO).same(&TRUE));
    }

    #[test]
    fn unfolds_once_per_recursive_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let step = Term::function2("counting", move |f, n| {
            counter.fetch_add(1, Ordering::SeqCst);
            let base = delay(|| FALSE.clone());
            let test = iszero(&n);
            let step = delay(move || app!(f, pred(&n)));
            force(&app!(test, base, step))
        });
        let walk = recursive(&step);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(app!(walk, FIVE).same(&FALSE));
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn delayed_arms_run_only_when_forced() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let arm = delay(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Term::atom("ran")
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(force(&arm).same(&Term::atom("ran")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
