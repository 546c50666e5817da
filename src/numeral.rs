use std::sync::LazyLock;

use crate::{
    Term, app,
    boolean::FALSE,
    combinator::{IDENTITY, SELECT_FIRST, SELECT_SECOND},
};

pub static ZERO: LazyLock<Term> = LazyLock::new(|| IDENTITY.clone());

pub static SUCC: LazyLock<Term> =
    LazyLock::new(|| Term::function2("succ", |n, s| app!(s, FALSE, n)));

pub static ISZERO: LazyLock<Term> =
    LazyLock::new(|| Term::function("iszero", |n| app!(n, SELECT_FIRST)));

// Clamped: stripping a successor off zero would give `false`.
pub static PRED: LazyLock<Term> = LazyLock::new(|| {
    Term::function("pred", |n| app!(ISZERO, n, ZERO, app!(n, SELECT_SECOND)))
});

pub static ONE: LazyLock<Term> = LazyLock::new(|| succ(&ZERO));
pub static TWO: LazyLock<Term> = LazyLock::new(|| succ(&ONE));
pub static THREE: LazyLock<Term> = LazyLock::new(|| succ(&TWO));
pub static FOUR: LazyLock<Term> = LazyLock::new(|| succ(&THREE));
pub static FIVE: LazyLock<Term> = LazyLock::new(|| succ(&FOUR));
pub static SIX: LazyLock<Term> = LazyLock::new(|| succ(&FIVE));
pub static SEVEN: LazyLock<Term> = LazyLock::new(|| succ(&SIX));
pub static EIGHT: LazyLock<Term> = LazyLock::new(|| succ(&SEVEN));
pub static NINE: LazyLock<Term> = LazyLock::new(|| succ(&EIGHT));
pub static TEN: LazyLock<Term> = LazyLock::new(|| succ(&NINE));

/// `ZERO` through `TEN`, indexed by value.
pub fn named() -> [&'static Term; 11] {
    [
        &ZERO, &ONE, &TWO, &THREE, &FOUR, &FIVE, &SIX, &SEVEN, &EIGHT, &NINE, &TEN,
    ]
}

pub fn succ(n: &Term) -> Term {
    app!(SUCC, *n)
}

pub fn iszero(n: &Term) -> Term {
    app!(ISZERO, *n)
}

pub fn pred(n: &Term) -> Term {
    app!(PRED, *n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::TRUE;

    #[test]
    fn zero_is_the_identity() {
        assert!(ZERO.same(&IDENTITY));
        assert!(iszero(&ZERO).same(&TRUE));
    }

    #[test]
    fn successors_are_not_zero() {
        for n in &named()[1..] {
            assert!(iszero(n).same(&FALSE));
        }
    }

    #[test]
    fn pred_strips_one_successor() {
        let named = named();
        for k in 0..10 {
            assert!(pred(named[k + 1]).same(named[k]), "pred({}) != {k}", k + 1);
        }
    }

    #[test]
    fn pred_of_zero_is_zero() {
        assert!(pred(&ZERO).same(&ZERO));
        assert!(!pred(&ZERO).same(&FALSE));
    }

    #[test]
    fn successor_exposes_its_parts() {
        let n = Term::atom("n");
        let m = succ(&n);
        assert!(app!(m, SELECT_FIRST).same(&FALSE));
        assert!(app!(m, SELECT_SECOND).same(&n));
    }
}
