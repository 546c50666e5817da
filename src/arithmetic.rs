//! Addition and multiplication by repeated increment, closed with
//! [`RECURSIVE`].
//!
//! ```text
//! def add1 f x y = if iszero y then x else f (succ x) (pred y)
//! def mult1 f x y = if iszero y then zero else add x (f x (pred y))
//! ```
//!
//! `ADD1` and `MULT1` are the single unrolled steps written exactly as
//! above. Both arms are evaluated before the condition picks one, so they
//! only terminate when `f` does on its own (e.g. `add1 add x y`). The
//! `*_STEP` variants keep the recursive arm behind [`delay`] and are the ones
//! handed to the fixed-point combinator.

use std::sync::LazyLock;

use crate::{
    Term, app,
    numeral::{ISZERO, ZERO, iszero, pred, succ},
    recursion::{RECURSIVE, delay, force},
};

/// `λf.λx.λy.(((iszero y) x) (f (succ x) (pred y)))`
pub static ADD1: LazyLock<Term> = LazyLock::new(|| {
    Term::function3("add1", |f, x, y| {
        app!(ISZERO, y, x, app!(f, succ(&x), pred(&y)))
    })
});

pub static ADD_STEP: LazyLock<Term> = LazyLock::new(|| {
    Term::function3("add_step", |f, x, y| {
        let test = iszero(&y);
        let (x_next, y_next) = (succ(&x), pred(&y));
        let done = delay(move || x.clone());
        let again = delay(move || app!(f, x_next, y_next));
        force(&app!(test, done, again))
    })
});

/// `recursive add_step`
pub static ADD: LazyLock<Term> = LazyLock::new(|| app!(RECURSIVE, ADD_STEP));

/// `λf.λx.λy.(((iszero y) zero) (add x (f x (pred y))))`
pub static MULT1: LazyLock<Term> = LazyLock::new(|| {
    Term::function3("mult1", |f, x, y| {
        app!(ISZERO, y, ZERO, app!(ADD, x, app!(f, x, pred(&y))))
    })
});

pub static MULT_STEP: LazyLock<Term> = LazyLock::new(|| {
    Term::function3("mult_step", |f, x, y| {
        let test = iszero(&y);
        let rest = pred(&y);
        let done = delay(|| ZERO.clone());
        let again = delay(move || app!(ADD, x, app!(f, x, rest)));
        force(&app!(test, done, again))
    })
});

/// `recursive mult_step`
pub static MULT: LazyLock<Term> = LazyLock::new(|| app!(RECURSIVE, MULT_STEP));

pub fn add(x: &Term, y: &Term) -> Term {
    app!(ADD, *x, *y)
}

pub fn mult(x: &Term, y: &Term) -> Term {
    app!(MULT, *x, *y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decode::{Decoder, encode_nat},
        numeral::{FOUR, ONE, THREE, TWO},
    };

    fn value(t: &Term) -> usize {
        Decoder::default().decode_nat(t).unwrap()
    }

    #[test]
    fn adds_small_numbers() {
        for x in 0..=6 {
            for y in 0..=6 {
                let sum = add(&encode_nat(x), &encode_nat(y));
                assert_eq!(value(&sum), x + y, "{x} + {y}");
            }
        }
    }

    #[test]
    fn adding_zero_returns_the_accumulator() {
        assert!(add(&THREE, &ZERO).same(&THREE));
    }

    #[test]
    fn one_step_with_full_addition() {
        assert_eq!(value(&app!(ADD1, ADD, TWO, THREE)), 5);
        assert!(app!(ADD1, ADD, FOUR, ZERO).same(&FOUR));
    }

    #[test]
    fn multiplies_small_numbers() {
        for x in 0..=4 {
            for y in 0..=4 {
                let product = mult(&encode_nat(x), &encode_nat(y));
                assert_eq!(value(&product), x * y, "{x} * {y}");
            }
        }
        assert!(mult(&ONE, &ZERO).same(&ZERO));
    }

    #[test]
    fn one_step_with_full_multiplication() {
        assert_eq!(value(&app!(MULT1, MULT, THREE, FOUR)), 12);
        assert!(app!(MULT1, MULT, TWO, ZERO).same(&ZERO));
    }
}
