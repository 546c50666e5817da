//! Every named definition, with the λ-expression it stands for.

use std::sync::LazyLock;

use crate::{
    Term,
    arithmetic::{ADD, ADD_STEP, ADD1, MULT, MULT_STEP, MULT1},
    boolean::{AND, COND, EQUIV, FALSE, IMPLIES, NAND, NOT, OR, TRUE, XOR},
    combinator::{APPLY, IDENTITY, MAKE_PAIR, SELECT_FIRST, SELECT_SECOND, SELF_APPLY},
    numeral::{
        EIGHT, FIVE, FOUR, ISZERO, NINE, ONE, PRED, SEVEN, SIX, SUCC, TEN, THREE, TWO, ZERO,
    },
    recursion::RECURSIVE,
};

pub struct Definition {
    pub name: &'static str,
    /// Descriptive only; never parsed.
    pub lambda: &'static str,
    pub term: &'static LazyLock<Term>,
}

impl Definition {
    pub fn term(&self) -> Term {
        Term::from(self.term)
    }
}

macro_rules! def {
    ($name:literal, $lambda:literal, $term:ident) => {
        Definition {
            name: $name,
            lambda: $lambda,
            term: &$term,
        }
    };
}

pub static DEFINITIONS: &[Definition] = &[
    def!("identity", "λx.x", IDENTITY),
    def!("self_apply", "λs.(s s)", SELF_APPLY),
    def!("apply", "λfunc.λarg.(func arg)", APPLY),
    def!("select_first", "λfirst.λsecond.first", SELECT_FIRST),
    def!("select_second", "λfirst.λsecond.second", SELECT_SECOND),
    def!("make_pair", "λfirst.λsecond.λfunc.((func first) second)", MAKE_PAIR),
    def!("true", "select_first", TRUE),
    def!("false", "select_second", FALSE),
    def!("cond", "λe1.λe2.λc.((c e1) e2)", COND),
    def!("not", "λx.((x false) true)", NOT),
    def!("and", "λx.λy.((x y) false)", AND),
    def!("nand", "λx.λy.((x (not y)) true)", NAND),
    def!("or", "λx.λy.((x true) y)", OR),
    def!("xor", "λx.λy.((x (not y)) y)", XOR),
    def!("implies", "λx.λy.((x y) true)", IMPLIES),
    def!("equiv", "λx.λy.((x y) (not y))", EQUIV),
    def!("zero", "identity", ZERO),
    def!("succ", "λn.λs.((s false) n)", SUCC),
    def!("iszero", "λn.(n select_first)", ISZERO),
    def!("pred", "λn.(((iszero n) zero) (n select_second))", PRED),
    def!("one", "succ zero", ONE),
    def!("two", "succ one", TWO),
    def!("three", "succ two", THREE),
    def!("four", "succ three", FOUR),
    def!("five", "succ four", FIVE),
    def!("six", "succ five", SIX),
    def!("seven", "succ six", SEVEN),
    def!("eight", "succ seven", EIGHT),
    def!("nine", "succ eight", NINE),
    def!("ten", "succ nine", TEN),
    def!("recursive", "λf.(λs.(f λn.(s s n)) λs.(f λn.(s s n)))", RECURSIVE),
    def!("add1", "λf.λx.λy.(((iszero y) x) (f (succ x) (pred y)))", ADD1),
    def!("add_step", "λf.λx.λy.((((iszero y) λ_.x) λ_.(f (succ x) (pred y))) identity)", ADD_STEP),
    def!("add", "recursive add_step", ADD),
    def!("mult1", "λf.λx.λy.(((iszero y) zero) (add x (f x (pred y))))", MULT1),
    def!("mult_step", "λf.λx.λy.((((iszero y) λ_.zero) λ_.(add x (f x (pred y)))) identity)", MULT_STEP),
    def!("mult", "recursive mult_step", MULT),
];

/// Case-insensitive, so `TRUE` and `true` both resolve.
pub fn lookup(name: &str) -> Option<&'static Definition> {
    DEFINITIONS
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}
