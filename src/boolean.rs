use std::sync::LazyLock;

use crate::{
    Term, app,
    combinator::{MAKE_PAIR, SELECT_FIRST, SELECT_SECOND},
};

pub static TRUE: LazyLock<Term> = LazyLock::new(|| SELECT_FIRST.clone());

pub static FALSE: LazyLock<Term> = LazyLock::new(|| SELECT_SECOND.clone());

pub static COND: LazyLock<Term> = LazyLock::new(|| MAKE_PAIR.clone());

pub static NOT: LazyLock<Term> = LazyLock::new(|| Term::function("NOT", |x| app!(x, FALSE, TRUE)));

pub static AND: LazyLock<Term> =
    LazyLock::new(|| Term::function2("AND", |x, y| app!(x, y, FALSE)));

pub static NAND: LazyLock<Term> =
    LazyLock::new(|| Term::function2("NAND", |x, y| app!(x, app!(NOT, y), TRUE)));

pub static OR: LazyLock<Term> = LazyLock::new(|| Term::function2("OR", |x, y| app!(x, TRUE, y)));

pub static XOR: LazyLock<Term> =
    LazyLock::new(|| Term::function2("XOR", |x, y| app!(x, app!(NOT, y), y)));

pub static IMPLIES: LazyLock<Term> =
    LazyLock::new(|| Term::function2("IMPLIES", |x, y| app!(x, y, TRUE)));

pub static EQUIV: LazyLock<Term> =
    LazyLock::new(|| Term::function2("EQUIV", |x, y| app!(x, y, app!(NOT, y))));

pub fn cond(e1: &Term, e2: &Term, c: &Term) -> Term {
    app!(COND, *e1, *e2, *c)
}

pub fn not(x: &Term) -> Term {
    app!(NOT, *x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [bool; 2] = [true, false];

    fn lift(b: bool) -> Term {
        if b { TRUE.clone() } else { FALSE.clone() }
    }

    fn check_binary(op: &Term, table: impl Fn(bool, bool) -> bool) {
        for x in BOTH {
            for y in BOTH {
                let r = app!(*op, lift(x), lift(y));
                assert!(
                    r.same(&lift(table(x, y))),
                    "{op} {x} {y} should be {}",
                    table(x, y)
                );
            }
        }
    }

    #[test]
    fn constants_select() {
        let (a, b) = (Term::atom("a"), Term::atom("b"));
        assert!(app!(TRUE, a, b).same(&a));
        assert!(app!(FALSE, a, b).same(&b));
        assert!(TRUE.same(&SELECT_FIRST));
        assert!(FALSE.same(&SELECT_SECOND));
    }

    #[test]
    fn cond_is_a_ternary() {
        let (a, b) = (Term::atom("then"), Term::atom("else"));
        assert!(cond(&a, &b, &TRUE).same(&a));
        assert!(cond(&a, &b, &FALSE).same(&b));
        assert!(COND.same(&MAKE_PAIR));
    }

    #[test]
    fn negation() {
        assert!(not(&TRUE).same(&FALSE));
        assert!(not(&FALSE).same(&TRUE));
        assert!(not(&not(&TRUE)).same(&TRUE));
    }

    #[test]
    fn truth_tables() {
        check_binary(&AND, |x, y| x && y);
        check_binary(&NAND, |x, y| !(x && y));
        check_binary(&OR, |x, y| x || y);
        check_binary(&XOR, |x, y| x != y);
        check_binary(&IMPLIES, |x, y| !x || y);
        check_binary(&EQUIV, |x, y| x == y);
    }
}
