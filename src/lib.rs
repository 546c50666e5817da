//! Booleans, naturals, conditionals and recursion encoded as one-argument
//! functions, in the style of the untyped λ-calculus.
//!
//! Every value is a [`Term`]. The named definitions live in the encoding
//! modules as lazily built `static` bindings and are combined with plain
//! application, usually through the [`app!`] macro:
//!
//! ```
//! use church::{app, boolean::{AND, FALSE, TRUE}};
//!
//! let r = app!(AND, TRUE, FALSE);
//! assert!(r.same(&FALSE));
//! ```

use std::{fmt, sync::Arc, sync::LazyLock};

pub mod arithmetic;
pub mod boolean;
pub mod combinator;
pub mod decode;
pub mod inspect;
pub mod lexer;
pub mod numeral;
pub mod prelude;
pub mod query;
pub mod recursion;
pub mod reference;

type Body = dyn Fn(Term) -> Term + Send + Sync;
type ClosedBody = dyn Fn(&Term, Term) -> Term + Send + Sync;

enum Code {
    Open(Box<Body>),
    /// The closed-over value sits outside the box, so a chain of closures
    /// (a numeral's successors) can be unlinked without recursion.
    Closed(Term, Box<ClosedBody>),
}

pub struct Function {
    name: Option<&'static str>,
    code: Code,
}

impl Function {
    fn take_env(&mut self) -> Option<Term> {
        match &mut self.code {
            Code::Closed(env, _) => Some(std::mem::replace(env, Term::Atom(""))),
            Code::Open(_) => None,
        }
    }
}

impl Drop for Function {
    fn drop(&mut self) {
        let mut next = self.take_env();
        while let Some(Term::Fun(f)) = next {
            match Arc::try_unwrap(f) {
                Ok(mut f) => next = f.take_env(),
                Err(_) => break,
            }
        }
    }
}

#[derive(Clone)]
pub enum Term {
    Fun(Arc<Function>),
    /// Inert marker. Applying it builds a [`Term::Stuck`] application.
    Atom(&'static str),
    Stuck(Arc<Term>, Arc<Term>),
}

impl Term {
    pub fn function(
        name: &'static str,
        body: impl Fn(Term) -> Term + Send + Sync + 'static,
    ) -> Self {
        Self::Fun(Arc::new(Function {
            name: Some(name),
            code: Code::Open(Box::new(body)),
        }))
    }

    pub fn lambda(body: impl Fn(Term) -> Term + Send + Sync + 'static) -> Self {
        Self::Fun(Arc::new(Function {
            name: None,
            code: Code::Open(Box::new(body)),
        }))
    }

    /// Anonymous function closed over `env`, which `body` sees by reference.
    pub fn closure(
        env: Term,
        body: impl Fn(&Term, Term) -> Term + Send + Sync + 'static,
    ) -> Self {
        Self::Fun(Arc::new(Function {
            name: None,
            code: Code::Closed(env, Box::new(body)),
        }))
    }

    /// Curried two-argument function `λa.λb.body`.
    pub fn function2(
        name: &'static str,
        body: impl Fn(Term, Term) -> Term + Send + Sync + 'static,
    ) -> Self {
        let body = Arc::new(body);
        Self::function(name, move |a| {
            let body = body.clone();
            Self::closure(a, move |a, b| (*body)(a.clone(), b))
        })
    }

    /// Curried three-argument function `λa.λb.λc.body`.
    pub fn function3(
        name: &'static str,
        body: impl Fn(Term, Term, Term) -> Term + Send + Sync + 'static,
    ) -> Self {
        let body = Arc::new(body);
        Self::function(name, move |a| {
            let body = body.clone();
            Self::closure(a, move |a, b| {
                let (body, a) = (body.clone(), a.clone());
                Self::closure(b, move |b, c| (*body)(a.clone(), b.clone(), c))
            })
        })
    }

    pub fn atom(name: &'static str) -> Self {
        Self::Atom(name)
    }

    pub fn apply(&self, arg: Term) -> Term {
        match self {
            Self::Fun(f) => match &f.code {
                Code::Open(body) => body(arg),
                Code::Closed(env, body) => body(env, arg),
            },
            _ => Self::Stuck(Arc::new(self.clone()), Arc::new(arg)),
        }
    }

    pub fn apply_all(&self, args: impl IntoIterator<Item = Term>) -> Term {
        args.into_iter().fold(self.clone(), |f, arg| f.apply(arg))
    }

    /// Structural identity: the very same function value, the same atom, or
    /// stuck applications built from identical parts.
    pub fn same(&self, other: &Term) -> bool {
        match (self, other) {
            (Self::Fun(l), Self::Fun(r)) => Arc::ptr_eq(l, r),
            (Self::Atom(l), Self::Atom(r)) => l == r,
            (Self::Stuck(lf, la), Self::Stuck(rf, ra)) => lf.same(rf) && la.same(ra),
            _ => false,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Fun(f) => f.name,
            Self::Atom(a) => Some(*a),
            Self::Stuck(..) => None,
        }
    }

    /// Runtime type name, as shown by [`inspect::describe`].
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fun(_) => "function",
            Self::Atom(_) => "atom",
            Self::Stuck(..) => "application",
        }
    }
}

impl From<&Term> for Term {
    fn from(t: &Term) -> Self {
        t.clone()
    }
}

impl From<&LazyLock<Term>> for Term {
    fn from(t: &LazyLock<Term>) -> Self {
        Term::clone(t)
    }
}

/// Curried application: `app!(f, a, b)` is `f(a)(b)`.
///
/// Operands may be [`Term`]s or the `static` definitions of this crate; they
/// are borrowed and cloned, never consumed.
#[macro_export]
macro_rules! app {
    ($f:expr $(, $arg:expr)+ $(,)?) => {
        $crate::Term::from(&$f)$(.apply($crate::Term::from(&$arg)))+
    };
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fun(fun) => f.write_str(fun.name.unwrap_or("λ")),
            Self::Atom(a) => f.write_str(a),
            Self::Stuck(l, r) => {
                if matches!(**r, Self::Stuck(..)) {
                    write!(f, "{l} ({r})")
                } else {
                    write!(f, "{l} {r}")
                }
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fun(fun) => write!(f, "Fun({})", fun.name.unwrap_or("λ")),
            Self::Atom(a) => write!(f, "Atom({a})"),
            Self::Stuck(l, r) => write!(f, "Stuck({l:?}, {r:?})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applying_an_atom_gets_stuck() {
        let a = Term::atom("a");
        let b = Term::atom("b");
        let r = a.apply(b.clone());
        assert_eq!(r.kind(), "application");
        assert!(r.same(&Term::atom("a").apply(Term::atom("b"))));
        assert_eq!(r.to_string(), "a b");
        assert_eq!(a.apply(b.apply(Term::atom("c"))).to_string(), "a (b c)");
    }

    #[test]
    fn curried_helpers_collect_arguments() {
        let first = Term::function3("first_of_three", |a, _, _| a);
        let r = app!(first, Term::atom("x"), Term::atom("y"), Term::atom("z"));
        assert!(r.same(&Term::atom("x")));

        let second = Term::function2("second_of_two", |_, b| b);
        let r = second.apply_all([Term::atom("x"), Term::atom("y")]);
        assert!(r.same(&Term::atom("y")));
    }

    #[test]
    fn identity_is_by_allocation() {
        let f = Term::function("f", |x| x);
        let g = Term::function("f", |x| x);
        assert!(f.same(&f.clone()));
        assert!(!f.same(&g));
        assert_eq!(f.name(), g.name());
        assert_eq!(Term::lambda(|x| x).name(), None);
    }

    #[test]
    fn closures_see_their_environment() {
        let keep = Term::closure(Term::atom("env"), |env, _| env.clone());
        assert!(keep.apply(Term::atom("arg")).same(&Term::atom("env")));
        assert_eq!(keep.kind(), "function");
    }

    #[test]
    fn long_closure_chains_drop_without_recursing() {
        let chain = (0..200_000).fold(Term::atom("end"), |t, _| {
            Term::closure(t, |env, _| env.clone())
        });
        let shared = chain.clone();
        drop(chain);
        assert_eq!(shared.apply(Term::atom("x")).kind(), "function");
        drop(shared);
    }
}
