use std::fmt;

use log::trace;
use miette::Diagnostic;
use thiserror::Error;

use crate::{
    Term, app,
    boolean::{FALSE, TRUE},
    numeral::{ZERO, iszero, pred, succ},
};

const THEN: &str = "#then";
const ELSE: &str = "#else";

pub const DEFAULT_FUEL: usize = 1 << 12;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("value is not a boolean")]
    #[diagnostic(
        code(decode::not_boolean),
        help("given two alternatives it answered `{found}` instead of choosing one")
    )]
    NotBoolean { found: String },

    #[error("value is not a numeral")]
    #[diagnostic(
        code(decode::not_numeral),
        help("`iszero` stopped answering with a boolean after {depth} predecessor(s)")
    )]
    NotNumeral { depth: usize },

    #[error("numeral is larger than {fuel}")]
    #[diagnostic(code(decode::out_of_fuel), help("raise the decoder fuel to go further"))]
    OutOfFuel { fuel: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Bool(bool),
    Nat(usize),
    Opaque,
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.pad("TRUE"),
            Self::Bool(false) => f.pad("FALSE"),
            Self::Nat(n) => f.pad(&n.to_string()),
            Self::Opaque => f.pad("?"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    /// Most predecessors taken before a numeral is given up on.
    pub fuel: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self { fuel: DEFAULT_FUEL }
    }
}

impl Decoder {
    pub fn new(fuel: usize) -> Self {
        Self { fuel }
    }

    pub fn decode_bool(&self, t: &Term) -> Result<bool> {
        let (then, otherwise) = (Term::atom(THEN), Term::atom(ELSE));
        let picked = app!(*t, then, otherwise);
        if picked.same(&then) {
            Ok(true)
        } else if picked.same(&otherwise) {
            Ok(false)
        } else {
            Err(Error::NotBoolean {
                found: picked.to_string(),
            })
        }
    }

    pub fn decode_nat(&self, t: &Term) -> Result<usize> {
        let mut current = t.clone();
        for depth in 0..=self.fuel {
            let zero = self
                .decode_bool(&iszero(&current))
                .map_err(|_| Error::NotNumeral { depth })?;
            trace!("numeral probe {depth}: zero = {zero}");
            if zero {
                return Ok(depth);
            }
            current = pred(&current);
        }
        Err(Error::OutOfFuel { fuel: self.fuel })
    }

    /// Booleans and numerals never overlap under these probes, so the first
    /// one that succeeds wins.
    pub fn decode(&self, t: &Term) -> Decoded {
        if let Ok(b) = self.decode_bool(t) {
            return Decoded::Bool(b);
        }
        match self.decode_nat(t) {
            Ok(n) => Decoded::Nat(n),
            Err(e) => {
                trace!("{t} is opaque: {e}");
                Decoded::Opaque
            }
        }
    }
}

pub fn encode_bool(b: bool) -> Term {
    if b { TRUE.clone() } else { FALSE.clone() }
}

pub fn encode_nat(n: usize) -> Term {
    (0..n).fold(ZERO.clone(), |acc, _| succ(&acc))
}
