//! Tagged-variant booleans and naturals.
//!
//! These answer every question the function encoding answers, with ordinary
//! enums and pattern matching, and serve as the oracle the encoded values are
//! checked against.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bool {
    True,
    False,
}

impl Bool {
    pub fn not(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
        }
    }

    pub fn and(self, other: Self) -> Self {
        match self {
            Self::True => other,
            Self::False => Self::False,
        }
    }

    pub fn nand(self, other: Self) -> Self {
        self.and(other).not()
    }

    pub fn or(self, other: Self) -> Self {
        match self {
            Self::True => Self::True,
            Self::False => other,
        }
    }

    pub fn xor(self, other: Self) -> Self {
        match self {
            Self::True => other.not(),
            Self::False => other,
        }
    }

    pub fn implies(self, other: Self) -> Self {
        match self {
            Self::True => other,
            Self::False => Self::True,
        }
    }

    pub fn equiv(self, other: Self) -> Self {
        match self {
            Self::True => other,
            Self::False => other.not(),
        }
    }
}

impl From<bool> for Bool {
    fn from(b: bool) -> Self {
        if b { Self::True } else { Self::False }
    }
}

impl From<Bool> for bool {
    fn from(b: Bool) -> Self {
        b == Bool::True
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nat {
    Zero,
    Succ(Box<Nat>),
}

impl Nat {
    pub fn succ(self) -> Self {
        Self::Succ(Box::new(self))
    }

    /// Clamped at zero.
    pub fn pred(self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::Succ(n) => *n,
        }
    }

    pub fn is_zero(&self) -> Bool {
        match self {
            Self::Zero => Bool::True,
            Self::Succ(_) => Bool::False,
        }
    }

    pub fn add(self, other: Self) -> Self {
        match other {
            Self::Zero => self,
            Self::Succ(n) => self.succ().add(*n),
        }
    }

    pub fn mult(&self, other: &Self) -> Self {
        match other {
            Self::Zero => Self::Zero,
            Self::Succ(n) => self.clone().add(self.mult(n)),
        }
    }

    pub fn to_usize(&self) -> usize {
        let mut n = self;
        let mut k = 0;
        while let Self::Succ(p) = n {
            n = p;
            k += 1;
        }
        k
    }
}

impl From<usize> for Nat {
    fn from(n: usize) -> Self {
        (0..n).fold(Self::Zero, |acc, _| acc.succ())
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_usize())
    }
}
