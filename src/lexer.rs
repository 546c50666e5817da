use logos::Logos;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Meta<T> {
    pub item: T,
    pub at: SourceSpan,
}

impl<T> Meta<T> {
    pub fn from_code<'a>(&self, src: &'a str) -> &'a str {
        &src[self.at.offset()..self.at.offset() + self.at.len()]
    }
}

pub fn over(l: SourceSpan, r: SourceSpan) -> SourceSpan {
    SourceSpan::new(l.offset().into(), r.offset() + r.len() - l.offset())
}

pub type Token = Meta<TkTy>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Diagnostic, Default, Clone, PartialEq)]
pub enum Error {
    #[error("invalid char sequence")]
    #[diagnostic(
        code(lexer::invalid_char_seq),
        help("queries are made of definition names, numerals and parentheses")
    )]
    InvalidCharSeq {
        #[label("here")]
        at: SourceSpan,
    },

    #[default]
    #[error("other error")]
    #[diagnostic(code(lexer::other_error), help("this shouldn't happen"))]
    Other,
}

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\f]+", error = Error)]
pub enum TkTy {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex("[0-9]+")]
    Numeral,
}

impl TkTy {
    pub fn processed(s: &str) -> impl Iterator<Item = Result<Meta<TkTy>>> {
        TkTy::lexer(s).spanned().map(|(tk, s)| {
            let at = SourceSpan::new(s.start.into(), s.end - s.start);
            tk.map_or_else(
                |_| Err(Error::InvalidCharSeq { at }),
                |tk| Ok(Meta { item: tk, at }),
            )
        })
    }

    /// Can this token open an operand?
    pub fn starts_atom(&self) -> bool {
        matches!(self, Self::LParen | Self::Name | Self::Numeral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TkTy> {
        TkTy::processed(s).map(|t| t.unwrap().item).collect()
    }

    #[test]
    fn names_numerals_and_parens() {
        assert_eq!(
            kinds("iszero (pred 3)"),
            [
                TkTy::Name,
                TkTy::LParen,
                TkTy::Name,
                TkTy::Numeral,
                TkTy::RParen
            ]
        );
        assert_eq!(kinds("select_first\ttwo"), [TkTy::Name, TkTy::Name]);
    }

    #[test]
    fn spans_point_into_the_source() {
        let src = "and  true";
        let tokens: Vec<_> = TkTy::processed(src).map(|t| t.unwrap()).collect();
        assert_eq!(tokens[1].from_code(src), "true");
        assert_eq!(over(tokens[0].at, tokens[1].at), SourceSpan::new(0.into(), 9));
    }

    #[test]
    fn lambdas_are_not_part_of_queries() {
        let errors: Vec<_> = TkTy::processed("λx.x").filter_map(|t| t.err()).collect();
        assert!(!errors.is_empty());
        assert!(matches!(errors[0], Error::InvalidCharSeq { .. }));
    }
}
