//! Queries typed at the REPL: curried applications of prelude names and
//! decimal numerals, e.g. `iszero (pred 3)`.
//!
//! There is no abstraction syntax. A query only applies values that already
//! exist, so evaluating it is plain [`Term::apply`].

use log::debug;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::{
    Term,
    decode::encode_nat,
    lexer::{self, Meta, TkTy, Token},
    prelude,
};

pub type Node = Box<Meta<Query>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Name,
    Numeral,
    App(Node, Node),
}

impl Query {
    pub fn at(self, at: SourceSpan) -> Node {
        Meta { item: self, at }.into()
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("unexpected end of query")]
    #[diagnostic(
        code(query::unexpected_eof),
        help("maybe you've left some parenthesis opened")
    )]
    UnexpectedEof {
        #[label("bit of a sudden, isn't it?")]
        at: SourceSpan,
    },

    #[error("unexpected token {tk:?}")]
    #[diagnostic(code(query::unexpected_token), help("so far, we were expecting a {exp}"))]
    UnexpectedToken {
        exp: &'static str,
        tk: TkTy,
        #[label("here")]
        at: SourceSpan,
    },

    #[error("unknown definition `{name}`")]
    #[diagnostic(code(query::unknown_name), help("`:list` shows every definition"))]
    UnknownName {
        name: String,
        #[label("not in the prelude")]
        at: SourceSpan,
    },

    #[error("numeral {value} is above the limit of {limit}")]
    #[diagnostic(
        code(query::numeral_too_large),
        help("recursive arithmetic on large numerals exhausts the stack; `:set max_numeral` moves the limit")
    )]
    NumeralTooLarge {
        value: String,
        limit: usize,
        #[label("too large")]
        at: SourceSpan,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct Parser {
    pub tokens: Vec<Token>,
    pub idx: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, idx: 0 }
    }

    pub fn current(&self) -> Result<&Token> {
        self.peek(0)
    }

    pub fn peek(&self, offset: usize) -> Result<&Token> {
        self.tokens
            .get(self.idx + offset)
            .ok_or_else(|| Error::UnexpectedEof {
                at: self
                    .tokens
                    .last()
                    .map(|t| SourceSpan::new((t.at.offset() + t.at.len()).into(), 0))
                    .unwrap_or(SourceSpan::new(0.into(), 0)),
            })
    }

    pub fn at_end(&self) -> bool {
        self.idx >= self.tokens.len()
    }

    pub fn syntax(&mut self, tk: TkTy, exp: &'static str) -> Result<SourceSpan> {
        let peek = self.current()?;
        if peek.item == tk {
            let at = peek.at;
            self.idx += 1;
            Ok(at)
        } else {
            Err(Error::UnexpectedToken {
                exp,
                tk: peek.item.clone(),
                at: peek.at,
            })
        }
    }

    /// A whole query; every token must be consumed.
    pub fn parse(&mut self) -> Result<Node> {
        let node = self.parse_app()?;
        match self.tokens.get(self.idx) {
            None => Ok(node),
            Some(tk) => Err(Error::UnexpectedToken {
                exp: "name, numeral or `(`",
                tk: tk.item.clone(),
                at: tk.at,
            }),
        }
    }

    pub fn parse_app(&mut self) -> Result<Node> {
        let mut l = self.parse_atom()?;
        while !self.at_end() && self.current()?.item.starts_atom() {
            let r = self.parse_atom()?;
            let at = lexer::over(l.at, r.at);
            l = Query::App(l, r).at(at)
        }
        Ok(l)
    }

    pub fn parse_atom(&mut self) -> Result<Node> {
        let (item, at) = {
            let tk = self.current()?;
            (tk.item.clone(), tk.at)
        };
        match item {
            TkTy::LParen => {
                self.idx += 1;
                let inner = self.parse_app()?;
                let close = self.syntax(TkTy::RParen, "`)`")?;
                Ok(Meta {
                    item: inner.item,
                    at: lexer::over(at, close),
                }
                .into())
            }
            TkTy::Name => {
                self.idx += 1;
                Ok(Query::Name.at(at))
            }
            TkTy::Numeral => {
                self.idx += 1;
                Ok(Query::Numeral.at(at))
            }
            TkTy::RParen => Err(Error::UnexpectedToken {
                exp: "name, numeral or `(`",
                tk: TkTy::RParen,
                at,
            }),
        }
    }
}

pub fn display_node(n: &Node, src: &str) {
    fn span_str(span: &SourceSpan) -> String {
        format!("{}..{}", span.offset(), span.offset() + span.len())
    }

    fn indented(n: &Node, src: &str, mut depth: usize) {
        print!("{}", " ".repeat(depth * 2));
        depth += 1;
        let span = span_str(&n.at);
        match &n.item {
            Query::Name => println!("{} @ {span}", n.from_code(src)),
            Query::Numeral => println!("# {} @ {span}", n.from_code(src)),
            Query::App(l, r) => {
                println!("⋅ @ {span}");
                indented(l, src, depth);
                indented(r, src, depth);
            }
        }
    }
    indented(n, src, 0)
}

pub const DEFAULT_MAX_NUMERAL: usize = 64;

#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    /// Largest numeral literal a query may spell out.
    pub max_numeral: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            max_numeral: DEFAULT_MAX_NUMERAL,
        }
    }
}

impl Evaluator {
    pub fn eval(&self, node: &Node, src: &str) -> Result<Term> {
        match &node.item {
            Query::Name => {
                let name = node.from_code(src);
                let def = prelude::lookup(name).ok_or_else(|| Error::UnknownName {
                    name: name.to_string(),
                    at: node.at,
                })?;
                debug!("{name} resolves to {}", def.lambda);
                Ok(def.term())
            }
            Query::Numeral => {
                let digits = node.from_code(src);
                let too_large = || Error::NumeralTooLarge {
                    value: digits.to_string(),
                    limit: self.max_numeral,
                    at: node.at,
                };
                let n: usize = digits.parse().map_err(|_| too_large())?;
                if n > self.max_numeral {
                    return Err(too_large());
                }
                Ok(encode_nat(n))
            }
            Query::App(l, r) => {
                let f = self.eval(l, src)?;
                let arg = self.eval(r, src)?;
                debug!("applying {f} to {arg}");
                Ok(f.apply(arg))
            }
        }
    }
}
