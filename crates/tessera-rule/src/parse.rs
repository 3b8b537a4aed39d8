//! Textual predicate language.
//!
//! Compiles rule strings into [`Predicate`] trees. The language is a
//! small, closed grammar over the neighbour count vector; nothing in a
//! rule string is ever executed.
//!
//! # Syntax
//!
//! ```text
//! // Count terms
//! surrounding[k]   // also counts[k], count[k], n[k]
//! total            // sum of all counts
//! 3                // integer literal
//! a + b            // sum of terms
//!
//! // Comparisons (chainable: 2 <= n[1] <= 3)
//! ==  !=  <  <=  >  >=
//! n[1] in {3, 6}   // membership
//!
//! // Logic (precedence low to high)
//! a or b, a || b
//! a and b, a && b
//! not a, !a
//!
//! // Constants
//! def, 'def'       // never fires (stay in place)
//! true, false
//! ```
//!
//! Parentheses, negations and `+` chains together may nest at most
//! [`MAX_DEPTH`] levels deep.
//!
//! # Example
//!
//! ```
//! use tessera_rule::Predicate;
//!
//! let p = Predicate::parse("surrounding[1] < 2 or surrounding[1] > 3").unwrap();
//! assert!(p.eval(&[8, 1]));
//! assert!(!p.eval(&[7, 2]));
//! ```

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;
use tessera_core::StateId;

use crate::predicate::{CmpOp, CountExpr, Predicate};

// ============================================================================
// Parse error
// ============================================================================

/// Predicate parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that starts no token.
    UnexpectedChar(char),
    /// Input ended mid-expression.
    UnexpectedEnd,
    /// A token in a position where it is not allowed.
    UnexpectedToken(String),
    /// An identifier that is not a keyword or counter name.
    UnknownIdentifier(String),
    /// A number that does not fit in `u32`.
    InvalidNumber(String),
    /// Parentheses, negations or sums nested more than `max` levels deep.
    TooDeep {
        /// The nesting limit that was exceeded.
        max: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedChar(c) => write!(f, "unexpected character: '{}'", c),
            ParseError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            ParseError::UnexpectedToken(t) => write!(f, "unexpected token: '{}'", t),
            ParseError::UnknownIdentifier(name) => write!(f, "unknown identifier: '{}'", name),
            ParseError::InvalidNumber(s) => write!(f, "invalid number: '{}'", s),
            ParseError::TooDeep { max } => {
                write!(f, "expression nested deeper than {} levels", max)
            }
        }
    }
}

impl std::error::Error for ParseError {}

// ============================================================================
// Lexer
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Int(u32),
    Ident(String),
    Quoted(String),
    Cmp(CmpOp),
    Plus,
    AndAnd,
    OrOr,
    Bang,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{n}"),
            Token::Ident(s) => f.write_str(s),
            Token::Quoted(s) => write!(f, "'{s}'"),
            Token::Cmp(op) => f.write_str(op.symbol()),
            Token::Plus => f.write_str("+"),
            Token::AndAnd => f.write_str("&&"),
            Token::OrOr => f.write_str("||"),
            Token::Bang => f.write_str("!"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::LBrace => f.write_str("{"),
            Token::RBrace => f.write_str("}"),
            Token::Comma => f.write_str(","),
            Token::Eof => f.write_str("<end>"),
        }
    }
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is next; report whether it was.
    fn eat(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.next_char();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn read_int(&mut self) -> Result<u32, ParseError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.next_char();
            } else {
                break;
            }
        }
        let s = &self.input[start..self.pos];
        s.parse()
            .map_err(|_| ParseError::InvalidNumber(s.to_string()))
    }

    fn read_ident(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '_' {
                self.next_char();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    fn read_quoted(&mut self, quote: char) -> Result<String, ParseError> {
        let start = self.pos;
        loop {
            match self.next_char() {
                Some(c) if c == quote => {
                    return Ok(self.input[start..self.pos - quote.len_utf8()].to_string());
                }
                Some(_) => {}
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            return Ok(Token::Eof);
        };

        match c {
            '0'..='9' => return Ok(Token::Int(self.read_int()?)),
            'a'..='z' | 'A'..='Z' | '_' => return Ok(Token::Ident(self.read_ident())),
            _ => {}
        }

        self.next_char();
        let tok = match c {
            '\'' | '"' => Token::Quoted(self.read_quoted(c)?),
            '+' => Token::Plus,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            ',' => Token::Comma,
            '=' if self.eat('=') => Token::Cmp(CmpOp::Eq),
            '!' if self.eat('=') => Token::Cmp(CmpOp::Ne),
            '!' => Token::Bang,
            '<' if self.eat('=') => Token::Cmp(CmpOp::Le),
            '<' => Token::Cmp(CmpOp::Lt),
            '>' if self.eat('=') => Token::Cmp(CmpOp::Ge),
            '>' => Token::Cmp(CmpOp::Gt),
            '&' if self.eat('&') => Token::AndAnd,
            '|' if self.eat('|') => Token::OrOr,
            _ => return Err(ParseError::UnexpectedChar(c)),
        };
        Ok(tok)
    }
}

// ============================================================================
// Parser
// ============================================================================

/// Names accepted for the count vector, as in `surrounding[1]`.
/// Deepest nesting of parentheses, negations and sums a predicate may use.
pub const MAX_DEPTH: usize = 64;

const COUNTER_NAMES: [&str; 4] = ["surrounding", "counts", "count", "n"];

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { max: MAX_DEPTH });
        }
        self.depth += 1;
        Ok(())
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.current == expected {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ParseError {
        match &self.current {
            Token::Eof => ParseError::UnexpectedEnd,
            t => ParseError::UnexpectedToken(t.to_string()),
        }
    }

    fn at_keyword(&self, kw: &str) -> bool {
        matches!(&self.current, Token::Ident(s) if s == kw)
    }

    fn parse_all(mut self) -> Result<Predicate, ParseError> {
        let p = self.parse_or()?;
        if self.current != Token::Eof {
            return Err(self.unexpected());
        }
        Ok(p)
    }

    fn parse_or(&mut self) -> Result<Predicate, ParseError> {
        let mut terms = vec![self.parse_and()?];
        while self.current == Token::OrOr || self.at_keyword("or") {
            self.advance()?;
            terms.push(self.parse_and()?);
        }
        Ok(collapse(terms, Predicate::Any))
    }

    fn parse_and(&mut self) -> Result<Predicate, ParseError> {
        let mut terms = vec![self.parse_not()?];
        while self.current == Token::AndAnd || self.at_keyword("and") {
            self.advance()?;
            terms.push(self.parse_not()?);
        }
        Ok(collapse(terms, Predicate::All))
    }

    fn parse_not(&mut self) -> Result<Predicate, ParseError> {
        let mut negations = 0;
        while self.current == Token::Bang || self.at_keyword("not") {
            self.descend()?;
            self.advance()?;
            negations += 1;
        }
        let mut p = self.parse_atom()?;
        self.depth -= negations;
        for _ in 0..negations {
            p = Predicate::Not(Box::new(p));
        }
        Ok(p)
    }

    fn parse_atom(&mut self) -> Result<Predicate, ParseError> {
        match &self.current {
            Token::LParen => {
                self.descend()?;
                self.advance()?;
                let inner = self.parse_or()?;
                self.expect(Token::RParen)?;
                self.depth -= 1;
                Ok(inner)
            }
            Token::Quoted(s) => {
                if s != "def" {
                    return Err(ParseError::UnknownIdentifier(s.clone()));
                }
                self.advance()?;
                Ok(Predicate::Never)
            }
            Token::Ident(name) => {
                let constant = match name.as_str() {
                    "def" | "false" => Some(Predicate::Never),
                    "true" => Some(Predicate::Always),
                    _ => None,
                };
                match constant {
                    Some(p) => {
                        self.advance()?;
                        Ok(p)
                    }
                    None => self.parse_comparison(),
                }
            }
            Token::Int(_) => self.parse_comparison(),
            _ => Err(self.unexpected()),
        }
    }

    /// `sum (cmp sum)+` or `sum in {..}`. Chains expand pairwise into a
    /// conjunction: `a < b < c` is `a < b and b < c`.
    fn parse_comparison(&mut self) -> Result<Predicate, ParseError> {
        let lhs = self.parse_sum()?;

        if self.at_keyword("in") {
            self.advance()?;
            let values = self.parse_value_set()?;
            return Ok(Predicate::In { expr: lhs, values });
        }

        let mut links = Vec::new();
        let mut left = lhs;
        while let Token::Cmp(op) = self.current {
            self.advance()?;
            let right = self.parse_sum()?;
            links.push(Predicate::Compare {
                lhs: left,
                op,
                rhs: right.clone(),
            });
            left = right;
        }

        if links.is_empty() {
            return Err(self.unexpected());
        }
        Ok(collapse(links, Predicate::All))
    }

    fn parse_value_set(&mut self) -> Result<SmallVec<[u32; 8]>, ParseError> {
        self.expect(Token::LBrace)?;
        let mut values = SmallVec::new();
        if self.current != Token::RBrace {
            values.push(self.parse_int()?);
            while self.current == Token::Comma {
                self.advance()?;
                values.push(self.parse_int()?);
            }
        }
        self.expect(Token::RBrace)?;
        Ok(values)
    }

    fn parse_int(&mut self) -> Result<u32, ParseError> {
        match self.current {
            Token::Int(n) => {
                self.advance()?;
                Ok(n)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_sum(&mut self) -> Result<CountExpr, ParseError> {
        let mut left = self.parse_term()?;
        let mut links = 0;
        while self.current == Token::Plus {
            self.descend()?;
            self.advance()?;
            links += 1;
            let right = self.parse_term()?;
            left = CountExpr::Sum(Box::new(left), Box::new(right));
        }
        self.depth -= links;
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<CountExpr, ParseError> {
        match &self.current {
            Token::Int(n) => {
                let n = *n;
                self.advance()?;
                Ok(CountExpr::Literal(n))
            }
            Token::Ident(name) if name == "total" => {
                self.advance()?;
                Ok(CountExpr::Total)
            }
            Token::Ident(name) if COUNTER_NAMES.contains(&name.as_str()) => {
                self.advance()?;
                self.expect(Token::LBracket)?;
                let k = self.parse_int()?;
                self.expect(Token::RBracket)?;
                Ok(CountExpr::Count(StateId(k)))
            }
            Token::Ident(name) => Err(ParseError::UnknownIdentifier(name.clone())),
            _ => Err(self.unexpected()),
        }
    }
}

/// A single term stands alone; several become `wrap(terms)`.
fn collapse(mut terms: Vec<Predicate>, wrap: fn(Vec<Predicate>) -> Predicate) -> Predicate {
    if terms.len() == 1 {
        terms.pop().unwrap_or_default()
    } else {
        wrap(terms)
    }
}

// ============================================================================
// Entry points
// ============================================================================

impl Predicate {
    /// Parse a predicate from its textual form.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Parser::new(input)?.parse_all()
    }
}

impl FromStr for Predicate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
