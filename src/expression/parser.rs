//! Recursive-descent parser producing an [`Expr`] tree.
//!
//! Precedence, lowest to highest:
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary (('**' | '^') unary)?        right associative
//! primary := number | name | name '(' args ')' | '(' expr ')'
//! ```
//! so `-x**2` is `-(x**2)` and `2**-1` is `0.5`, as in Python.
//!
//! Both the parser's recursion and the height of the finished tree are
//! capped at `MAX_DEPTH`; evaluating and dropping the tree recurse too.

use super::builtins::{self, Builtin};
use super::lexer::{Spanned, Token};
use crate::root_finding::errors::EvaluationError;


/// The single free variable.
pub(crate) const VARIABLE: &str = "x";

/// Limit on nesting (signs, parentheses, calls, exponents) and on tree height.
const MAX_DEPTH: usize = 256;

const TOO_DEEP: &str = "expression nested too deeply";


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp { Add, Sub, Mul, Div, Rem, Pow }

#[derive(Debug, Clone)]
pub(crate) enum Expr {
    Number(f64),
    Variable,
    Neg(Box<Expr>),
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    Call(Builtin, Vec<Expr>),
}

/// A subtree and its height (a leaf is 1).
type Node = (Expr, usize);


pub(crate) struct Parser {
    tokens: Vec<Spanned>,
    pos:    usize,
    /// byte length of the source, reported for errors at end of input
    end:    usize,
    /// current `parse_unary` recursion depth
    depth:  usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Spanned>, end: usize) -> Self {
        Self { tokens, pos: 0, end, depth: 0 }
    }

    /// Parses the whole token stream; trailing tokens are an error.
    pub(crate) fn parse(mut self) -> Result<Expr, EvaluationError> {
        let (expr, _) = self.parse_expression()?;
        match self.tokens.get(self.pos) {
            None => Ok(expr),
            Some(t) => Err(EvaluationError::Syntax {
                position: t.position,
                message:  format!("unexpected {:?}", t.token),
            }),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn consume(&mut self) -> Option<Spanned> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn position(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |t| t.position)
    }

    fn syntax(&self, message: &str) -> EvaluationError {
        EvaluationError::Syntax { position: self.position(), message: message.to_string() }
    }

    fn expect(&mut self, token: Token, message: &str) -> Result<(), EvaluationError> {
        if self.peek() == Some(&token) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.syntax(message))
        }
    }

    /// Wraps `expr` as the parent of a subtree of height `child_height`.
    fn grow(&self, expr: Expr, child_height: usize) -> Result<Node, EvaluationError> {
        let height = child_height + 1;
        if height > MAX_DEPTH {
            return Err(self.syntax(TOO_DEEP));
        }
        Ok((expr, height))
    }

    fn binary(&self, (left, hl): Node, op: BinaryOp, (right, hr): Node) -> Result<Node, EvaluationError> {
        self.grow(Expr::Binary(Box::new(left), op, Box::new(right)), hl.max(hr))
    }

    fn parse_expression(&mut self) -> Result<Node, EvaluationError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.peek() {
                Some(Token::Plus)  => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_term()?;
            left = self.binary(left, op, right)?;
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Node, EvaluationError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.peek() {
                Some(Token::Star)    => BinaryOp::Mul,
                Some(Token::Slash)   => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Rem,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_unary()?;
            left = self.binary(left, op, right)?;
        }
        Ok(left)
    }

    /// Every recursive path (signs, exponents, parentheses, call arguments)
    /// re-enters here, so this is where recursion depth is counted.
    fn parse_unary(&mut self) -> Result<Node, EvaluationError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.syntax(TOO_DEEP));
        }
        self.depth += 1;
        let node = self.parse_signed();
        self.depth -= 1;
        node
    }

    fn parse_signed(&mut self) -> Result<Node, EvaluationError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                let (inner, height) = self.parse_unary()?;
                self.grow(Expr::Neg(Box::new(inner)), height)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Node, EvaluationError> {
        let base = self.parse_primary()?;

        if let Some(Token::Power) = self.peek() {
            self.pos += 1;
            let exponent = self.parse_unary()?;
            return self.binary(base, BinaryOp::Pow, exponent);
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Node, EvaluationError> {
        let position = self.position();
        match self.consume() {
            Some(Spanned { token: Token::Number(n), .. }) => Ok((Expr::Number(n), 1)),
            Some(Spanned { token: Token::Identifier(name), .. }) => {
                let name = name.strip_prefix("math.").unwrap_or(&name);
                if let Some(Token::LParen) = self.peek() {
                    self.pos += 1;
                    self.parse_call(name)
                } else if name == VARIABLE {
                    Ok((Expr::Variable, 1))
                } else if let Some(value) = builtins::constant(name) {
                    Ok((Expr::Number(value), 1))
                } else {
                    Err(EvaluationError::UnknownName { name: name.to_string() })
                }
            }
            Some(Spanned { token: Token::LParen, .. }) => {
                let node = self.parse_expression()?;
                self.expect(Token::RParen, "expected `)`")?;
                Ok(node)
            }
            Some(Spanned { token, .. }) => Err(EvaluationError::Syntax {
                position,
                message: format!("unexpected {token:?}"),
            }),
            None => Err(self.syntax("unexpected end of input")),
        }
    }

    /// Arguments of `name(...)`; the `(` is already consumed.
    fn parse_call(&mut self, name: &str) -> Result<Node, EvaluationError> {
        let builtin = builtins::function(name)
            .ok_or_else(|| EvaluationError::UnknownName { name: name.to_string() })?;

        let mut args   = Vec::new();
        let mut height = 0;
        if self.peek() != Some(&Token::RParen) {
            loop {
                let (arg, h) = self.parse_expression()?;
                args.push(arg);
                height = height.max(h);

                if let Some(Token::Comma) = self.peek() {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }
        self.expect(Token::RParen, "expected `)` after arguments")?;

        if let Some(expected) = builtin.arity_mismatch(args.len()) {
            return Err(EvaluationError::Arity {
                name: builtin.name().to_string(),
                expected,
                got: args.len(),
            });
        }

        self.grow(Expr::Call(builtin, args), height)
    }
}
