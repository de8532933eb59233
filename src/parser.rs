//! Recursive-descent parser producing a single function-definition AST.
//!
//! The grammar is LL(1): one function per nonterminal, driven by one-token
//! lookahead through a read-only cursor. Its only decision point is the
//! expression dispatch – an identifier followed by an open paren is a call,
//! a bare identifier is a variable reference.

use crate::error::ParseError;
use crate::tokenizer::{Token, TokenKind};

/// The sole root of the tree: one named function with a single expression
/// body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
  pub name: String,
  pub parameters: Vec<String>,
  pub body: Expr,
}

/// Expression tree produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  Integer { value: i64 },
  Variable { name: String },
  Call { name: String, arguments: Vec<Expr> },
}

impl Expr {
  pub fn integer(value: i64) -> Self {
    Self::Integer { value }
  }

  pub fn variable(name: impl Into<String>) -> Self {
    Self::Variable { name: name.into() }
  }

  pub fn call(name: impl Into<String>, arguments: Vec<Expr>) -> Self {
    Self::Call {
      name: name.into(),
      arguments,
    }
  }
}

/// Parse a function definition from the token sequence.
///
/// Tokens after the terminating `end` are left unconsumed; the grammar has
/// exactly one definition per input.
pub fn parse(tokens: &[Token]) -> Result<FunctionDef, ParseError> {
  let mut cursor = TokenCursor::new(tokens);
  parse_function_def(&mut cursor)
}

fn parse_function_def(cursor: &mut TokenCursor) -> Result<FunctionDef, ParseError> {
  cursor.consume(TokenKind::KeywordDef)?;
  let name = cursor.consume(TokenKind::Identifier)?.text.clone();
  let parameters = parse_parameters(cursor)?;
  let body = parse_expr(cursor)?;
  cursor.consume(TokenKind::KeywordEnd)?;

  Ok(FunctionDef {
    name,
    parameters,
    body,
  })
}

/// `'(' [ identifier (',' identifier)* ] ')'` – duplicate names are not
/// rejected, they land in the list once per occurrence.
fn parse_parameters(cursor: &mut TokenCursor) -> Result<Vec<String>, ParseError> {
  let mut parameters = Vec::new();
  cursor.consume(TokenKind::OpenParen)?;
  if cursor.peek(TokenKind::Identifier, 0) {
    parameters.push(cursor.consume(TokenKind::Identifier)?.text.clone());
    while cursor.peek(TokenKind::Comma, 0) {
      cursor.consume(TokenKind::Comma)?;
      parameters.push(cursor.consume(TokenKind::Identifier)?.text.clone());
    }
  }
  cursor.consume(TokenKind::CloseParen)?;

  Ok(parameters)
}

fn parse_expr(cursor: &mut TokenCursor) -> Result<Expr, ParseError> {
  if cursor.peek(TokenKind::Integer, 0) {
    parse_integer(cursor)
  } else if cursor.peek(TokenKind::Identifier, 0) && cursor.peek(TokenKind::OpenParen, 1) {
    parse_call(cursor)
  } else {
    parse_variable(cursor)
  }
}

fn parse_integer(cursor: &mut TokenCursor) -> Result<Expr, ParseError> {
  let token = cursor.consume(TokenKind::Integer)?;
  // `parse` accepts arbitrary token sequences, so an integer token whose
  // text is not numeric is reported as a mismatch instead of assumed valid.
  let value = token
    .text
    .parse::<i64>()
    .map_err(|_| ParseError::UnexpectedToken {
      expected: TokenKind::Integer,
      found: token.kind,
      text: token.text.clone(),
    })?;
  Ok(Expr::integer(value))
}

fn parse_variable(cursor: &mut TokenCursor) -> Result<Expr, ParseError> {
  let token = cursor.consume(TokenKind::Identifier)?;
  Ok(Expr::variable(token.text.clone()))
}

fn parse_call(cursor: &mut TokenCursor) -> Result<Expr, ParseError> {
  let name = cursor.consume(TokenKind::Identifier)?.text.clone();
  let arguments = parse_arguments(cursor)?;
  Ok(Expr::call(name, arguments))
}

/// `'(' [ Expression (',' Expression)* ] ')'` – an empty argument list is
/// valid.
fn parse_arguments(cursor: &mut TokenCursor) -> Result<Vec<Expr>, ParseError> {
  let mut arguments = Vec::new();
  cursor.consume(TokenKind::OpenParen)?;
  if !cursor.peek(TokenKind::CloseParen, 0) {
    arguments.push(parse_expr(cursor)?);
    while cursor.peek(TokenKind::Comma, 0) {
      cursor.consume(TokenKind::Comma)?;
      arguments.push(parse_expr(cursor)?);
    }
  }
  cursor.consume(TokenKind::CloseParen)?;

  Ok(arguments)
}

/// Read-only cursor over an immutable token slice.
struct TokenCursor<'a> {
  tokens: &'a [Token],
  pos: usize,
}

impl<'a> TokenCursor<'a> {
  fn new(tokens: &'a [Token]) -> Self {
    Self { tokens, pos: 0 }
  }

  /// Return the next token and advance, failing if its kind differs from
  /// the expected one or no token remains.
  fn consume(&mut self, expected: TokenKind) -> Result<&'a Token, ParseError> {
    match self.tokens.get(self.pos) {
      Some(token) if token.kind == expected => {
        self.pos += 1;
        Ok(token)
      }
      Some(token) => Err(ParseError::UnexpectedToken {
        expected,
        found: token.kind,
        text: token.text.clone(),
      }),
      None => Err(ParseError::UnexpectedEndOfInput { expected }),
    }
  }

  /// Non-consuming kind test; an offset past the end of the sequence is
  /// simply false.
  fn peek(&self, expected: TokenKind, offset: usize) -> bool {
    self
      .tokens
      .get(self.pos + offset)
      .is_some_and(|token| token.kind == expected)
  }
}
