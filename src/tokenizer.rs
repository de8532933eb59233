//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! Scanning is table-driven: an ordered list of (kind, matcher) rules is
//! tried against the remaining text and the first rule that matches wins,
//! regardless of match length. The order is part of the lexical contract –
//! the `def` and `end` rules shadow the identifier rule only because they
//! are listed first.

use std::fmt;

use crate::error::LexError;

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  KeywordDef,
  KeywordEnd,
  Identifier,
  Integer,
  OpenParen,
  CloseParen,
  Comma,
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::KeywordDef => "`def` keyword",
      Self::KeywordEnd => "`end` keyword",
      Self::Identifier => "identifier",
      Self::Integer => "integer literal",
      Self::OpenParen => "`(`",
      Self::CloseParen => "`)`",
      Self::Comma => "`,`",
    };
    f.write_str(name)
  }
}

/// A matched lexical unit: its kind and the exact substring it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
}

impl Token {
  /// Convenience constructor to keep the scanning loop readable.
  pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
    Self {
      kind,
      text: text.into(),
    }
  }
}

/// A matcher returns the byte length of the token its rule recognises at the
/// start of the remaining text, or `None` if the rule does not apply there.
type Matcher = fn(&str) -> Option<usize>;

/// Lexical rules in priority order. First match wins, not longest match:
/// `defer` falls through to the identifier rule because the keyword rules
/// require a word edge after the keyword.
const RULES: [(TokenKind, Matcher); 7] = [
  (TokenKind::KeywordDef, match_def),
  (TokenKind::KeywordEnd, match_end),
  (TokenKind::Identifier, match_identifier),
  (TokenKind::Integer, match_integer),
  (TokenKind::OpenParen, match_open_paren),
  (TokenKind::CloseParen, match_close_paren),
  (TokenKind::Comma, match_comma),
];

/// Cursor over an immutable source buffer.
pub struct Tokenizer<'a> {
  source: &'a str,
  pos: usize,
  rules: &'static [(TokenKind, Matcher)],
}

impl<'a> Tokenizer<'a> {
  pub fn new(source: &'a str) -> Self {
    Self {
      source,
      pos: 0,
      rules: &RULES,
    }
  }

  /// Scan the whole input into a flat token vector.
  ///
  /// Whitespace is insignificant between tokens and is skipped after each
  /// one; it is never emitted as a token.
  pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    while self.pos < self.source.len() {
      tokens.push(self.next_token()?);
      self.skip_whitespace();
    }
    Ok(tokens)
  }

  fn next_token(&mut self) -> Result<Token, LexError> {
    let rest = &self.source[self.pos..];
    for (kind, matches) in self.rules {
      if let Some(len) = matches(rest) {
        let text = &rest[..len];
        self.pos += len;
        return Ok(Token::new(*kind, text));
      }
    }
    Err(LexError {
      position: self.pos,
      remaining: rest.to_string(),
    })
  }

  fn skip_whitespace(&mut self) {
    let bytes = self.source.as_bytes();
    while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
      self.pos += 1;
    }
  }
}

/// Lex the input into a flat vector of tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
  Tokenizer::new(source).tokenize()
}

/// Word characters bound keywords, identifiers, and integer literals.
fn is_word_byte(b: u8) -> bool {
  b.is_ascii_alphanumeric() || b == b'_'
}

fn match_keyword(rest: &str, keyword: &str) -> Option<usize> {
  if !rest.starts_with(keyword) {
    return None;
  }
  if rest.as_bytes().get(keyword.len()).copied().is_some_and(is_word_byte) {
    return None;
  }
  Some(keyword.len())
}

fn match_def(rest: &str) -> Option<usize> {
  match_keyword(rest, "def")
}

fn match_end(rest: &str) -> Option<usize> {
  match_keyword(rest, "end")
}

/// One or more ASCII letters, ending at a word edge. A trailing digit or
/// underscore disqualifies the whole run rather than shortening it.
fn match_identifier(rest: &str) -> Option<usize> {
  let bytes = rest.as_bytes();
  let len = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
  if len == 0 || bytes.get(len).copied().is_some_and(is_word_byte) {
    return None;
  }
  Some(len)
}

/// Exactly one decimal digit; multi-digit numbers are not part of the
/// language and fail to lex.
fn match_integer(rest: &str) -> Option<usize> {
  let bytes = rest.as_bytes();
  if !bytes.first().copied().is_some_and(|b| b.is_ascii_digit()) {
    return None;
  }
  if bytes.get(1).copied().is_some_and(is_word_byte) {
    return None;
  }
  Some(1)
}

fn match_open_paren(rest: &str) -> Option<usize> {
  rest.starts_with('(').then_some(1)
}

fn match_close_paren(rest: &str) -> Option<usize> {
  rest.starts_with(')').then_some(1)
}

fn match_comma(rest: &str) -> Option<usize> {
  rest.starts_with(',').then_some(1)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lex(input: &str) -> Vec<Token> {
    tokenize(input).expect("input should tokenize")
  }

  fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
  }

  #[test]
  fn tokenizes_a_function_definition() {
    let tokens = lex("def f(x, y) g(x) end");
    assert_eq!(
      kinds(&tokens),
      vec![
        TokenKind::KeywordDef,
        TokenKind::Identifier,
        TokenKind::OpenParen,
        TokenKind::Identifier,
        TokenKind::Comma,
        TokenKind::Identifier,
        TokenKind::CloseParen,
        TokenKind::Identifier,
        TokenKind::OpenParen,
        TokenKind::Identifier,
        TokenKind::CloseParen,
        TokenKind::KeywordEnd,
      ]
    );
  }

  #[test]
  fn token_texts_reproduce_the_input_without_whitespace() {
    let tokens = lex("def f(x, y) g(x) end");
    let joined: String = tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(joined, "deff(x,y)g(x)end");
  }

  #[test]
  fn keywords_require_a_word_edge() {
    assert_eq!(lex("define"), vec![Token::new(TokenKind::Identifier, "define")]);
    assert_eq!(lex("endless"), vec![Token::new(TokenKind::Identifier, "endless")]);
    assert_eq!(lex("end"), vec![Token::new(TokenKind::KeywordEnd, "end")]);
  }

  #[test]
  fn integer_literals_are_a_single_digit() {
    assert_eq!(lex("7"), vec![Token::new(TokenKind::Integer, "7")]);
    assert_eq!(
      tokenize("12"),
      Err(LexError {
        position: 0,
        remaining: "12".to_string(),
      })
    );
  }

  #[test]
  fn identifiers_must_end_at_a_word_edge() {
    assert_eq!(
      tokenize("abc1"),
      Err(LexError {
        position: 0,
        remaining: "abc1".to_string(),
      })
    );
  }

  #[test]
  fn unmatched_character_reports_position_and_remainder() {
    let error = tokenize("def f(x) % end").expect_err("% has no rule");
    assert_eq!(error.position, 9);
    assert!(error.remaining.starts_with('%'));
  }

  #[test]
  fn whitespace_is_skipped_only_after_a_token() {
    // Whitespace is stripped after each token, never before the first, so a
    // leading blank fails like any other unmatched text.
    assert_eq!(
      tokenize(" def"),
      Err(LexError {
        position: 0,
        remaining: " def".to_string(),
      })
    );
  }

  #[test]
  fn empty_input_yields_no_tokens() {
    assert_eq!(lex(""), Vec::new());
  }
}
