//! Failure types shared across the translation pipeline.
//!
//! Each stage reports its own structured error and the crate-level
//! `TranspileError` sums them transparently, so the pipeline seams convert
//! with `?`. Command-line rendering lives here too, next to the payloads it
//! formats.

use snafu::Snafu;

use crate::tokenizer::TokenKind;

pub type TranspileResult<T> = Result<T, TranspileError>;

/// No lexical rule matched the input at the cursor.
///
/// `position` is a byte offset into the source text; `remaining` is the
/// unconsumed text starting there.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("no lexical rule matches the input at byte {position}: {remaining:?}"))]
pub struct LexError {
  pub position: usize,
  pub remaining: String,
}

/// A token of unexpected kind was encountered, or the token sequence ended
/// where a token was required.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ParseError {
  #[snafu(display("expected {expected}, but got {found} \"{text}\""))]
  UnexpectedToken {
    expected: TokenKind,
    found: TokenKind,
    text: String,
  },

  #[snafu(display("expected {expected}, but reached end of input"))]
  UnexpectedEndOfInput { expected: TokenKind },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum TranspileError {
  #[snafu(transparent)]
  Lex { source: LexError },

  #[snafu(transparent)]
  Parse { source: ParseError },
}

/// Format a failure for the command line.
///
/// Lex errors quote the offending line and point at the failing column with
/// a caret. Parse errors have no position to point at (tokens carry no
/// spans) and render as their display text.
pub fn report(source: &str, error: &TranspileError) -> String {
  match error {
    TranspileError::Lex { source: lex } => {
      let position = lex.position.min(source.len());
      let line_start = source[..position].rfind('\n').map_or(0, |i| i + 1);
      let line_end = source[position..]
        .find('\n')
        .map_or(source.len(), |i| position + i);
      let line = &source[line_start..line_end];
      let column = source[line_start..position].chars().count();
      let marker = format!("{}^", " ".repeat(column + 1)); // account for opening quote
      format!("'{line}'\n{marker} {lex}")
    }
    TranspileError::Parse { source: parse } => parse.to_string(),
  }
}
