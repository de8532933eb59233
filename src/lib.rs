//! Crate root: wires together the translation pipeline.
//!
//! The stages are intentionally small and composable so they can be tested
//! independently:
//! - `tokenizer` performs lexical analysis and produces a flat token vector.
//! - `parser` owns all syntactic knowledge and returns one function-definition AST.
//! - `codegen` renders the parsed function as JavaScript-style source text.
//! - `error` centralises the failure types shared by the other modules.

pub mod codegen;
pub mod error;
pub mod parser;
pub mod tokenizer;

pub use error::{LexError, ParseError, TranspileError, TranspileResult, report};

/// Translate one function definition into the target notation.
pub fn transpile(source: &str) -> TranspileResult<String> {
  let tokens = tokenizer::tokenize(source)?;
  let function = parser::parse(&tokens)?;
  Ok(codegen::generate(&function))
}
