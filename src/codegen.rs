//! Code generation: render the parsed AST as JavaScript-style source text.
//!
//! Rendering is a bottom-up tree walk with no semantic checks: an undefined
//! variable or a call to an unknown function is emitted as-is, and whatever
//! executes the output owns its meaning.

use crate::parser::{Expr, FunctionDef};

/// Render a function definition in the target notation.
pub fn generate(function: &FunctionDef) -> String {
  format!(
    "function {}({}) {{ return {} }}",
    function.name,
    function.parameters.join(","),
    generate_expr(&function.body),
  )
}

fn generate_expr(expr: &Expr) -> String {
  match expr {
    Expr::Integer { value } => value.to_string(),
    Expr::Variable { name } => name.clone(),
    Expr::Call { name, arguments } => {
      let rendered: Vec<String> = arguments.iter().map(generate_expr).collect();
      format!("{}({})", name, rendered.join(","))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_a_nested_call_body() {
    let function = FunctionDef {
      name: "f".to_string(),
      parameters: vec!["x".to_string()],
      body: Expr::call(
        "g",
        vec![
          Expr::call("h", vec![Expr::variable("x")]),
          Expr::integer(1),
        ],
      ),
    };
    assert_eq!(generate(&function), "function f(x) { return g(h(x),1) }");
  }

  #[test]
  fn renders_an_empty_parameter_list() {
    let function = FunctionDef {
      name: "f".to_string(),
      parameters: Vec::new(),
      body: Expr::integer(1),
    };
    assert_eq!(generate(&function), "function f() { return 1 }");
  }

  #[test]
  fn joins_parameters_with_commas_in_source_order() {
    let function = FunctionDef {
      name: "add".to_string(),
      parameters: vec!["a".to_string(), "b".to_string(), "c".to_string()],
      body: Expr::variable("a"),
    };
    assert_eq!(generate(&function), "function add(a,b,c) { return a }");
  }

  #[test]
  fn renders_a_call_with_no_arguments() {
    let function = FunctionDef {
      name: "f".to_string(),
      parameters: Vec::new(),
      body: Expr::call("g", Vec::new()),
    };
    assert_eq!(generate(&function), "function f() { return g() }");
  }
}
