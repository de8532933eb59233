use std::env;
use std::fs;
use std::process;

use defjs::{report, transpile};

fn main() {
  let args: Vec<String> = env::args().collect();
  if args.len() != 2 {
    let program = args.first().map(String::as_str).unwrap_or("defjs");
    eprintln!("usage: {program} <source-file>");
    process::exit(1);
  }

  let path = &args[1];
  let source = match fs::read_to_string(path) {
    Ok(source) => source,
    Err(err) => {
      eprintln!("{path}: {err}");
      process::exit(1);
    }
  };

  match transpile(&source) {
    Ok(output) => println!("{output}"),
    Err(err) => {
      eprintln!("{}", report(&source, &err));
      process::exit(1);
    }
  }
}
