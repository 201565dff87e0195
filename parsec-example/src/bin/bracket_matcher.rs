//! Bracket matcher.
//!
//! Checks that the brackets in the command line arguments (joined by
//! spaces), or in a built-in sample, are balanced and prints the nesting.
//!
//! Usage: `bracket-matcher [TEXT...]`

use parsec_example::{brackets, pretty};
use parsec_framework::{parse_str, ParseError};
use std::process::ExitCode;

const SAMPLE: &str = "fn main() { let v = [1, (2 /* two */), {3}]; }";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        SAMPLE.to_string()
    } else {
        args.join(" ")
    };

    let grammar = match brackets::grammar() {
        Ok(grammar) => grammar,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Matching `{input}`...");
    match parse_str(&grammar, brackets::spec(), &input) {
        Ok(tree) => {
            println!("Balanced, depth {}", brackets::max_depth(&tree));
            println!("Tree: {}", pretty(&tree));
            ExitCode::SUCCESS
        }
        Err(ParseError::Incomplete { position, rest, .. }) => {
            println!("Unbalanced at {position}: {rest:?}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
