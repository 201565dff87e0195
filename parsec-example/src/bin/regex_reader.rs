//! Regular-expression syntax reader.
//!
//! Parses the command line arguments (joined by spaces), or a built-in
//! sample, and prints the resulting tree.
//!
//! Usage: `regex-reader [PATTERN...]`

use parsec_common::Position;
use parsec_example::{pretty, regex};
use parsec_framework::{run, ParseError, StringVessel, Vessel};
use std::process::ExitCode;

fn report(position: &Position, rest: &str) {
    println!("Position: {position}");
    println!("Rest: {rest:?}");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        regex::SAMPLE.to_string()
    } else {
        args.join(" ")
    };

    let mut vessel = StringVessel::new(&input)
        .with_spec(regex::spec())
        .with_name("pattern");
    println!("Parsing `{}`...", vessel.input());

    match run(&regex::regexp(), &mut vessel) {
        Ok(tree) => {
            println!("Tree: {}", pretty(&tree));
            ExitCode::SUCCESS
        }
        Err(ParseError::Incomplete {
            position,
            rest,
            partial,
        }) => {
            println!("Incomplete parse: {}", pretty(&partial));
            println!("Parse error.");
            report(&position, &rest);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            report(err.position(), vessel.input());
            ExitCode::FAILURE
        }
    }
}
