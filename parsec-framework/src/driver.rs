use crate::error::ParseError;
use crate::output::Output;
use crate::parser::Parser;
use crate::spec::Spec;
use crate::string_vessel::StringVessel;
use crate::vessel::Vessel;
use std::collections::BTreeSet;

/// Runs `parser` once against `vessel` and requires it to consume all input.
///
/// The combinators themselves only say yes or no; this turns that answer
/// into a `Result`, using the vessel's failure record to say where and why
/// a failed parse stopped.
pub fn run<S: 'static>(
    parser: &Parser<S>,
    vessel: &mut dyn Vessel<S>,
) -> Result<Output, ParseError> {
    let out = parser.parse(vessel);

    if vessel.fuel_exhausted() {
        return Err(ParseError::FuelExhausted {
            position: vessel.position(),
        });
    }

    match out {
        None => {
            let (position, expected) = match vessel.failure() {
                Some(failure) => (failure.position, failure.expected),
                None => (vessel.position(), BTreeSet::new()),
            };
            log::debug!("parse failed at {position}");
            Err(ParseError::Unmatched { position, expected })
        }
        Some(partial) if !vessel.is_eof() => {
            let position = vessel.position();
            log::debug!("parse stopped early at {position}");
            Err(ParseError::Incomplete {
                position,
                rest: vessel.input().to_string(),
                partial,
            })
        }
        Some(out) => {
            log::debug!("parsed {} code points", vessel.offset());
            Ok(out)
        }
    }
}

/// Parses all of `input` under `spec` with a fresh [`StringVessel`].
pub fn parse_str<S: Clone + Default + 'static>(
    parser: &Parser<S>,
    spec: Spec<S>,
    input: &str,
) -> Result<Output, ParseError> {
    let mut vessel = StringVessel::new(input).with_spec(spec);
    run(parser, &mut vessel)
}
