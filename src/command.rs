//! Textual command adapter.
//!
//! Translates one line of the session grammar — `Name(arg, arg, ...)`
//! with integer arguments — into a validated [`Command`] for the engine.
//! Malformed lines are reported per line and never abort the stream; the
//! engine itself never sees text.

use thiserror::Error;

use crate::models::{AirlineId, FlightId, Time};

/// A parsed engine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `Initialize(runwayCount)`
    Initialize { runways: i64 },
    /// `SubmitFlight(flightID, airlineID, submitTime, priority, duration)`
    SubmitFlight {
        flight: FlightId,
        airline: AirlineId,
        submitted: Time,
        priority: i64,
        duration: i64,
    },
    /// `CancelFlight(flightID, currentTime)`
    CancelFlight { flight: FlightId, at: Time },
    /// `Reprioritize(flightID, currentTime, newPriority)`
    Reprioritize {
        flight: FlightId,
        at: Time,
        priority: i64,
    },
    /// `AddRunways(count, currentTime)`
    AddRunways { count: i64, at: Time },
    /// `GroundHold(airlineLow, airlineHigh, currentTime)`
    GroundHold {
        low: AirlineId,
        high: AirlineId,
        at: Time,
    },
    /// `Tick(currentTime)`
    Tick { at: Time },
    /// `PrintActive()`
    PrintActive,
    /// `PrintSchedule(t1, t2)`
    PrintSchedule { from: Time, to: Time },
    /// `Quit()`
    Quit,
}

/// Failure to turn a line into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line has no opening parenthesis.
    #[error("missing '(' in command")]
    MissingOpenParen,
    /// The line has no closing parenthesis.
    #[error("missing ')' in command")]
    MissingCloseParen,
    /// An argument is not a valid integer.
    #[error("invalid integer argument '{0}'")]
    InvalidArgument(String),
    /// The command name exists but the argument count is wrong.
    #[error("{name} expects {expected} arguments, got {got}")]
    WrongArity {
        name: String,
        expected: usize,
        got: usize,
    },
    /// The command name is not recognized.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// Parses one line of the session grammar.
///
/// Leading/trailing whitespace is ignored; arguments may carry spaces
/// around the commas. The caller filters blank lines.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let open = line.find('(').ok_or(ParseError::MissingOpenParen)?;
    let name = line[..open].trim();
    let rest = &line[open + 1..];
    let close = rest.rfind(')').ok_or(ParseError::MissingCloseParen)?;

    let args_str = rest[..close].trim();
    let args: Vec<i64> = if args_str.is_empty() {
        Vec::new()
    } else {
        args_str
            .split(',')
            .map(|raw| {
                let raw = raw.trim();
                raw.parse::<i64>()
                    .map_err(|_| ParseError::InvalidArgument(raw.to_string()))
            })
            .collect::<Result<_, _>>()?
    };

    let arity = |expected: usize| -> Result<(), ParseError> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ParseError::WrongArity {
                name: name.to_string(),
                expected,
                got: args.len(),
            })
        }
    };

    match name {
        "Initialize" => {
            arity(1)?;
            Ok(Command::Initialize { runways: args[0] })
        }
        "SubmitFlight" => {
            arity(5)?;
            Ok(Command::SubmitFlight {
                flight: args[0],
                airline: args[1],
                submitted: args[2],
                priority: args[3],
                duration: args[4],
            })
        }
        "CancelFlight" => {
            arity(2)?;
            Ok(Command::CancelFlight {
                flight: args[0],
                at: args[1],
            })
        }
        "Reprioritize" => {
            arity(3)?;
            Ok(Command::Reprioritize {
                flight: args[0],
                at: args[1],
                priority: args[2],
            })
        }
        "AddRunways" => {
            arity(2)?;
            Ok(Command::AddRunways {
                count: args[0],
                at: args[1],
            })
        }
        "GroundHold" => {
            arity(3)?;
            Ok(Command::GroundHold {
                low: args[0],
                high: args[1],
                at: args[2],
            })
        }
        "Tick" => {
            arity(1)?;
            Ok(Command::Tick { at: args[0] })
        }
        "PrintActive" => {
            arity(0)?;
            Ok(Command::PrintActive)
        }
        "PrintSchedule" => {
            arity(2)?;
            Ok(Command::PrintSchedule {
                from: args[0],
                to: args[1],
            })
        }
        "Quit" => {
            arity(0)?;
            Ok(Command::Quit)
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
