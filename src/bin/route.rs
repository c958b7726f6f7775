use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use route_planner::{AStar, PathPlannerError, Route, datasets};


/// Find the shortest road route between two French cities
#[derive(Debug, Parser)]
#[command(name = "route", version)]
struct Args {
    /// City to start from, prompted for when omitted
    start: Option<String>,
    /// City to reach, prompted for when omitted
    goal: Option<String>,
}


/// Process exit status for each search outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Found = 0,
    UnknownCity = 1,
    Failure = 2, // map or input could not be read
    NoPath = 3,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome as u8)
    }
}

fn outcome(result: &Result<Option<Route>, PathPlannerError>) -> Outcome {
    match result {
        Ok(Some(_)) => Outcome::Found,
        Ok(None) => Outcome::NoPath,
        Err(PathPlannerError::UnknownNode(_)) => Outcome::UnknownCity,
        Err(PathPlannerError::Graph(_)) => Outcome::Failure,
    }
}


/// Read one trimmed line after printing a prompt
fn prompt(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
    }
    Ok(line.trim().to_string())
}

fn cities(args: Args) -> io::Result<(String, String)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let start = match args.start {
        Some(start) => start,
        None => prompt(&mut input, &mut output, "Enter the start city: ")?,
    };
    let goal = match args.goal {
        Some(goal) => goal,
        None => prompt(&mut input, &mut output, "Enter the end city: ")?,
    };
    Ok((start, goal))
}


fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let (start, goal) = match cities(args) {
        Ok(cities) => cities,
        Err(e) => {
            error!("reading cities: {e}");
            return Outcome::Failure.into();
        }
    };

    let result = datasets::france()
        .map_err(PathPlannerError::from)
        .and_then(|graph| AStar{}.search(&graph, &start, &goal));
    debug!("{start} -> {goal}: {result:?}");

    match &result {
        Ok(Some(route)) => println!("Path found: {} (cost {})", route.path.join(" -> "), route.cost),
        Ok(None) => println!("No path found"),
        Err(PathPlannerError::UnknownNode(_)) => println!("Unknown city"),
        Err(e) => println!("Error reading map: {e}"),
    }

    outcome(&result).into()
}
