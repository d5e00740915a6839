#![deny(clippy::all)]

use clap::{App, Arg, ArgMatches};
use log::debug;
use thiserror::Error;

use geometry::triangle::{self, DEFAULT_TOLERANCE};
use geometry::{ParsePointError, Point, Position};

type Error = anyhow::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid point for --{0}")]
    InvalidPoint(&'static str, #[source] ParsePointError),

    #[error("Invalid shift: {0}")]
    InvalidShift(String),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),
}

/// Inputs to the demonstration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub first: Point,
    pub second: Point,
    /// New x coordinate for the copy of `first`.
    pub shift: Position,
    pub tolerance: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            first: Point::origin(),
            second: Point::new(0, 3),
            shift: 4,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Lines printed by a scenario run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl Scenario {
    /// Copy the first point, compare the copy, move it along x, then check
    /// the triangle and midpoint.
    pub fn run(&self) -> Report {
        let mut report = Report::default();

        let p1 = self.first;
        let p2 = self.second;
        let mut p3 = p1;

        if p1 == p3 {
            report.push(format!("Points {} and {} are equal", p1, p3));
        } else {
            report.push(format!("Points {} and {} are not equal", p1, p3));
        }

        p3.set_x(self.shift);

        if triangle::is_equilateral(&p1, &p2, &p3, self.tolerance) {
            report.push(format!(
                "Points {}, {} and {} represent a equilateral triangle",
                p1, p2, p3
            ));
        } else {
            report.push(format!(
                "Points {}, {} and {} don't represent a equilateral triangle",
                p1, p2, p3
            ));
        }

        let m1 = p1.middle(&p3);
        report.push(format!(
            "The middle point between {} and {} is: {}",
            p1, p3, m1
        ));
        report.push(String::new());

        report
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("Point Driver")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Exercise non-negative points")
        .arg(
            Arg::with_name("first")
                .long("first")
                .value_name("POINT")
                .takes_value(true)
                .default_value("(0,0)"),
        )
        .arg(
            Arg::with_name("second")
                .long("second")
                .value_name("POINT")
                .takes_value(true)
                .default_value("(0,3)"),
        )
        .arg(
            Arg::with_name("shift")
                .long("shift")
                .value_name("N")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("4"),
        )
        .arg(
            Arg::with_name("tolerance")
                .long("tolerance")
                .value_name("EPS")
                .takes_value(true)
                .default_value("0.0001"),
        )
}

fn point_arg(matches: &ArgMatches, name: &'static str) -> Result<Point, DriverError> {
    matches
        .value_of(name)
        .unwrap_or_default()
        .parse()
        .map_err(|e| DriverError::InvalidPoint(name, e))
}

pub fn scenario(matches: &ArgMatches) -> Result<Scenario, DriverError> {
    let shift = matches.value_of("shift").unwrap_or_default();
    let tolerance = matches.value_of("tolerance").unwrap_or_default();

    Ok(Scenario {
        first: point_arg(matches, "first")?,
        second: point_arg(matches, "second")?,
        shift: shift
            .parse()
            .map_err(|_| DriverError::InvalidShift(shift.to_string()))?,
        tolerance: tolerance
            .parse()
            .map_err(|_| DriverError::InvalidTolerance(tolerance.to_string()))?,
    })
}

pub fn driver() -> Result<(), Error> {
    let matches = app().get_matches();
    let scenario = scenario(&matches)?;
    debug!("Running {:?}", scenario);

    for line in scenario.run().lines() {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Scenario, DriverError> {
        let matches = app()
            .get_matches_from_safe(std::iter::once("point-driver").chain(args.iter().cloned()))
            .unwrap();
        scenario(&matches)
    }

    #[test]
    fn default_run() {
        let report = Scenario::default().run();
        assert_eq!(
            report.lines(),
            &[
                "Points (0,0) and (0,0) are equal".to_string(),
                "Points (0,0), (0,3) and (4,0) don't represent a equilateral triangle".to_string(),
                "The middle point between (0,0) and (4,0) is: (2,0)".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn distances() {
        let p1 = Point::origin();
        let p2 = Point::new(0, 3);
        let mut p3 = p1;
        p3.set_x(4);

        assert_eq!(p3, Point::new(4, 0));
        assert_eq!(p1.distance(&p2), 3.0);
        assert_eq!(p2.distance(&p3), 5.0);
        assert_eq!(p3.distance(&p1), 4.0);
        assert_eq!(p1.middle(&p3), Point::new(2, 0));
    }

    #[test]
    fn degenerate_run() {
        let scenario = Scenario {
            shift: 0,
            second: Point::origin(),
            ..Scenario::default()
        };
        let report = scenario.run();
        assert_eq!(
            report.lines()[1],
            "Points (0,0), (0,0) and (0,0) represent a equilateral triangle"
        );
    }

    #[test]
    fn rejected_shift() {
        let scenario = Scenario {
            first: Point::new(6, 1),
            shift: -1,
            ..Scenario::default()
        };
        let report = scenario.run();
        assert_eq!(
            report.lines()[2],
            "The middle point between (6,1) and (6,1) is: (6,1)"
        );
    }

    #[test]
    fn arguments() {
        assert_eq!(parse(&[]).unwrap(), Scenario::default());

        let scenario = parse(&["--first", "(1,2)", "--second", "3,4", "--shift", "9"]).unwrap();
        assert_eq!(scenario.first, Point::new(1, 2));
        assert_eq!(scenario.second, Point::new(3, 4));
        assert_eq!(scenario.shift, 9);

        assert!(matches!(
            parse(&["--first", "nope"]),
            Err(DriverError::InvalidPoint("first", _))
        ));
        assert!(matches!(
            parse(&["--shift", "four"]),
            Err(DriverError::InvalidShift(_))
        ));
        assert!(matches!(
            parse(&["--tolerance", "tiny"]),
            Err(DriverError::InvalidTolerance(_))
        ));
    }
}
