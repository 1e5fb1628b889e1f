//! Schedule output.

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{Load, Schedule, Solution};

/// Output rendering for a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `[id1,id2,...]` line per route.
    #[default]
    Text,
    /// A single JSON document with routes and distances.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::invalid_input(format!("unknown output format: {other}"))),
        }
    }
}

#[derive(Serialize)]
struct RouteReport<'a> {
    loads: &'a Schedule,
    distance: f64,
}

#[derive(Serialize)]
struct SolutionReport<'a> {
    routes: Vec<RouteReport<'a>>,
    total_distance: f64,
    baseline_distance: f64,
}

/// Writes each schedule on its own line as `[id1,id2,...]`.
///
/// # Examples
///
/// ```
/// use load_routing::io::write_schedules;
/// use load_routing::models::Schedule;
///
/// let schedules = vec![
///     Schedule::new(vec!["1".into(), "4".into()]),
///     Schedule::new(vec!["2".into()]),
/// ];
/// let mut out = Vec::new();
/// write_schedules(&mut out, &schedules).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "[1,4]\n[2]\n");
/// ```
pub fn write_schedules<W: Write>(mut out: W, schedules: &[Schedule]) -> Result<()> {
    for schedule in schedules {
        writeln!(out, "{schedule}")?;
    }
    out.flush()?;
    Ok(())
}

/// Writes a JSON report of `solution`, one entry per route in route order.
pub fn write_json<W: Write>(mut out: W, solution: &Solution, loads: &[Load]) -> Result<()> {
    let schedules = solution.schedules(loads);
    let report = SolutionReport {
        routes: schedules
            .iter()
            .zip(solution.routes())
            .map(|(schedule, route)| RouteReport {
                loads: schedule,
                distance: route.total_distance(),
            })
            .collect(),
        total_distance: solution.total_distance(),
        baseline_distance: solution.baseline_distance(),
    };
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Route};
    use serde_json::Value;

    #[test]
    fn test_write_schedules_format() {
        let schedules = vec![
            Schedule::new(vec!["10".into(), "3".into(), "7".into()]),
            Schedule::new(vec!["1".into()]),
        ];
        let mut out = Vec::new();
        write_schedules(&mut out, &schedules).expect("write to vec");
        assert_eq!(String::from_utf8(out).expect("utf8"), "[10,3,7]\n[1]\n");
    }

    #[test]
    fn test_write_schedules_empty() {
        let mut out = Vec::new();
        write_schedules(&mut out, &[]).expect("write to vec");
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_json() {
        let loads = vec![
            Load::new("a", Point::ORIGIN, Point::ORIGIN),
            Load::new("b", Point::ORIGIN, Point::ORIGIN),
        ];
        let solution = Solution::new(
            vec![
                Route::new(vec![1], 4.0, Point::ORIGIN),
                Route::new(vec![0], 6.0, Point::ORIGIN),
            ],
            10.0,
        );
        let mut out = Vec::new();
        write_json(&mut out, &solution, &loads).expect("write to vec");

        let value: Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["routes"][0]["loads"], serde_json::json!(["b"]));
        assert_eq!(value["routes"][1]["distance"], 6.0);
        assert_eq!(value["total_distance"], 10.0);
        assert_eq!(value["baseline_distance"], 10.0);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().expect("valid"), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().expect("valid"), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
