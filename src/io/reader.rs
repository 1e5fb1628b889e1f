//! Load file parser.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::models::{Load, Point};

/// A record line that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_number: usize,
    /// The trimmed line.
    pub content: String,
    /// Number of whitespace-separated fields found.
    pub fields: usize,
}

/// Loads read from an input, plus the lines that could not be used.
#[derive(Debug, Clone, Default)]
pub struct ParsedInput {
    pub loads: Vec<Load>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses a coordinate, substituting `fallback` if it is malformed.
///
/// The substitution is silent. A load whose coordinates fall back to the
/// depot looks like a legitimate zero-length trip to the solver.
pub fn parse_point_or(s: &str, fallback: Point) -> Point {
    s.parse().unwrap_or(fallback)
}

/// Parses a load file.
///
/// The first line is a header and is ignored. Each following non-blank
/// line must hold exactly three whitespace-separated fields:
/// `<id> <pickup> <dropoff>`, with coordinates written `(x,y)`. Lines with
/// any other field count are logged and skipped. A malformed coordinate is
/// replaced by `fallback` without any report.
///
/// Lines are not required to be UTF-8: the header is never decoded, and
/// invalid bytes in a record are replaced with `U+FFFD`. Only read
/// failures are errors.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use load_routing::io::parse_loads;
/// use load_routing::models::Point;
///
/// let input = "loadNumber pickup dropoff\n1 (-50.1,80.0) (90.1,12.2)\n";
/// let parsed = parse_loads(Cursor::new(input), Point::ORIGIN).unwrap();
/// assert_eq!(parsed.loads.len(), 1);
/// assert_eq!(parsed.loads[0].pickup(), Point::new(-50.1, 80.0));
/// ```
pub fn parse_loads<R: BufRead>(reader: R, fallback: Point) -> Result<ParsedInput> {
    let mut parsed = ParsedInput::default();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        if idx == 0 {
            continue;
        }

        let line = String::from_utf8_lossy(&raw);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            warn!(
                line_number = idx + 1,
                fields = fields.len(),
                "invalid line: {}",
                line
            );
            parsed.skipped.push(SkippedLine {
                line_number: idx + 1,
                content: line.to_string(),
                fields: fields.len(),
            });
            continue;
        }

        parsed.loads.push(Load::new(
            fields[0],
            parse_point_or(fields[1], fallback),
            parse_point_or(fields[2], fallback),
        ));
    }

    Ok(parsed)
}

/// Opens and parses a load file. See [`parse_loads`].
pub fn read_loads_file(path: impl AsRef<Path>, fallback: Point) -> Result<ParsedInput> {
    let file = File::open(path)?;
    parse_loads(BufReader::new(file), fallback)
}
