//! Reading load files and writing schedules.
//!
//! - [`parse_loads`] / [`read_loads_file`] — `<id> <(x,y)> <(x,y)>` records after a header line
//! - [`write_schedules`] / [`write_json`] — one `[id,id,...]` line per route, or a JSON report

mod reader;
mod writer;

pub use reader::{parse_loads, parse_point_or, read_loads_file, ParsedInput, SkippedLine};
pub use writer::{write_json, write_schedules, OutputFormat};
