use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{arg, value_parser, Arg, ArgMatches, Command};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use load_routing::config::SavingsConfig;
use load_routing::constructive::clarke_wright_savings;
use load_routing::generator::{random_loads, write_instance};
use load_routing::io::{read_loads_file, write_json, write_schedules, OutputFormat};
use load_routing::models::Point;

fn cli() -> Command {
    Command::new("load-router")
        .about("Routes pickup-and-dropoff loads with the Clarke-Wright savings heuristic")
        .arg_required_else_help(true)
        .arg(arg!(-v --verbose "Log every merge decision to stderr").global(true))
        .subcommand(
            Command::new("solve")
                .about("Builds routes for a load file and prints one schedule per line")
                .arg(
                    arg!(<INPUT> "Load file: a header line, then `<id> (x,y) (x,y)` records")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("max-distance")
                        .long("max-distance")
                        .value_name("DISTANCE")
                        .help("Maximum round-trip distance of a route [default: 720]")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    arg!(--depot [DEPOT] "Depot location as x,y [default: 0,0]")
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "JSON config file; other flags override it")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--format [FORMAT] "Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Writes a random load file")
                .arg(arg!(<COUNT> "Number of loads").value_parser(value_parser!(usize)))
                .arg(
                    arg!(--seed [SEED] "Random seed")
                        .value_parser(value_parser!(u64))
                        .default_value("0"),
                )
                .arg(
                    arg!(--extent [EXTENT] "Coordinates are drawn from [-extent, extent]")
                        .value_parser(value_parser!(f64))
                        .default_value("200"),
                )
                .arg(
                    arg!(--output [OUTPUT] "Output file, stdout if omitted")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(sub_m),
        Some(("generate", sub_m)) => generate(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

const VERBOSE_FILTER: &str = "load_routing=debug,load_router=info";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn solve(sub_m: &ArgMatches) -> Result<()> {
    let input = sub_m
        .get_one::<PathBuf>("INPUT")
        .ok_or_else(|| anyhow!("missing input file"))?;

    let mut config = match sub_m.get_one::<PathBuf>("config") {
        Some(path) => SavingsConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SavingsConfig::default(),
    };
    if let Some(&max) = sub_m.get_one::<f64>("max-distance") {
        config = config.with_max_distance(max);
    }
    if let Some(depot) = sub_m.get_one::<String>("depot") {
        let depot: Point = depot
            .parse()
            .with_context(|| format!("invalid depot {depot:?}"))?;
        config = config.with_depot(depot);
    }
    config.validate()?;

    let format: OutputFormat = sub_m
        .get_one::<String>("format")
        .map_or("text", String::as_str)
        .parse()?;

    let parsed = read_loads_file(input, config.depot())
        .with_context(|| format!("failed to read {}", input.display()))?;
    if !parsed.skipped.is_empty() {
        info!(skipped = parsed.skipped.len(), "ignored malformed lines");
    }

    let solution = clarke_wright_savings(&parsed.loads, &config);

    let out = BufWriter::new(io::stdout().lock());
    match format {
        OutputFormat::Text => write_schedules(out, &solution.schedules(&parsed.loads))?,
        OutputFormat::Json => write_json(out, &solution, &parsed.loads)?,
    }
    Ok(())
}

fn generate(sub_m: &ArgMatches) -> Result<()> {
    let count = *sub_m
        .get_one::<usize>("COUNT")
        .ok_or_else(|| anyhow!("missing load count"))?;
    let seed = sub_m.get_one::<u64>("seed").copied().unwrap_or_default();
    let extent = sub_m.get_one::<f64>("extent").copied().unwrap_or(200.0);

    let loads = random_loads(count, extent, seed)?;

    let out: Box<dyn Write> = match sub_m.get_one::<PathBuf>("output") {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_instance(out, &loads)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_verbose_filter_covers_binary_events() {
        let filter = VERBOSE_FILTER.parse::<EnvFilter>().expect("valid directives");
        let directives = filter.to_string();
        assert!(directives.contains("load_routing=debug"));
        assert!(directives.contains("load_router=info"));
    }

    #[test]
    fn test_solve_args() {
        let matches = cli()
            .try_get_matches_from([
                "load-router", "solve", "loads.txt", "--depot", "-5,3", "-v",
            ])
            .expect("valid args");
        assert!(matches.get_flag("verbose"));
        let (name, sub_m) = matches.subcommand().expect("subcommand");
        assert_eq!(name, "solve");
        assert_eq!(
            sub_m.get_one::<String>("depot").map(String::as_str),
            Some("-5,3")
        );
        assert_eq!(
            sub_m.get_one::<String>("format").map(String::as_str),
            Some("text")
        );
    }
}
