// Prints a random square matrix with a prescribed determinant, in the format `det` reads:
// the size on the first line, then one row per line.

#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;
extern crate clap;
extern crate env_logger;
extern crate ragged_matrix;

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;

use ragged_matrix::errors::*;
use ragged_matrix::generate::{self, GeneratorConfig};

fn init_logging() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("RAGGED_MATRIX_LOG", "warn"))
        .init();
}

fn cli() -> Command {
    Command::new("gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print a random square matrix with the given determinant")
        .arg(
            Arg::new("size")
                .help("Number of rows and columns")
                .required(true)
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("determinant")
                .help("Determinant of the generated matrix")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Random seed; taken from the clock when omitted")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("max_value")
                .long("max-value")
                .help("Bound on the magnitude of the random triangle entries")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("max_coef")
                .long("max-coef")
                .help("Bound on the magnitude of the row-combination coefficients")
                .value_parser(clap::value_parser!(f64)),
        )
}

fn config_from(matches: &ArgMatches) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::default();
    if let Some(&v) = matches.get_one::<f64>("max_value") {
        config.max_value = v;
    }
    if let Some(&c) = matches.get_one::<f64>("max_coef") {
        config.max_row_coef = c;
    }
    if !(config.max_value > 0.0 && config.max_row_coef > 0.0) {
        bail!("--max-value and --max-coef must be positive");
    }
    Ok(config)
}

fn clock_seed() -> Result<u64> {
    let since = SystemTime::now().duration_since(UNIX_EPOCH)
        .chain_err(|| "system clock is before the unix epoch")?;
    Ok(since.as_secs() ^ since.subsec_nanos() as u64)
}

fn run() -> Result<()> {
    init_logging();

    let matches = cli().get_matches();
    let size = matches.get_one::<usize>("size").cloned().ok_or("missing size")?;
    let determinant = matches.get_one::<f64>("determinant").cloned()
        .ok_or("missing determinant")?;
    if size == 0 {
        bail!("size must be positive");
    }
    let config = config_from(&matches)?;
    let seed = match matches.get_one::<u64>("seed") {
        Some(&seed) => seed,
        None => clock_seed()?,
    };
    info!("seed {}, {:?}", seed, config);

    let m = generate::with_determinant(size, determinant, seed, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", size)?;
    for row in m.rows() {
        let line: Vec<String> = row.iter().map(|x| x.to_string()).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

quick_main!(run);
