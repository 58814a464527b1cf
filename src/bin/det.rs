// Reads a matrix size followed by that many rows of entries from stdin and prints the
// determinant. Malformed tokens are skipped along with the rest of their line.

#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;
extern crate env_logger;
extern crate ragged_matrix;

use std::io;

use log::LevelFilter;

use ragged_matrix::{Determinant, Matrix};
use ragged_matrix::errors::*;
use ragged_matrix::scan::{self, Scanner};

fn init_logging() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("RAGGED_MATRIX_LOG", "warn"))
        .init();
}

fn run() -> Result<()> {
    init_logging();

    let stdin = io::stdin();
    let mut scanner = Scanner::new(stdin.lock());
    let m: Matrix<f64> = scan::read_matrix(&mut scanner)
        .chain_err(|| "could not read matrix from stdin")?;
    info!("computing determinant of {}x{} matrix", m.nrows(), m.ncols());

    println!("{}", m.determinant());
    Ok(())
}

quick_main!(run);
