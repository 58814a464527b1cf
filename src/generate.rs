//! Seeded random matrices, mostly for exercising the determinant.
//!
//! Every function takes an explicit seed and builds its own generator, so the same seed
//! always reproduces the same matrix.

use rand::{Rng, SeedableRng, StdRng};

use Matrix;

/// Value ranges used by `with_determinant`.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Upper-triangle entries are drawn from `[-max_value, max_value)`.
    pub max_value: f64,
    /// Row-combination coefficients are drawn from `[-max_row_coef, max_row_coef)`.
    pub max_row_coef: f64,
}
impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            max_value: 1e5,
            max_row_coef: 100.0,
        }
    }
}

// both halves, so 32-bit targets see the whole seed
fn seeded(seed: u64) -> StdRng {
    let seed: &[usize] = &[seed as usize, (seed >> 32) as usize];
    SeedableRng::from_seed(seed)
}

/// `nrows` x `ncols` matrix with entries drawn uniformly from `[low, high)`.
pub fn uniform(nrows: usize, ncols: usize, low: f64, high: f64, seed: u64) -> Matrix<f64> {
    assert!(low < high, "empty value range");
    let mut rng = seeded(seed);
    let v = (0..nrows * ncols).map(|_| rng.gen_range(low, high)).collect();
    Matrix::from_vec(v, nrows, ncols)
}

/// Random `size` x `size` matrix whose determinant is `determinant`.
///
/// Starts from a triangular matrix with `determinant` in the top-left corner and ones on
/// the rest of the diagonal, adds a random multiple of another row to every row, and
/// transposes. None of these steps change the determinant.
///
/// # Panics
/// Panics if `size` is 0 or a configured range is not positive.
pub fn with_determinant(size: usize, determinant: f64, seed: u64, config: &GeneratorConfig)
        -> Matrix<f64> {
    assert!(size > 0, "matrix size must be positive");
    assert!(config.max_value > 0.0 && config.max_row_coef > 0.0,
        "generator ranges must be positive");

    let mut rng = seeded(seed);
    let mut m = Matrix::eye(size);
    m[0][0] = determinant;

    for i in 0..size {
        for j in 0..i {
            m[j][i] = rng.gen_range(-config.max_value, config.max_value);
        }
    }

    if size > 1 {
        for dst in 0..size {
            let mut src = rng.gen_range(0, size);
            while src == dst {
                src = rng.gen_range(0, size);
            }
            let coef = rng.gen_range(-config.max_row_coef, config.max_row_coef);
            m.add_row_to_row(dst, src, coef);
        }
    }
    debug!("generated {}x{} matrix with determinant {} (seed {})", size, size, determinant, seed);

    m.transpose()
}
