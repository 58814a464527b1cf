// Example:
// let a = mat![1, 2, 3, 4; 5, 6, 7, 8; 9, 10, 11, 12];
// assert_eq!(a.dims(), (3, 4));
#[macro_export]
macro_rules! mat {
    [$( $( $x:expr ),* );*] => {{
        let rows: Vec<Vec<f64>> = vec![$( vec![$( $x as f64 ),*] ),*];
        $crate::Matrix::from_rows(rows)
    }}
}

// Relative floating point equality for tests: |left - right| <= tol * max(|left|, |right|, 1).
// Tolerance defaults to 1e-10.
#[macro_export]
macro_rules! assert_fp_eq {
    ($left:expr, $right:expr) => {{
        let (l, r) = ($left as f64, $right as f64);
        let scale = l.abs().max(r.abs()).max(1.0);
        if !((l - r).abs() <= 1e-10 * scale) {
            panic!("assertion failed: `(left ~= right)` (left: `{}`, right: `{}`)", l, r);
        }
    }};
    ($left:expr, $right:expr, $tol:expr) => {{
        let (l, r, tol) = ($left as f64, $right as f64, $tol as f64);
        let scale = l.abs().max(r.abs()).max(1.0);
        if !((l - r).abs() <= tol * scale) {
            panic!("assertion failed: `(left ~= right)` (left: `{}`, right: `{}`, tol: `{}`)",
                l, r, tol);
        }
    }};
}
