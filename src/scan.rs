//! Whitespace-delimited token input.
//!
//! A token that does not parse as the requested type is dropped together with the rest
//! of its line, and scanning resumes on the next line. End of input is reported as
//! `Ok(None)` rather than as an error, so callers decide whether a short read is fatal.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use num::Float;

use errors::*;
use Matrix;

pub struct Scanner<R> {
    reader: R,
    // unread tokens of the current line
    tokens: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Scanner<R> {
        Scanner {
            reader: reader,
            tokens: VecDeque::new(),
        }
    }

    /// Next token that parses fully as `T`, or `None` at end of input.
    pub fn scan<T: FromStr>(&mut self) -> Result<Option<T>> {
        loop {
            let token = match self.tokens.pop_front() {
                Some(token) => token,
                None => {
                    if !self.next_line()? {
                        return Ok(None);
                    }
                    continue;
                }
            };
            match token.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    trace!("skipping malformed token {:?} and {} more on its line",
                        token, self.tokens.len());
                    self.tokens.clear();
                }
            }
        }
    }

    // Load the next line holding at least one token. Returns false at end of input.
    // Bytes that are not UTF-8 decode to U+FFFD, so they end up in a malformed token.
    fn next_line(&mut self) -> Result<bool> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(false);
            }
            let line = String::from_utf8_lossy(&buf);
            self.tokens.extend(line.split_whitespace().map(String::from));
            if !self.tokens.is_empty() {
                return Ok(true);
            }
        }
    }
}

/// Read a size `n` followed by `n * n` entries in row-major order.
pub fn read_matrix<T, R>(scanner: &mut Scanner<R>) -> Result<Matrix<T>>
        where T: Float + FromStr, R: BufRead {
    let n: usize = scanner.scan()?
        .ok_or_else(|| Error::from(ErrorKind::InputError("missing matrix size".to_string())))?;
    let count = n.checked_mul(n)
        .ok_or_else(|| Error::from(ErrorKind::InputError(format!("matrix size {} too large", n))))?;

    let mut elems = Vec::new();
    for found in 0..count {
        match scanner.scan()? {
            Some(value) => elems.push(value),
            None => {
                bail!(ErrorKind::InputError(
                    format!("expected {} matrix entries, found {}", count, found)));
            }
        }
    }
    debug!("read {}x{} matrix", n, n);
    Ok(Matrix::from_vec(elems, n, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_tokens() {
        let mut s = Scanner::new("1 2\n  3\t4 \n\n5".as_bytes());
        let mut got: Vec<i32> = Vec::new();
        while let Some(x) = s.scan().unwrap() {
            got.push(x);
        }
        assert_eq!(got, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_skip_malformed_line() {
        let mut s = Scanner::new("1 x 2 3\n4 5\nabc\n6".as_bytes());
        let mut got: Vec<i32> = Vec::new();
        while let Some(x) = s.scan().unwrap() {
            got.push(x);
        }
        // "x" drops "2 3"; "abc" drops nothing else
        assert_eq!(got, vec![1, 4, 5, 6]);
    }

    #[test]
    fn test_partial_token_is_malformed() {
        let mut s = Scanner::new("1.5e\n2.5".as_bytes());
        assert_eq!(s.scan::<f64>().unwrap(), Some(2.5));
    }

    #[test]
    fn test_end_of_input() {
        let mut s = Scanner::new("bad tokens only\n".as_bytes());
        assert_eq!(s.scan::<f64>().unwrap(), None);
        // still usable, and still at the end
        assert_eq!(s.scan::<f64>().unwrap(), None);

        let mut e = Scanner::new("".as_bytes());
        assert_eq!(e.scan::<usize>().unwrap(), None);
    }

    #[test]
    fn test_mixed_types() {
        let mut s = Scanner::new("3 -1.25".as_bytes());
        assert_eq!(s.scan::<usize>().unwrap(), Some(3));
        assert_eq!(s.scan::<f64>().unwrap(), Some(-1.25));
    }

    #[test]
    fn test_read_matrix() {
        let mut s = Scanner::new("2\n1 2\n3 4\n".as_bytes());
        let a: Matrix<f64> = read_matrix(&mut s).unwrap();
        assert_eq!(a, mat![1, 2; 3, 4]);
    }

    #[test]
    fn test_read_matrix_short() {
        let mut s = Scanner::new("3\n1 2 3\n4 5".as_bytes());
        match read_matrix::<f64, _>(&mut s) {
            Err(Error(ErrorKind::InputError(msg), _)) => {
                assert_eq!(msg, "expected 9 matrix entries, found 5");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_line() {
        let input: &[u8] = b"2\n1 2\n\xff\xfe junk\n3 4\n";
        let mut s = Scanner::new(input);
        let a: Matrix<f64> = read_matrix(&mut s).unwrap();
        assert_eq!(a, mat![1, 2; 3, 4]);

        // the valid prefix of the line still counts
        let mut t = Scanner::new(&b"7 \xff 8\n9"[..]);
        let mut got: Vec<i32> = Vec::new();
        while let Some(x) = t.scan().unwrap() {
            got.push(x);
        }
        assert_eq!(got, vec![7, 9]);
    }

    #[test]
    fn test_read_matrix_missing_size() {
        let mut s = Scanner::new("size\n".as_bytes());
        assert!(read_matrix::<f64, _>(&mut s).is_err());
    }
}
