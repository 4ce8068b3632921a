pub mod bezout;

use std::io::Write;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineError {
    #[error("modulus is not positive")]
    NonPositiveModulus,
    #[error("congruences have no common solution")]
    Inconsistent,
    #[error("value does not fit a 64-bit integer")]
    Overflow,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("missing test case count")]
    MissingCount,
    #[error("line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String },
    #[error("line {line}: expected 4 integers, found {found}")]
    TokenCount { line: usize, found: usize },
    #[error("expected {expected} test cases, found {found}")]
    MissingCases { expected: usize, found: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Smallest non-negative integer congruent to `a` mod `n` and to `b` mod `m`,
/// i.e. the canonical representative in `[0, n*m)`.
pub fn combine(a: i64, b: i64, n: i64, m: i64) -> Result<i64, CombineError> {
    if n <= 0 || m <= 0 {
        return Err(CombineError::NonPositiveModulus);
    }

    let c = b.checked_sub(a).ok_or(CombineError::Overflow)?;
    let (k, _) = bezout::solve_linear(n, m, c).ok_or(CombineError::Inconsistent)?;

    let period = n as i128 * m as i128;
    let candidate = k as i128 * n as i128 + a as i128;

    i64::try_from(candidate.rem_euclid(period)).map_err(|_| CombineError::Overflow)
}

/// Runs a whole batch: a count line followed by one `a b n m` line per case,
/// writing one result line per case to `out`.
///
/// Malformed input aborts the run; a case with no solution writes
/// `no solution` and the batch continues.
pub fn run<W: Write>(input: &str, out: &mut W) -> Result<(), RunError> {
    let mut lines = input.lines();

    let first = lines.next().ok_or(RunError::MissingCount)?.trim();
    let cases: usize = first.parse().map_err(|_| RunError::InvalidInteger {
        line: 1,
        token: first.to_string(),
    })?;

    for case in 1..=cases {
        let line = lines.next().ok_or(RunError::MissingCases {
            expected: cases,
            found: case - 1,
        })?;
        let [a, b, n, m] = parse_case(line, case + 1)?;

        match combine(a, b, n, m) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(e) => {
                log::warn!("case {case} ({a} {b} {n} {m}): {e}");
                writeln!(out, "no solution")?;
            }
        }
    }

    Ok(())
}

fn parse_case(line: &str, line_no: usize) -> Result<[i64; 4], RunError> {
    let mut values = [0i64; 4];
    let mut tokens = line.split_ascii_whitespace();

    for (i, slot) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or(RunError::TokenCount {
            line: line_no,
            found: i,
        })?;
        *slot = token.parse().map_err(|_| RunError::InvalidInteger {
            line: line_no,
            token: token.to_string(),
        })?;
    }

    let extra = tokens.count();
    if extra != 0 {
        return Err(RunError::TokenCount {
            line: line_no,
            found: 4 + extra,
        });
    }

    Ok(values)
}
