/// Bézout coefficients and gcd: `(x, y, d)` with `p*x + q*y = d = gcd(p, q)`.
///
/// Both inputs must be non-negative.
pub fn extended_gcd(p: i64, q: i64) -> (i64, i64, i64) {
    if p == 0 {
        return (0, 1, q);
    }

    let (x1, y1, d) = extended_gcd(q % p, p);
    (y1 - (q / p) * x1, x1, d)
}

/// One integer solution `(x, y)` of `a*x + b*y = c`, or `None` if `c` is not
/// a multiple of `gcd(|a|, |b|)`.
pub fn solve_linear(a: i64, b: i64, c: i64) -> Option<(i64, i64)> {
    let (mut x, mut y, g) = extended_gcd(a.abs(), b.abs());

    if g == 0 {
        // a = b = 0, so only c = 0 is solvable
        return (c == 0).then_some((0, 0));
    }

    if c % g != 0 {
        return None;
    }

    x *= c / g;
    y *= c / g;
    if a < 0 {
        x = -x;
    }
    if b < 0 {
        y = -y;
    }

    Some((x, y))
}
