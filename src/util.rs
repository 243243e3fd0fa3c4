/// Greatest common divisor by Euclid's algorithm.
///
/// The result is non-negative and `gcd(0, 0) == 0`. It is widened to `i128`
/// because `gcd(i64::MIN, 0)` does not fit in `i64`.
pub(crate) fn gcd(a: i64, b: i64) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        (a, b) = (b, a % b);
    }
    i128::from(a)
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(18, 12), 6);
    assert_eq!(gcd(5, 2), 1);
    assert_eq!(gcd(-4, 6), 2);
    assert_eq!(gcd(4, -6), 2);
    assert_eq!(gcd(0, -7), 7);
    assert_eq!(gcd(0, 0), 0);
}

#[test]
fn test_gcd_extremes() {
    assert_eq!(gcd(i64::MIN, 0), 1_i128 << 63);
    assert_eq!(gcd(i64::MIN, i64::MIN), 1_i128 << 63);
    assert_eq!(gcd(i64::MIN, 3), 1);
    assert_eq!(gcd(i64::MAX, i64::MAX), i128::from(i64::MAX));
}
