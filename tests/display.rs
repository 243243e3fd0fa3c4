use expect_test::{expect, Expect};
use fractions::{Product, Rational};

fn frac(numerator: i64, denominator: i64) -> Rational {
    Rational::new(numerator, denominator).unwrap()
}

fn check(value: impl std::fmt::Display, expected: &Expect) {
    expected.assert_eq(&value.to_string());
}

#[test]
fn raw_fields() {
    check(frac(1, 2), &expect!["1/2"]);
    check(frac(3, 6), &expect!["3/6"]);
    check(frac(-1, 2), &expect!["-1/2"]);
    check(frac(1, -2), &expect!["1/-2"]);
    check(frac(-1, -2), &expect!["-1/-2"]);
}

#[test]
fn zero_numerator() {
    check(frac(0, 5), &expect!["0"]);
    check(frac(0, -5), &expect!["0"]);
    check(frac(0, i64::MIN), &expect!["0"]);
}

#[test]
fn arithmetic_results_are_not_reduced() {
    check(frac(1, 2).add(frac(1, 2)), &expect!["2/2"]);
    check(frac(1, 2).add(frac(1, 3)), &expect!["5/6"]);
    check(frac(1, 4).add(frac(1, 4)), &expect!["2/4"]);
    check(frac(1, 2).subtract(frac(1, 2)), &expect!["0"]);
    check(frac(1, 2).subtract(frac(1, 3)), &expect!["1/6"]);
    check(frac(2, 3).subtract(frac(1, -6)), &expect!["-5/-6"]);
    check(frac(3, 6).simplify(), &expect!["1/2"]);
    check(frac(2, -4).simplify(), &expect!["1/-2"]);
}

#[test]
fn products() {
    check(frac(1, 2).multiply(frac(2, 4)), &expect!["2/8"]);
    check(frac(0, 2).multiply(frac(2, 4)), &expect!["0"]);
    check(Product::Integer(0).into_rational(), &expect!["0"]);
}

#[test]
fn debug_matches_display() {
    for r in [frac(0, 3), frac(1, 2), frac(-7, -14), frac(5, -1)] {
        assert_eq!(format!("{r:?}"), r.to_string());
    }
    expect![["Rational(1/6)"]].assert_eq(&format!("{:?}", frac(1, 2).multiply(frac(1, 3))));
    expect![["Integer(0)"]].assert_eq(&format!("{:?}", frac(0, 2).multiply(frac(1, 3))));
}
