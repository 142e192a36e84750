//! Property-based tests for fractions and digit strings.

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_integer::Integer;
    use num_traits::{One, Signed};
    use proptest::prelude::*;

    use crate::algebra::{parse_radix, to_radix, Fraction};

    fn small_int() -> impl Strategy<Value = i64> {
        -10_000i64..10_000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
    }

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    fn is_canonical(f: &Fraction) -> bool {
        f.denom().is_positive() && f.numer().gcd(f.denom()).is_one()
    }

    // base together with a digit string valid in that base
    fn digits_in_base() -> impl Strategy<Value = (u32, String)> {
        (2u32..=36u32).prop_flat_map(|base| {
            (
                Just(base),
                prop::collection::vec(0..base, 1..48).prop_map(move |digits| {
                    digits
                        .into_iter()
                        .filter_map(|d| std::char::from_digit(d, base))
                        .collect::<String>()
                }),
            )
        })
    }

    proptest! {
        #[test]
        fn fraction_stays_canonical(a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int()) {
            let x = frac(a, b);
            let y = frac(c, d);
            prop_assert!(is_canonical(&x));
            prop_assert!(is_canonical(&(&x + &y)));
            prop_assert!(is_canonical(&(&x - &y)));
            prop_assert!(is_canonical(&(&x * &y)));
            prop_assert!(is_canonical(&-&x));
            if !y.is_zero() {
                prop_assert!(is_canonical(&(&x / &y).unwrap()));
            }
        }

        #[test]
        fn fraction_add_matches_cross_multiplication(a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int()) {
            let sum = &frac(a, b) + &frac(c, d);
            let numer = BigInt::from(a) * BigInt::from(d) + BigInt::from(c) * BigInt::from(b);
            let denom = BigInt::from(b) * BigInt::from(d);
            prop_assert_eq!(sum.numer() * &denom, numer.clone() * sum.denom());
            prop_assert_eq!(sum, Fraction::new(numer, denom).unwrap());
        }

        #[test]
        fn fraction_div_inverts_mul(a in small_int(), b in non_zero_int(), c in non_zero_int(), d in non_zero_int()) {
            let x = frac(a, b);
            let y = frac(c, d);
            prop_assert_eq!((&(&x * &y) / &y).unwrap(), x);
        }

        #[test]
        fn fraction_sub_self_is_zero(a in small_int(), b in non_zero_int()) {
            let x = frac(a, b);
            prop_assert!((&x - &x).is_zero());
        }

        #[test]
        fn radix_reencodes_without_leading_zeros((base, digits) in digits_in_base(), upper in any::<bool>()) {
            let input = if upper { digits.to_uppercase() } else { digits.clone() };
            let value = parse_radix(&input, base).unwrap();
            let expected = match digits.trim_start_matches('0') {
                "" => "0",
                rest => rest,
            };
            prop_assert_eq!(to_radix(&value, base).unwrap(), expected);
        }
    }
}
