//! Rounding and parity rules for tooth counts
//!
//! Every rounding step here uses round-half-to-even, matching how the
//! quantities were computed when the catalog was built. Each product family
//! applies its own parity rule; callers pick the one that matches their
//! teeth arrangement and must not substitute one for another.

/// Rounds half-way cases to the even neighbour (2.5 -> 2, 3.5 -> 4).
pub fn round_half_even_to_int(x: f64) -> i64 {
    x.round_ties_even() as i64
}

/// Rounds to two decimals with half-even ties.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Nearest odd integer: round, then step toward `x` when the result is even.
pub fn nearest_odd(x: f64) -> i64 {
    let n = round_half_even_to_int(x);
    if n % 2 != 0 {
        return n;
    }
    if x > n as f64 {
        n + 1
    } else {
        n - 1
    }
}

/// Nearest even integer: round, then step toward `x` when the result is odd.
pub fn round_to_nearest_even(x: f64) -> i64 {
    let n = round_half_even_to_int(x);
    if n % 2 == 0 {
        return n;
    }
    if x - n as f64 >= 0.0 {
        n + 1
    } else {
        n - 1
    }
}

/// Bumps an even count up to the next odd number.
pub fn make_odd_up(n: i64) -> i64 {
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}

/// Drops an even count down to the previous odd number.
pub fn make_odd_down(n: i64) -> i64 {
    if n % 2 == 0 {
        n - 1
    } else {
        n
    }
}

/// Bumps an odd count up to the next even number.
pub fn make_even_up(n: i64) -> i64 {
    if n % 2 != 0 {
        n + 1
    } else {
        n
    }
}

/// Rounds a quantity up to the next half unit (1.2 -> 1.5, 1.5 -> 1.5).
pub fn ceil_half(x: f64) -> f64 {
    (x * 2.0).ceil() / 2.0
}

/// Rounds a quantity down to the previous half unit (1.7 -> 1.5).
pub fn floor_half(x: f64) -> f64 {
    (x * 2.0).floor() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_half_even_rounding() {
        assert_eq!(round_half_even_to_int(2.5), 2);
        assert_eq!(round_half_even_to_int(3.5), 4);
        assert_eq!(round_half_even_to_int(-2.5), -2);
        assert_eq!(round2(12.3456), 12.35);
    }

    #[test]
    fn test_nearest_odd_steps_toward_value() {
        assert_eq!(nearest_odd(7.0), 7);
        assert_eq!(nearest_odd(8.2), 9);
        assert_eq!(nearest_odd(7.8), 7);
        assert_eq!(nearest_odd(8.0), 7);
    }

    #[test]
    fn test_nearest_even_steps_toward_value() {
        assert_eq!(round_to_nearest_even(6.0), 6);
        assert_eq!(round_to_nearest_even(7.2), 8);
        assert_eq!(round_to_nearest_even(6.8), 6);
        assert_eq!(round_to_nearest_even(7.0), 8);
    }

    #[test]
    fn test_parity_bumps() {
        assert_eq!(make_odd_up(12), 13);
        assert_eq!(make_odd_up(13), 13);
        assert_eq!(make_odd_down(12), 11);
        assert_eq!(make_even_up(11), 12);
        assert_eq!(make_even_up(0), 0);
    }

    #[test]
    fn test_half_steps() {
        assert_eq!(ceil_half(1.2), 1.5);
        assert_eq!(ceil_half(1.5), 1.5);
        assert_eq!(ceil_half(1.51), 2.0);
        assert_eq!(floor_half(1.7), 1.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_nearest_odd_is_odd(x in 0.0..5000.0f64) {
            prop_assert_eq!(nearest_odd(x).rem_euclid(2), 1);
        }

        #[test]
        fn prop_nearest_even_is_even(x in 0.0..5000.0f64) {
            prop_assert_eq!(round_to_nearest_even(x).rem_euclid(2), 0);
        }

        #[test]
        fn prop_bumps_hold_parity(n in 0i64..10_000) {
            prop_assert_eq!(make_odd_up(n).rem_euclid(2), 1);
            prop_assert_eq!(make_odd_down(n).rem_euclid(2), 1);
            prop_assert_eq!(make_even_up(n).rem_euclid(2), 0);
            prop_assert!(make_odd_up(n) - n <= 1);
        }

        #[test]
        fn prop_ceil_half_never_below_input(x in 0.0..500.0f64) {
            let q = ceil_half(x);
            prop_assert!(q >= x && q - x < 0.5);
        }
    }
}
