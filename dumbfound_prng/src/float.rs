// Float adjacency: the neighbouring representable `f64` in a direction.
//
// `next_after` is the IEEE-754 `nextafter` primitive, implemented by stepping
// the raw bit pattern. For finite non-zero doubles, adjacent values differ by
// exactly one in their bit pattern: incrementing the pattern moves away from
// zero, decrementing moves towards it. The carry/borrow between the high and
// low 32-bit words is handled by doing the arithmetic on the whole `u64`.
//
// Used by `Random::number_between` to make the upper bound reachable and by
// `evil.rs` to walk a few ulps away from range bounds and zero.

/// The smallest positive subnormal double, `2^-1074` (`5e-324`).
pub const SMALLEST_SUBNORMAL: f64 = f64::from_bits(1);

/// Return the representable `f64` adjacent to `x` in the direction of
/// `direction`.
///
/// - NaN in either argument yields NaN.
/// - `x == direction` yields `x` unchanged.
/// - A zero `x` (of either sign) yields `±SMALLEST_SUBNORMAL`, signed like
///   the step direction.
/// - `f64::MAX` stepped upwards yields infinity; infinity stepped towards a
///   finite direction yields `f64::MAX`.
///
/// Matches C's `nextafter` bit for bit on every input except `x == direction`
/// with differently signed zeros, where `x` is returned instead of
/// `direction`.
pub fn next_after(x: f64, direction: f64) -> f64 {
    if x.is_nan() || direction.is_nan() {
        return f64::NAN;
    }
    if x == direction {
        return x;
    }
    if x == 0.0 {
        return if direction < x {
            -SMALLEST_SUBNORMAL
        } else {
            SMALLEST_SUBNORMAL
        };
    }

    let bits = x.to_bits();
    let upward = direction > x;
    let positive = x > 0.0;
    let stepped = if upward == positive {
        // Away from zero: grow the magnitude.
        bits + 1
    } else {
        bits - 1
    };
    f64::from_bits(stepped)
}

/// The next representable value above `x`.
pub fn next_up(x: f64) -> f64 {
    next_after(x, f64::INFINITY)
}

/// The next representable value below `x`.
pub fn next_down(x: f64) -> f64 {
    next_after(x, f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_to_smallest_subnormal() {
        assert_eq!(next_after(0.0, f64::INFINITY), 5e-324);
        assert_eq!(next_after(0.0, f64::NEG_INFINITY), -5e-324);
        assert_eq!(next_after(-0.0, f64::INFINITY), 5e-324);
        assert_eq!(SMALLEST_SUBNORMAL, 5e-324);
    }

    #[test]
    fn equal_arguments_return_x() {
        for x in [1.0, -1.0, 0.0, 1e300, -7.25, f64::INFINITY] {
            assert_eq!(next_after(x, x).to_bits(), x.to_bits());
        }
    }

    #[test]
    fn nan_propagates() {
        assert!(next_after(f64::NAN, 1.0).is_nan());
        assert!(next_after(1.0, f64::NAN).is_nan());
    }

    #[test]
    fn known_neighbours_of_one() {
        assert_eq!(next_up(1.0), 1.0 + f64::EPSILON);
        assert_eq!(next_down(1.0), 1.0 - f64::EPSILON / 2.0);
        assert_eq!(next_down(-1.0), -1.0 - f64::EPSILON);
        assert_eq!(next_up(-1.0), -1.0 + f64::EPSILON / 2.0);
    }

    #[test]
    fn crosses_word_boundary() {
        // Low 32 bits all set: stepping up must carry into the high word.
        let x = f64::from_bits(0x3FF0_0000_FFFF_FFFF);
        assert_eq!(next_up(x).to_bits(), 0x3FF0_0001_0000_0000);
        assert_eq!(next_down(next_up(x)).to_bits(), x.to_bits());
    }

    #[test]
    fn extremes() {
        assert_eq!(next_up(f64::MAX), f64::INFINITY);
        assert_eq!(next_down(f64::INFINITY), f64::MAX);
        assert_eq!(next_up(f64::NEG_INFINITY), f64::MIN);
        assert_eq!(next_down(SMALLEST_SUBNORMAL), 0.0);
        assert_eq!(next_up(-SMALLEST_SUBNORMAL), 0.0);
        assert_eq!(next_up(f64::MIN_POSITIVE), f64::from_bits(f64::MIN_POSITIVE.to_bits() + 1));
    }

    #[test]
    fn forward_then_backward_is_identity() {
        let samples = [
            1.0,
            -1.0,
            0.1,
            -0.3,
            123_456.789,
            1e-310,
            -1e-310,
            f64::MIN_POSITIVE,
            f64::MAX / 2.0,
            -f64::MAX / 2.0,
        ];
        for x in samples {
            assert_eq!(next_down(next_up(x)), x, "up/down from {x}");
            assert_eq!(next_up(next_down(x)), x, "down/up from {x}");
        }
    }

    #[test]
    fn matches_libm_nextafter() {
        let xs = [
            1.0,
            -1.0,
            0.5,
            -2.75,
            1e-310,
            -1e-310,
            f64::MAX,
            f64::MIN,
            f64::MIN_POSITIVE,
            3.0e100,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ];
        let directions = [f64::INFINITY, f64::NEG_INFINITY, 0.0, 2.0, -2.0, 1e200];
        for x in xs {
            for d in directions {
                if x == d {
                    continue;
                }
                assert_eq!(
                    next_after(x, d).to_bits(),
                    libm::nextafter(x, d).to_bits(),
                    "next_after({x}, {d})"
                );
            }
        }
    }

    #[test]
    fn direction_is_relative_to_x() {
        // Moving from 5 towards 3 goes down even though 3 is positive.
        assert!(next_after(5.0, 3.0) < 5.0);
        assert!(next_after(-5.0, -3.0) > -5.0);
    }
}
