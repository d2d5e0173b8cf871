// Evil numbers: draws biased towards the values that break numeric code.
//
// A uniform draw almost never lands exactly on a bound, one ulp inside a
// bound, or on negative zero. `random_evil_number` picks one of several
// strategies by weight so that these cases turn up regularly:
//
//   weight  strategy
//   ------  -----------------------------------------------------------
//        1  exactly `min`
//        1  exactly `max`
//       10  1-10 adjacent floats above `min` (stops at `max`)
//       10  1-10 adjacent floats below `max` (stops at `min`)
//       20  uniform over `[min, max]`
//        5  near zero, only offered when `min <= 0 <= max`
//
// The near-zero strategy picks uniformly between `+0.0`, `-0.0`, a walk below
// zero and a walk above zero. Every walk is clamped to `[min, max]`, so a
// range such as `[0, 1]` never yields a negative subnormal.

use crate::float::{next_down, next_up};
use crate::{Random, Weights};

const STRATEGIES: Weights<'static> = Weights::from_static(&[1, 1, 10, 10, 20]);
const STRATEGIES_WITH_ZERO: Weights<'static> = Weights::from_static(&[1, 1, 10, 10, 20, 5]);

/// Generate a number in `[min, max]`, biased towards boundary conditions.
///
/// `min == max` returns `min` without consuming any draws.
/// Panics unless `min <= max`.
pub fn random_evil_number(random: &mut Random, min: f64, max: f64) -> f64 {
    assert!(
        min <= max,
        "random_evil_number: min must be <= max (got {min}, {max})"
    );
    if min == max {
        return min;
    }

    let strategies = if min <= 0.0 && max >= 0.0 {
        &STRATEGIES_WITH_ZERO
    } else {
        &STRATEGIES
    };

    match strategies.pick(random) {
        0 => min,
        1 => max,
        2 => adjust_up(random, min, max),
        3 => adjust_down(random, max, min),
        4 => random.number_between(min, max),
        _ => near_zero(random, min, max),
    }
}

/// Step `value` upwards 1-10 adjacent floats, never past `max`.
fn adjust_up(random: &mut Random, mut value: f64, max: f64) -> f64 {
    let steps = random.int_between(1, 10);
    for _ in 0..steps {
        value = next_up(value);
        if value >= max {
            return max;
        }
    }
    value
}

/// Step `value` downwards 1-10 adjacent floats, never past `min`.
fn adjust_down(random: &mut Random, mut value: f64, min: f64) -> f64 {
    let steps = random.int_between(1, 10);
    for _ in 0..steps {
        value = next_down(value);
        if value <= min {
            return min;
        }
    }
    value
}

/// Zero of either sign, or a few ulps either side of it.
fn near_zero(random: &mut Random, min: f64, max: f64) -> f64 {
    match random.int_between(0, 3) {
        0 => 0.0,
        1 => -0.0,
        2 => adjust_down(random, 0.0, min),
        _ => adjust_up(random, 0.0, max),
    }
}
