// Deferred draws.
//
// Each constructor here captures its arguments and returns a `Draw`: a boxed
// closure that performs the matching `Randomizer` call when invoked. Draws
// are how collection helpers and `Source` values receive "a value to be
// produced later", e.g.
//
//     r.unique_array(5usize, draw::int_between(1, 100)?)
//
// Arguments are validated when the draw is built, with the same checks the
// facade applies, so invoking a draw never fails. A draw holds no state
// between calls; invoking it twice against the same randomizer state yields
// the same value.

use crate::Randomizer;
use crate::error::RandomizerError;
use crate::randomizer::{Primitive, check_int_range, check_number_range, check_probability};
use dumbfound_chars::CharGenerator;
use dumbfound_prng::random_evil_number;
use std::sync::Arc;

/// A value to be drawn from a `Randomizer` later.
pub type Draw<T> = Box<dyn Fn(&mut Randomizer) -> T>;

/// Always the same value.
pub fn constant<T: Clone + 'static>(value: T) -> Draw<T> {
    Box::new(move |_: &mut Randomizer| value.clone())
}

pub fn number() -> Draw<f64> {
    Box::new(|r: &mut Randomizer| r.number())
}

pub fn number_up_to(max: f64) -> Result<Draw<f64>, RandomizerError> {
    number_between(0.0, max)
}

pub fn number_between(min: f64, max: f64) -> Result<Draw<f64>, RandomizerError> {
    check_number_range(min, max)?;
    Ok(Box::new(move |r: &mut Randomizer| r.random().number_between(min, max)))
}

pub fn int() -> Draw<i64> {
    Box::new(|r: &mut Randomizer| r.int())
}

pub fn int_up_to(max: i64) -> Result<Draw<i64>, RandomizerError> {
    int_between(0, max)
}

pub fn int_between(min: i64, max: i64) -> Result<Draw<i64>, RandomizerError> {
    check_int_range(min, max)?;
    Ok(Box::new(move |r: &mut Randomizer| r.random().int_between(min, max)))
}

pub fn evil_number() -> Draw<f64> {
    Box::new(|r: &mut Randomizer| r.evil_number())
}

pub fn evil_number_up_to(max: f64) -> Result<Draw<f64>, RandomizerError> {
    evil_number_between(0.0, max)
}

pub fn evil_number_between(min: f64, max: f64) -> Result<Draw<f64>, RandomizerError> {
    check_number_range(min, max)?;
    Ok(Box::new(move |r: &mut Randomizer| random_evil_number(r.random(), min, max)))
}

pub fn gaussian() -> Draw<f64> {
    Box::new(|r: &mut Randomizer| r.gaussian())
}

pub fn boolean() -> Draw<bool> {
    Box::new(|r: &mut Randomizer| r.boolean())
}

pub fn boolean_with(p: f64) -> Result<Draw<bool>, RandomizerError> {
    check_probability(p)?;
    Ok(Box::new(move |r: &mut Randomizer| r.random().boolean(p)))
}

pub fn frequently() -> Draw<bool> {
    Box::new(|r: &mut Randomizer| r.frequently())
}

pub fn rarely() -> Draw<bool> {
    Box::new(|r: &mut Randomizer| r.rarely())
}

/// Strings of `length` characters from a shared generator.
pub fn string(generator: Arc<dyn CharGenerator>, length: usize) -> Draw<String> {
    Box::new(move |r: &mut Randomizer| r.string(generator.as_ref(), length))
}

pub fn ascii(length: usize) -> Draw<String> {
    Box::new(move |r: &mut Randomizer| r.ascii(length))
}

pub fn ascii_digits(length: usize) -> Draw<String> {
    Box::new(move |r: &mut Randomizer| r.ascii_digits(length))
}

pub fn ascii_lowercase(length: usize) -> Draw<String> {
    Box::new(move |r: &mut Randomizer| r.ascii_lowercase(length))
}

pub fn ascii_uppercase(length: usize) -> Draw<String> {
    Box::new(move |r: &mut Randomizer| r.ascii_uppercase(length))
}

pub fn ascii_alpha_numeric(length: usize) -> Draw<String> {
    Box::new(move |r: &mut Randomizer| r.ascii_alpha_numeric(length))
}

pub fn ascii_alpha_numeric_with_spaces(length: usize) -> Draw<String> {
    Box::new(move |r: &mut Randomizer| r.ascii_alpha_numeric_with_spaces(length))
}

pub fn unicode(length: usize) -> Draw<String> {
    Box::new(move |r: &mut Randomizer| r.unicode(length))
}

pub fn primitive_value() -> Draw<Primitive> {
    Box::new(|r: &mut Randomizer| r.primitive_value())
}

/// One of `items`, each equally likely.
pub fn pick<T: Clone + 'static>(items: Vec<T>) -> Result<Draw<T>, RandomizerError> {
    if items.is_empty() {
        return Err(RandomizerError::InvalidArgument(
            "cannot pick from an empty list".into(),
        ));
    }
    Ok(Box::new(move |r: &mut Randomizer| {
        let index = r.random().index(items.len());
        items[index].clone()
    }))
}

pub fn uuid() -> Draw<String> {
    Box::new(|r: &mut Randomizer| r.uuid())
}
