// Values that are either fixed or drawn on demand.

use crate::Randomizer;
use crate::draw::Draw;
use std::fmt;

/// A fixed value, or a draw that produces one against a `Randomizer`.
///
/// Composite draws take their sizes as `impl Into<Source<_>>`, so callers can
/// pass a plain value or make the size random too.
pub enum Source<T> {
    Value(T),
    Draw(Draw<T>),
}

impl<T> Source<T> {
    /// Wrap a closure as a deferred draw.
    pub fn draw(f: impl Fn(&mut Randomizer) -> T + 'static) -> Self {
        Source::Draw(Box::new(f))
    }

    /// Produce the value, drawing from `randomizer` if this is a draw.
    pub fn resolve(self, randomizer: &mut Randomizer) -> T {
        match self {
            Source::Value(value) => value,
            Source::Draw(draw) => draw(randomizer),
        }
    }
}

impl<T> From<T> for Source<T> {
    fn from(value: T) -> Self {
        Source::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Source::Draw(_) => f.write_str("Draw(..)"),
        }
    }
}
