//! Abstract operations.

use std::marker::PhantomData;

/// Operation to fetch a value from an outer source.
#[derive(Clone, Copy, Debug)]
pub struct Fetch<T>(pub T);

/// Operation to select a stored value.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Operation to store a value.
#[derive(Clone, Copy, Debug)]
pub struct Store<T>(pub T);

/// Selector of `W` by `B`.
#[derive(Clone, Copy, Debug)]
pub struct By<W, B> {
    /// Type of the value to select.
    _what: PhantomData<W>,

    /// Value to select by.
    by: B,
}

impl<W, B> By<W, B> {
    /// Creates a new [`By`] with the given value.
    #[must_use]
    pub const fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Returns a reference to the inner value.
    #[must_use]
    pub const fn inner(&self) -> &B {
        &self.by
    }

    /// Consumes this [`By`] and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}
