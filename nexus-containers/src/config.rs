//! Vector construction settings.

use crate::Vector;

/// Capacity of a vector built without explicit settings.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

/// Settings applied when a [`Vector`] is constructed.
///
/// A configuration only affects vectors built from it. Changing it later
/// leaves existing vectors alone.
///
/// # Example
///
/// ```
/// use nexus_containers::{Vector, VectorConfig};
///
/// let config = VectorConfig::new().initial_capacity(16);
///
/// let a: Vector<u64> = config.build();
/// let b: Vector<String> = Vector::with_config(&config);
///
/// assert_eq!(a.capacity(), 16);
/// assert_eq!(b.capacity(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorConfig {
    initial_capacity: usize,
}

impl VectorConfig {
    /// Creates a configuration using [`DEFAULT_INITIAL_CAPACITY`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Sets the capacity allocated at construction. Zero is allowed; the
    /// first push then allocates a single slot.
    #[inline]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the configured initial capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Builds an empty vector with this configuration.
    #[inline]
    pub fn build<T>(&self) -> Vector<T> {
        Vector::with_config(self)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
