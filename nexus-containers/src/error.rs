//! Error types.

use thiserror::Error;

/// Returned when an index falls outside the occupied span `[0, len)`.
///
/// Indexed accessors check bounds before touching the container, so a
/// container that returns this error is unchanged.
///
/// # Example
///
/// ```
/// use nexus_containers::{OutOfRange, Vector};
///
/// let vector: Vector<u64> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(vector.get(2), Ok(&3));
/// assert_eq!(vector.get(3), Err(OutOfRange { index: 3, len: 3 }));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("index {index} out of range for length {len}")]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Length of the container at the time of the call.
    pub len: usize,
}

impl OutOfRange {
    /// Checks `index` against `len`.
    #[inline]
    pub(crate) fn check(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_index_and_len() {
        let err = OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");
    }

    #[test]
    fn check_bounds() {
        assert_eq!(OutOfRange::check(0, 1), Ok(()));
        assert_eq!(OutOfRange::check(1, 1), Err(OutOfRange { index: 1, len: 1 }));
        assert_eq!(OutOfRange::check(0, 0), Err(OutOfRange { index: 0, len: 0 }));
    }
}
