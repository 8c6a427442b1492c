//! Arena indices with a reserved "no neighbor" value.
//!
//! Chain nodes store their neighbors as arena slot numbers. The largest value
//! of the index type is reserved as [`Index::NONE`], so a link costs one plain
//! integer rather than an `Option`.

/// An arena slot number with a sentinel.
///
/// Implemented for the unsigned integers; `NONE` is the type's `MAX`, which
/// caps an arena at `MAX` slots (`0..MAX`). A smaller index type shrinks every
/// linked node at the cost of that cap.
///
/// # Example
///
/// ```
/// use nexus_containers::Index;
///
/// assert!(u8::NONE.is_none());
/// assert_eq!(7u32.into_option(), Some(7));
///
/// assert_eq!(u8::from_slot(254), Some(254));
/// assert_eq!(u8::from_slot(255), None);
/// ```
pub trait Index: Copy + Eq + 'static {
    /// The "no index" value. Never names a slot.
    const NONE: Self;

    /// Slot position this index names.
    fn slot(self) -> usize;

    /// Index naming `slot`, or `None` if `slot` is out of range or would
    /// collide with [`NONE`](Self::NONE).
    fn from_slot(slot: usize) -> Option<Self>;

    /// Returns `true` for the sentinel.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Maps the sentinel to `None`.
    #[inline]
    fn into_option(self) -> Option<Self> {
        (!self.is_none()).then_some(self)
    }
}

macro_rules! unsigned_index {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn slot(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_slot(slot: usize) -> Option<Self> {
                    <$ty>::try_from(slot).ok().filter(|&idx| idx != Self::NONE)
                }
            }
        )*
    };
}

unsigned_index!(u8, u16, u32, u64, usize);
