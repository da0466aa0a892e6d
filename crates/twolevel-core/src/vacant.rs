//! The empty-state contract for stored values.
//!
//! Chunked arrays treat "the chunk is absent" and "every slot in the chunk
//! is vacant" as the same observable state. That only holds if the value
//! type has exactly one recognizable empty state, and that state is the one
//! produced by [`Default`]. [`Vacant`] makes that requirement explicit.

/// A value type with a single recognizable empty state.
///
/// Implementors must uphold:
///
/// - `T::default().is_vacant()` is `true`;
/// - every other reachable value reports `is_vacant() == false`;
/// - constructing the default value has no side effects.
///
/// Floating-point types are intentionally not implemented: `-0.0` compares
/// equal to the default but is a distinct value, so a write of `-0.0` into
/// an absent chunk would read back as `0.0`.
pub trait Vacant: Default {
    /// Whether this value is the empty state.
    fn is_vacant(&self) -> bool;
}

macro_rules! impl_vacant_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Vacant for $t {
                #[inline]
                fn is_vacant(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_vacant_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Vacant for bool {
    #[inline]
    fn is_vacant(&self) -> bool {
        !*self
    }
}

impl Vacant for char {
    #[inline]
    fn is_vacant(&self) -> bool {
        *self == '\0'
    }
}

impl<T> Vacant for Option<T> {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

impl Vacant for String {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacant for Vec<T> {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}
