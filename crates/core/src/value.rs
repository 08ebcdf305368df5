//! Cell value contract.
//!
//! Sparse storage never keeps a zero cell, so every value type has to say what
//! its zero is and how to recognise it. The contract is explicit instead of
//! comparing against an untyped literal.

use num_traits::Zero;

/// A value that can be stored in a grid cell.
pub trait Cell: Clone {
    /// Returns the zero (default) value of this type.
    fn zero() -> Self;

    /// Returns true if this value equals the zero value.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_numeric_cell {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cell for $ty {
                #[inline]
                fn zero() -> Self {
                    <$ty as Zero>::zero()
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    Zero::is_zero(self)
                }
            }
        )*
    };
}

impl_numeric_cell!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// `false` is the zero cell, so a sparse boolean grid stores only `true`.
impl Cell for bool {
    #[inline]
    fn zero() -> Self {
        false
    }

    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}
