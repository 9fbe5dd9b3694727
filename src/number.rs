//! Generic numeric helpers over the primitive integer and float types.
//!
//! [`Numeric`] covers every signed, unsigned and float primitive;
//! [`Integer`] narrows it to the integer kinds that rounding can target.
//! Both are implemented by macro, so calls monomorphize to plain arithmetic.

use std::fmt::Debug;

/// Any primitive number. `Default` is the zero value.
pub trait Numeric: Copy + PartialOrd + Default + Debug {
    /// Absolute value. Identity for unsigned kinds; signed minimum values wrap.
    fn absolute(self) -> Self;
}

/// Primitive integer kinds.
pub trait Integer: Numeric {
    /// Convert from `f64`, truncating toward zero and saturating at the bounds.
    fn from_f64(x: f64) -> Self;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn absolute(self) -> Self {
                self.wrapping_abs()
            }
        }
        impl Integer for $t {
            fn from_f64(x: f64) -> Self {
                x as $t
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn absolute(self) -> Self {
                self
            }
        }
        impl Integer for $t {
            fn from_f64(x: f64) -> Self {
                x as $t
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn absolute(self) -> Self {
                <$t>::abs(self)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

/// Absolute value of `x`.
pub fn abs<T: Numeric>(x: T) -> T {
    x.absolute()
}

/// Nearest integer, rounding half away from zero.
pub fn round<T: Integer>(x: f64) -> T {
    T::from_f64(x.round())
}

/// Smallest integer not less than `x`.
pub fn round_up<T: Integer>(x: f64) -> T {
    T::from_f64(x.ceil())
}

/// Drop the fractional part, rounding toward zero.
pub fn round_down<T: Integer>(x: f64) -> T {
    T::from_f64(x)
}

/// Smallest of `numbers`, or zero when empty.
pub fn min<T: Numeric>(numbers: &[T]) -> T {
    let Some((&first, rest)) = numbers.split_first() else {
        return T::default();
    };
    rest.iter()
        .fold(first, |acc, &n| if n < acc { n } else { acc })
}

/// Largest of `numbers`, or zero when empty.
pub fn max<T: Numeric>(numbers: &[T]) -> T {
    let Some((&first, rest)) = numbers.split_first() else {
        return T::default();
    };
    rest.iter()
        .fold(first, |acc, &n| if n > acc { n } else { acc })
}
