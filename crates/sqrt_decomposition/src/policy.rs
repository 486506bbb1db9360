use std::fmt::Debug;

/// Element type of a block decomposition.
///
/// `zero` is the identity used for fresh pending offsets, `scale` is the
/// value added to itself `len` times (a full block's share of an offset).
/// Integer impls wrap on overflow; float impls use ordinary arithmetic.
pub trait Additive: Copy + Debug {
    fn zero() -> Self;
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn scale(self, len: usize) -> Self;
}

macro_rules! impl_additive_wrapping {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Additive for $ty {
                #[inline(always)]
                fn zero() -> Self {
                    0
                }

                #[inline(always)]
                fn add(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline(always)]
                fn sub(self, other: Self) -> Self {
                    self.wrapping_sub(other)
                }

                // `len as $ty` truncates modulo 2^BITS; exact under wrapping multiplication.
                #[inline(always)]
                fn scale(self, len: usize) -> Self {
                    self.wrapping_mul(len as $ty)
                }
            }
        )*
    };
}

macro_rules! impl_additive_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Additive for $ty {
                #[inline(always)]
                fn zero() -> Self {
                    0.0
                }

                #[inline(always)]
                fn add(self, other: Self) -> Self {
                    self + other
                }

                #[inline(always)]
                fn sub(self, other: Self) -> Self {
                    self - other
                }

                #[inline(always)]
                fn scale(self, len: usize) -> Self {
                    self * len as $ty
                }
            }
        )*
    };
}

impl_additive_wrapping!(i32, i64, i128, isize, u32, u64, u128, usize);
impl_additive_float!(f32, f64);
