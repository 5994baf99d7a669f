//! Fixed-width signed integer element types.
//!
//! Every strategy accumulates with wrapping arithmetic. The atomic cells used
//! by the parallel strategy wrap on overflow too, so all strategies agree
//! bit-for-bit even when a product overflows.

use std::fmt;
use std::sync::atomic::{AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize, Ordering};

/// A matrix element: a fixed-width signed integer with an atomic counterpart.
pub trait Element: Copy + Default + PartialEq + Eq + fmt::Debug + Send + Sync + 'static {
    /// Atomic cell holding one element, used for lock-free accumulation.
    type Atomic: AtomicElement<Self>;

    /// `self + rhs`, wrapping on overflow.
    fn add_wrapping(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping on overflow.
    fn mul_wrapping(self, rhs: Self) -> Self;

    /// `self + a * b`, the step every kernel performs per cell.
    #[inline(always)]
    fn mul_add_wrapping(self, a: Self, b: Self) -> Self {
        self.add_wrapping(a.mul_wrapping(b))
    }
}

/// Shared cell supporting an indivisible fetch-and-add.
pub trait AtomicElement<T>: Send + Sync {
    fn new(value: T) -> Self;

    /// Atomically adds `value`, wrapping on overflow.
    fn fetch_add(&self, value: T);

    fn into_inner(self) -> T;
}

macro_rules! impl_element {
    ($($t:ty => $atomic:ty),* $(,)?) => {
        $(
            impl Element for $t {
                type Atomic = $atomic;

                #[inline(always)]
                fn add_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn mul_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }

            impl AtomicElement<$t> for $atomic {
                fn new(value: $t) -> Self {
                    <$atomic>::new(value)
                }

                // Relaxed is enough: the terminal join orders every write
                // before the caller reads the result.
                #[inline(always)]
                fn fetch_add(&self, value: $t) {
                    <$atomic>::fetch_add(self, value, Ordering::Relaxed);
                }

                fn into_inner(self) -> $t {
                    <$atomic>::into_inner(self)
                }
            }
        )*
    };
}

impl_element! {
    i8 => AtomicI8,
    i16 => AtomicI16,
    i32 => AtomicI32,
    i64 => AtomicI64,
    isize => AtomicIsize,
}
