//! Elementwise arithmetic.
//!
//! These operators act per stored component, so operand and result shapes
//! coincide and the impls are written once, generically over the shape
//! parameters. Elementwise combinations of two symmetric tensors stay
//! symmetric. Mixed symmetric/plain operands change the result's storage
//! kind and live in [`crate::promote`].

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::{SymmetricTensor, Tensor};

/// Elementwise (Hadamard) product.
///
/// Like `+` and `-`, this promotes symmetry: both operands symmetric
/// keeps symmetric storage, a mixed pairing produces plain storage (the
/// mixed impls live in [`crate::promote`]).
pub trait MulElem<Rhs = Self> {
    type Output;

    fn mul_elem(self, rhs: Rhs) -> Self::Output;
}

/// Elementwise quotient, with the same symmetry promotion as [`MulElem`].
pub trait DivElem<Rhs = Self> {
    type Output;

    fn div_elem(self, rhs: Rhs) -> Self::Output;
}

macro_rules! impl_elementwise {
    ($ty:ident) => {
        impl<T: Copy + Add<Output = T>, const O: usize, const D: usize, const L: usize> Add
            for $ty<T, O, D, L>
        {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self {
                    data: std::array::from_fn(|p| self.data[p] + rhs.data[p]),
                }
            }
        }

        impl<T: Copy + Sub<Output = T>, const O: usize, const D: usize, const L: usize> Sub
            for $ty<T, O, D, L>
        {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self {
                    data: std::array::from_fn(|p| self.data[p] - rhs.data[p]),
                }
            }
        }

        impl<T: Copy + Neg<Output = T>, const O: usize, const D: usize, const L: usize> Neg
            for $ty<T, O, D, L>
        {
            type Output = Self;

            fn neg(self) -> Self {
                Self {
                    data: std::array::from_fn(|p| -self.data[p]),
                }
            }
        }

        impl<T: Copy + Mul<Output = T>, const O: usize, const D: usize, const L: usize> Mul<T>
            for $ty<T, O, D, L>
        {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                Self {
                    data: std::array::from_fn(|p| self.data[p] * rhs),
                }
            }
        }

        impl<T: Copy + Div<Output = T>, const O: usize, const D: usize, const L: usize> Div<T>
            for $ty<T, O, D, L>
        {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                Self {
                    data: std::array::from_fn(|p| self.data[p] / rhs),
                }
            }
        }

        impl<T: Copy + Add<Output = T>, const O: usize, const D: usize, const L: usize> AddAssign
            for $ty<T, O, D, L>
        {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Copy + Sub<Output = T>, const O: usize, const D: usize, const L: usize> SubAssign
            for $ty<T, O, D, L>
        {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Copy + Mul<Output = T>, const O: usize, const D: usize, const L: usize> MulElem
            for $ty<T, O, D, L>
        {
            type Output = Self;

            fn mul_elem(self, rhs: Self) -> Self {
                Self {
                    data: std::array::from_fn(|p| self.data[p] * rhs.data[p]),
                }
            }
        }

        impl<T: Copy + Div<Output = T>, const O: usize, const D: usize, const L: usize> DivElem
            for $ty<T, O, D, L>
        {
            type Output = Self;

            fn div_elem(self, rhs: Self) -> Self {
                Self {
                    data: std::array::from_fn(|p| self.data[p] / rhs.data[p]),
                }
            }
        }
    };
}

impl_elementwise!(Tensor);
impl_elementwise!(SymmetricTensor);

// Left-scalar multiplication for the primitive float types.
macro_rules! impl_scalar_lhs {
    ($($s:ty),+) => {$(
        impl<const O: usize, const D: usize, const L: usize> Mul<Tensor<$s, O, D, L>> for $s {
            type Output = Tensor<$s, O, D, L>;

            fn mul(self, rhs: Tensor<$s, O, D, L>) -> Self::Output {
                rhs * self
            }
        }

        impl<const O: usize, const D: usize, const L: usize> Mul<SymmetricTensor<$s, O, D, L>>
            for $s
        {
            type Output = SymmetricTensor<$s, O, D, L>;

            fn mul(self, rhs: SymmetricTensor<$s, O, D, L>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}

impl_scalar_lhs!(f32, f64);
