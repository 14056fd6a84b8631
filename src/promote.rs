//! Storage-kind promotion and conversion.
//!
//! Binary elementwise operators promote symmetry: symmetric with symmetric
//! stays symmetric (see [`crate::ops`]), while symmetric with plain falls
//! back to plain storage, since one operand carries no symmetry guarantee.
//! This applies to `+`, `-` and the elementwise product/quotient alike.
//! The mixed impls here read the symmetric operand through its canonical
//! index mapping, so no intermediate expansion is materialized.
//!
//! Explicit conversions go both ways: [`SymmetricTensor::to_plain`]
//! duplicates each stored component into every equivalent position, and
//! [`Tensor::try_to_symmetric`] validates the symmetry relation before
//! reducing storage — an asymmetric source is an error, never a projection.

use std::ops::{Add, Div, Mul, Sub};

use crate::ops::{DivElem, MulElem};
use crate::{Result, SymmetricTensor, Tensor, TensorError};

impl<T: Copy, const D: usize, const L: usize> SymmetricTensor<T, 2, D, L> {
    /// Expand to plain storage, populating every mirrored position.
    pub fn to_plain<const LP: usize>(&self) -> Tensor<T, 2, D, LP> {
        Tensor::from_fn(|[i, j]| self[[i, j]])
    }
}

impl<T: Copy, const D: usize, const L: usize> SymmetricTensor<T, 4, D, L> {
    /// Expand to plain storage, populating every position equivalent under
    /// the minor symmetries.
    pub fn to_plain<const LP: usize>(&self) -> Tensor<T, 4, D, LP> {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]])
    }
}

impl<T: Copy + PartialEq, const D: usize, const L: usize> Tensor<T, 2, D, L> {
    /// Reduce to symmetric storage.
    ///
    /// # Errors
    /// [`TensorError::NotSymmetric`] naming the first mirrored pair whose
    /// components differ.
    pub fn try_to_symmetric<const LS: usize>(&self) -> Result<SymmetricTensor<T, 2, D, LS>> {
        for i in 0..D {
            for j in (i + 1)..D {
                if self[[i, j]] != self[[j, i]] {
                    return Err(TensorError::NotSymmetric(vec![i, j], vec![j, i]));
                }
            }
        }
        Ok(SymmetricTensor::<T, 2, D, LS>::from_fn(|[i, j]| self[[i, j]]))
    }
}

impl<T: Copy + PartialEq, const D: usize, const L: usize> Tensor<T, 4, D, L> {
    /// Reduce to minor-symmetric storage.
    ///
    /// # Errors
    /// [`TensorError::NotSymmetric`] when either minor symmetry is
    /// violated.
    pub fn try_to_symmetric<const LS: usize>(&self) -> Result<SymmetricTensor<T, 4, D, LS>> {
        for i in 0..D {
            for j in 0..D {
                for k in 0..D {
                    for l in 0..D {
                        if self[[i, j, k, l]] != self[[j, i, k, l]] {
                            return Err(TensorError::NotSymmetric(
                                vec![i, j, k, l],
                                vec![j, i, k, l],
                            ));
                        }
                        if self[[i, j, k, l]] != self[[i, j, l, k]] {
                            return Err(TensorError::NotSymmetric(
                                vec![i, j, k, l],
                                vec![i, j, l, k],
                            ));
                        }
                    }
                }
            }
        }
        Ok(SymmetricTensor::<T, 4, D, LS>::from_fn(|[i, j, k, l]| self[[i, j, k, l]]))
    }
}

// ============================================================================
// Mixed-symmetry elementwise operators
// ============================================================================

impl<T: Copy + Add<Output = T>, const D: usize, const LS: usize, const LP: usize>
    Add<Tensor<T, 2, D, LP>> for SymmetricTensor<T, 2, D, LS>
{
    type Output = Tensor<T, 2, D, LP>;

    fn add(self, rhs: Tensor<T, 2, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j]| self[[i, j]] + rhs[[i, j]])
    }
}

impl<T: Copy + Add<Output = T>, const D: usize, const LS: usize, const LP: usize>
    Add<SymmetricTensor<T, 2, D, LS>> for Tensor<T, 2, D, LP>
{
    type Output = Tensor<T, 2, D, LP>;

    fn add(self, rhs: SymmetricTensor<T, 2, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j]| self[[i, j]] + rhs[[i, j]])
    }
}

impl<T: Copy + Sub<Output = T>, const D: usize, const LS: usize, const LP: usize>
    Sub<Tensor<T, 2, D, LP>> for SymmetricTensor<T, 2, D, LS>
{
    type Output = Tensor<T, 2, D, LP>;

    fn sub(self, rhs: Tensor<T, 2, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j]| self[[i, j]] - rhs[[i, j]])
    }
}

impl<T: Copy + Sub<Output = T>, const D: usize, const LS: usize, const LP: usize>
    Sub<SymmetricTensor<T, 2, D, LS>> for Tensor<T, 2, D, LP>
{
    type Output = Tensor<T, 2, D, LP>;

    fn sub(self, rhs: SymmetricTensor<T, 2, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j]| self[[i, j]] - rhs[[i, j]])
    }
}

impl<T: Copy + Add<Output = T>, const D: usize, const LS: usize, const LP: usize>
    Add<Tensor<T, 4, D, LP>> for SymmetricTensor<T, 4, D, LS>
{
    type Output = Tensor<T, 4, D, LP>;

    fn add(self, rhs: Tensor<T, 4, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]] + rhs[[i, j, k, l]])
    }
}

impl<T: Copy + Add<Output = T>, const D: usize, const LS: usize, const LP: usize>
    Add<SymmetricTensor<T, 4, D, LS>> for Tensor<T, 4, D, LP>
{
    type Output = Tensor<T, 4, D, LP>;

    fn add(self, rhs: SymmetricTensor<T, 4, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]] + rhs[[i, j, k, l]])
    }
}

impl<T: Copy + Sub<Output = T>, const D: usize, const LS: usize, const LP: usize>
    Sub<Tensor<T, 4, D, LP>> for SymmetricTensor<T, 4, D, LS>
{
    type Output = Tensor<T, 4, D, LP>;

    fn sub(self, rhs: Tensor<T, 4, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]] - rhs[[i, j, k, l]])
    }
}

impl<T: Copy + Sub<Output = T>, const D: usize, const LS: usize, const LP: usize>
    Sub<SymmetricTensor<T, 4, D, LS>> for Tensor<T, 4, D, LP>
{
    type Output = Tensor<T, 4, D, LP>;

    fn sub(self, rhs: SymmetricTensor<T, 4, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]] - rhs[[i, j, k, l]])
    }
}

// The elementwise product/quotient of a symmetric and a plain tensor is
// not symmetric in general, so these pairings produce plain storage too.

impl<T: Copy + Mul<Output = T>, const D: usize, const LS: usize, const LP: usize>
    MulElem<Tensor<T, 2, D, LP>> for SymmetricTensor<T, 2, D, LS>
{
    type Output = Tensor<T, 2, D, LP>;

    fn mul_elem(self, rhs: Tensor<T, 2, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j]| self[[i, j]] * rhs[[i, j]])
    }
}

impl<T: Copy + Mul<Output = T>, const D: usize, const LS: usize, const LP: usize>
    MulElem<SymmetricTensor<T, 2, D, LS>> for Tensor<T, 2, D, LP>
{
    type Output = Tensor<T, 2, D, LP>;

    fn mul_elem(self, rhs: SymmetricTensor<T, 2, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j]| self[[i, j]] * rhs[[i, j]])
    }
}

impl<T: Copy + Div<Output = T>, const D: usize, const LS: usize, const LP: usize>
    DivElem<Tensor<T, 2, D, LP>> for SymmetricTensor<T, 2, D, LS>
{
    type Output = Tensor<T, 2, D, LP>;

    fn div_elem(self, rhs: Tensor<T, 2, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j]| self[[i, j]] / rhs[[i, j]])
    }
}

impl<T: Copy + Div<Output = T>, const D: usize, const LS: usize, const LP: usize>
    DivElem<SymmetricTensor<T, 2, D, LS>> for Tensor<T, 2, D, LP>
{
    type Output = Tensor<T, 2, D, LP>;

    fn div_elem(self, rhs: SymmetricTensor<T, 2, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j]| self[[i, j]] / rhs[[i, j]])
    }
}

impl<T: Copy + Mul<Output = T>, const D: usize, const LS: usize, const LP: usize>
    MulElem<Tensor<T, 4, D, LP>> for SymmetricTensor<T, 4, D, LS>
{
    type Output = Tensor<T, 4, D, LP>;

    fn mul_elem(self, rhs: Tensor<T, 4, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]] * rhs[[i, j, k, l]])
    }
}

impl<T: Copy + Mul<Output = T>, const D: usize, const LS: usize, const LP: usize>
    MulElem<SymmetricTensor<T, 4, D, LS>> for Tensor<T, 4, D, LP>
{
    type Output = Tensor<T, 4, D, LP>;

    fn mul_elem(self, rhs: SymmetricTensor<T, 4, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]] * rhs[[i, j, k, l]])
    }
}

impl<T: Copy + Div<Output = T>, const D: usize, const LS: usize, const LP: usize>
    DivElem<Tensor<T, 4, D, LP>> for SymmetricTensor<T, 4, D, LS>
{
    type Output = Tensor<T, 4, D, LP>;

    fn div_elem(self, rhs: Tensor<T, 4, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]] / rhs[[i, j, k, l]])
    }
}

impl<T: Copy + Div<Output = T>, const D: usize, const LS: usize, const LP: usize>
    DivElem<SymmetricTensor<T, 4, D, LS>> for Tensor<T, 4, D, LP>
{
    type Output = Tensor<T, 4, D, LP>;

    fn div_elem(self, rhs: SymmetricTensor<T, 4, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| self[[i, j, k, l]] / rhs[[i, j, k, l]])
    }
}
