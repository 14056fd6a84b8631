//! Second-order tensor calculus: trace, transpose, determinant,
//! deviatoric part and symmetrization.
//!
//! The `*_into` variants write a caller-owned destination instead of
//! returning a fresh value; deviatoric decomposition and symmetrization
//! sit in the inner loop of constitutive models, and the destination form
//! lets such loops reuse storage.

use std::ops::{Add, Mul, Sub};

use num_traits::{Float, Zero};

use crate::index::{inv_sym2, linear, sym2};
use crate::{SymmetricTensor, Tensor};

impl<T: Copy + Zero, const D: usize, const L: usize> Tensor<T, 2, D, L> {
    /// Sum of the diagonal components.
    pub fn trace(&self) -> T {
        let mut acc = T::zero();
        for i in 0..D {
            acc = acc + self[[i, i]];
        }
        acc
    }
}

impl<T: Copy + Zero, const D: usize, const L: usize> SymmetricTensor<T, 2, D, L> {
    /// Sum of the diagonal components.
    pub fn trace(&self) -> T {
        let mut acc = T::zero();
        for i in 0..D {
            acc = acc + self[[i, i]];
        }
        acc
    }
}

impl<T: Copy, const D: usize, const L: usize> Tensor<T, 2, D, L> {
    /// The transposed tensor.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|[i, j]| self[[j, i]])
    }
}

impl<T: Copy, const D: usize, const L: usize> SymmetricTensor<T, 2, D, L> {
    /// A symmetric tensor is its own transpose.
    pub fn transpose(&self) -> Self {
        *self
    }
}

// ============================================================================
// Determinant
// ============================================================================

macro_rules! impl_det {
    ($ty:ident) => {
        impl<T, const D: usize, const L: usize> $ty<T, 2, D, L>
        where
            T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
        {
            /// Determinant by closed-form cofactor expansion.
            pub fn det(&self) -> T {
                match D {
                    1 => self[[0, 0]],
                    2 => self[[0, 0]] * self[[1, 1]] - self[[0, 1]] * self[[1, 0]],
                    3 => {
                        self[[0, 0]] * (self[[1, 1]] * self[[2, 2]] - self[[1, 2]] * self[[2, 1]])
                            - self[[0, 1]]
                                * (self[[1, 0]] * self[[2, 2]] - self[[1, 2]] * self[[2, 0]])
                            + self[[0, 2]]
                                * (self[[1, 0]] * self[[2, 1]] - self[[1, 1]] * self[[2, 0]])
                    }
                    // Dimensions outside [1, 3] are unconstructible.
                    _ => unreachable!(),
                }
            }
        }
    };
}

impl_det!(Tensor);
impl_det!(SymmetricTensor);

// ============================================================================
// Deviatoric part
// ============================================================================

impl<T: Float, const D: usize, const L: usize> Tensor<T, 2, D, L> {
    /// Deviatoric part `A - tr(A)/dim * I`.
    pub fn dev(&self) -> Self {
        let mut out = *self;
        self.dev_into(&mut out);
        out
    }

    /// Write the deviatoric part of `self` into `dest`.
    pub fn dev_into(&self, dest: &mut Self) {
        let dim = (0..D).fold(T::zero(), |n, _| n + T::one());
        let mean = self.trace() / dim;
        dest.data = self.data;
        for i in 0..D {
            dest.data[linear(D, &[i, i])] = self[[i, i]] - mean;
        }
    }
}

impl<T: Float, const D: usize, const L: usize> SymmetricTensor<T, 2, D, L> {
    /// Deviatoric part `A - tr(A)/dim * I`.
    pub fn dev(&self) -> Self {
        let mut out = *self;
        self.dev_into(&mut out);
        out
    }

    /// Write the deviatoric part of `self` into `dest`.
    pub fn dev_into(&self, dest: &mut Self) {
        let dim = (0..D).fold(T::zero(), |n, _| n + T::one());
        let mean = self.trace() / dim;
        dest.data = self.data;
        for i in 0..D {
            dest.data[sym2(D, i, i)] = self[[i, i]] - mean;
        }
    }
}

// ============================================================================
// Symmetrization
// ============================================================================

impl<T: Float, const D: usize, const L: usize> Tensor<T, 2, D, L> {
    /// Symmetric part `(A + At) / 2`, in symmetric storage.
    pub fn symmetrize<const LS: usize>(&self) -> SymmetricTensor<T, 2, D, LS> {
        let two = T::one() + T::one();
        SymmetricTensor::<T, 2, D, LS>::from_fn(|[i, j]| (self[[i, j]] + self[[j, i]]) / two)
    }

    /// Write the symmetric part of `self` into `dest`.
    pub fn symmetrize_into<const LS: usize>(&self, dest: &mut SymmetricTensor<T, 2, D, LS>) {
        let two = T::one() + T::one();
        for (p, slot) in dest.data.iter_mut().enumerate() {
            let (i, j) = inv_sym2(D, p);
            *slot = (self[[i, j]] + self[[j, i]]) / two;
        }
    }
}

impl<T: Copy, const D: usize, const L: usize> SymmetricTensor<T, 2, D, L> {
    /// Symmetrization of a symmetric tensor is the identity.
    pub fn symmetrize(&self) -> Self {
        *self
    }

    /// Copy `self` into `dest`; already symmetric.
    pub fn symmetrize_into(&self, dest: &mut Self) {
        dest.data = self.data;
    }
}

// ============================================================================
// Transpose-dot
// ============================================================================

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> Tensor<T, 2, D, L> {
    /// `At . A`, symmetric by construction and returned in symmetric
    /// storage.
    pub fn tdot<const LS: usize>(&self) -> SymmetricTensor<T, 2, D, LS> {
        SymmetricTensor::<T, 2, D, LS>::from_fn(|[i, j]| {
            let mut acc = T::zero();
            for k in 0..D {
                acc = acc + self[[k, i]] * self[[k, j]];
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> SymmetricTensor<T, 2, D, L> {
    /// `At . A`; for a symmetric operand this is `A . A`.
    pub fn tdot(&self) -> Self {
        Self::from_fn(|[i, j]| {
            let mut acc = T::zero();
            for k in 0..D {
                acc = acc + self[[k, i]] * self[[k, j]];
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{SymTensor2x3, Tensor2x2, Tensor2x3};

    #[test]
    fn det_closed_forms() {
        let id = Tensor2x2::<f64>::identity();
        assert_eq!(id.det(), 1.0);
        let diag: Tensor2x2 = [[2.0, 0.0], [0.0, 3.0]].into();
        assert_eq!(diag.det(), 6.0);
    }

    #[test]
    fn transpose_swaps_off_diagonals() {
        let t: Tensor2x3 = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]].into();
        let tt = t.transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(tt[[i, j]], t[[j, i]]);
            }
        }
    }

    #[test]
    fn symmetrize_into_reuses_destination() {
        let t: Tensor2x2 = [[0.0, 2.0], [4.0, 6.0]].into();
        let mut dest = crate::SymTensor2x2::zero();
        t.symmetrize_into(&mut dest);
        assert_eq!(dest[[0, 1]], 3.0);
        assert_eq!(dest[[1, 0]], 3.0);
    }

    #[test]
    fn symmetric_trace_counts_diagonal_once() {
        let s = SymTensor2x3::from_array([1.0, 9.0, 9.0, 2.0, 9.0, 3.0]);
        assert_eq!(s.trace(), 6.0);
    }
}
