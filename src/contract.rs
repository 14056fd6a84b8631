//! Contraction operators: dot, double contraction and outer product.
//!
//! Every supported operand pairing is a separate trait impl, monomorphized
//! into a fixed formula over the operands' flat storage; an unsupported
//! pairing has no impl and is rejected at the call site. Loops run over
//! const bounds, so there is no runtime shape dispatch and no allocation.
//!
//! Impls whose result storage length is derivable from the operand types
//! are written once, generically over the shape parameters. The remaining
//! pairings (outer products, symmetric x symmetric matrix product, mixed
//! fourth-order contractions producing plain storage) are expanded per
//! dimension by `impl_dim_contractions!` with literal component counts.
//!
//! Contractions over symmetric operands sum the canonical triangle with
//! doubled off-diagonal terms, which is numerically identical to the full
//! index-range sum.

use std::ops::Mul;

use num_traits::Zero;

use crate::{SymmetricTensor, Tensor};

/// Single contraction: the last index of `self` against the first index
/// of `rhs`. Matrix-vector and matrix-matrix multiplication for orders
/// 2 and 1.
pub trait Dot<Rhs = Self> {
    type Output;

    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// Double contraction: the last two indices of `self` against the first
/// two of `rhs`, reducing the combined order by 4.
pub trait DoubleContract<Rhs = Self> {
    type Output;

    fn dcontract(self, rhs: Rhs) -> Self::Output;
}

/// Outer (tensor) product, concatenating the operand indices.
pub trait Otimes<Rhs = Self> {
    type Output;

    fn otimes(self, rhs: Rhs) -> Self::Output;
}

// ============================================================================
// Dot
// ============================================================================

impl<T: Copy + Zero + Mul<Output = T>, const D: usize> Dot for Tensor<T, 1, D, D> {
    type Output = T;

    fn dot(self, rhs: Self) -> T {
        let mut acc = T::zero();
        for i in 0..D {
            acc = acc + self.data[i] * rhs.data[i];
        }
        acc
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> Dot<Tensor<T, 1, D, D>>
    for Tensor<T, 2, D, L>
{
    type Output = Tensor<T, 1, D, D>;

    fn dot(self, rhs: Tensor<T, 1, D, D>) -> Self::Output {
        Tensor::from_fn(|[i]| {
            let mut acc = T::zero();
            for j in 0..D {
                acc = acc + self[[i, j]] * rhs.data[j];
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> Dot<Tensor<T, 2, D, L>>
    for Tensor<T, 1, D, D>
{
    type Output = Tensor<T, 1, D, D>;

    fn dot(self, rhs: Tensor<T, 2, D, L>) -> Self::Output {
        Tensor::from_fn(|[j]| {
            let mut acc = T::zero();
            for i in 0..D {
                acc = acc + self.data[i] * rhs[[i, j]];
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> Dot<Tensor<T, 1, D, D>>
    for SymmetricTensor<T, 2, D, L>
{
    type Output = Tensor<T, 1, D, D>;

    fn dot(self, rhs: Tensor<T, 1, D, D>) -> Self::Output {
        Tensor::from_fn(|[i]| {
            let mut acc = T::zero();
            for j in 0..D {
                acc = acc + self[[i, j]] * rhs.data[j];
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize>
    Dot<SymmetricTensor<T, 2, D, L>> for Tensor<T, 1, D, D>
{
    type Output = Tensor<T, 1, D, D>;

    fn dot(self, rhs: SymmetricTensor<T, 2, D, L>) -> Self::Output {
        Tensor::from_fn(|[j]| {
            let mut acc = T::zero();
            for i in 0..D {
                acc = acc + self.data[i] * rhs[[i, j]];
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> Dot for Tensor<T, 2, D, L> {
    type Output = Self;

    fn dot(self, rhs: Self) -> Self {
        Self::from_fn(|[i, j]| {
            let mut acc = T::zero();
            for k in 0..D {
                acc = acc + self[[i, k]] * rhs[[k, j]];
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const LP: usize, const LS: usize>
    Dot<SymmetricTensor<T, 2, D, LS>> for Tensor<T, 2, D, LP>
{
    type Output = Tensor<T, 2, D, LP>;

    fn dot(self, rhs: SymmetricTensor<T, 2, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j]| {
            let mut acc = T::zero();
            for k in 0..D {
                acc = acc + self[[i, k]] * rhs[[k, j]];
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const LP: usize, const LS: usize>
    Dot<Tensor<T, 2, D, LP>> for SymmetricTensor<T, 2, D, LS>
{
    type Output = Tensor<T, 2, D, LP>;

    fn dot(self, rhs: Tensor<T, 2, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j]| {
            let mut acc = T::zero();
            for k in 0..D {
                acc = acc + self[[i, k]] * rhs[[k, j]];
            }
            acc
        })
    }
}

// ============================================================================
// Double contraction, order 2 x order 2 -> scalar
// ============================================================================

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> DoubleContract
    for Tensor<T, 2, D, L>
{
    type Output = T;

    fn dcontract(self, rhs: Self) -> T {
        // Identical row-major layouts, so the sum runs over flat storage.
        let mut acc = T::zero();
        for p in 0..L {
            acc = acc + self.data[p] * rhs.data[p];
        }
        acc
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> DoubleContract
    for SymmetricTensor<T, 2, D, L>
{
    type Output = T;

    fn dcontract(self, rhs: Self) -> T {
        let mut acc = T::zero();
        for i in 0..D {
            for j in i..D {
                let term = self[[i, j]] * rhs[[i, j]];
                acc = acc + term;
                if i != j {
                    acc = acc + term;
                }
            }
        }
        acc
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const LP: usize, const LS: usize>
    DoubleContract<SymmetricTensor<T, 2, D, LS>> for Tensor<T, 2, D, LP>
{
    type Output = T;

    fn dcontract(self, rhs: SymmetricTensor<T, 2, D, LS>) -> T {
        let mut acc = T::zero();
        for i in 0..D {
            for j in 0..D {
                acc = acc + self[[i, j]] * rhs[[i, j]];
            }
        }
        acc
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const LP: usize, const LS: usize>
    DoubleContract<Tensor<T, 2, D, LP>> for SymmetricTensor<T, 2, D, LS>
{
    type Output = T;

    fn dcontract(self, rhs: Tensor<T, 2, D, LP>) -> T {
        let mut acc = T::zero();
        for i in 0..D {
            for j in 0..D {
                acc = acc + self[[i, j]] * rhs[[i, j]];
            }
        }
        acc
    }
}

// ============================================================================
// Double contraction, order 4 x order 2 and order 2 x order 4
// ============================================================================

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L4: usize, const L2: usize>
    DoubleContract<Tensor<T, 2, D, L2>> for Tensor<T, 4, D, L4>
{
    type Output = Tensor<T, 2, D, L2>;

    fn dcontract(self, rhs: Tensor<T, 2, D, L2>) -> Self::Output {
        Tensor::from_fn(|[i, j]| {
            let mut acc = T::zero();
            for k in 0..D {
                for l in 0..D {
                    acc = acc + self[[i, j, k, l]] * rhs[[k, l]];
                }
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L4: usize, const L2: usize>
    DoubleContract<SymmetricTensor<T, 2, D, L2>> for SymmetricTensor<T, 4, D, L4>
{
    type Output = SymmetricTensor<T, 2, D, L2>;

    fn dcontract(self, rhs: SymmetricTensor<T, 2, D, L2>) -> Self::Output {
        SymmetricTensor::<T, 2, D, L2>::from_fn(|[i, j]| {
            let mut acc = T::zero();
            for k in 0..D {
                for l in k..D {
                    let term = self[[i, j, k, l]] * rhs[[k, l]];
                    acc = acc + term;
                    if k != l {
                        acc = acc + term;
                    }
                }
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L4: usize, const L2: usize>
    DoubleContract<Tensor<T, 2, D, L2>> for SymmetricTensor<T, 4, D, L4>
{
    type Output = Tensor<T, 2, D, L2>;

    fn dcontract(self, rhs: Tensor<T, 2, D, L2>) -> Self::Output {
        Tensor::from_fn(|[i, j]| {
            let mut acc = T::zero();
            for k in 0..D {
                for l in 0..D {
                    acc = acc + self[[i, j, k, l]] * rhs[[k, l]];
                }
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L4: usize, const L2: usize>
    DoubleContract<Tensor<T, 4, D, L4>> for Tensor<T, 2, D, L2>
{
    type Output = Tensor<T, 2, D, L2>;

    fn dcontract(self, rhs: Tensor<T, 4, D, L4>) -> Self::Output {
        Tensor::from_fn(|[k, l]| {
            let mut acc = T::zero();
            for i in 0..D {
                for j in 0..D {
                    acc = acc + self[[i, j]] * rhs[[i, j, k, l]];
                }
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L4: usize, const L2: usize>
    DoubleContract<SymmetricTensor<T, 4, D, L4>> for SymmetricTensor<T, 2, D, L2>
{
    type Output = SymmetricTensor<T, 2, D, L2>;

    fn dcontract(self, rhs: SymmetricTensor<T, 4, D, L4>) -> Self::Output {
        SymmetricTensor::<T, 2, D, L2>::from_fn(|[k, l]| {
            let mut acc = T::zero();
            for i in 0..D {
                for j in i..D {
                    let term = self[[i, j]] * rhs[[i, j, k, l]];
                    acc = acc + term;
                    if i != j {
                        acc = acc + term;
                    }
                }
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L4: usize, const L2: usize>
    DoubleContract<SymmetricTensor<T, 4, D, L4>> for Tensor<T, 2, D, L2>
{
    type Output = Tensor<T, 2, D, L2>;

    fn dcontract(self, rhs: SymmetricTensor<T, 4, D, L4>) -> Self::Output {
        Tensor::from_fn(|[k, l]| {
            let mut acc = T::zero();
            for i in 0..D {
                for j in 0..D {
                    acc = acc + self[[i, j]] * rhs[[i, j, k, l]];
                }
            }
            acc
        })
    }
}

// ============================================================================
// Double contraction, order 4 x order 4
// ============================================================================

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> DoubleContract
    for Tensor<T, 4, D, L>
{
    type Output = Self;

    fn dcontract(self, rhs: Self) -> Self {
        Self::from_fn(|[i, j, k, l]| {
            let mut acc = T::zero();
            for m in 0..D {
                for n in 0..D {
                    acc = acc + self[[i, j, m, n]] * rhs[[m, n, k, l]];
                }
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const L: usize> DoubleContract
    for SymmetricTensor<T, 4, D, L>
{
    type Output = Self;

    fn dcontract(self, rhs: Self) -> Self {
        Self::from_fn(|[i, j, k, l]| {
            let mut acc = T::zero();
            for m in 0..D {
                for n in m..D {
                    let term = self[[i, j, m, n]] * rhs[[m, n, k, l]];
                    acc = acc + term;
                    if m != n {
                        acc = acc + term;
                    }
                }
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const LP: usize, const LS: usize>
    DoubleContract<SymmetricTensor<T, 4, D, LS>> for Tensor<T, 4, D, LP>
{
    type Output = Tensor<T, 4, D, LP>;

    fn dcontract(self, rhs: SymmetricTensor<T, 4, D, LS>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| {
            let mut acc = T::zero();
            for m in 0..D {
                for n in 0..D {
                    acc = acc + self[[i, j, m, n]] * rhs[[m, n, k, l]];
                }
            }
            acc
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>, const D: usize, const LP: usize, const LS: usize>
    DoubleContract<Tensor<T, 4, D, LP>> for SymmetricTensor<T, 4, D, LS>
{
    type Output = Tensor<T, 4, D, LP>;

    fn dcontract(self, rhs: Tensor<T, 4, D, LP>) -> Self::Output {
        Tensor::from_fn(|[i, j, k, l]| {
            let mut acc = T::zero();
            for m in 0..D {
                for n in 0..D {
                    acc = acc + self[[i, j, m, n]] * rhs[[m, n, k, l]];
                }
            }
            acc
        })
    }
}

// ============================================================================
// Per-dimension expansions
// ============================================================================

// Pairings whose result storage length is not derivable from the operand
// types on stable Rust, expanded once per spatial dimension with literal
// component counts.
macro_rules! impl_dim_contractions {
    (dim = $d:literal, full2 = $f2:literal, sym2 = $s2:literal, full4 = $f4:literal, sym4 = $s4:literal) => {
        // The product of two symmetric matrices is not symmetric in general.
        impl<T: Copy + Zero + Mul<Output = T>> Dot for SymmetricTensor<T, 2, $d, $s2> {
            type Output = Tensor<T, 2, $d, $f2>;

            fn dot(self, rhs: Self) -> Self::Output {
                Tensor::from_fn(|[i, j]| {
                    let mut acc = T::zero();
                    for k in 0..$d {
                        acc = acc + self[[i, k]] * rhs[[k, j]];
                    }
                    acc
                })
            }
        }

        impl<T: Copy + Zero + Mul<Output = T>> DoubleContract<SymmetricTensor<T, 2, $d, $s2>>
            for Tensor<T, 4, $d, $f4>
        {
            type Output = Tensor<T, 2, $d, $f2>;

            fn dcontract(self, rhs: SymmetricTensor<T, 2, $d, $s2>) -> Self::Output {
                Tensor::from_fn(|[i, j]| {
                    let mut acc = T::zero();
                    for k in 0..$d {
                        for l in 0..$d {
                            acc = acc + self[[i, j, k, l]] * rhs[[k, l]];
                        }
                    }
                    acc
                })
            }
        }

        impl<T: Copy + Zero + Mul<Output = T>> DoubleContract<Tensor<T, 4, $d, $f4>>
            for SymmetricTensor<T, 2, $d, $s2>
        {
            type Output = Tensor<T, 2, $d, $f2>;

            fn dcontract(self, rhs: Tensor<T, 4, $d, $f4>) -> Self::Output {
                Tensor::from_fn(|[k, l]| {
                    let mut acc = T::zero();
                    for i in 0..$d {
                        for j in 0..$d {
                            acc = acc + self[[i, j]] * rhs[[i, j, k, l]];
                        }
                    }
                    acc
                })
            }
        }

        impl<T: Copy + Mul<Output = T>> Otimes for Tensor<T, 1, $d, $d> {
            type Output = Tensor<T, 2, $d, $f2>;

            fn otimes(self, rhs: Self) -> Self::Output {
                Tensor::from_array(std::array::from_fn(|p| {
                    self.data[p / $d] * rhs.data[p % $d]
                }))
            }
        }

        impl<T: Copy + Mul<Output = T>> Otimes for Tensor<T, 2, $d, $f2> {
            type Output = Tensor<T, 4, $d, $f4>;

            fn otimes(self, rhs: Self) -> Self::Output {
                Tensor::from_array(std::array::from_fn(|p| {
                    self.data[p / $f2] * rhs.data[p % $f2]
                }))
            }
        }

        // A[ij] B[kl] inherits both minor symmetries from its factors, so
        // this pairing keeps symmetric storage.
        impl<T: Copy + Mul<Output = T>> Otimes for SymmetricTensor<T, 2, $d, $s2> {
            type Output = SymmetricTensor<T, 4, $d, $s4>;

            fn otimes(self, rhs: Self) -> Self::Output {
                SymmetricTensor::from_array(std::array::from_fn(|p| {
                    self.data[p / $s2] * rhs.data[p % $s2]
                }))
            }
        }

        impl<T: Copy + Mul<Output = T>> Otimes<SymmetricTensor<T, 2, $d, $s2>>
            for Tensor<T, 2, $d, $f2>
        {
            type Output = Tensor<T, 4, $d, $f4>;

            fn otimes(self, rhs: SymmetricTensor<T, 2, $d, $s2>) -> Self::Output {
                Tensor::from_fn(|[i, j, k, l]| self[[i, j]] * rhs[[k, l]])
            }
        }

        impl<T: Copy + Mul<Output = T>> Otimes<Tensor<T, 2, $d, $f2>>
            for SymmetricTensor<T, 2, $d, $s2>
        {
            type Output = Tensor<T, 4, $d, $f4>;

            fn otimes(self, rhs: Tensor<T, 2, $d, $f2>) -> Self::Output {
                Tensor::from_fn(|[i, j, k, l]| self[[i, j]] * rhs[[k, l]])
            }
        }
    };
}

impl_dim_contractions!(dim = 1, full2 = 1, sym2 = 1, full4 = 1, sym4 = 1);
impl_dim_contractions!(dim = 2, full2 = 4, sym2 = 3, full4 = 16, sym4 = 9);
impl_dim_contractions!(dim = 3, full2 = 9, sym2 = 6, full4 = 81, sym4 = 36);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SymTensor2x2, Tensor2x2, Vec2};

    #[test]
    fn dot_matches_matrix_vector_product() {
        let m = Tensor2x2::from_array([1.0, 2.0, 3.0, 4.0]);
        let v = Vec2::from_array([5.0, 6.0]);
        assert_eq!(m.dot(v).components(), &[17.0, 39.0]);
        assert_eq!(v.dot(m).components(), &[23.0, 34.0]);
    }

    #[test]
    fn symmetric_dcontract_matches_full_sum() {
        let s = SymTensor2x2::from_array([1.0, 2.0, 3.0]);
        let full = s.to_plain::<4>();
        assert_eq!(s.dcontract(s), full.dcontract(full));
    }

    #[test]
    fn vector_outer_product() {
        let a = Vec2::from_array([1.0, 2.0]);
        let b = Vec2::from_array([3.0, 4.0]);
        let t = a.otimes(b);
        assert_eq!(t.components(), &[3.0, 4.0, 6.0, 8.0]);
    }
}
