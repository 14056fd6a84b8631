//! Fixed-size tensor value types.
//!
//! [`Tensor`] and [`SymmetricTensor`] wrap an inline `[T; LEN]` tagged with
//! a const-generic order and spatial dimension. `LEN` is fully determined
//! by the other two parameters; it exists as a separate parameter because
//! stable Rust cannot compute an array length from other const generics.
//! Every constructor evaluates [`Tensor::SHAPE_OK`], so a mismatched `LEN`,
//! an unsupported order or an out-of-range dimension fails to compile at
//! the first point of use. The aliases in the crate root ([`crate::Vec3`],
//! [`crate::Tensor2x3`], ...) spell the valid combinations.

use std::ops::Index;

use num_traits::{Float, NumCast, One, ToPrimitive, Zero};

use crate::index::{inv_sym2, inv_sym4, linear, sym2, sym4, unflatten};
use crate::shape::{plain_components, symmetric_components};
use crate::{Result, TensorError};

/// A dense tensor of compile-time order, dimension and storage length.
///
/// Components are stored row-major. Values are immutable apart from the
/// explicit bulk-write entry points ([`Tensor::load_components`] and the
/// `*_into` operations), which take `&mut self`/`&mut` destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tensor<T, const ORDER: usize, const DIM: usize, const LEN: usize> {
    pub(crate) data: [T; LEN],
}

/// A symmetry-reduced tensor of order 2 or 4.
///
/// Order 2 stores the upper triangle row by row; order 4 stores one slot
/// per pair of canonical index pairs (minor symmetries). Reads through any
/// symmetry-equivalent multi-index resolve to the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymmetricTensor<T, const ORDER: usize, const DIM: usize, const LEN: usize> {
    pub(crate) data: [T; LEN],
}

impl<T, const O: usize, const D: usize, const L: usize> Tensor<T, O, D, L> {
    /// Shape validity proof, evaluated once per instantiation.
    pub(crate) const SHAPE_OK: () = assert!(
        L == plain_components(O, D),
        "storage length does not match the tensor shape"
    );

    /// Wrap a flat component array in canonical (row-major) order.
    pub const fn from_array(data: [T; L]) -> Self {
        let () = Self::SHAPE_OK;
        Self { data }
    }

    /// Build from a generator invoked once per multi-index, in storage order.
    pub fn from_fn(mut f: impl FnMut([usize; O]) -> T) -> Self {
        let () = Self::SHAPE_OK;
        Self {
            data: std::array::from_fn(|p| f(unflatten::<O>(D, p))),
        }
    }

    /// Copy components from a flat slice.
    ///
    /// # Errors
    /// [`TensorError::ComponentCountMismatch`] when the slice length is not
    /// exactly the component count of the shape.
    pub fn from_slice(components: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        let () = Self::SHAPE_OK;
        if components.len() != L {
            return Err(TensorError::ComponentCountMismatch {
                expected: L,
                actual: components.len(),
            });
        }
        Ok(Self {
            data: std::array::from_fn(|p| components[p]),
        })
    }

    /// The all-zero tensor.
    pub fn zero() -> Self
    where
        T: Zero + Copy,
    {
        let () = Self::SHAPE_OK;
        Self {
            data: [T::zero(); L],
        }
    }

    /// Tensor with every stored component set to one.
    pub fn ones() -> Self
    where
        T: One + Copy,
    {
        let () = Self::SHAPE_OK;
        Self { data: [T::one(); L] }
    }

    /// Stored components in canonical offset order.
    pub fn components(&self) -> &[T] {
        &self.data
    }

    /// Overwrite storage from a flat component sequence.
    ///
    /// # Errors
    /// [`TensorError::ComponentCountMismatch`] on a length mismatch; the
    /// destination is left untouched in that case.
    pub fn load_components(&mut self, components: &[T]) -> Result<()>
    where
        T: Copy,
    {
        if components.len() != L {
            return Err(TensorError::ComponentCountMismatch {
                expected: L,
                actual: components.len(),
            });
        }
        self.data.copy_from_slice(components);
        Ok(())
    }

    /// Checked component access.
    pub fn get(&self, index: [usize; O]) -> Option<&T> {
        if index.iter().any(|&c| c >= D) {
            return None;
        }
        Some(&self.data[linear(D, &index)])
    }

    /// Apply `f` to every stored component.
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> Tensor<U, O, D, L>
    where
        T: Copy,
    {
        Tensor {
            data: std::array::from_fn(|p| f(self.data[p])),
        }
    }

    /// Convert the element type.
    ///
    /// # Errors
    /// [`TensorError::ScalarConversion`] when a component is not
    /// representable in `U`.
    pub fn cast<U>(&self) -> Result<Tensor<U, O, D, L>>
    where
        T: ToPrimitive + Copy,
        U: NumCast + Zero + Copy,
    {
        let mut data = [U::zero(); L];
        for (dst, src) in data.iter_mut().zip(self.data.iter()) {
            *dst = U::from(*src).ok_or(TensorError::ScalarConversion)?;
        }
        Ok(Tensor { data })
    }
}

impl<T, const O: usize, const D: usize, const L: usize> SymmetricTensor<T, O, D, L> {
    /// Shape validity proof, evaluated once per instantiation.
    ///
    /// `symmetric_components` const-panics for orders other than 2 and 4,
    /// so symmetric storage of a vector is unrepresentable.
    pub(crate) const SHAPE_OK: () = assert!(
        L == symmetric_components(O, D),
        "storage length does not match the symmetric tensor shape"
    );

    /// Wrap a flat array of canonical components.
    pub const fn from_array(data: [T; L]) -> Self {
        let () = Self::SHAPE_OK;
        Self { data }
    }

    /// Copy canonical components from a flat slice.
    ///
    /// # Errors
    /// [`TensorError::ComponentCountMismatch`] on a length mismatch.
    pub fn from_slice(components: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        let () = Self::SHAPE_OK;
        if components.len() != L {
            return Err(TensorError::ComponentCountMismatch {
                expected: L,
                actual: components.len(),
            });
        }
        Ok(Self {
            data: std::array::from_fn(|p| components[p]),
        })
    }

    /// The all-zero tensor.
    pub fn zero() -> Self
    where
        T: Zero + Copy,
    {
        let () = Self::SHAPE_OK;
        Self {
            data: [T::zero(); L],
        }
    }

    /// Tensor with every stored component set to one.
    pub fn ones() -> Self
    where
        T: One + Copy,
    {
        let () = Self::SHAPE_OK;
        Self { data: [T::one(); L] }
    }

    /// Stored canonical components in offset order.
    pub fn components(&self) -> &[T] {
        &self.data
    }

    /// Overwrite storage from a flat sequence of canonical components.
    ///
    /// # Errors
    /// [`TensorError::ComponentCountMismatch`] on a length mismatch; the
    /// destination is left untouched in that case.
    pub fn load_components(&mut self, components: &[T]) -> Result<()>
    where
        T: Copy,
    {
        if components.len() != L {
            return Err(TensorError::ComponentCountMismatch {
                expected: L,
                actual: components.len(),
            });
        }
        self.data.copy_from_slice(components);
        Ok(())
    }

    /// Apply `f` to every stored component.
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> SymmetricTensor<U, O, D, L>
    where
        T: Copy,
    {
        SymmetricTensor {
            data: std::array::from_fn(|p| f(self.data[p])),
        }
    }

    /// Convert the element type.
    ///
    /// # Errors
    /// [`TensorError::ScalarConversion`] when a component is not
    /// representable in `U`.
    pub fn cast<U>(&self) -> Result<SymmetricTensor<U, O, D, L>>
    where
        T: ToPrimitive + Copy,
        U: NumCast + Zero + Copy,
    {
        let mut data = [U::zero(); L];
        for (dst, src) in data.iter_mut().zip(self.data.iter()) {
            *dst = U::from(*src).ok_or(TensorError::ScalarConversion)?;
        }
        Ok(SymmetricTensor { data })
    }
}

impl<T, const D: usize, const L: usize> SymmetricTensor<T, 2, D, L> {
    /// Build from a generator invoked once per canonical `(i, j)` pair
    /// with `i <= j`, in storage order.
    pub fn from_fn(mut f: impl FnMut([usize; 2]) -> T) -> Self {
        let () = Self::SHAPE_OK;
        Self {
            data: std::array::from_fn(|p| {
                let (i, j) = inv_sym2(D, p);
                f([i, j])
            }),
        }
    }

    /// Checked component access; mirrored pairs read the same slot.
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        if index[0] >= D || index[1] >= D {
            return None;
        }
        Some(&self.data[sym2(D, index[0], index[1])])
    }
}

impl<T, const D: usize, const L: usize> SymmetricTensor<T, 4, D, L> {
    /// Build from a generator invoked once per canonical `(i, j, k, l)`
    /// tuple with `i <= j` and `k <= l`, in storage order.
    pub fn from_fn(mut f: impl FnMut([usize; 4]) -> T) -> Self {
        let () = Self::SHAPE_OK;
        Self {
            data: std::array::from_fn(|p| {
                let (i, j, k, l) = inv_sym4(D, p);
                f([i, j, k, l])
            }),
        }
    }

    /// Checked component access through any minor-symmetry-equivalent index.
    pub fn get(&self, index: [usize; 4]) -> Option<&T> {
        if index.iter().any(|&c| c >= D) {
            return None;
        }
        Some(&self.data[sym4(D, index[0], index[1], index[2], index[3])])
    }
}

// ============================================================================
// Identity tensors
// ============================================================================

impl<T: Zero + One + Copy, const D: usize, const L: usize> Tensor<T, 2, D, L> {
    /// The second-order identity.
    pub fn identity() -> Self {
        Self::from_fn(|[i, j]| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Zero + One + Copy, const D: usize, const L: usize> SymmetricTensor<T, 2, D, L> {
    /// The second-order identity.
    pub fn identity() -> Self {
        Self::from_fn(|[i, j]| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Zero + One + Copy, const D: usize, const L: usize> Tensor<T, 4, D, L> {
    /// The fourth-order identity `δik δjl`: maps any second-order tensor
    /// to itself under double contraction.
    pub fn identity() -> Self {
        Self::from_fn(|[i, j, k, l]| {
            if i == k && j == l {
                T::one()
            } else {
                T::zero()
            }
        })
    }
}

impl<T: Float, const D: usize, const L: usize> SymmetricTensor<T, 4, D, L> {
    /// The symmetric fourth-order identity `½(δik δjl + δil δjk)`: maps a
    /// symmetric second-order tensor to itself under double contraction.
    pub fn identity() -> Self {
        let two = T::one() + T::one();
        Self::from_fn(|[i, j, k, l]| {
            let ik_jl = if i == k && j == l { T::one() } else { T::zero() };
            let il_jk = if i == l && j == k { T::one() } else { T::zero() };
            (ik_jl + il_jk) / two
        })
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T, const O: usize, const D: usize, const L: usize> Index<[usize; O]> for Tensor<T, O, D, L> {
    type Output = T;

    fn index(&self, index: [usize; O]) -> &T {
        for &c in &index {
            assert!(c < D, "tensor index out of bounds");
        }
        &self.data[linear(D, &index)]
    }
}

impl<T, const D: usize, const L: usize> Index<[usize; 2]> for SymmetricTensor<T, 2, D, L> {
    type Output = T;

    fn index(&self, index: [usize; 2]) -> &T {
        assert!(index[0] < D && index[1] < D, "tensor index out of bounds");
        &self.data[sym2(D, index[0], index[1])]
    }
}

impl<T, const D: usize, const L: usize> Index<[usize; 4]> for SymmetricTensor<T, 4, D, L> {
    type Output = T;

    fn index(&self, index: [usize; 4]) -> &T {
        for &c in &index {
            assert!(c < D, "tensor index out of bounds");
        }
        &self.data[sym4(D, index[0], index[1], index[2], index[3])]
    }
}

impl<T: Copy, const D: usize, const L: usize> From<[[T; D]; D]> for Tensor<T, 2, D, L> {
    fn from(rows: [[T; D]; D]) -> Self {
        Self::from_fn(|[i, j]| rows[i][j])
    }
}
