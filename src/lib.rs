//! Allocation-free fixed-size tensor algebra for continuum mechanics.
//!
//! This crate provides vectors, second-order and fourth-order tensors of
//! compile-time order (1, 2 or 4) and spatial dimension (1, 2 or 3), in
//! plain and symmetric storage variants. Symmetric storage keeps one slot
//! per canonical component, halving-or-better the footprint and arithmetic
//! of the dense representation.
//!
//! # Core Types
//!
//! - [`Tensor`]: dense storage, `dim^order` components, row-major
//! - [`SymmetricTensor`]: canonical components only; order 2 stores the
//!   upper triangle, order 4 collapses the two minor symmetries
//! - Aliases ([`Vec3`], [`Tensor2x3`], [`SymTensor4x3`], ...) name the 15
//!   valid (order, dimension, symmetry) combinations
//!
//! Shapes are const-generic: an unsupported order, an out-of-range
//! dimension or a storage length that does not match the shape fails to
//! compile at the first point of use, and operator impls exist only for
//! compatible operand pairings.
//!
//! # Primary API
//!
//! ## Elementwise
//!
//! `+`, `-`, unary `-`, scalar `*` and `/`, plus [`MulElem`]/[`DivElem`]
//! for the elementwise product and quotient. Symmetric op symmetric stays
//! symmetric; symmetric op plain promotes to plain storage.
//!
//! ## Contractions
//!
//! - [`Dot`]: single contraction (matrix-vector, matrix-matrix)
//! - [`DoubleContract`]: double contraction `A : B`
//! - [`Otimes`]: outer product
//!
//! ## Second-order calculus
//!
//! `trace`, `transpose`, `det`, `dev`/`dev_into` (deviatoric part),
//! `symmetrize`/`symmetrize_into`, `tdot` (`At . A`, always symmetric).
//! The `*_into` variants write a caller-owned destination for hot loops.
//!
//! ## Conversion
//!
//! `to_plain` expands symmetric storage; `try_to_symmetric` validates the
//! symmetry relation and fails on asymmetric input; `cast`/`map` convert
//! the element type.
//!
//! # Example
//!
//! ```rust
//! use tensorial::{Dot, DoubleContract, SymTensor2x3, Tensor2x3};
//!
//! let a = Tensor2x3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
//! // Canonical order: (0,0), (0,1), (0,2), (1,1), (1,2), (2,2).
//! let s = SymTensor2x3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//!
//! assert_eq!(s[[0, 1]], s[[1, 0]]);
//!
//! let sum = s + a; // symmetric + plain promotes to plain storage
//! assert_eq!(sum[[1, 0]], 2.0 + 4.0);
//!
//! let product = a.dot(a); // matrix product
//! assert_eq!(product[[0, 0]], 30.0);
//!
//! let full: f64 = a.dcontract(a); // scalar double contraction
//! assert_eq!(full, 285.0);
//!
//! let identity: SymTensor2x3 = SymTensor2x3::identity();
//! assert_eq!(identity.dcontract(identity), 3.0);
//! ```

mod contract;
mod index;
mod linalg;
mod ops;
mod promote;
pub mod shape;
mod tensor;

pub use contract::{Dot, DoubleContract, Otimes};
pub use ops::{DivElem, MulElem};
pub use shape::{plain_components, symmetric_components, Shape, Symmetry};
pub use tensor::{SymmetricTensor, Tensor};

// ============================================================================
// Shape aliases
// ============================================================================

/// Vector, dimension 1.
pub type Vec1<T = f64> = Tensor<T, 1, 1, 1>;
/// Vector, dimension 2.
pub type Vec2<T = f64> = Tensor<T, 1, 2, 2>;
/// Vector, dimension 3.
pub type Vec3<T = f64> = Tensor<T, 1, 3, 3>;

/// Second-order tensor, dimension 1.
pub type Tensor2x1<T = f64> = Tensor<T, 2, 1, 1>;
/// Second-order tensor, dimension 2.
pub type Tensor2x2<T = f64> = Tensor<T, 2, 2, 4>;
/// Second-order tensor, dimension 3.
pub type Tensor2x3<T = f64> = Tensor<T, 2, 3, 9>;

/// Fourth-order tensor, dimension 1.
pub type Tensor4x1<T = f64> = Tensor<T, 4, 1, 1>;
/// Fourth-order tensor, dimension 2.
pub type Tensor4x2<T = f64> = Tensor<T, 4, 2, 16>;
/// Fourth-order tensor, dimension 3.
pub type Tensor4x3<T = f64> = Tensor<T, 4, 3, 81>;

/// Symmetric second-order tensor, dimension 1.
pub type SymTensor2x1<T = f64> = SymmetricTensor<T, 2, 1, 1>;
/// Symmetric second-order tensor, dimension 2.
pub type SymTensor2x2<T = f64> = SymmetricTensor<T, 2, 2, 3>;
/// Symmetric second-order tensor, dimension 3.
pub type SymTensor2x3<T = f64> = SymmetricTensor<T, 2, 3, 6>;

/// Minor-symmetric fourth-order tensor, dimension 1.
pub type SymTensor4x1<T = f64> = SymmetricTensor<T, 4, 1, 1>;
/// Minor-symmetric fourth-order tensor, dimension 2.
pub type SymTensor4x2<T = f64> = SymmetricTensor<T, 4, 2, 9>;
/// Minor-symmetric fourth-order tensor, dimension 3.
pub type SymTensor4x3<T = f64> = SymmetricTensor<T, 4, 3, 36>;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur when building or converting tensors.
///
/// Shape validity and operand compatibility are enforced at compile time;
/// the runtime errors all concern caller-supplied data.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    /// The (order, dimension, symmetry) combination is unsupported.
    #[error("invalid tensor shape: order {order}, dimension {dim}, {symmetry:?}")]
    InvalidShape {
        order: usize,
        dim: usize,
        symmetry: Symmetry,
    },

    /// A flat component sequence does not match the shape's count.
    #[error("component count mismatch: expected {expected}, got {actual}")]
    ComponentCountMismatch { expected: usize, actual: usize },

    /// A plain tensor failed the symmetry check during reduction.
    #[error("tensor is not symmetric: components at {0:?} and {1:?} differ")]
    NotSymmetric(Vec<usize>, Vec<usize>),

    /// An element was not representable in the requested type.
    #[error("failed to convert scalar")]
    ScalarConversion,
}

/// Result type for tensor operations.
pub type Result<T> = std::result::Result<T, TensorError>;
