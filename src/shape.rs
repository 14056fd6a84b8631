//! Shape and storage model.
//!
//! Every tensor in this crate is tagged at the type level with an order
//! (1, 2 or 4), a spatial dimension (1, 2 or 3) and a storage kind (plain
//! or symmetric). This module ties those tags to a flat storage length:
//! the `const fn` component-count formulas are evaluated inside the shape
//! checks of [`crate::Tensor`] and [`crate::SymmetricTensor`], so an
//! unsupported combination fails to compile at its first point of use.
//!
//! The runtime [`Shape`] descriptor exists for validation utilities and
//! error reporting only; arithmetic never dispatches on it.

use crate::{Result, TensorError};

/// Storage kind of a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// All `dim^order` components are stored.
    Plain,
    /// Only canonical components are stored; multi-indices related by the
    /// symmetry permutations share one storage slot.
    Symmetric,
}

/// Number of stored components of a plain tensor.
///
/// Const-panics on an unsupported order or dimension, which surfaces as a
/// compile error wherever an invalid shape is instantiated.
pub const fn plain_components(order: usize, dim: usize) -> usize {
    assert!(dim >= 1 && dim <= 3, "spatial dimension must be 1, 2 or 3");
    match order {
        1 => dim,
        2 => dim * dim,
        4 => dim * dim * dim * dim,
        _ => panic!("tensor order must be 1, 2 or 4"),
    }
}

/// Number of stored components of a symmetric tensor.
///
/// Order 2 stores the upper triangle. Order 4 is stored as a matrix over
/// canonical index pairs: each of the two pairs is reduced to its
/// `n2 = dim (dim + 1) / 2` canonical forms, giving `n2 * n2` slots. Only
/// the minor symmetries are collapsed; `A[ijkl]` and `A[klij]` remain
/// distinct slots.
pub const fn symmetric_components(order: usize, dim: usize) -> usize {
    assert!(dim >= 1 && dim <= 3, "spatial dimension must be 1, 2 or 3");
    let n2 = dim * (dim + 1) / 2;
    match order {
        2 => n2,
        4 => n2 * n2,
        _ => panic!("symmetric storage requires tensor order 2 or 4"),
    }
}

/// Runtime shape descriptor.
///
/// Useful when validating externally supplied component sequences against
/// a shape picked at run time. Tensor values themselves fix their shape in
/// the type, so no arithmetic consults this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    order: usize,
    dim: usize,
    symmetry: Symmetry,
}

impl Shape {
    /// Tensor order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Spatial dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Storage kind.
    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Validate and build a shape descriptor.
    ///
    /// # Errors
    /// Returns [`TensorError::InvalidShape`] for an order outside
    /// `{1, 2, 4}`, a dimension outside `[1, 3]`, or symmetric storage
    /// requested for order 1.
    pub fn new(order: usize, dim: usize, symmetry: Symmetry) -> Result<Self> {
        let order_ok = matches!(order, 1 | 2 | 4);
        let dim_ok = (1..=3).contains(&dim);
        let sym_ok = !(order == 1 && symmetry == Symmetry::Symmetric);
        if !(order_ok && dim_ok && sym_ok) {
            return Err(TensorError::InvalidShape {
                order,
                dim,
                symmetry,
            });
        }
        Ok(Self {
            order,
            dim,
            symmetry,
        })
    }

    /// Number of stored components for this shape.
    pub fn component_count(&self) -> usize {
        match self.symmetry {
            Symmetry::Plain => plain_components(self.order, self.dim),
            Symmetry::Symmetric => symmetric_components(self.order, self.dim),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_counts_match_closed_forms() {
        let cases = [
            (1, 1, Symmetry::Plain, 1),
            (1, 2, Symmetry::Plain, 2),
            (1, 3, Symmetry::Plain, 3),
            (2, 2, Symmetry::Plain, 4),
            (2, 3, Symmetry::Plain, 9),
            (2, 2, Symmetry::Symmetric, 3),
            (2, 3, Symmetry::Symmetric, 6),
            (4, 2, Symmetry::Plain, 16),
            (4, 3, Symmetry::Plain, 81),
            (4, 2, Symmetry::Symmetric, 9),
            (4, 3, Symmetry::Symmetric, 36),
        ];
        for (order, dim, symmetry, expected) in cases {
            let shape = Shape::new(order, dim, symmetry).unwrap();
            assert_eq!(shape.component_count(), expected, "{shape:?}");
        }
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        assert!(Shape::new(3, 2, Symmetry::Plain).is_err());
        assert!(Shape::new(0, 2, Symmetry::Plain).is_err());
        assert!(Shape::new(2, 0, Symmetry::Plain).is_err());
        assert!(Shape::new(2, 4, Symmetry::Symmetric).is_err());
        assert!(Shape::new(1, 3, Symmetry::Symmetric).is_err());
    }
}
