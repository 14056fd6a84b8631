//! Flat-offset index mapping.
//!
//! Plain tensors linearize their multi-index row-major, a bijection onto
//! `[0, dim^order)`. Symmetric order-2 tensors canonicalize `(i, j)` to
//! `(min, max)` and pack the upper triangle row by row, so mirrored index
//! pairs share one slot. Symmetric order-4 tensors reduce each of their
//! two index pairs with the order-2 rule and lay the pair offsets out
//! row-major over the reduced `n2 = dim (dim + 1) / 2` space; the minor
//! symmetries collapse by construction while `(i,j,k,l)` and `(k,l,i,j)`
//! stay distinct.

/// Row-major offset of a multi-index of any order.
#[inline]
pub(crate) fn linear(dim: usize, index: &[usize]) -> usize {
    index.iter().fold(0, |acc, &i| acc * dim + i)
}

/// One multi-index per row-major offset; inverse of [`linear`].
#[inline]
pub(crate) fn unflatten<const O: usize>(dim: usize, offset: usize) -> [usize; O] {
    let mut index = [0usize; O];
    let mut rem = offset;
    let mut axis = O;
    while axis > 0 {
        axis -= 1;
        index[axis] = rem % dim;
        rem /= dim;
    }
    index
}

/// Canonical upper-triangle offset of an order-2 index pair.
#[inline]
pub(crate) const fn sym2(dim: usize, i: usize, j: usize) -> usize {
    let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
    lo * (2 * dim - lo + 1) / 2 + (hi - lo)
}

/// Canonical `(i, j)` pair stored at a symmetric order-2 offset.
#[inline]
pub(crate) const fn inv_sym2(dim: usize, offset: usize) -> (usize, usize) {
    let mut i = 0;
    let mut row_start = 0;
    while row_start + (dim - i) <= offset {
        row_start += dim - i;
        i += 1;
    }
    (i, i + (offset - row_start))
}

/// Offset of an order-4 index tuple under the minor symmetries.
#[inline]
pub(crate) const fn sym4(dim: usize, i: usize, j: usize, k: usize, l: usize) -> usize {
    let n2 = dim * (dim + 1) / 2;
    sym2(dim, i, j) * n2 + sym2(dim, k, l)
}

/// Canonical `(i, j, k, l)` tuple stored at a symmetric order-4 offset.
#[inline]
pub(crate) const fn inv_sym4(dim: usize, offset: usize) -> (usize, usize, usize, usize) {
    let n2 = dim * (dim + 1) / 2;
    let (i, j) = inv_sym2(dim, offset / n2);
    let (k, l) = inv_sym2(dim, offset % n2);
    (i, j, k, l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_round_trip() {
        for dim in 1..=3 {
            for offset in 0..dim * dim {
                let idx = unflatten::<2>(dim, offset);
                assert_eq!(linear(dim, &idx), offset);
            }
            for offset in 0..dim * dim * dim * dim {
                let idx = unflatten::<4>(dim, offset);
                assert_eq!(linear(dim, &idx), offset);
            }
        }
    }

    #[test]
    fn sym2_is_permutation_invariant() {
        for dim in 1..=3 {
            for i in 0..dim {
                for j in 0..dim {
                    assert_eq!(sym2(dim, i, j), sym2(dim, j, i));
                }
            }
        }
    }

    #[test]
    fn sym2_canonical_offsets_cover_range_once() {
        for dim in 1..=3usize {
            let n2 = dim * (dim + 1) / 2;
            let mut seen = vec![false; n2];
            for i in 0..dim {
                for j in i..dim {
                    let offset = sym2(dim, i, j);
                    assert!(offset < n2);
                    assert!(!seen[offset], "duplicate offset for ({i}, {j})");
                    seen[offset] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn sym2_round_trip() {
        for dim in 1..=3usize {
            let n2 = dim * (dim + 1) / 2;
            for offset in 0..n2 {
                let (i, j) = inv_sym2(dim, offset);
                assert!(i <= j && j < dim);
                assert_eq!(sym2(dim, i, j), offset);
            }
        }
    }

    #[test]
    fn sym4_minor_symmetries_share_offsets() {
        for dim in 1..=3 {
            for i in 0..dim {
                for j in 0..dim {
                    for k in 0..dim {
                        for l in 0..dim {
                            let offset = sym4(dim, i, j, k, l);
                            assert_eq!(offset, sym4(dim, j, i, k, l));
                            assert_eq!(offset, sym4(dim, i, j, l, k));
                            assert_eq!(offset, sym4(dim, j, i, l, k));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn sym4_major_symmetry_is_not_collapsed() {
        assert_ne!(sym4(2, 0, 0, 1, 1), sym4(2, 1, 1, 0, 0));
        assert_ne!(sym4(3, 0, 1, 2, 2), sym4(3, 2, 2, 0, 1));
    }

    #[test]
    fn sym4_canonical_offsets_cover_range_once() {
        for dim in 1..=3usize {
            let n2 = dim * (dim + 1) / 2;
            let mut seen = vec![false; n2 * n2];
            for i in 0..dim {
                for j in i..dim {
                    for k in 0..dim {
                        for l in k..dim {
                            let offset = sym4(dim, i, j, k, l);
                            assert!(offset < n2 * n2);
                            assert!(!seen[offset]);
                            seen[offset] = true;
                        }
                    }
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn sym4_round_trip() {
        for dim in 1..=3usize {
            let n2 = dim * (dim + 1) / 2;
            for offset in 0..n2 * n2 {
                let (i, j, k, l) = inv_sym4(dim, offset);
                assert!(i <= j && k <= l);
                assert_eq!(sym4(dim, i, j, k, l), offset);
            }
        }
    }
}
