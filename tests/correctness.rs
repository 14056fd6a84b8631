use approx::assert_relative_eq;
use tensorial::{
    Dot, DoubleContract, Otimes, SymTensor2x1, SymTensor2x2, SymTensor2x3, SymTensor4x1,
    SymTensor4x3, Tensor2x1, Tensor2x2, Tensor2x3, Tensor4x2, Tensor4x3, Vec1, Vec3,
};

fn make_tensor2() -> Tensor2x3 {
    Tensor2x3::from_fn(|[i, j]| (3 * i + j + 1) as f64)
}

fn make_sym2() -> SymTensor2x3 {
    SymTensor2x3::from_fn(|[i, j]| (i + j + 1) as f64)
}

#[test]
fn test_dot_matrix_product() {
    let a = make_tensor2();
    let b = Tensor2x3::from_fn(|[i, j]| (i as f64) - 2.0 * (j as f64));
    let c = a.dot(b);
    for i in 0..3 {
        for j in 0..3 {
            let expected: f64 = (0..3).map(|k| a[[i, k]] * b[[k, j]]).sum();
            assert_relative_eq!(c[[i, j]], expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_dot_symmetric_pair_is_plain() {
    let s = make_sym2();
    // the product of two symmetric tensors lands in plain storage
    let c: Tensor2x3 = s.dot(s);
    for i in 0..3 {
        for j in 0..3 {
            let expected: f64 = (0..3).map(|k| s[[i, k]] * s[[k, j]]).sum();
            assert_relative_eq!(c[[i, j]], expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_dcontract_identity_dim3_is_3() {
    let id: SymTensor2x3 = SymTensor2x3::identity();
    assert_relative_eq!(id.dcontract(id), 3.0, epsilon = 1e-12);
    let id_plain: Tensor2x3 = Tensor2x3::identity();
    assert_relative_eq!(id_plain.dcontract(id_plain), 3.0, epsilon = 1e-12);
}

#[test]
fn test_dcontract_mixed_symmetry_agrees_with_expansion() {
    let a = make_tensor2();
    let s = make_sym2();
    let full = s.to_plain::<9>();
    assert_relative_eq!(a.dcontract(s), a.dcontract(full), epsilon = 1e-12);
    assert_relative_eq!(s.dcontract(a), full.dcontract(a), epsilon = 1e-12);
}

#[test]
fn test_dcontract_order4_order2() {
    let c = Tensor4x2::from_fn(|[i, j, k, l]| (8 * i + 4 * j + 2 * k + l) as f64);
    let a = Tensor2x2::from_fn(|[i, j]| (2 * i + j + 1) as f64);
    let r = c.dcontract(a);
    for i in 0..2 {
        for j in 0..2 {
            let mut expected = 0.0;
            for k in 0..2 {
                for l in 0..2 {
                    expected += c[[i, j, k, l]] * a[[k, l]];
                }
            }
            assert_relative_eq!(r[[i, j]], expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_symmetric_identity_maps_symmetric_tensors_to_themselves() {
    let ii: SymTensor4x3 = SymTensor4x3::identity();
    let s = make_sym2();
    let mapped = ii.dcontract(s);
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(mapped[[i, j]], s[[i, j]], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_plain_identity_maps_tensors_to_themselves() {
    let ii: Tensor4x3 = Tensor4x3::identity();
    let a = make_tensor2();
    let mapped = ii.dcontract(a);
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(mapped[[i, j]], a[[i, j]], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_dcontract_order4_order4_matches_naive_sum() {
    let a = Tensor4x2::from_fn(|[i, j, k, l]| (i + 2 * j + 3 * k + 4 * l) as f64);
    let b = Tensor4x2::from_fn(|[i, j, k, l]| (i * j) as f64 - (k * l) as f64);
    let c = a.dcontract(b);
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                for l in 0..2 {
                    let mut expected = 0.0;
                    for m in 0..2 {
                        for n in 0..2 {
                            expected += a[[i, j, m, n]] * b[[m, n, k, l]];
                        }
                    }
                    assert_relative_eq!(c[[i, j, k, l]], expected, epsilon = 1e-12);
                }
            }
        }
    }
}

#[test]
fn test_det_closed_forms() {
    assert_relative_eq!(Tensor2x2::<f64>::identity().det(), 1.0);
    let diag: Tensor2x2 = [[2.0, 0.0], [0.0, 3.0]].into();
    assert_relative_eq!(diag.det(), 6.0);

    let m: Tensor2x3 = [[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]].into();
    // cofactor expansion by hand: 2*(12-1) - 1*(4-0) + 0 = 18
    assert_relative_eq!(m.det(), 18.0, epsilon = 1e-12);
    let s = m.try_to_symmetric::<6>().unwrap();
    assert_relative_eq!(s.det(), 18.0, epsilon = 1e-12);
}

#[test]
fn test_dev_removes_trace_and_reconstructs() {
    let a = make_tensor2();
    let d = a.dev();
    assert_relative_eq!(d.trace(), 0.0, epsilon = 1e-12);

    let reconstructed = d + Tensor2x3::identity() * (a.trace() / 3.0);
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(reconstructed[[i, j]], a[[i, j]], epsilon = 1e-12);
        }
    }

    let s = make_sym2();
    let ds = s.dev();
    assert_relative_eq!(ds.trace(), 0.0, epsilon = 1e-12);
    assert_eq!(ds[[0, 2]], ds[[2, 0]]);
}

#[test]
fn test_dev_into_overwrites_destination() {
    let a = make_tensor2();
    let mut dest = Tensor2x3::ones();
    a.dev_into(&mut dest);
    assert_relative_eq!(dest.trace(), 0.0, epsilon = 1e-12);
    assert_eq!(dest[[0, 1]], a[[0, 1]]);
}

#[test]
fn test_symmetrize_is_idempotent() {
    let a = make_tensor2();
    let s: SymTensor2x3 = a.symmetrize();
    assert_eq!(s.symmetrize(), s);
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(s[[i, j]], (a[[i, j]] + a[[j, i]]) / 2.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_tdot_is_symmetric_and_matches_transpose_product() {
    let a = make_tensor2();
    let t: SymTensor2x3 = a.tdot();
    let reference = a.transpose().dot(a);
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(t[[i, j]], reference[[i, j]], epsilon = 1e-12);
            assert_eq!(t[[i, j]], t[[j, i]]);
        }
    }
}

#[test]
fn test_outer_product_distributes_over_addition() {
    let a = Vec3::from_array([1.0, -2.0, 3.0]);
    let b = Vec3::from_array([0.5, 4.0, -1.0]);
    let c = Vec3::from_array([2.0, 0.0, 7.0]);
    let lhs = (a + b).otimes(c);
    let rhs = a.otimes(c) + b.otimes(c);
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(lhs[[i, j]], rhs[[i, j]], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_symmetric_outer_product_keeps_minor_symmetries() {
    let s = make_sym2();
    let c = s.otimes(s);
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                for l in 0..3 {
                    assert_eq!(c[[i, j, k, l]], s[[i, j]] * s[[k, l]]);
                    assert_eq!(c[[i, j, k, l]], c[[j, i, k, l]]);
                    assert_eq!(c[[i, j, k, l]], c[[i, j, l, k]]);
                }
            }
        }
    }
}

#[test]
fn test_outer_product_of_order2_operands() {
    let a = Tensor2x2::from_fn(|[i, j]| (2 * i + j + 1) as f64);
    let b = Tensor2x2::from_fn(|[i, j]| (i as f64) - (j as f64));
    let c = a.otimes(b);
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                for l in 0..2 {
                    assert_eq!(c[[i, j, k, l]], a[[i, j]] * b[[k, l]]);
                }
            }
        }
    }
}

#[test]
fn test_dimension_one_shapes() {
    let v = Vec1::from_array([2.0]);
    assert_eq!(v.dot(v), 4.0);
    assert_eq!(v.otimes(v)[[0, 0]], 4.0);

    let t = Tensor2x1::from_array([3.0]);
    assert_eq!(t.trace(), 3.0);
    assert_eq!(t.det(), 3.0);
    assert_eq!(t.dot(t)[[0, 0]], 9.0);

    let s = SymTensor2x1::<f64>::identity();
    assert_eq!(s[[0, 0]], 1.0);
    assert_eq!(s.dcontract(s), 1.0);

    let c = SymTensor4x1::<f64>::identity();
    assert_eq!(c.dcontract(s)[[0, 0]], 1.0);
}

#[test]
fn test_elementwise_complex_components() {
    use num_complex::Complex64;

    let a = SymTensor2x2::from_array([
        Complex64::new(1.0, 1.0),
        Complex64::new(0.0, -2.0),
        Complex64::new(3.0, 0.0),
    ]);
    let b = a + a;
    assert_eq!(b[[0, 1]], Complex64::new(0.0, -4.0));
    assert_eq!(b[[1, 0]], b[[0, 1]]);
}
