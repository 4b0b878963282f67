use super::*;
use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

fn close(x: f64, y: f64, tol: f64) -> bool {
    (x - y).abs() <= tol * x.abs().max(y.abs()).max(1.0)
}

#[test]
fn sss_equilateral() {
    let t = solve(Method::Sss, 5.0, 5.0, 5.0).unwrap();
    for angle in t.angles() {
        assert!((angle - FRAC_PI_3).abs() < 1e-12);
    }
    assert_eq!(t.type_by_sides(), TypeBySides::Equilateral);
    assert_eq!(t.type_by_angles(), TypeByAngles::Acute);
    assert_eq!(t.perimeter(), 15.0);
}

#[test]
fn sss_right_345() {
    let t = solve(Method::Sss, 3.0, 4.0, 5.0).unwrap();
    assert!((t.angles()[2] - FRAC_PI_2).abs() < 1e-12);
    assert_eq!(t.type_by_angles(), TypeByAngles::Right);
    assert_eq!(t.type_by_sides(), TypeBySides::Scalene);
    assert!(close(t.area(), 6.0, 1e-12));
    assert!(close(t.inradius(), 1.0, 1e-12));
    assert!(close(t.circumradius(), 2.5, 1e-12));
}

#[test]
fn sss_rejects_inequality_violations() {
    assert!(matches!(
        solve(Method::Sss, 1.0, 1.0, 3.0),
        Err(InvalidTriangleError::TriangleInequality { .. })
    ));
    // Degenerate (collinear) is rejected as well.
    assert!(matches!(
        solve(Method::Sss, 1.0, 1.0, 2.0),
        Err(InvalidTriangleError::TriangleInequality { .. })
    ));
    assert!(matches!(
        solve(Method::Sss, 0.0, 1.0, 1.0),
        Err(InvalidTriangleError::NonPositive { what: "side a", .. })
    ));
}

#[test]
fn ssa_isosceles_60_is_equilateral() {
    let t = solve(Method::Ssa, 5.0, 5.0, 60.0).unwrap();
    assert_eq!(t.type_by_sides(), TypeBySides::Equilateral);
    assert_eq!(t.type_by_angles(), TypeByAngles::Acute);
    // Independent SSS reconstruction agrees.
    let [a, b, c] = t.sides();
    let u = solve(Method::Sss, a, b, c).unwrap();
    assert_eq!(u.type_by_sides(), TypeBySides::Equilateral);
    for (x, y) in t.angles().into_iter().zip(u.angles()) {
        assert!((x - y).abs() < 1e-9);
    }
}

#[test]
fn ssa_keeps_obtuse_opposite_angle() {
    // a=10, b=3, C=30°: the angle opposite a is ~138.5°, which asin would fold to ~41.5°.
    let t = solve(Method::Ssa, 10.0, 3.0, 30.0).unwrap();
    let deg = t.angles_deg();
    assert!(deg[0] > 90.0, "angle A = {}", deg[0]);
    assert!((deg.iter().sum::<f64>() - 180.0).abs() < 1e-9);
    assert_eq!(t.type_by_angles(), TypeByAngles::Oblique);

    let [a, b, c] = t.sides();
    let u = solve(Method::Sss, a, b, c).unwrap();
    for (x, y) in t.angles().into_iter().zip(u.angles()) {
        assert!((x - y).abs() < 1e-9);
    }
}

#[test]
fn ssa_obtuse_included_angle() {
    let t = solve(Method::Ssa, 3.0, 4.0, 120.0).unwrap();
    assert!(close(t.sides()[2], 37.0f64.sqrt(), 1e-12));
    assert_eq!(t.type_by_angles(), TypeByAngles::Oblique);
    assert!((t.angles().iter().sum::<f64>() - PI).abs() < 1e-9);
}

#[test]
fn ssa_rejects_bad_angles() {
    for angle in [0.0, 180.0, -10.0, 200.0] {
        assert!(matches!(
            solve(Method::Ssa, 3.0, 4.0, angle),
            Err(InvalidTriangleError::AngleOutOfRange { what: "angle C", .. })
        ));
    }
}

#[test]
fn aas_equilateral() {
    let t = solve(Method::Aas, 60.0, 60.0, 10.0).unwrap();
    assert!((t.angles()[1] - FRAC_PI_3).abs() < 1e-12);
    for s in t.sides() {
        assert!(close(s, 10.0, 1e-12));
    }
    assert_eq!(t.type_by_sides(), TypeBySides::Equilateral);
    assert_eq!(t.type_by_angles(), TypeByAngles::Acute);
}

#[test]
fn aas_right_triangle() {
    // A=30°, C=60° → B=90°, b is the hypotenuse.
    let t = solve(Method::Aas, 30.0, 60.0, 2.0).unwrap();
    assert_eq!(t.type_by_angles(), TypeByAngles::Right);
    assert!(close(t.sides()[0], 1.0, 1e-12));
    assert!(close(t.sides()[2], 3.0f64.sqrt(), 1e-12));
}

#[test]
fn aas_rejects_angle_sum() {
    assert!(matches!(
        solve(Method::Aas, 100.0, 80.0, 1.0),
        Err(InvalidTriangleError::AngleSum { .. })
    ));
    assert!(matches!(
        solve(Method::Aas, 30.0, 30.0, -1.0),
        Err(InvalidTriangleError::NonPositive { what: "side b", .. })
    ));
}

#[test]
fn non_finite_inputs_are_named() {
    assert_eq!(
        solve(Method::Aas, f64::NAN, 30.0, 1.0),
        Err(InvalidTriangleError::NonFinite { what: "angle A" })
    );
    assert_eq!(
        solve(Method::Sss, 1.0, 1.0, f64::INFINITY),
        Err(InvalidTriangleError::NonFinite { what: "side c" })
    );
}

#[test]
fn vertices_match_sides_and_angles() {
    let t = solve(Method::Ssa, 10.0, 3.0, 30.0).unwrap();
    let [va, vb, vc] = t.vertices();
    let [a, b, c] = t.sides();
    assert_eq!(va, Vector2::new(0.0, 0.0));
    assert_eq!(vb.y, 0.0);
    assert!(vb.x > 0.0);
    assert!(close((vc - vb).norm(), a, 1e-12));
    assert!(close((vc - va).norm(), b, 1e-12));
    assert!(close((vb - va).norm(), c, 1e-12));
    // Interior angle at A.
    let ab = vb - va;
    let ac = vc - va;
    let alpha = (ab.dot(&ac) / (ab.norm() * ac.norm())).acos();
    assert!((alpha - t.angles()[0]).abs() < 1e-9);
}

#[test]
fn custom_tolerance_changes_side_label() {
    let loose = SolveCfg {
        eps_side_rel: 0.05,
        ..SolveCfg::default()
    };
    let t = solve_with_cfg(Method::Sss, [10.0, 10.2, 12.0], loose).unwrap();
    assert_eq!(t.type_by_sides(), TypeBySides::Isosceles);
    let t = solve(Method::Sss, 10.0, 10.2, 12.0).unwrap();
    assert_eq!(t.type_by_sides(), TypeBySides::Scalene);
}

#[test]
fn method_parsing() {
    assert_eq!("SSA".parse::<Method>().unwrap(), Method::Ssa);
    assert_eq!("anglesAndSide".parse::<Method>().unwrap(), Method::Aas);
    assert_eq!(" sss ".parse::<Method>().unwrap(), Method::Sss);
    assert!("ass".parse::<Method>().is_err());
    assert_eq!(Method::Aas.to_string(), "AAS");
}

#[test]
fn json_uses_string_labels_and_round_trips() {
    let t = solve(Method::Sss, 3.0, 4.0, 5.0).unwrap();
    let v = serde_json::to_value(t).unwrap();
    assert_eq!(v["typeBySides"], "Scalene");
    assert_eq!(v["typeByAngles"], "Right");
    assert_eq!(v["vertices"][1][0], 5.0);
    let back: TriangleSpec = serde_json::from_value(v).unwrap();
    assert_eq!(back, t);
    assert_eq!(serde_json::to_value(Method::Ssa).unwrap(), "sidesAndAngle");
    assert_eq!(
        serde_json::to_value(TypeBySides::NotATriangle).unwrap(),
        "Not a triangle"
    );
}

#[test]
fn tampered_json_is_rejected() {
    let t = solve(Method::Ssa, 4.0, 4.0, 50.0).unwrap();
    let mut data = TriangleData::from(t);
    data.perimeter += 1.0;
    assert!(TriangleSpec::try_from(data).is_err());

    let mut data = TriangleData::from(t);
    data.type_by_sides = TypeBySides::Scalene;
    assert!(TriangleSpec::try_from(data).is_err());

    let mut data = TriangleData::from(t);
    data.vertices[2][1] *= 2.0;
    assert!(TriangleSpec::try_from(data).is_err());

    let mut v = serde_json::to_value(t).unwrap();
    v["angles"][0] = serde_json::json!(0.1);
    assert!(serde_json::from_value::<TriangleSpec>(v).is_err());
}

#[test]
fn check_spec_accepts_fresh_results() {
    let cfg = SolveCfg::default();
    for (m, i) in [
        (Method::Ssa, [2.0, 7.0, 100.0]),
        (Method::Aas, [20.0, 135.0, 3.0]),
        (Method::Sss, [7.0, 8.0, 9.0]),
    ] {
        let t = solve_with_cfg(m, i, cfg).unwrap();
        assert!(check_spec(&t, &cfg).is_ok());
        assert_eq!(t.perimeter(), perimeter(t.sides()));
    }
}

#[test]
fn display_lists_degrees() {
    let t = solve(Method::Sss, 3.0, 4.0, 5.0).unwrap();
    let s = t.to_string();
    assert!(s.contains("C=90.000000"));
    assert!(s.contains("by angles:    Right"));
}

#[test]
fn ssa_small_included_angle_slivers_solve() {
    for a in [1.0, 2.0, 5.0] {
        for b in [10.0, 50.0, 100.0, 1000.0] {
            for angle in [0.05, 0.1, 0.5, 1.0, 2.5, 5.0] {
                let t = solve(Method::Ssa, a, b, angle)
                    .unwrap_or_else(|e| panic!("SSA {a} {b} {angle}: {e}"));
                let gamma = angle.to_radians();
                let c = (a * a + b * b - 2.0 * a * b * gamma.cos()).sqrt();
                assert!(close(t.sides()[2], c, 1e-10));
                assert!((t.angles().iter().sum::<f64>() - PI).abs() < 1e-12);

                let [x, y, z] = t.sides();
                let u = solve(Method::Sss, x, y, z)
                    .unwrap_or_else(|e| panic!("SSS {x} {y} {z}: {e}"));
                for (p, q) in t.angles().into_iter().zip(u.angles()) {
                    assert!((p - q).abs() < 1e-9);
                }
            }
        }
    }
}

#[test]
fn near_degenerate_triangles_solve() {
    let t = solve(Method::Ssa, 1.0, 1000.0, 0.5).unwrap();
    assert!(t.angles_deg()[0] < 0.001);
    assert_eq!(t.type_by_angles(), TypeByAngles::Oblique);

    let t = solve(Method::Sss, 1.0, 1000.0, 999.0000043).unwrap();
    assert!(t.angles_deg()[1] > 179.0);
    assert!((t.angles().iter().sum::<f64>() - PI).abs() < 1e-12);

    let t = solve(Method::Ssa, 1.0, 2.0, 179.9999).unwrap();
    assert!(close(t.sides()[2], 3.0, 1e-9));
    assert_eq!(t.type_by_sides(), TypeBySides::Scalene);

    let t = solve(Method::Sss, 1.0, 1.0, 1e-6).unwrap();
    assert_eq!(t.type_by_sides(), TypeBySides::Isosceles);
    assert_eq!(t.type_by_angles(), TypeByAngles::Acute);
    assert!(close(t.angles()[2], 1e-6, 1e-9));
    assert!(close(t.area(), 0.5e-6, 1e-9));

    // B close to 180°: sin B is taken as sin(A + C).
    let t = solve(Method::Aas, 1e-4, 2e-4, 1.0).unwrap();
    let (alpha, gamma) = (1e-4f64.to_radians(), 2e-4f64.to_radians());
    assert!(close(t.sides()[0], alpha.sin() / (alpha + gamma).sin(), 1e-12));
    assert!(close(t.sides()[2], gamma.sin() / (alpha + gamma).sin(), 1e-12));
}

#[test]
fn extreme_magnitudes_keep_angles() {
    for scale in [1e150, 1e-150] {
        let t = solve(Method::Sss, scale, scale, scale).unwrap();
        assert_eq!(t.type_by_sides(), TypeBySides::Equilateral);
        for angle in t.angles() {
            assert!((angle - FRAC_PI_3).abs() < 1e-12);
        }
        let expected = 3.0f64.sqrt() / 4.0 * scale * scale;
        assert!((t.area() - expected).abs() <= 1e-12 * expected);

        let t = solve(Method::Ssa, 3.0 * scale, 4.0 * scale, 90.0).unwrap();
        assert_eq!(t.type_by_angles(), TypeByAngles::Right);
        assert!((t.sides()[2] - 5.0 * scale).abs() <= 1e-12 * scale);
    }
    // The angles still come out, but the area itself leaves the f64 range.
    assert_eq!(
        solve(Method::Sss, 1e200, 1e200, 1e200),
        Err(InvalidTriangleError::NonFinite { what: "area" })
    );
    assert!(matches!(
        solve(Method::Sss, 1e-170, 1e-170, 1e-170),
        Err(InvalidTriangleError::NonPositive { what: "area", .. })
    ));
}
