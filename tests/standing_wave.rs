mod common;

use std::f64::consts::PI;

use swr::{ComputeDescriptor, Solver, Vswr};

use common::{default_solver, solver};

fn times_over_one_period(nsamples: usize) -> impl Iterator<Item = f64> {
    (0..nsamples).map(move |n| n as f64 / nsamples as f64)
}

#[test]
fn total_is_exact_sum_of_forward_and_reflected() {
    for vswr in common::default_vswrs() {
        let solver = default_solver(vswr);
        for t in [0.0, 0.13, 1.7, 2.02, 12.5] {
            let w = solver.compute(ComputeDescriptor { time: t });
            assert_eq!(w.total.len(), 200);
            for j in 0..w.total.len() {
                assert_eq!(w.total[j], w.forward[j] + w.reflected[j]);
            }
        }
    }
}

#[test]
fn matched_line_has_no_standing_wave() {
    let solver = default_solver(Vswr::Finite(1.0));
    assert_eq!(solver.gamma(), 0.0);

    for t in times_over_one_period(37) {
        let w = solver.compute(ComputeDescriptor { time: t });
        assert_eq!(w.total, w.forward);
        assert!(w.reflected.iter().all(|&v| v == 0.0));
    }
}

#[test]
fn forward_wave_follows_closed_form() {
    let solver = default_solver(Vswr::Finite(3.0));
    let t = 0.37;
    let w = solver.compute(ComputeDescriptor { time: t });

    for (j, &x) in solver.positions().iter().enumerate() {
        let x = f64::from(x);
        let forward = f64::cos(2.0 * PI * t - 2.0 * PI * x);
        let reflected = 0.5 * f64::cos(2.0 * PI * t + 2.0 * PI * x);
        assert!((f64::from(w.forward[j]) - forward).abs() < 1e-6);
        assert!((f64::from(w.reflected[j]) - reflected).abs() < 1e-6);
    }
}

#[test]
fn evaluation_is_deterministic() {
    let solver = default_solver(Vswr::Finite(2.0));
    let a = solver.compute(ComputeDescriptor { time: 0.42 });
    let b = solver.compute(ComputeDescriptor { time: 0.42 });

    assert_eq!(a.forward, b.forward);
    assert_eq!(a.reflected, b.reflected);
    assert_eq!(a.total, b.total);
}

#[test]
fn full_reflection_has_fixed_nodes() {
    // quarter wavelength from the load and every half wavelength after it
    let nodes = solver(Vswr::Infinite, 0.25, 1.75, 4);

    for t in times_over_one_period(100) {
        let w = nodes.compute(ComputeDescriptor { time: t });
        for &v in w.total.iter() {
            assert!(v.abs() < 1e-5, "node voltage {v} at t={t}");
        }
    }
}

#[test]
fn full_reflection_antinodes_reach_twice_the_amplitude() {
    let antinodes = solver(Vswr::Infinite, 0.0, 1.5, 4);

    let mut peak = [0.0f32; 4];
    for t in times_over_one_period(100) {
        let w = antinodes.compute(ComputeDescriptor { time: t });
        for (p, &v) in peak.iter_mut().zip(w.total.iter()) {
            *p = p.max(v.abs());
        }
    }

    for p in peak {
        assert!((p - 2.0).abs() < 1e-5, "antinode peak {p}");
    }
}
