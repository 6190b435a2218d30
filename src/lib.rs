#![allow(non_ascii_idents)]
#![allow(mixed_script_confusables)]

//! Brute-force, particle-based fluid simulation on a fixed population of particles, created
//! on a regular lattice. Each step runs density, force, and integration passes over all
//! particles, in that order; each pass is parallel over particles, and completes before the
//! next starts.

use rayon::prelude::*;

pub mod accel;
pub mod color;
pub mod config;
pub mod controls;
pub mod density;
pub mod error;
pub mod integrate;
pub mod lattice;
pub mod properties;
pub mod state;
pub mod units;
pub mod util;

pub use crate::{
    lattice::make_state,
    properties::average_velocity,
    state::{Color, Particle, State},
};

use crate::{
    accel::{compute_accels, reset_accels},
    density::{compute_densities, rest_density},
    integrate::integrate_all,
};

/// Advance the simulation by `dt`. `pressure_mode` and `speed_mode` select display coloring,
/// and are meant to be exclusive; if both are set, speed coloring wins, since integration runs
/// after the force pass.
///
/// There's no internal limit on `dt`; large values can make the system diverge.
pub fn step(dt: f32, state: &mut State, pressure_mode: bool, speed_mode: bool) {
    let ρ_rest = rest_density(state.len());

    // Positions are frozen for the density and force passes.
    state
        .posits_prev
        .par_iter_mut()
        .zip(state.particles.par_iter())
        .for_each(|(prev, particle)| *prev = particle.posit);

    reset_accels(&mut state.accel);

    compute_densities(&mut state.density, &state.posits_prev);

    compute_accels(
        &mut state.particles,
        &mut state.accel,
        &state.posits_prev,
        &state.density,
        &state.vel,
        ρ_rest,
        pressure_mode,
        speed_mode,
    );

    integrate_all(&mut state.particles, &mut state.vel, &state.accel, dt, speed_mode);

    log::trace!("Step complete. dt: {dt}, ρ_rest: {ρ_rest:.3}");
}

#[cfg(test)]
mod tests {
    use lin_alg::f32::Vec3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::{
        color::speed_color,
        units::{DOMAIN_MAX, DOMAIN_MIN, EPSILON, G},
    };

    fn assert_contained(state: &State) {
        let bounds = [
            (DOMAIN_MIN.0, DOMAIN_MAX.0),
            (DOMAIN_MIN.1, DOMAIN_MAX.1),
            (DOMAIN_MIN.2, DOMAIN_MAX.2),
        ];

        for p in &state.particles {
            for (v, (min, max)) in [p.posit.x, p.posit.y, p.posit.z].into_iter().zip(bounds) {
                assert!(v >= min + EPSILON && v <= max - EPSILON, "Escaped: {v} not in [{min}, {max}]");
            }
        }
    }

    #[test]
    fn test_population_invariant() {
        let mut state = make_state(3, 4, 2, 0.8);

        for _ in 0..10 {
            step(0.01, &mut state, false, false);
        }

        assert_eq!(state.len(), 24);
        assert_eq!(state.vel.len(), 24);
        assert_eq!(state.accel.len(), 24);
        assert_eq!(state.density.len(), 24);
    }

    #[test]
    fn test_single_particle_falls() {
        let mut state = make_state(1, 1, 1, 1.);
        let dt = 0.01;

        step(dt, &mut state, false, false);

        assert_eq!(state.density[0], 0.);
        assert!((state.vel[0].y - G * dt).abs() < 1e-6);
        assert!(state.particles[0].posit.y < 5.);
        assert_eq!(state.particles[0].color, color::DEFAULT_COLOR);
    }

    #[test]
    fn test_containment_random_states() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..5 {
            let mut state = make_state(3, 3, 3, 1.);

            for (particle, vel) in state.particles.iter_mut().zip(state.vel.iter_mut()) {
                particle.posit = Vec3::new(
                    rng.random_range(-10.0..30.0),
                    rng.random_range(-10.0..70.0),
                    rng.random_range(-10.0..30.0),
                );
                *vel = Vec3::new(
                    rng.random_range(-50.0..50.0),
                    rng.random_range(-50.0..50.0),
                    rng.random_range(-50.0..50.0),
                );
            }

            for _ in 0..20 {
                let dt = rng.random_range(0.001..0.1);
                step(dt, &mut state, false, false);
                assert_contained(&state);
            }
        }
    }

    #[test]
    fn test_deterministic_across_worker_counts() {
        let run = |num_threads: usize| {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .unwrap();

            pool.install(|| {
                let mut state = make_state(4, 6, 4, 0.8);
                for _ in 0..5 {
                    step(1. / 60., &mut state, false, false);
                }
                state
            })
        };

        let a = run(1);
        let b = run(4);

        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.density, b.density);
        for (va, vb) in a.vel.iter().zip(&b.vel) {
            assert_eq!((va.x, va.y, va.z), (vb.x, vb.y, vb.z));
        }

        let (avg_a, avg_b) = (average_velocity(&a), average_velocity(&b));
        assert!((avg_a - avg_b).magnitude() < 1e-5);
    }

    #[test]
    fn test_speed_color_wins() {
        let mut state = make_state(2, 2, 2, 0.8);

        step(0.02, &mut state, true, true);

        for (particle, vel) in state.particles.iter().zip(&state.vel) {
            assert_eq!(particle.color, speed_color(vel.magnitude()));
        }
    }

    #[test]
    fn test_average_velocity_after_steps() {
        let mut state = make_state(2, 3, 2, 0.8);
        let v = average_velocity(&state);
        assert_eq!((v.x, v.y, v.z), (0., 0., 0.));

        step(0.01, &mut state, false, false);

        // Gravity dominates the first step.
        assert!(average_velocity(&state).y < 0.);
    }
}
