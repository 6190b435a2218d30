//! Read-only diagnostics over the whole population. None of these mutate the state.

use lin_alg::{f32::Vec3, f64::Vec3 as Vec3f64};
use rayon::prelude::*;

use crate::state::State;

fn vec_to_f64(v: Vec3) -> Vec3f64 {
    Vec3f64::new(v.x as f64, v.y as f64, v.z as f64)
}

fn vec_to_f32(v: Vec3f64) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Mean velocity over all particles. Summed in f64; the sum order depends on the worker
/// count, so the low bits may vary between runs with different pool sizes.
pub fn average_velocity(state: &State) -> Vec3 {
    if state.is_empty() {
        return Vec3::new_zero();
    }

    let total = state
        .vel
        .par_iter()
        .map(|v| vec_to_f64(*v))
        .reduce(Vec3f64::new_zero, |acc, elem| acc + elem);

    vec_to_f32(total / state.len() as f64)
}

/// NaN if any speed is NaN, e.g. after the integration diverged.
pub fn max_speed(state: &State) -> f32 {
    state
        .vel
        .par_iter()
        .map(|v| v.magnitude())
        .reduce(|| 0., |a, b| if a.is_nan() || b.is_nan() { f32::NAN } else { a.max(b) })
}

pub fn mean_density(state: &State) -> f32 {
    if state.is_empty() {
        return 0.;
    }

    let total: f64 = state.density.par_iter().map(|ρ| *ρ as f64).sum();
    (total / state.len() as f64) as f32
}
