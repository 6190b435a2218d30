//! This module contains acceleration calculations: gravity, pairwise pressure and viscosity,
//! and the soft wall penalty.

use lin_alg::f32::Vec3;
use rayon::prelude::*;

use crate::{
    color::{pressure_color, DEFAULT_COLOR},
    state::Particle,
    units::{DOMAIN_MAX, DOMAIN_MIN, G, H, PARTICLE_RADIUS, STIFFNESS, VISCOSITY, WALL_STIFFNESS},
};

/// Signed; negative when below rest density.
pub fn pressure(ρ: f32, ρ_rest: f32) -> f32 {
    STIFFNESS * (ρ - ρ_rest)
}

/// A helper function, where the inputs are precomputed. `dir` is a unit vector from A to B.
pub(crate) fn acc_pressure_inner(dir: Vec3, q: f32, p_a: f32, p_b: f32) -> Vec3 {
    dir * (-0.5 * (p_a + p_b) * q)
}

pub(crate) fn acc_viscosity_inner(vel_diff: Vec3, q: f32) -> Vec3 {
    vel_diff * (VISCOSITY * q)
}

/// Pressure and viscosity acceleration on A, from B. Each pair is evaluated once from each
/// side; the coefficients assume this, so don't fold it into a single symmetric visit.
pub fn acc_pair(posit_a: Vec3, posit_b: Vec3, vel_a: Vec3, vel_b: Vec3, p_a: f32, p_b: f32) -> Vec3 {
    let diff = posit_b - posit_a;
    let r = diff.magnitude();

    if r <= 0. || r > H {
        return Vec3::new_zero();
    }

    let q = 1. - r / H;
    let dir = diff / r; // Unit vec

    acc_pressure_inner(dir, q, p_a, p_b) + acc_viscosity_inner(vel_b - vel_a, q)
}

fn acc_wall_axis(posit: f32, min: f32, max: f32) -> f32 {
    let mut result = 0.;

    if posit - PARTICLE_RADIUS < min {
        result += WALL_STIFFNESS * (min - (posit - PARTICLE_RADIUS));
    }
    if posit + PARTICLE_RADIUS > max {
        result -= WALL_STIFFNESS * ((posit + PARTICLE_RADIUS) - max);
    }

    result
}

/// Soft containment: proportional to how far the particle's edge has crossed each wall.
pub fn acc_wall(posit: Vec3) -> Vec3 {
    Vec3::new(
        acc_wall_axis(posit.x, DOMAIN_MIN.0, DOMAIN_MAX.0),
        acc_wall_axis(posit.y, DOMAIN_MIN.1, DOMAIN_MAX.1),
        acc_wall_axis(posit.z, DOMAIN_MIN.2, DOMAIN_MAX.2),
    )
}

/// Must complete for every particle before `compute_accels` runs.
pub fn reset_accels(accels: &mut [Vec3]) {
    accels
        .par_iter_mut()
        .for_each(|a| *a = Vec3::new(0., G, 0.));
}

/// Sum of pair accelerations acting on one particle, from all others. Also returns the
/// particle's own pressure.
pub fn acc_sph(id: usize, posits: &[Vec3], densities: &[f32], vels: &[Vec3], ρ_rest: f32) -> (Vec3, f32) {
    let p_a = pressure(densities[id], ρ_rest);
    let mut result = Vec3::new_zero();

    for (i, posit_other) in posits.iter().enumerate() {
        if i == id {
            continue; // self-interaction.
        }

        let p_b = pressure(densities[i], ρ_rest);
        result += acc_pair(posits[id], *posit_other, vels[id], vels[i], p_a, p_b);
    }

    (result, p_a)
}

/// Accumulate pair and wall accelerations onto the reset accelerations, and assign pressure
/// or default colors. With `speed_mode` set and `pressure_mode` unset, colors are left for
/// integration to write.
#[allow(clippy::too_many_arguments)]
pub fn compute_accels(
    particles: &mut [Particle],
    accels: &mut [Vec3],
    posits: &[Vec3],
    densities: &[f32],
    vels: &[Vec3],
    ρ_rest: f32,
    pressure_mode: bool,
    speed_mode: bool,
) {
    particles
        .par_iter_mut()
        .zip(accels.par_iter_mut())
        .enumerate()
        .for_each(|(id, (particle, accel))| {
            let (acc, p) = acc_sph(id, posits, densities, vels, ρ_rest);
            *accel += acc + acc_wall(posits[id]);

            if pressure_mode {
                particle.color = pressure_color(p, ρ_rest);
            } else if !speed_mode {
                particle.color = DEFAULT_COLOR;
            }
        });
}
