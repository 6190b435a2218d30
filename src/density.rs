//! Smoothed local density, from a brute-force pass over all pairs.

use lin_alg::f32::Vec3;
use rayon::prelude::*;

use crate::units::{domain_volume, H, H_SQ};

/// The density pressure is measured against: domain volume shared evenly among particles.
pub fn rest_density(num_particles: usize) -> f32 {
    domain_volume() / num_particles as f32
}

/// Kernel contribution for a pair at squared distance `r_sq`. Zero outside `(0, h²)`;
/// coincident pairs are excluded.
pub fn kernel(r_sq: f32) -> f32 {
    if r_sq > 0. && r_sq < H_SQ {
        let q = 1. - r_sq.sqrt() / H;
        q * q
    } else {
        0.
    }
}

/// Density at one particle, from all others.
pub fn density_at(id: usize, posits: &[Vec3]) -> f32 {
    let posit = posits[id];
    let mut result = 0.;

    for (i, posit_other) in posits.iter().enumerate() {
        if i == id {
            continue; // self-interaction.
        }

        result += kernel((posit - *posit_other).magnitude_squared());
    }

    result
}

/// Each particle writes only its own slot; positions are a shared read-only snapshot.
pub fn compute_densities(densities: &mut [f32], posits: &[Vec3]) {
    densities
        .par_iter_mut()
        .enumerate()
        .for_each(|(id, ρ)| *ρ = density_at(id, posits));
}
