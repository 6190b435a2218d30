//! Creates the initial particle population, on a regular 3D grid.

use lin_alg::f32::Vec3;

use crate::{
    state::{idx3, State},
    units::SPAWN_OFFSET,
};

/// Create `nx * ny * nz` particles, spaced by `scale`, with the slab raised by `SPAWN_OFFSET`.
/// Velocity, acceleration, and density start at zero. Resolutions and scale must be positive.
pub fn make_state(nx: usize, ny: usize, nz: usize, scale: f32) -> State {
    debug_assert!(nx > 0 && ny > 0 && nz > 0, "Lattice resolution must be positive");
    debug_assert!(scale > 0., "Lattice scale must be positive");

    let mut result = State::new_zeroed(nx, ny, nz);

    for i in 0..nx {
        for j in 0..ny {
            for k in 0..nz {
                let id = idx3(i, j, k, ny, nz);

                result.particles[id].posit = Vec3::new(
                    i as f32 * scale,
                    j as f32 * scale + SPAWN_OFFSET,
                    k as f32 * scale,
                );
            }
        }
    }

    log::debug!("Created {} particles ({nx} x {ny} x {nz})", result.len());

    result
}
