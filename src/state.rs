//! The particle population, and its per-particle fields. All fields are flat, and share
//! the linear index from `idx3`.

use lin_alg::f32::Vec3;

/// (r, g, b), each 0. to 1.
pub type Color = (f32, f32, f32);

/// Map a lattice coordinate to its linear index. Row-major: k varies fastest.
pub fn idx3(i: usize, j: usize, k: usize, ny: usize, nz: usize) -> usize {
    i * (ny * nz) + j * nz + k
}

/// What the display layer consumes: a position, and a color derived from the simulation.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub posit: Vec3,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct State {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub particles: Vec<Particle>,
    pub vel: Vec<Vec3>,
    pub accel: Vec<Vec3>,
    /// ρ
    pub density: Vec<f32>,
    /// Positions as of the start of the current step. Density and force passes read from this,
    /// so they never alias the particle records they write colors into.
    pub(crate) posits_prev: Vec<Vec3>,
}

impl State {
    /// All per-particle fields are zeroed; positions and colors are set by the caller.
    pub(crate) fn new_zeroed(nx: usize, ny: usize, nz: usize) -> Self {
        let n = nx * ny * nz;

        let particle = Particle {
            posit: Vec3::new_zero(),
            color: (0., 0., 0.),
        };

        Self {
            nx,
            ny,
            nz,
            particles: vec![particle; n],
            vel: vec![Vec3::new_zero(); n],
            accel: vec![Vec3::new_zero(); n],
            density: vec![0.; n],
            posits_prev: vec![Vec3::new_zero(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particle(&self, i: usize, j: usize, k: usize) -> &Particle {
        &self.particles[idx3(i, j, k, self.ny, self.nz)]
    }

    /// Interleaved `[x, y, z, r, g, b]` per particle, in index order; the vertex layout for upload.
    pub fn vertices(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.len() * 6);

        for p in &self.particles {
            result.extend_from_slice(&[
                p.posit.x, p.posit.y, p.posit.z, p.color.0, p.color.1, p.color.2,
            ]);
        }

        result
    }
}
