//! Physical constants and the simulation domain. These are fixed; they are not part of the
//! run config.

// Acceleration due to gravity, along y. Negative is down.
pub const G: f32 = -9.81;

/// Interaction radius. Pairs farther apart than this don't interact.
pub const H: f32 = 1.2;
pub const H_SQ: f32 = H * H;

/// Scales density deviation from rest into pressure.
pub const STIFFNESS: f32 = 0.6;
/// Viscosity coefficient (ν).
pub const VISCOSITY: f32 = 1.3;

/// Used by the soft wall penalty; the particle's edge is `posit ± PARTICLE_RADIUS`.
pub const PARTICLE_RADIUS: f32 = 1.0;
pub const WALL_STIFFNESS: f32 = 2.0;
/// Fraction of velocity retained when reflecting off a wall.
pub const WALL_DAMPING: f32 = 0.8;
/// Inset from each wall for the hard clamp.
pub const EPSILON: f32 = 1.0e-4;

// (x, y, z)
pub const DOMAIN_MIN: (f32, f32, f32) = (0., 0., 0.);
pub const DOMAIN_MAX: (f32, f32, f32) = (20., 60., 20.);

/// Lifts the initial lattice off the floor.
pub const SPAWN_OFFSET: f32 = 5.;

/// Speed mapped to full red in speed coloring.
pub const SPEED_REF: f32 = 15.;

pub fn domain_volume() -> f32 {
    (DOMAIN_MAX.0 - DOMAIN_MIN.0) * (DOMAIN_MAX.1 - DOMAIN_MIN.1) * (DOMAIN_MAX.2 - DOMAIN_MIN.2)
}
