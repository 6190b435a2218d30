//! Visualization colors, derived from pressure or speed. These don't feed back into the physics.

use crate::{state::Color, units::SPEED_REF};

pub const DEFAULT_COLOR: Color = (0., 0., 1.);

/// Blue (0.) to red (1.). `t` is expected to be in 0. to 1.
pub fn gradient(t: f32) -> Color {
    (t, 0.2 * (1. - t), 1. - t)
}

/// Pressure is normalized against ±`ρ_rest`: `-ρ_rest` maps to blue, `ρ_rest` to red.
pub fn pressure_color(pressure: f32, ρ_rest: f32) -> Color {
    let p_norm = ((pressure + ρ_rest) / (2. * ρ_rest)).clamp(0., 1.);
    gradient(p_norm)
}

pub fn speed_color(speed: f32) -> Color {
    gradient((speed / SPEED_REF).min(1.))
}
