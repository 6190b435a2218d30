use lin_alg::f32::Vec3;
use rayon::prelude::*;

use crate::{
    color::speed_color,
    state::Particle,
    units::{DOMAIN_MAX, DOMAIN_MIN, EPSILON, WALL_DAMPING},
};

/// Keep a coordinate inside `[min + ε, max - ε]`, reflecting and damping its velocity
/// component when it's clamped.
pub fn clamp_axis(posit: &mut f32, vel: &mut f32, min: f32, max: f32) {
    if *posit < min + EPSILON {
        *posit = min + EPSILON;
        *vel = -*vel * WALL_DAMPING;
    } else if *posit > max - EPSILON {
        *posit = max - EPSILON;
        *vel = -*vel * WALL_DAMPING;
    }
}

/// Semi-implicit (symplectic) Euler: velocity first, then position from the new velocity.
/// Followed by the hard wall clamp.
pub fn integrate_euler(posit: &mut Vec3, vel: &mut Vec3, accel: Vec3, dt: f32) {
    *vel += accel * dt;
    *posit += *vel * dt;

    clamp_axis(&mut posit.x, &mut vel.x, DOMAIN_MIN.0, DOMAIN_MAX.0);
    clamp_axis(&mut posit.y, &mut vel.y, DOMAIN_MIN.1, DOMAIN_MAX.1);
    clamp_axis(&mut posit.z, &mut vel.z, DOMAIN_MIN.2, DOMAIN_MAX.2);
}

pub fn integrate_all(particles: &mut [Particle], vels: &mut [Vec3], accels: &[Vec3], dt: f32, speed_mode: bool) {
    particles
        .par_iter_mut()
        .zip(vels.par_iter_mut())
        .zip(accels.par_iter())
        .for_each(|((particle, vel), accel)| {
            integrate_euler(&mut particle.posit, vel, *accel, dt);

            if speed_mode {
                particle.color = speed_color(vel.magnitude());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::G;

    #[test]
    fn test_symplectic_order() {
        let mut posit = Vec3::new(10., 30., 10.);
        let mut vel = Vec3::new(1., 0., 0.);

        integrate_euler(&mut posit, &mut vel, Vec3::new(0., G, 0.), 0.1);

        assert!((vel.y - G * 0.1).abs() < 1e-6);
        // Position uses the updated velocity.
        assert!((posit.y - (30. + G * 0.01)).abs() < 1e-5);
        assert!((posit.x - 10.1).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_reflects_and_damps() {
        let mut posit = -1.;
        let mut vel = -4.;
        clamp_axis(&mut posit, &mut vel, 0., 20.);

        assert_eq!(posit, EPSILON);
        assert!((vel - 4. * WALL_DAMPING).abs() < 1e-6);

        let mut posit = 25.;
        let mut vel = 2.;
        clamp_axis(&mut posit, &mut vel, 0., 20.);

        assert_eq!(posit, 20. - EPSILON);
        assert!((vel + 2. * WALL_DAMPING).abs() < 1e-6);

        let mut posit = 5.;
        let mut vel = 2.;
        clamp_axis(&mut posit, &mut vel, 0., 20.);
        assert_eq!((posit, vel), (5., 2.));
    }

    #[test]
    fn test_speed_coloring() {
        let mut particles = vec![Particle {
            posit: Vec3::new(10., 30., 10.),
            color: (0., 0., 0.),
        }];
        let mut vels = vec![Vec3::new(0., 7.5, 0.)];
        let accels = vec![Vec3::new_zero()];

        integrate_all(&mut particles, &mut vels, &accels, 0.01, true);
        assert_eq!(particles[0].color, speed_color(7.5));

        integrate_all(&mut particles, &mut vels, &accels, 0.01, false);
        assert_eq!(particles[0].color, speed_color(7.5));
    }
}
