//! Headless driver: runs the simulation for a fixed number of steps, and logs diagnostics.
//! Set `RUST_LOG=info` (or `debug`) to see progress.

use std::{path::PathBuf, process::ExitCode, time::Instant};

use lattice_sph::{
    config::{Config, SAVE_FILE},
    controls::Controls,
    error::RunError,
    make_state,
    properties::{average_velocity, max_speed, mean_density},
    step, State,
};

fn load_config() -> Result<Config, RunError> {
    let cfg = Config::load_or_default(&PathBuf::from(SAVE_FILE))?;
    cfg.validate()?;
    Ok(cfg)
}

fn run(cfg: &Config, state: &mut State) {
    let controls = Controls::from(cfg.color_mode);
    let (pressure_mode, speed_mode) = controls.color_flags();
    let log_ratio = cfg.log_ratio.max(1);

    let start = Instant::now();
    let mut start_step = Instant::now();

    for t in 0..cfg.num_steps {
        if t % log_ratio == 0 {
            start_step = Instant::now();
        }

        step(cfg.dt, state, pressure_mode, speed_mode);

        if t % log_ratio == 0 {
            let v = average_velocity(state);
            log::info!(
                "t: {t}, Step time: {}μs Avg V: ({:.4}, {:.4}, {:.4}) Max speed: {:.3} Mean ρ: {:.3}",
                start_step.elapsed().as_micros(),
                v.x,
                v.y,
                v.z,
                max_speed(state),
                mean_density(state),
            );

            if !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()) {
                log::warn!("Average velocity is not finite at step {t}; dt may be too large");
            }
        }
    }

    log::info!(
        "Ran {} steps in {}ms",
        cfg.num_steps,
        start.elapsed().as_millis()
    );
}

fn try_main() -> Result<(), RunError> {
    let cfg = load_config()?;

    let mut state = make_state(cfg.nx, cfg.ny, cfg.nz, cfg.scale);
    log::info!("Particle count: {}", cfg.num_particles());

    if cfg.num_threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.num_threads)
            .build()?;
        log::info!("Using {} worker threads", cfg.num_threads);

        pool.install(|| run(&cfg, &mut state));
    } else {
        run(&cfg, &mut state);
    }

    let v = average_velocity(&state);
    log::info!("Final average velocity: ({:.6}, {:.6}, {:.6})", v.x, v.y, v.z);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
