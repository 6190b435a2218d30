use std::{io::ErrorKind, path::Path};

use bincode::{Decode, Encode};

use crate::{error::RunError, util};

pub const SAVE_FILE: &str = "config.sph";

/// How particles are colored for display. The step function takes this as two flags; using
/// an enum here means both can't be requested at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Encode, Decode)]
pub enum ColorMode {
    #[default]
    Plain,
    Pressure,
    Speed,
}

impl ColorMode {
    /// `(pressure_mode, speed_mode)`
    pub fn flags(self) -> (bool, bool) {
        match self {
            Self::Plain => (false, false),
            Self::Pressure => (true, false),
            Self::Speed => (false, true),
        }
    }
}

/// Run parameters. Physical constants are fixed, and live in `units`.
#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct Config {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    /// Lattice spacing.
    pub scale: f32,
    /// Seconds per step. Fixed; there's no adaptive stepping.
    pub dt: f32,
    pub num_steps: usize,
    pub color_mode: ColorMode,
    /// Log diagnostics every this many steps.
    pub log_ratio: usize,
    /// 0 means use rayon's default.
    pub num_threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nx: 10,
            ny: 50,
            nz: 10,
            scale: 0.8,
            dt: 1. / 60.,
            num_steps: 600,
            color_mode: Default::default(),
            log_ratio: 60,
            num_threads: 0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, RunError> {
        Ok(util::load(path)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), RunError> {
        Ok(util::save(path, self)?)
    }

    /// Load the config at `path`. If there's no file there, write out and use the defaults.
    /// Any other failure, e.g. an unreadable or corrupt file, is returned, and the file is left alone.
    pub fn load_or_default(path: &Path) -> Result<Self, RunError> {
        match Self::load(path) {
            Ok(cfg) => {
                log::info!("Loaded config from {}", path.display());
                Ok(cfg)
            }
            Err(RunError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::info!("No config at {}; using defaults", path.display());
                let result = Self::default();
                if let Err(e) = result.save(path) {
                    log::warn!("Unable to save default config: {e}");
                }
                Ok(result)
            }
            Err(e) => Err(e),
        }
    }

    /// The simulation core doesn't check its inputs; do it here.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.nx == 0 || self.ny == 0 || self.nz == 0 {
            return Err(RunError::InvalidConfig(format!(
                "resolution must be positive; got {} x {} x {}",
                self.nx, self.ny, self.nz
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0. {
            return Err(RunError::InvalidConfig(format!(
                "scale must be finite and positive; got {}",
                self.scale
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0. {
            return Err(RunError::InvalidConfig(format!(
                "dt must be finite and positive; got {}",
                self.dt
            )));
        }
        if self.num_steps == 0 {
            return Err(RunError::InvalidConfig("num_steps must be nonzero".to_owned()));
        }

        Ok(())
    }

    pub fn num_particles(&self) -> usize {
        self.nx * self.ny * self.nz
    }
}
