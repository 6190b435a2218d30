//! Run and color-mode controls, owned by whoever drives the simulation. The step function only
//! sees the two color flags derived from this.

use crate::config::ColorMode;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    pub running: bool,
    pub pressure: bool,
    pub speed: bool,
}

impl Controls {
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Turning on pressure coloring turns off speed coloring.
    pub fn toggle_pressure(&mut self) {
        self.pressure = !self.pressure;
        self.speed = false;
    }

    pub fn toggle_speed(&mut self) {
        self.speed = !self.speed;
        self.pressure = false;
    }

    /// `(pressure_mode, speed_mode)`, as passed to `step`.
    pub fn color_flags(&self) -> (bool, bool) {
        (self.pressure, self.speed)
    }
}

impl From<ColorMode> for Controls {
    fn from(mode: ColorMode) -> Self {
        let (pressure, speed) = mode.flags();

        Self {
            running: true,
            pressure,
            speed,
        }
    }
}
