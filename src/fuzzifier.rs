//! Fuzzification
//!
//! This module holds the membership functions for both input variables and the
//! stress output variable, and evaluates a crisp input against every level of
//! its variable to produce a membership vector.
//!
//! All membership functions are total over the reals: flat regions (plateau at
//! 0 or 1) are tested before the linear ramps, so values outside the nominal
//! domain clamp by construction. Shoulder levels (low/high extremes) plateau at
//! 1 on one side; middle levels are triangular, rising then falling.

use crate::types::{ScreenTimeMembership, StressLevel, TemperatureMembership};

/// Fuzzifier for mapping crisp inputs to membership vectors
pub struct Fuzzifier;

impl Fuzzifier {
    /// Evaluate all screen-time membership functions at `hours`
    pub fn screen_time(hours: f64) -> ScreenTimeMembership {
        ScreenTimeMembership {
            low: screen_time_low(hours),
            medium: screen_time_medium(hours),
            high: screen_time_high(hours),
        }
    }

    /// Evaluate all temperature membership functions at `celsius`
    pub fn temperature(celsius: f64) -> TemperatureMembership {
        TemperatureMembership {
            cold: temperature_cold(celsius),
            comfortable: temperature_comfortable(celsius),
            hot: temperature_hot(celsius),
        }
    }

    /// Output-side membership: degree of `z` in the given stress level.
    ///
    /// Same piecewise-linear shapes as the input functions, parameterized for
    /// the [0,100] output domain. Used by the defuzzifier to clip and
    /// aggregate rule consequents.
    pub fn stress(level: StressLevel, z: f64) -> f64 {
        match level {
            StressLevel::Low => stress_low(z),
            StressLevel::Medium => stress_medium(z),
            StressLevel::High => stress_high(z),
        }
    }
}

/// Low screen time: plateau 1 up to 2h, ramps to 0 at 4h
fn screen_time_low(x: f64) -> f64 {
    if x <= 2.0 {
        1.0
    } else if x >= 4.0 {
        0.0
    } else {
        (4.0 - x) / 2.0
    }
}

/// Medium screen time: triangular, 0 at 3h, peak 1 at 5.5h, 0 at 8h
fn screen_time_medium(x: f64) -> f64 {
    if x <= 3.0 {
        0.0
    } else if x <= 5.5 {
        (x - 3.0) / 2.5
    } else if x <= 8.0 {
        (8.0 - x) / 2.5
    } else {
        0.0
    }
}

/// High screen time: 0 up to 7h, ramps to plateau 1 at 10h
fn screen_time_high(x: f64) -> f64 {
    if x <= 7.0 {
        0.0
    } else if x >= 10.0 {
        1.0
    } else {
        (x - 7.0) / 3.0
    }
}

/// Cold: plateau 1 up to 18°C, ramps to 0 at 22°C
fn temperature_cold(x: f64) -> f64 {
    if x <= 18.0 {
        1.0
    } else if x >= 22.0 {
        0.0
    } else {
        (22.0 - x) / 4.0
    }
}

/// Comfortable: triangular, 0 at 20°C, peak 1 at 24°C, 0 at 28°C
fn temperature_comfortable(x: f64) -> f64 {
    if x <= 20.0 || x >= 28.0 {
        0.0
    } else if x <= 24.0 {
        (x - 20.0) / 4.0
    } else {
        (28.0 - x) / 4.0
    }
}

/// Hot: 0 up to 26°C, ramps to plateau 1 at 30°C
fn temperature_hot(x: f64) -> f64 {
    if x <= 26.0 {
        0.0
    } else if x >= 30.0 {
        1.0
    } else {
        (x - 26.0) / 4.0
    }
}

/// Low stress: plateau 1 up to 20, ramps to 0 at 40
fn stress_low(z: f64) -> f64 {
    if z <= 20.0 {
        1.0
    } else if z >= 40.0 {
        0.0
    } else {
        (40.0 - z) / 20.0
    }
}

/// Medium stress: triangular, 0 at 30, peak 1 at 50, 0 at 70
fn stress_medium(z: f64) -> f64 {
    if z <= 30.0 || z >= 70.0 {
        0.0
    } else if z <= 50.0 {
        (z - 30.0) / 20.0
    } else {
        (70.0 - z) / 20.0
    }
}

/// High stress: 0 up to 60, ramps to plateau 1 at 80
fn stress_high(z: f64) -> f64 {
    if z <= 60.0 {
        0.0
    } else if z >= 80.0 {
        1.0
    } else {
        (z - 60.0) / 20.0
    }
}
