use serde::{Deserialize, Serialize};

use crate::motion::{
    curtain::CurtainTimings, cursor::DEFAULT_LERP, globe::FLIGHT_MS, parallax,
    scroll::DEFAULT_DIRECTION_THRESHOLD,
};

pub const DEFAULT_CONTACT_EMAIL: &str = "dahalprastut@gmail.com";

/// Tunables for the motion layer, provided to components as context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Minimum scroll distance (px) before the navbar direction flips.
    pub scroll_threshold: f64,
    /// Fraction of the remaining distance the cursor outline covers per frame.
    pub cursor_lerp: f64,
    pub parallax_speed: f64,
    pub camera_flight_ms: f64,
    pub curtain: CurtainTimings,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_DIRECTION_THRESHOLD,
            cursor_lerp: DEFAULT_LERP,
            parallax_speed: parallax::DEFAULT_SPEED,
            camera_flight_ms: FLIGHT_MS,
            curtain: CurtainTimings::default(),
        }
    }
}

/// Where contact submissions are addressed. Read from the environment on the
/// server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

impl ContactConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let recipient = lookup("CONTACT_EMAIL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string());
        Self { recipient }
    }
}
