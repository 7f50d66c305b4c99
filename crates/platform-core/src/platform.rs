//! Supported platform tags.

use std::fmt;
use std::str::FromStr;

use sensconv_common::error::SensconvError;
use serde::{Deserialize, Serialize};

/// Platform whose sensitivity unit a value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Windows Control Panel pointer-speed slider (integer tick).
    Windows,
    /// KDE Plasma / libinput pointer acceleration (float).
    Kde,
}

impl Platform {
    /// Every supported platform, in CLI listing order.
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::Kde];

    /// Lowercase tag used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Kde => "kde",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = SensconvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SensconvError::unknown_platform(tag))
    }
}
