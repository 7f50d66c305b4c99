//! Sensitivity value types.

use std::fmt;

use sensconv_common::error::{SensconvError, SensconvResult};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Platform-neutral pointer-speed multiplier (`1.0` = unaccelerated).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntermediateSensitivity {
    pub multiplier: f64,
}

impl IntermediateSensitivity {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }
}

impl fmt::Display for IntermediateSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntermediateSensitivity(multiplier={:?})", self.multiplier)
    }
}

/// Windows pointer-speed slider position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct WindowsSensitivity {
    tick: u8,
}

impl WindowsSensitivity {
    /// Lowest slider position.
    pub const MIN_TICK: u8 = 1;
    /// Highest slider position.
    pub const MAX_TICK: u8 = 20;

    /// Create a sensitivity from a slider tick in `1..=20`.
    pub fn new(tick: i64) -> SensconvResult<Self> {
        if tick < Self::MIN_TICK as i64 || tick > Self::MAX_TICK as i64 {
            return Err(SensconvError::out_of_range(
                Platform::Windows.as_str(),
                tick,
                format!("tick {}..={}", Self::MIN_TICK, Self::MAX_TICK),
            ));
        }
        Ok(Self { tick: tick as u8 })
    }

    pub fn tick(&self) -> u8 {
        self.tick
    }
}

impl TryFrom<i64> for WindowsSensitivity {
    type Error = SensconvError;

    fn try_from(tick: i64) -> Result<Self, Self::Error> {
        Self::new(tick)
    }
}

impl From<WindowsSensitivity> for u8 {
    fn from(value: WindowsSensitivity) -> Self {
        value.tick
    }
}

impl fmt::Display for WindowsSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowsSensitivity(tick={})", self.tick)
    }
}

/// KDE Plasma / libinput `pointerAcceleration` value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct KdeSensitivity {
    value: f64,
}

impl KdeSensitivity {
    pub const MIN: f64 = -1.0;
    pub const MAX: f64 = 1.0;

    /// Create a sensitivity from a finite value in `[-1.0, 1.0]`.
    pub fn new(value: f64) -> SensconvResult<Self> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SensconvError::out_of_range(
                Platform::Kde.as_str(),
                value,
                format!("{:?}..={:?}", Self::MIN, Self::MAX),
            ));
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl TryFrom<f64> for KdeSensitivity {
    type Error = SensconvError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KdeSensitivity> for f64 {
    fn from(value: KdeSensitivity) -> Self {
        value.value
    }
}

impl fmt::Display for KdeSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point on whole numbers (`0.0`, not `0`).
        write!(f, "KDESensitivity(value={:?})", self.value)
    }
}

/// A sensitivity expressed in one platform's native unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", content = "value", rename_all = "snake_case")]
pub enum Sensitivity {
    Windows(WindowsSensitivity),
    Kde(KdeSensitivity),
}

impl Sensitivity {
    /// The platform whose unit this value is in.
    pub fn platform(&self) -> Platform {
        match self {
            Sensitivity::Windows(_) => Platform::Windows,
            Sensitivity::Kde(_) => Platform::Kde,
        }
    }
}

impl From<WindowsSensitivity> for Sensitivity {
    fn from(value: WindowsSensitivity) -> Self {
        Sensitivity::Windows(value)
    }
}

impl From<KdeSensitivity> for Sensitivity {
    fn from(value: KdeSensitivity) -> Self {
        Sensitivity::Kde(value)
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensitivity::Windows(w) => fmt::Display::fmt(w, f),
            Sensitivity::Kde(k) => fmt::Display::fmt(k, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_tick_bounds() {
        assert!(WindowsSensitivity::new(0).is_err());
        assert!(WindowsSensitivity::new(21).is_err());
        assert!(WindowsSensitivity::new(-3).is_err());
        assert_eq!(WindowsSensitivity::new(1).unwrap().tick(), 1);
        assert_eq!(WindowsSensitivity::new(20).unwrap().tick(), 20);
    }

    #[test]
    fn test_kde_value_bounds() {
        assert!(KdeSensitivity::new(-1.0).is_ok());
        assert!(KdeSensitivity::new(1.0).is_ok());
        assert!(KdeSensitivity::new(1.0001).is_err());
        assert!(KdeSensitivity::new(f64::NAN).is_err());
        assert!(KdeSensitivity::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display_formats() {
        let w = Sensitivity::from(WindowsSensitivity::new(7).unwrap());
        assert_eq!(w.to_string(), "WindowsSensitivity(tick=7)");

        let k = Sensitivity::from(KdeSensitivity::new(0.0).unwrap());
        assert_eq!(k.to_string(), "KDESensitivity(value=0.0)");

        let k = Sensitivity::from(KdeSensitivity::new(-0.375).unwrap());
        assert_eq!(k.to_string(), "KDESensitivity(value=-0.375)");

        assert_eq!(
            IntermediateSensitivity::new(1.0).to_string(),
            "IntermediateSensitivity(multiplier=1.0)"
        );
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let ok: Sensitivity = serde_json::from_str(r#"{"platform":"kde","value":0.5}"#).unwrap();
        assert_eq!(ok.platform(), Platform::Kde);

        assert!(serde_json::from_str::<KdeSensitivity>("2.0").is_err());
        assert!(serde_json::from_str::<WindowsSensitivity>("0").is_err());
        assert_eq!(
            serde_json::from_str::<WindowsSensitivity>("12").unwrap().tick(),
            12
        );
    }
}
