//! KDE Plasma pointer acceleration mapping.
//!
//! Plasma stores libinput's `pointerAcceleration` in `[-1.0, 1.0]`. The
//! mapping to a speed multiplier is approximated as linear:
//! `-1.0` → 0x, `0.0` → 1x, `+1.0` → 2x.

use sensconv_common::error::{SensconvError, SensconvResult};
use sensconv_platform_core::{
    IntermediateSensitivity, KdeSensitivity, Platform, Sensitivity, SensitivityPlatform,
};

/// Multiplier for a pointer-acceleration value.
pub fn acceleration_to_multiplier(sensitivity: KdeSensitivity) -> f64 {
    1.0 + sensitivity.value()
}

/// Pointer-acceleration value for a multiplier, clamped to what Plasma can
/// store. The second element is `true` when clamping changed the value.
pub fn multiplier_to_acceleration(multiplier: f64) -> SensconvResult<(KdeSensitivity, bool)> {
    if !multiplier.is_finite() {
        return Err(SensconvError::out_of_range(
            Platform::Kde.as_str(),
            multiplier,
            "a finite multiplier",
        ));
    }
    let raw = multiplier - 1.0;
    let clamped = raw.clamp(KdeSensitivity::MIN, KdeSensitivity::MAX);
    Ok((KdeSensitivity::new(clamped)?, clamped != raw))
}

/// KDE backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct KdePlatform;

impl KdePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl SensitivityPlatform for KdePlatform {
    fn platform(&self) -> Platform {
        Platform::Kde
    }

    fn parse(&self, raw: &str) -> SensconvResult<Sensitivity> {
        let value: f64 = raw.trim().parse().map_err(|_| {
            SensconvError::invalid_value(Platform::Kde.as_str(), raw, "expected a number")
        })?;
        Ok(KdeSensitivity::new(value)?.into())
    }

    fn to_intermediate(&self, sensitivity: &Sensitivity) -> SensconvResult<IntermediateSensitivity> {
        match sensitivity {
            Sensitivity::Kde(k) => Ok(IntermediateSensitivity::new(acceleration_to_multiplier(
                *k,
            ))),
            other => Err(SensconvError::platform_mismatch(Platform::Kde.as_str(), other)),
        }
    }

    fn from_intermediate(
        &self,
        intermediate: IntermediateSensitivity,
    ) -> SensconvResult<Sensitivity> {
        let (value, clamped) = multiplier_to_acceleration(intermediate.multiplier)?;
        if clamped {
            tracing::warn!(
                multiplier = intermediate.multiplier,
                value = value.value(),
                "Multiplier is outside KDE's range, clamping"
            );
        }
        Ok(value.into())
    }
}
