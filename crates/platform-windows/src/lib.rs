//! Windows pointer-speed mapping.
//!
//! The Control Panel slider has 20 positions ("ticks"). Each tick maps to a
//! fixed pointer-speed multiplier; tick 10 is unaccelerated.

use sensconv_common::error::{SensconvError, SensconvResult};
use sensconv_platform_core::{
    IntermediateSensitivity, Platform, Sensitivity, SensitivityPlatform, WindowsSensitivity,
};

/// Multiplier for each tick, indexed by `tick - 1`.
const TICK_MULTIPLIERS: [f64; 20] = [
    1.0 / 32.0,
    1.0 / 16.0,
    1.0 / 8.0,
    2.0 / 8.0,
    3.0 / 8.0,
    4.0 / 8.0,
    5.0 / 8.0,
    6.0 / 8.0,
    7.0 / 8.0,
    1.0,
    1.25,
    1.5,
    1.75,
    2.0,
    2.25,
    2.5,
    2.75,
    3.0,
    3.25,
    3.5,
];

/// Multiplier for a slider position.
pub fn tick_multiplier(sensitivity: WindowsSensitivity) -> f64 {
    TICK_MULTIPLIERS[(sensitivity.tick() - WindowsSensitivity::MIN_TICK) as usize]
}

/// The tick whose multiplier is closest to `multiplier`. Ties resolve to the
/// lower tick.
pub fn nearest_tick(multiplier: f64) -> SensconvResult<WindowsSensitivity> {
    if !multiplier.is_finite() {
        return Err(SensconvError::out_of_range(
            Platform::Windows.as_str(),
            multiplier,
            "a finite multiplier",
        ));
    }

    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (index, candidate) in TICK_MULTIPLIERS.iter().enumerate() {
        let distance = (candidate - multiplier).abs();
        if distance < best_distance {
            best_index = index;
            best_distance = distance;
        }
    }

    WindowsSensitivity::new(best_index as i64 + WindowsSensitivity::MIN_TICK as i64)
}

/// Windows backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPlatform;

impl WindowsPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl SensitivityPlatform for WindowsPlatform {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn parse(&self, raw: &str) -> SensconvResult<Sensitivity> {
        let text = raw.trim();
        let tick: i64 = text.parse().map_err(|_| {
            let reason = if text.parse::<f64>().is_ok() {
                "ticks are whole numbers"
            } else {
                "expected an integer tick"
            };
            SensconvError::invalid_value(Platform::Windows.as_str(), raw, reason)
        })?;
        Ok(WindowsSensitivity::new(tick)?.into())
    }

    fn to_intermediate(&self, sensitivity: &Sensitivity) -> SensconvResult<IntermediateSensitivity> {
        match sensitivity {
            Sensitivity::Windows(w) => Ok(IntermediateSensitivity::new(tick_multiplier(*w))),
            other => Err(SensconvError::platform_mismatch(
                Platform::Windows.as_str(),
                other,
            )),
        }
    }

    fn from_intermediate(
        &self,
        intermediate: IntermediateSensitivity,
    ) -> SensconvResult<Sensitivity> {
        let tick = nearest_tick(intermediate.multiplier)?;
        tracing::debug!(
            multiplier = intermediate.multiplier,
            tick = tick.tick(),
            exact = tick_multiplier(tick) == intermediate.multiplier,
            "Picked nearest Windows tick"
        );
        Ok(tick.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensconv_platform_core::KdeSensitivity;

    fn tick(n: i64) -> WindowsSensitivity {
        WindowsSensitivity::new(n).unwrap()
    }

    #[test]
    fn test_tick_ten_is_unaccelerated() {
        assert_eq!(tick_multiplier(tick(10)), 1.0);
        assert_eq!(tick_multiplier(tick(1)), 1.0 / 32.0);
        assert_eq!(tick_multiplier(tick(20)), 3.5);
    }

    #[test]
    fn test_multipliers_strictly_increase() {
        assert!(TICK_MULTIPLIERS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nearest_tick_exact_and_between() {
        assert_eq!(nearest_tick(0.625).unwrap().tick(), 7);
        assert_eq!(nearest_tick(1.3).unwrap().tick(), 11);
        assert_eq!(nearest_tick(1.4).unwrap().tick(), 12);
        assert_eq!(nearest_tick(0.0).unwrap().tick(), 1);
        assert_eq!(nearest_tick(100.0).unwrap().tick(), 20);
    }

    #[test]
    fn test_nearest_tick_tie_goes_low() {
        // Halfway between tick 10 (1.0) and tick 11 (1.25).
        assert_eq!(nearest_tick(1.125).unwrap().tick(), 10);
    }

    #[test]
    fn test_nearest_tick_rejects_nan() {
        assert!(nearest_tick(f64::NAN).is_err());
    }

    #[test]
    fn test_parse() {
        let backend = WindowsPlatform::new();
        assert_eq!(backend.parse(" 12 ").unwrap(), Sensitivity::Windows(tick(12)));

        let err = backend.parse("fast").unwrap_err();
        assert!(matches!(err, SensconvError::InvalidValue { .. }));

        let err = backend.parse("7.5").unwrap_err();
        assert!(err.to_string().contains("whole numbers"));

        let err = backend.parse("25").unwrap_err();
        assert!(matches!(err, SensconvError::OutOfRange { .. }));
    }

    #[test]
    fn test_rejects_foreign_sensitivity() {
        let backend = WindowsPlatform::new();
        let kde = Sensitivity::Kde(KdeSensitivity::new(0.0).unwrap());
        assert!(matches!(
            backend.to_intermediate(&kde),
            Err(SensconvError::PlatformMismatch { .. })
        ));
    }
}
