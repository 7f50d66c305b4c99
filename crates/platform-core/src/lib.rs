//! sensconv platform core contracts.
//!
//! This crate contains the sensitivity value types and the
//! [`SensitivityPlatform`] contract implemented by each platform backend.
//! Backends never talk to each other directly: every conversion goes
//! through the neutral [`IntermediateSensitivity`] multiplier.

pub mod platform;
pub mod sensitivity;

pub use platform::*;
pub use sensitivity::*;

use sensconv_common::error::SensconvResult;

/// A platform's sensitivity unit system.
pub trait SensitivityPlatform {
    /// Which platform this backend implements.
    fn platform(&self) -> Platform;

    /// Parse raw user input expressed in this platform's unit.
    fn parse(&self, raw: &str) -> SensconvResult<Sensitivity>;

    /// Map a value of this platform to the neutral multiplier.
    ///
    /// Fails with `PlatformMismatch` if `sensitivity` belongs to another platform.
    fn to_intermediate(&self, sensitivity: &Sensitivity) -> SensconvResult<IntermediateSensitivity>;

    /// Map the neutral multiplier to the closest value this platform can express.
    fn from_intermediate(&self, intermediate: IntermediateSensitivity)
        -> SensconvResult<Sensitivity>;
}

/// Convert `sensitivity` from one platform's unit to another's.
pub fn convert_sensitivity(
    from: &dyn SensitivityPlatform,
    to: &dyn SensitivityPlatform,
    sensitivity: &Sensitivity,
) -> SensconvResult<Sensitivity> {
    let intermediate = from.to_intermediate(sensitivity)?;
    tracing::debug!(
        from = %from.platform(),
        to = %to.platform(),
        multiplier = intermediate.multiplier,
        "Converting via intermediate"
    );
    to.from_intermediate(intermediate)
}
