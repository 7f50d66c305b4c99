//! sensconv converter
//!
//! Routes a sensitivity value from its source platform backend to the
//! target platform backend.

use sensconv_common::error::SensconvResult;
use sensconv_platform_core::{convert_sensitivity, Platform, Sensitivity, SensitivityPlatform};
use sensconv_platform_kde::KdePlatform;
use sensconv_platform_windows::WindowsPlatform;

pub use sensconv_platform_core as platform;

/// Converter over the built-in platform backends.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    windows: WindowsPlatform,
    kde: KdePlatform,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend for a platform tag.
    pub fn backend(&self, platform: Platform) -> &dyn SensitivityPlatform {
        match platform {
            Platform::Windows => &self.windows,
            Platform::Kde => &self.kde,
        }
    }

    /// Parse raw input in `platform`'s unit.
    pub fn parse_value(&self, platform: Platform, raw: &str) -> SensconvResult<Sensitivity> {
        self.backend(platform).parse(raw)
    }

    /// Convert `sensitivity` into `target`'s unit.
    ///
    /// Values already in `target`'s unit are returned unchanged.
    pub fn convert(&self, target: Platform, sensitivity: Sensitivity) -> SensconvResult<Sensitivity> {
        let source = sensitivity.platform();
        if source == target {
            tracing::debug!(platform = %source, "Source and target match, nothing to convert");
            return Ok(sensitivity);
        }

        let converted =
            convert_sensitivity(self.backend(source), self.backend(target), &sensitivity)?;
        tracing::debug!(input = %sensitivity, output = %converted, "Converted sensitivity");
        Ok(converted)
    }

    /// Parse `raw` in `source`'s unit and convert it into `target`'s unit.
    pub fn convert_str(
        &self,
        source: Platform,
        target: Platform,
        raw: &str,
    ) -> SensconvResult<Sensitivity> {
        let sensitivity = self.parse_value(source, raw)?;
        self.convert(target, sensitivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensconv_platform_core::{KdeSensitivity, WindowsSensitivity};

    #[test]
    fn test_backend_matches_tag() {
        let converter = Converter::new();
        for platform in Platform::ALL {
            assert_eq!(converter.backend(platform).platform(), platform);
        }
    }

    #[test]
    fn test_same_platform_is_identity() {
        let converter = Converter::new();

        // 1.0 + 0.1 - 1.0 is not exactly 0.1, so this only holds if the
        // intermediate step is skipped.
        let kde = Sensitivity::Kde(KdeSensitivity::new(0.1).unwrap());
        assert_eq!(converter.convert(Platform::Kde, kde).unwrap(), kde);

        let windows = Sensitivity::Windows(WindowsSensitivity::new(17).unwrap());
        assert_eq!(converter.convert(Platform::Windows, windows).unwrap(), windows);
    }

    #[test]
    fn test_convert_str_reports_parse_errors() {
        let converter = Converter::new();
        assert!(converter
            .convert_str(Platform::Windows, Platform::Kde, "ten")
            .is_err());
        assert!(converter
            .convert_str(Platform::Kde, Platform::Windows, "")
            .is_err());
    }
}
