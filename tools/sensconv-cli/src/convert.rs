//! Convert a sensitivity value between platforms.

use sensconv_common::error::SensconvResult;
use sensconv_converter::platform::Platform;
use sensconv_converter::Converter;

/// Convert `raw` and format the result line printed to stdout.
pub fn run(source: Platform, target: Platform, raw: &str) -> SensconvResult<String> {
    tracing::debug!(%source, %target, raw, "Converting");
    let converted = Converter::new().convert_str(source, target, raw)?;
    Ok(format!("Converted sensitivity: {converted}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_lines() {
        assert_eq!(
            run(Platform::Kde, Platform::Windows, "-0.375").unwrap(),
            "Converted sensitivity: WindowsSensitivity(tick=7)"
        );
        assert_eq!(
            run(Platform::Windows, Platform::Kde, "10").unwrap(),
            "Converted sensitivity: KDESensitivity(value=0.0)"
        );
        assert_eq!(
            run(Platform::Windows, Platform::Windows, "4").unwrap(),
            "Converted sensitivity: WindowsSensitivity(tick=4)"
        );
    }

    #[test]
    fn test_bad_value() {
        let err = run(Platform::Windows, Platform::Kde, "loud").unwrap_err();
        assert!(err.is_usage_error());
    }
}
