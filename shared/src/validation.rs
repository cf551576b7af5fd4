use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MIN_SPIN_DEGREES_FLOOR, PERCENT_SUM_TOLERANCE};
use crate::prize_config::{PrizeEntry, SpinSettings};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static FUNCTIONAL_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*(,\s*(0|1|0?\.\d+)\s*)?\)$").unwrap()
});

pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR.is_match(color) || FUNCTIONAL_COLOR.is_match(color) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_color"))
}

/// Sector boundaries only close the circle when the weights add up to 100.
pub fn validate_percent_sum(prizes: &[PrizeEntry]) -> Result<(), ValidationError> {
    let total: f64 = prizes.iter().map(|p| p.percent).sum();
    if !total.is_finite() || (total - 100.0).abs() > PERCENT_SUM_TOLERANCE {
        let mut err = ValidationError::new("percent_sum");
        err.add_param("total".into(), &total);
        return Err(err);
    }
    Ok(())
}

pub fn validate_spin_settings(spin: &SpinSettings) -> Result<(), ValidationError> {
    if !(spin.duration_ms.is_finite() && spin.duration_ms > 0.0) {
        return Err(ValidationError::new("spin_duration"));
    }
    if !(spin.min_spin_degrees.is_finite() && spin.min_spin_degrees >= MIN_SPIN_DEGREES_FLOOR) {
        return Err(ValidationError::new("min_spin_degrees"));
    }
    Ok(())
}
