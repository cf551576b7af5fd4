use crate::prize_config::PrizeConfig;
use crate::shared_wheel_game::WheelResult;
use crate::wheel_geometry::normalize_deg;

/// Angle under the pointer expressed in the wheel's unrotated frame.
pub fn effective_angle(pointer_deg: f64, rotation_deg: f64) -> f64 {
    normalize_deg(normalize_deg(pointer_deg) - normalize_deg(rotation_deg))
}

/// Index of the sector under the pointer. Falls back to the first sector when
/// rounding leaves the angle outside every range.
pub fn resolve_sector(config: &PrizeConfig, pointer_deg: f64, rotation_deg: f64) -> usize {
    let eff = effective_angle(pointer_deg, rotation_deg);
    config
        .sectors()
        .find(|sector| sector.contains(eff))
        .map(|sector| sector.index)
        .unwrap_or(0)
}

pub fn resolve(config: &PrizeConfig, pointer_deg: f64, rotation_deg: f64) -> WheelResult {
    let index = resolve_sector(config, pointer_deg, rotation_deg);
    let name = config
        .prizes()
        .get(index)
        .map(|p| p.name.clone())
        .unwrap_or_default();
    WheelResult { index, name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize_config::{PrizeEntry, SpinSettings, WheelConfig};
    use crate::wheel_geometry::WheelMetrics;

    fn halves() -> PrizeConfig {
        PrizeConfig::new(WheelConfig {
            prizes: vec![
                PrizeEntry::new("A", 50.0, "#ff0000"),
                PrizeEntry::new("B", 50.0, "#00ff00"),
            ],
            spin: SpinSettings::default(),
        })
        .unwrap()
    }

    #[test]
    fn test_effective_angle() {
        assert_eq!(effective_angle(90.0, 0.0), 90.0);
        assert_eq!(effective_angle(90.0, 180.0), 270.0);
        assert_eq!(effective_angle(90.0, 450.0), 0.0);
        assert_eq!(effective_angle(-270.0, 0.0), 90.0);
    }

    #[test]
    fn test_bottom_pointer_without_rotation_lands_on_first_half() {
        let config = halves();
        let pointer = WheelMetrics::new(550.0, 550.0).pointer();
        let result = resolve(&config, pointer.angle_deg(), 0.0);
        assert_eq!(result.name, "A");
        assert_eq!(result.index, 0);
    }

    #[test]
    fn test_top_pointer_without_rotation_lands_on_second_half() {
        let config = halves();
        let result = resolve(&config, 270.0, 0.0);
        assert_eq!(result.name, "B");
    }

    #[test]
    fn test_pointer_on_sector_start_picks_that_sector() {
        let config = PrizeConfig::default();
        let pointer = 90.0;
        for sector in config.sectors() {
            let rotation = normalize_deg(pointer - sector.start_deg);
            assert_eq!(resolve_sector(&config, pointer, rotation), sector.index);
        }
    }

    #[test]
    fn test_pointer_on_sector_end_picks_next_sector() {
        let config = PrizeConfig::default();
        let pointer = 90.0;
        let count = config.len();
        for sector in config.sectors() {
            let rotation = normalize_deg(pointer - sector.end_deg);
            let expected = (sector.index + 1) % count;
            assert_eq!(resolve_sector(&config, pointer, rotation), expected);
        }
    }

    #[test]
    fn test_rotation_moves_sectors_clockwise() {
        let config = PrizeConfig::default();
        // 請你飲料 covers [36, 162); rotating by 0 puts 90 inside it
        assert_eq!(resolve(&config, 90.0, 0.0).name, "請你飲料");
        // Starbucks covers [252, 360); rotate so 300 sits under the pointer
        assert_eq!(resolve(&config, 90.0, 150.0).name, "Starbucks");
    }
}
