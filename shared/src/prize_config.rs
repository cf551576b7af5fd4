use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_MIN_SPIN_DEGREES, DEFAULT_SPIN_DURATION_MS};
use crate::error::WheelError;
use crate::validation::{validate_color, validate_percent_sum, validate_spin_settings};

/// One weighted slice of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PrizeEntry {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub percent: f64,
    #[validate(custom = "validate_color")]
    pub color: String,
}

impl PrizeEntry {
    pub fn new(name: &str, percent: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            percent,
            color: color.to_string(),
        }
    }

    /// Angular width of the sector in degrees.
    pub fn span_degrees(&self) -> f64 {
        self.percent * 360.0 / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinSettings {
    pub duration_ms: f64,
    pub min_spin_degrees: f64,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_SPIN_DURATION_MS,
            min_spin_degrees: DEFAULT_MIN_SPIN_DEGREES,
        }
    }
}

/// Raw configuration document as it arrives from the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WheelConfig {
    #[validate(length(min = 1), custom = "validate_percent_sum")]
    pub prizes: Vec<PrizeEntry>,
    #[serde(default)]
    #[validate(custom = "validate_spin_settings")]
    pub spin: SpinSettings,
}

/// A prize list that has passed validation. Never mutated after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeConfig {
    prizes: Vec<PrizeEntry>,
    spin: SpinSettings,
}

impl PrizeConfig {
    pub fn new(config: WheelConfig) -> Result<Self, WheelError> {
        config.validate()?;
        for prize in &config.prizes {
            prize.validate()?;
        }
        Ok(Self {
            prizes: config.prizes,
            spin: config.spin,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let config: WheelConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    pub fn prizes(&self) -> &[PrizeEntry] {
        &self.prizes
    }

    pub fn spin(&self) -> &SpinSettings {
        &self.spin
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// Sectors in list order, each starting where the previous one ended.
    pub fn sectors(&self) -> Sectors<'_> {
        Sectors {
            entries: self.prizes.iter(),
            index: 0,
            start: 0.0,
        }
    }
}

impl Default for PrizeConfig {
    fn default() -> Self {
        Self {
            prizes: vec![
                PrizeEntry::new("請我吃飯", 10.0, "#36A2EB"),
                PrizeEntry::new("請你飲料", 35.0, "#FFCE56"),
                PrizeEntry::new("謝謝參與", 10.0, "#3313ebff"),
                PrizeEntry::new("請你吃飯", 10.0, "#ff5656ff"),
                PrizeEntry::new("???", 5.0, "#000000ff"),
                PrizeEntry::new("Starbucks", 30.0, "#4CAF50"),
            ],
            spin: SpinSettings::default(),
        }
    }
}

/// Angular range `[start_deg, end_deg)` occupied by one prize in the unrotated wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector<'a> {
    pub index: usize,
    pub entry: &'a PrizeEntry,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Sector<'_> {
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.span_deg() / 2.0
    }

    pub fn contains(&self, angle_deg: f64) -> bool {
        angle_deg >= self.start_deg && angle_deg < self.end_deg
    }
}

pub struct Sectors<'a> {
    entries: std::slice::Iter<'a, PrizeEntry>,
    index: usize,
    start: f64,
}

impl<'a> Iterator for Sectors<'a> {
    type Item = Sector<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        let end = self.start + entry.span_degrees();
        let sector = Sector {
            index: self.index,
            entry,
            start_deg: self.start,
            end_deg: end,
        };
        self.index += 1;
        self.start = end;
        Some(sector)
    }
}
