// Settings module
// View scales and layout preferences

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Pixel mapping of one view's time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewScale {
    pub pixels_per_hour: f32,
    /// Rendered height floor so short events stay visible and clickable.
    pub min_height_px: f32,
}

impl ViewScale {
    pub const DAY: ViewScale = ViewScale {
        pixels_per_hour: 120.0,
        min_height_px: 60.0,
    };

    pub const WEEK: ViewScale = ViewScale {
        pixels_per_hour: 96.0,
        min_height_px: 70.0,
    };

    /// Durations shorter than this are drawn at `min_height_px`.
    pub fn min_visible_minutes(&self) -> f32 {
        self.min_height_px / self.pixels_per_hour * 60.0
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.pixels_per_hour.is_finite() || self.pixels_per_hour <= 0.0 {
            return Err(format!(
                "pixels_per_hour must be a positive number, got {}",
                self.pixels_per_hour
            ));
        }
        if !self.min_height_px.is_finite() || self.min_height_px < 0.0 {
            return Err(format!(
                "min_height_px must be zero or positive, got {}",
                self.min_height_px
            ));
        }
        Ok(())
    }
}

/// How events of one scope are grouped for `lane_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneGrouping {
    /// Every event of the day shares one lane count.
    #[default]
    Scope,
    /// Each connected run of overlapping events gets its own lane count.
    Cluster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub gap_threshold_minutes: i64,
    pub slot_minutes: u32,
    pub now_refresh_secs: u64,
    pub first_day_of_week: u8, // 0 = Sunday
    pub lane_grouping: LaneGrouping,
    // TOML tables must follow plain values.
    pub day: ViewScale,
    pub week: ViewScale,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            gap_threshold_minutes: 120,
            slot_minutes: 15,
            now_refresh_secs: 60,
            first_day_of_week: 1, // Monday
            lane_grouping: LaneGrouping::Scope,
            day: ViewScale::DAY,
            week: ViewScale::WEEK,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), String> {
        self.day.validate().map_err(|e| format!("day: {}", e))?;
        self.week.validate().map_err(|e| format!("week: {}", e))?;

        if self.gap_threshold_minutes < 0 {
            return Err("gap_threshold_minutes cannot be negative".to_string());
        }
        if self.slot_minutes == 0 || 60 % self.slot_minutes != 0 {
            return Err(format!(
                "slot_minutes must divide an hour evenly, got {}",
                self.slot_minutes
            ));
        }
        if self.now_refresh_secs == 0 {
            return Err("now_refresh_secs must be at least 1".to_string());
        }
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            ));
        }
        Ok(())
    }

    /// Cadence at which the renderer should re-evaluate the "now" line.
    pub fn now_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.now_refresh_secs)
    }
}
