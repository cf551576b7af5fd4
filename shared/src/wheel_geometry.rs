use crate::constants::{LABEL_FONT_FAMILY, POINTER_BASE_GAP};

/// Folds any angle into `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let folded = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// Polar angle of `(x, y)` around `(cx, cy)` in canvas space (y grows downward).
pub fn polar_angle_deg(cx: f64, cy: f64, x: f64, y: f64) -> f64 {
    normalize_deg((y - cy).atan2(x - cx).to_degrees())
}

/// Layout derived from the canvas size. The wheel touches the shorter edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelMetrics {
    pub width: f64,
    pub height: f64,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl WheelMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            cx: width / 2.0,
            cy: height / 2.0,
            radius: width.min(height) / 2.0,
        }
    }

    pub fn label_font_px(&self) -> f64 {
        (self.radius * 0.09).floor().max(14.0)
    }

    pub fn label_font(&self) -> String {
        format!("{}px {}", self.label_font_px(), LABEL_FONT_FAMILY)
    }

    pub fn center_dot_radius(&self) -> f64 {
        (self.radius * 0.02).max(4.0)
    }

    pub fn pointer(&self) -> PointerGeometry {
        PointerGeometry::below(self)
    }
}

/// Upward-facing triangle parked under the wheel. It never rotates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGeometry {
    pub tip: (f64, f64),
    pub base_left: (f64, f64),
    pub base_right: (f64, f64),
    angle_deg: f64,
}

impl PointerGeometry {
    pub fn below(metrics: &WheelMetrics) -> Self {
        let base_y = metrics.cy + metrics.radius + POINTER_BASE_GAP;
        let tip_y = base_y - (metrics.radius * 0.12).max(28.0);
        let half_w = (metrics.radius * 0.06).max(12.0);
        Self {
            tip: (metrics.cx, tip_y),
            base_left: (metrics.cx - half_w, base_y),
            base_right: (metrics.cx + half_w, base_y),
            angle_deg: polar_angle_deg(metrics.cx, metrics.cy, metrics.cx, tip_y),
        }
    }

    /// Angle of the pointer tip as seen from the wheel centre.
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }
}
