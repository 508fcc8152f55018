//! Cosmetic preview sizing. Has no bearing on doors or price.

use serde::Serialize;

const WIDTH_DOMAIN_MM: (f64, f64) = (800.0, 5199.0);
const HEIGHT_DOMAIN_MM: (f64, f64) = (1800.0, 3000.0);
const BOX_WIDTH_RANGE: (f64, f64) = (320.0, 560.0);
const BOX_HEIGHT_RANGE: (f64, f64) = (220.0, 320.0);

/// Ratios used when a measurement has not been entered yet.
const FALLBACK_WIDTH_RATIO: f64 = 0.35;
const FALLBACK_HEIGHT_RATIO: f64 = 0.55;

/// On-screen size of the wardrobe preview, in pixel-equivalent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewBox {
    pub box_width: f64,
    pub box_height: f64,
}

fn ratio(value: Option<f64>, (lo, hi): (f64, f64), fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => (v.clamp(lo, hi) - lo) / (hi - lo),
        _ => fallback,
    }
}

fn lerp((lo, hi): (f64, f64), t: f64) -> f64 {
    lo + t * (hi - lo)
}

pub fn map_to_preview_box(width_mm: Option<f64>, height_mm: Option<f64>) -> PreviewBox {
    let w = ratio(width_mm, WIDTH_DOMAIN_MM, FALLBACK_WIDTH_RATIO);
    let h = ratio(height_mm, HEIGHT_DOMAIN_MM, FALLBACK_HEIGHT_RATIO);
    PreviewBox {
        box_width: lerp(BOX_WIDTH_RANGE, w),
        box_height: lerp(BOX_HEIGHT_RANGE, h),
    }
}
