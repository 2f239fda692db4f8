//! On-screen item sizing.
//!
//! Items are sized either from the native pixel dimensions of an asset or
//! from a visual angle at a known viewing distance. Both yield an
//! [`ItemFootprint`], which empty cells reuse so the grid never reflows.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};
use crate::geometry::GridSize;

/// Grid used with visual-angle sizing.
pub const VISUAL_ANGLE_GRID: GridSize = GridSize::square(36);

/// Display calibration supplied by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayCalibration {
    pub viewing_distance_cm: f64,
    pub pixels_per_cm: f64,
}

impl DisplayCalibration {
    pub fn new(viewing_distance_cm: f64, pixels_per_cm: f64) -> Result<Self> {
        let calibration = Self {
            viewing_distance_cm,
            pixels_per_cm,
        };
        calibration.validate()?;
        Ok(calibration)
    }

    pub fn validate(&self) -> Result<()> {
        positive("viewing_distance_cm", self.viewing_distance_cm)?;
        positive("pixels_per_cm", self.pixels_per_cm)
    }

    /// Pixel size subtending `angle_deg` at this calibration.
    pub fn angle_to_px(&self, angle_deg: f64) -> Result<f64> {
        self.validate()?;
        positive("angle_deg", angle_deg)?;
        if angle_deg >= 180.0 {
            return Err(GenerationError::InvalidParameter {
                name: "angle_deg",
                reason: format!("must be below 180 degrees, got {angle_deg}"),
            });
        }
        Ok(visual_angle_to_cm(angle_deg, self.viewing_distance_cm) * self.pixels_per_cm)
    }
}

/// Physical size in cm subtending `angle_deg` at `distance_cm`.
pub fn visual_angle_to_cm(angle_deg: f64, distance_cm: f64) -> f64 {
    2.0 * distance_cm * (angle_deg.to_radians() / 2.0).tan()
}

/// Pixel size subtending `angle_deg` at `distance_cm` on a display with
/// `pixels_per_cm` density.
pub fn visual_angle_to_px(angle_deg: f64, distance_cm: f64, pixels_per_cm: f64) -> Result<f64> {
    DisplayCalibration::new(distance_cm, pixels_per_cm)?.angle_to_px(angle_deg)
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GenerationError::InvalidParameter {
            name,
            reason: format!("must be a positive finite number, got {value}"),
        })
    }
}

/// Pixel box occupied by every cell, populated or empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemFootprint {
    pub width_px: f64,
    pub height_px: f64,
}

impl ItemFootprint {
    pub const fn square(edge_px: f64) -> Self {
        Self {
            width_px: edge_px,
            height_px: edge_px,
        }
    }

    /// Footprint matching an asset's native size.
    pub fn from_asset(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px: f64::from(width_px),
            height_px: f64::from(height_px),
        }
    }

    /// Square footprint subtending `angle_deg`.
    pub fn from_visual_angle(angle_deg: f64, calibration: &DisplayCalibration) -> Result<Self> {
        Ok(Self::square(calibration.angle_to_px(angle_deg)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn one_degree_at_57cm_is_about_one_cm() {
        let cm = visual_angle_to_cm(1.0, 57.0);
        assert!((cm - 0.9948).abs() < 1e-3);
    }

    #[test]
    fn pixels_scale_with_density() {
        let px = visual_angle_to_px(2.0, 60.0, 38.0).unwrap();
        let expected = 2.0 * 60.0 * (1.0_f64.to_radians()).tan() * 38.0;
        assert!(close(px, expected));
        let doubled = visual_angle_to_px(2.0, 60.0, 76.0).unwrap();
        assert!(close(doubled, expected * 2.0));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(visual_angle_to_px(0.0, 60.0, 38.0).is_err());
        assert!(visual_angle_to_px(1.0, -1.0, 38.0).is_err());
        assert!(visual_angle_to_px(1.0, 60.0, f64::NAN).is_err());
        assert!(visual_angle_to_px(180.0, 60.0, 38.0).is_err());
    }

    #[test]
    fn footprints() {
        let calibration = DisplayCalibration::new(57.0, 40.0).unwrap();
        let footprint = ItemFootprint::from_visual_angle(1.0, &calibration).unwrap();
        assert!(close(footprint.width_px, footprint.height_px));
        assert!(footprint.width_px > 39.0 && footprint.width_px < 40.0);

        let native = ItemFootprint::from_asset(48, 32);
        assert!(close(native.width_px, 48.0));
        assert!(close(native.height_px, 32.0));
        assert_eq!(VISUAL_ANGLE_GRID.capacity(), 1296);
    }
}
