//! Joystick samples and their mapping onto the display.

use embedded_graphics::prelude::Point;

use crate::config::{ADC_MAX, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// One raw reading of both joystick axes (12-bit, `0..=ADC_MAX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    pub x: u16,
    pub y: u16,
}

impl JoystickSample {
    /// Build a sample, saturating each axis at `ADC_MAX`.
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x: x.min(ADC_MAX),
            y: y.min(ADC_MAX),
        }
    }

    /// Top-left corner of the marker for this sample on a
    /// `DISPLAY_WIDTH × DISPLAY_HEIGHT` screen.
    pub fn marker_origin(&self) -> Point {
        Point::new(
            map_axis(self.x, DISPLAY_WIDTH) as i32,
            map_axis(self.y, DISPLAY_HEIGHT) as i32,
        )
    }
}

/// Scale a raw sample onto `0..extent` with floor division:
/// `raw * extent / ADC_MAX`, clamped to `extent - 1`.
///
/// Only a full-scale sample hits the clamp; it would otherwise land one
/// pixel past the edge.
pub fn map_axis(raw: u16, extent: u32) -> u32 {
    let raw = u32::from(raw.min(ADC_MAX));
    let pos = raw * extent / u32::from(ADC_MAX);
    pos.min(extent.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(map_axis(0, 128), 0);
        assert_eq!(map_axis(4095, 128), 127);
        assert_eq!(map_axis(4094, 128), 127);
        assert_eq!(map_axis(0, 64), 0);
        assert_eq!(map_axis(4095, 64), 63);
    }

    #[test]
    fn center_scenario() {
        // floor(2048 * 128 / 4095) = 64, floor(1024 * 64 / 4095) = 16
        let sample = JoystickSample::new(2048, 1024);
        assert_eq!(sample.marker_origin(), Point::new(64, 16));
    }

    #[test]
    fn mapping_is_monotonic_and_bounded() {
        for extent in [64u32, 128] {
            let mut prev = 0;
            for raw in 0..=ADC_MAX {
                let pos = map_axis(raw, extent);
                assert!(pos >= prev, "not monotonic at raw {}", raw);
                assert!(pos < extent, "out of bounds at raw {}", raw);
                prev = pos;
            }
        }
    }

    #[test]
    fn out_of_range_samples_saturate() {
        let sample = JoystickSample::new(5000, u16::MAX);
        assert_eq!(sample, JoystickSample::new(ADC_MAX, ADC_MAX));
        assert_eq!(map_axis(u16::MAX, 128), 127);
    }

    #[test]
    fn zero_extent_does_not_underflow() {
        assert_eq!(map_axis(4095, 0), 0);
    }
}
