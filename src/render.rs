//! Frame composition.
//!
//! Draws into any `embedded_graphics` target with binary colour, so the
//! same code renders into the SSD1306 frame buffer on target and into a
//! plain pixel array in tests. Pushing the frame to the panel is left to
//! the caller.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

use crate::config::{BORDER_CIRCLE_RADIUS, DISPLAY_HEIGHT, DISPLAY_WIDTH, MARKER_SIZE};
use crate::joystick::JoystickSample;
use crate::state::BorderStyle;

/// Clear the target, then draw the joystick marker and the border.
pub fn render_frame<D>(
    target: &mut D,
    sample: JoystickSample,
    border: BorderStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    draw_marker(target, sample.marker_origin())?;
    draw_border(target, border)
}

/// Filled `MARKER_SIZE` square with its top-left corner at `origin`.
/// Parts past the screen edge are clipped by the target.
pub fn draw_marker<D>(target: &mut D, origin: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(origin, Size::new_equal(MARKER_SIZE))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)
}

pub fn draw_border<D>(target: &mut D, border: BorderStyle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    match border {
        BorderStyle::None => Ok(()),
        BorderStyle::Rectangle => Rectangle::with_corners(
            Point::zero(),
            Point::new(DISPLAY_WIDTH as i32 - 1, DISPLAY_HEIGHT as i32 - 1),
        )
        .into_styled(stroke)
        .draw(target),
        BorderStyle::Circle => Circle::with_center(
            Point::new(DISPLAY_WIDTH as i32 / 2, DISPLAY_HEIGHT as i32 / 2),
            2 * BORDER_CIRCLE_RADIUS + 1,
        )
        .into_styled(stroke)
        .draw(target),
    }
}
