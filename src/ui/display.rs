//! SSD1306 OLED display wrapper.

use joystick_oled::config::DISPLAY_I2C_ADDRESS;
use joystick_oled::joystick::JoystickSample;
use joystick_oled::render::render_frame;
use joystick_oled::state::BorderStyle;
use joystick_oled::{Error, Result};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and push one blank frame.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

/// Render one frame into the buffer and push it over I²C.
pub fn show<I2C>(display: &mut Display<I2C>, sample: JoystickSample, border: BorderStyle) -> Result<()>
where
    I2C: embedded_hal::i2c::I2c,
{
    render_frame(display, sample, border).map_err(|_| Error::Display)?;
    display.flush().map_err(|_| Error::Display)
}
