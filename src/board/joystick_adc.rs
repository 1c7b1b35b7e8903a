//! Joystick axes on the RP2040 ADC.
//!
//! X is ADC0 (GPIO26), Y is ADC1 (GPIO27). Both are sampled back to back
//! once per frame.

use embassy_rp::adc::{Adc, Async, Channel};
use joystick_oled::error::Axis;
use joystick_oled::joystick::JoystickSample;
use joystick_oled::{Error, Result};

pub struct JoystickAdc {
    adc: Adc<'static, Async>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl JoystickAdc {
    pub fn new(adc: Adc<'static, Async>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self { adc, x, y }
    }

    /// Read both axes. A failed conversion is tagged with its axis.
    pub async fn read(&mut self) -> Result<JoystickSample> {
        let x = self
            .adc
            .read(&mut self.x)
            .await
            .map_err(|_| Error::Adc(Axis::X))?;
        let y = self
            .adc
            .read(&mut self.y)
            .await
            .map_err(|_| Error::Adc(Axis::Y))?;
        Ok(JoystickSample::new(x, y))
    }
}
