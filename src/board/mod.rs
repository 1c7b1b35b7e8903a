//! RP2040 peripheral glue: joystick ADC and the RGB LED.

pub mod joystick_adc;
pub mod leds;
