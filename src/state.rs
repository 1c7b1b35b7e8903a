//! State shared between the button tasks and the main loop.
//!
//! Every field has exactly one writer:
//!
//! | field         | writer                | readers   |
//! |---------------|-----------------------|-----------|
//! | `led_on`      | joystick button       | main loop |
//! | `border`      | joystick button       | main loop |
//! | `pwm_enabled` | button A              | main loop |
//!
//! With a single writer a plain load followed by a store cannot lose an
//! update, so the fields are atomics accessed with `load`/`store` only.
//! That also keeps them usable on thumbv6m (RP2040), which has no atomic
//! read-modify-write instructions. Readers may see a flip one frame late.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Decoration drawn around the joystick marker. Cycles
/// `None → Rectangle → Circle → None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BorderStyle {
    #[default]
    None = 0,
    Rectangle = 1,
    Circle = 2,
}

impl BorderStyle {
    /// Number of styles in the cycle.
    pub const COUNT: u8 = 3;

    /// The style after this one.
    pub fn next(self) -> Self {
        Self::from_raw(self.as_raw() + 1)
    }

    /// Decode a raw value. Anything past the last style wraps around, so
    /// the result is always one of the three variants.
    pub fn from_raw(raw: u8) -> Self {
        match raw % Self::COUNT {
            0 => BorderStyle::None,
            1 => BorderStyle::Rectangle,
            _ => BorderStyle::Circle,
        }
    }

    pub fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Plain copy of the shared state, taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub led_on: bool,
    pub pwm_enabled: bool,
    pub border: BorderStyle,
}

/// Flags handed from the button tasks to the main loop.
///
/// Lives in a `static` on target; tests build their own.
pub struct SharedState {
    led_on: AtomicBool,
    pwm_enabled: AtomicBool,
    border: AtomicU8,
}

impl SharedState {
    /// Power-on state: green LED off, PWM LEDs enabled, no border.
    pub const fn new() -> Self {
        Self {
            led_on: AtomicBool::new(false),
            pwm_enabled: AtomicBool::new(true),
            border: AtomicU8::new(BorderStyle::None as u8),
        }
    }

    // Readers

    pub fn led_on(&self) -> bool {
        self.led_on.load(Ordering::Relaxed)
    }

    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Relaxed)
    }

    pub fn border(&self) -> BorderStyle {
        BorderStyle::from_raw(self.border.load(Ordering::Relaxed))
    }

    /// Read all three fields. Not atomic as a whole; a button may land
    /// between two loads, which only shows up as a one-frame lag.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            led_on: self.led_on(),
            pwm_enabled: self.pwm_enabled(),
            border: self.border(),
        }
    }

    // Writers

    /// Flip the green LED flag and return the new value.
    ///
    /// Only the joystick-button handler may call this.
    pub fn toggle_led(&self) -> bool {
        let on = !self.led_on();
        self.led_on.store(on, Ordering::Relaxed);
        on
    }

    /// Flip the PWM-enable flag and return the new value.
    ///
    /// Only the button-A handler may call this.
    pub fn toggle_pwm(&self) -> bool {
        let enabled = !self.pwm_enabled();
        self.pwm_enabled.store(enabled, Ordering::Relaxed);
        enabled
    }

    /// Move to the next border style and return it.
    ///
    /// Only the joystick-button handler may call this.
    pub fn advance_border(&self) -> BorderStyle {
        let next = self.border().next();
        self.border.store(next.as_raw(), Ordering::Relaxed);
        next
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
