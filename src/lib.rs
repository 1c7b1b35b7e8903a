//! Host-testable core of the joystick-oled firmware.
//!
//! Everything here is plain `no_std` logic with no dependency on the
//! RP2040 HAL, so it can be tested on the host:
//!
//! Usage: `cargo test`
//!
//! The embedded binary (`src/main.rs`, feature `embedded`) owns the
//! peripherals and calls into these modules from its tasks.
//!
//! ## Modules
//!
//! - [`debounce`]: falling-edge debounce guard
//! - [`state`]: flags shared between button tasks and the main loop
//! - [`handlers`]: what each button does when a press is accepted
//! - [`joystick`] / [`render`]: sample → screen mapping and frame drawing
//! - [`app`]: LED mirroring step of the main loop

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod handlers;
pub mod joystick;
pub mod outputs;
pub mod render;
pub mod state;

pub use error::{Error, Result};
