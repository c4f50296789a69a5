//! Software calendar clock for a two-line character display with an
//! infrared "object present" override.
//!
//! The date/time model lives in [`clock`], text rendering in [`render`],
//! the per-tick driver and the interrupt-side flag in [`app`], and the
//! display/sensor collaborators in [`hardware`].

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod clock;
pub mod config;
pub mod hardware;
pub mod render;
