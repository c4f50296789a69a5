//! Per-tick driver and the state it shares with the sensor interrupt.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::clock::{Clockwork, TimeCarry};
use crate::config::ClockConfig;
use crate::hardware::traits::{CharDisplay, ObjectSensor};
use crate::render::{show_date, show_time};

/// "Object present" as last sampled by the sensor edge handler.
#[derive(Debug, Default)]
pub struct DetectionFlag(AtomicBool);

impl DetectionFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn set(&self, detected: bool) {
        self.0.store(detected, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Everything the interrupt side and the tick loop both touch.
#[derive(Debug, Default)]
pub struct SharedState {
    pub detection: DetectionFlag,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            detection: DetectionFlag::new(),
        }
    }

    /// Edge handler body: sample the line and store the level.
    ///
    /// Runs in interrupt context, so it only reads the pin and does one
    /// atomic store.
    pub fn on_sensor_edge<S: ObjectSensor>(&self, sensor: &mut S) -> Result<bool, S::Error> {
        let present = sensor.object_present()?;
        self.detection.set(present);
        Ok(present)
    }
}

/// What a tick put on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// Status message; the clock was held.
    Status,
    /// Date and time, after advancing by the given carry.
    Clock(TimeCarry),
}

pub struct ClockApp<'a, D> {
    clock: Clockwork,
    display: D,
    shared: &'a SharedState,
    status_message: &'static str,
    showing_status: bool,
}

impl<'a, D: CharDisplay> ClockApp<'a, D> {
    pub fn new(config: &ClockConfig, display: D, shared: &'a SharedState) -> Self {
        Self {
            clock: config.clockwork(),
            display,
            shared,
            status_message: config.status_message,
            showing_status: false,
        }
    }

    /// First draw, before any tick.
    pub fn start(&mut self) -> Result<(), D::Error> {
        info!(
            "clock starting at {}-{}-{} {}:{}:{}",
            self.clock.date().year(),
            self.clock.date().month(),
            self.clock.date().day(),
            self.clock.time().hour(),
            self.clock.time().minute(),
            self.clock.time().second()
        );
        self.draw_clock()
    }

    /// One period of the main loop.
    ///
    /// With an object in front of the sensor the status message replaces
    /// the clock and time stands still. Otherwise the clock advances one
    /// second and both rows are redrawn. The clock advances before drawing
    /// so a failed display write does not lose the second.
    pub fn tick(&mut self) -> Result<Frame, D::Error> {
        let detected = self.shared.detection.is_set();
        if detected != self.showing_status {
            self.showing_status = detected;
            if detected {
                info!("object detected, clock held");
            } else {
                info!("object gone, clock resumed");
            }
        }

        if detected {
            self.draw_status()?;
            return Ok(Frame::Status);
        }

        let carry = self.clock.tick();
        self.draw_clock()?;
        Ok(Frame::Clock(carry))
    }

    pub fn clock(&self) -> &Clockwork {
        &self.clock
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn release(self) -> (Clockwork, D) {
        (self.clock, self.display)
    }

    fn draw_clock(&mut self) -> Result<(), D::Error> {
        self.display.clear()?;
        show_date(&mut self.display, self.clock.date())?;
        show_time(&mut self.display, self.clock.time())?;
        self.display.flush()
    }

    fn draw_status(&mut self) -> Result<(), D::Error> {
        self.display.clear()?;
        self.display.set_cursor(0, 0)?;
        self.display.print(self.status_message)?;
        self.display.flush()
    }
}
