//! STM32F103 Blue Pill Software Calendar Clock on a 16x2 LCD
//! =============================================================================================
//!
//! This firmware keeps date and time in software and shows them on a
//! character LCD. While the IR obstacle sensor sees something the clock is
//! held and the LCD shows "Detecting Object" instead.
//!
//! Hardware Connections:
//!   LCD1602 + PCF8574 backpack (0x27) -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7
//!      SCL  -> PB6
//!
//!   IR obstacle sensor:
//!      OUT  -> PB13 (EXTI13, any edge, LOW = object)
//!      VCC  -> 3.3V
//!      GND  -> GND

#![no_std]
#![no_main]

use defmt::{debug, info, warn};
use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_stm32::{exti::ExtiInput, gpio::Pull, i2c::I2c, time::Hertz};
use embassy_time::{Delay, Duration, Ticker};
use ir_clock::{
    app::{ClockApp, SharedState},
    config::ClockConfig,
    hardware::{ir_sensor::IrSensor, lcd1602::Lcd1602},
};
use panic_probe as _; // Panic handler
use static_cell::StaticCell;

// Detection flag shared between the sensor task and the main loop
static SHARED: StaticCell<SharedState> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    let config = ClockConfig::DEFAULT;
    let shared: &'static SharedState = SHARED.init(SharedState::new());

    // PCF8574 backpacks are rated for standard mode only
    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, Hertz::khz(100), Default::default());
    let mut lcd = Lcd1602::new(i2c, Delay, config.lcd_address);
    if let Err(e) = lcd.init() {
        warn!("LCD init failed: {}", e);
    }

    // Module output is push-pull, no pull resistor needed
    let ir_pin = ExtiInput::new(p.PB13, p.EXTI13, Pull::None);
    spawner.spawn(ir_watch(IrSensor::new(ir_pin), shared)).unwrap();

    let mut app = ClockApp::new(&config, lcd, shared);
    if let Err(e) = app.start() {
        warn!("initial draw failed: {}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_period_ms));
    loop {
        match app.tick() {
            Ok(frame) => debug!("frame: {}", frame),
            Err(e) => warn!("frame dropped: {}", e),
        }
        ticker.next().await;
    }
}

/// IR Sensor Task
///
/// Stands in for the pin-change interrupt: every edge on PB13 samples the
/// line and updates the shared detection flag.
#[embassy_executor::task]
async fn ir_watch(mut sensor: IrSensor<ExtiInput<'static>>, shared: &'static SharedState) {
    info!("IR sensor armed");
    match sensor.watch(shared).await {
        Ok(never) => match never {},
        Err(never) => match never {},
    }
}
