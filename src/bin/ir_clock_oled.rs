//! STM32F103 Blue Pill Software Calendar Clock on an SSD1306 OLED
//! =============================================================================================
//!
//! Same clock as `ir_clock`, drawn on a 128x64 OLED through a character
//! grid (16 columns, 4 rows; the clock uses the top two).
//!
//! Hardware Connections:
//!   OLED Display -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7
//!      SCL  -> PB6
//!
//!   IR obstacle sensor:
//!      OUT  -> PB13 (EXTI13, any edge, LOW = object)

#![no_std]
#![no_main]

use defmt::{Debug2Format, debug, info, warn};
use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_stm32::{
    bind_interrupts,
    exti::ExtiInput,
    gpio::Pull,
    i2c::{self, ErrorInterruptHandler, EventInterruptHandler},
    peripherals,
    time::Hertz,
};
use embassy_time::{Duration, Ticker};
use ir_clock::{
    app::{ClockApp, SharedState},
    config::ClockConfig,
    hardware::{ir_sensor::IrSensor, oled_text::TextGrid},
};
use panic_probe as _; // Panic handler
use ssd1306::{I2CDisplayInterface, Ssd1306, prelude::*};
use static_cell::StaticCell;

static SHARED: StaticCell<SharedState> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    let config = ClockConfig::DEFAULT;
    let shared: &'static SharedState = SHARED.init(SharedState::new());

    // Bind I2C interrupt handlers
    bind_interrupts!(struct Irqs {
        I2C1_EV => EventInterruptHandler<peripherals::I2C1>;
        I2C1_ER => ErrorInterruptHandler<peripherals::I2C1>;
    });

    // Configure I2C peripheral at 400kHz
    let i2c = i2c::I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        Irqs,
        p.DMA1_CH6,
        p.DMA1_CH7,
        Hertz::khz(400),
        Default::default(),
    );

    let interface = I2CDisplayInterface::new(i2c);
    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if let Err(e) = oled.init() {
        warn!("OLED init failed: {}", Debug2Format(&e));
    }

    let ir_pin = ExtiInput::new(p.PB13, p.EXTI13, Pull::None);
    spawner.spawn(ir_watch(IrSensor::new(ir_pin), shared)).unwrap();

    let mut app = ClockApp::new(&config, TextGrid::new(oled), shared);
    if let Err(e) = app.start() {
        warn!("initial draw failed: {}", Debug2Format(&e));
    }

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_period_ms));
    loop {
        match app.tick() {
            Ok(frame) => debug!("frame: {}", frame),
            Err(e) => warn!("frame dropped: {}", Debug2Format(&e)),
        }
        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn ir_watch(mut sensor: IrSensor<ExtiInput<'static>>, shared: &'static SharedState) {
    info!("IR sensor armed");
    match sensor.watch(shared).await {
        Ok(never) => match never {},
        Err(never) => match never {},
    }
}
