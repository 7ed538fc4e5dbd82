//! Embassy Async Hand Direction Example
//!
//! Turns hand tilt into drive commands on a Raspberry Pi Pico 2. It shows how to:
//! - Bring up the MPU-6050 over async I2C
//! - Calibrate while the hand rests level
//! - Run the tracking loop and print debounced directions
//!
//! Hardware Setup:
//! - Connect MPU6050 to Raspberry Pi Pico:
//!   - SDA -> GP14
//!   - SCL -> GP15
//!   - VCC -> 3.3V
//!   - GND -> GND

#![no_std]
#![no_main]

use core::ops::ControlFlow;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::{block::ImageDef, config::Config, i2c::InterruptHandler};
use embassy_time::{Delay, Instant};
use {defmt_rtt as _, panic_probe as _};

use mpu6050_gesture::{
    address::Address,
    config::TrackerConfig,
    sensor_async::Mpu6050,
    tracker::{Clock, Report},
    tracker_async,
};

embassy_rp::bind_interrupts!(struct Irqs {
    I2C1_IRQ => InterruptHandler<embassy_rp::peripherals::I2C1>;
});

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&mut self) -> u64 {
        Instant::now().as_millis()
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    let bus = embassy_rp::i2c::I2c::new_async(
        p.I2C1,
        p.PIN_15,
        p.PIN_14,
        Irqs,
        embassy_rp::i2c::Config::default(),
    );
    let mut delay = Delay;
    let config = TrackerConfig::default();

    let sensor = match Mpu6050::new(bus, Address::default(), config.range, &mut delay).await {
        Ok(sensor) => sensor,
        Err(e) => {
            error!("{}", defmt::Display2Format(&e));
            return;
        }
    };

    info!("Calibrating sensor, please keep hand in neutral position...");
    let mut mpu = match tracker_async::calibrate(sensor, &mut delay, &config).await {
        Ok(mpu) => mpu,
        Err(e) => {
            error!("{}", defmt::Display2Format(&e));
            return;
        }
    };
    info!("Calibration complete! Start moving your hand to see directions.");
    info!("Mapping: forward=Y+, backward=Y-, left=X-, right=X+");

    let result = tracker_async::run(
        &mut mpu,
        &mut delay,
        &mut EmbassyClock,
        &config,
        |report: &Report| {
            if report.confirmed {
                info!("{}", defmt::Display2Format(report));
            }
            ControlFlow::Continue(())
        },
    )
    .await;

    if let Err(e) = result {
        error!("{}", defmt::Display2Format(&e));
    }
    let _bus = mpu.release();
}
