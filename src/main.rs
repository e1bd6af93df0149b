//! Firmware entry point: polls an MPU-9250 on I2C1 and reports readings over RTT.

#![no_std]
#![no_main]

// Application modules
mod apps;
mod board;

use defmt::info;
use embassy_executor::Spawner;

use defmt_rtt as _;
#[cfg(not(feature = "debug"))]
use panic_halt as _;
#[cfg(feature = "debug")]
use panic_probe as _;

/// Main application entry point
///
/// Initializes the system and spawns the IMU tasks.
/// This function never returns as the spawned tasks run indefinitely.
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Starting mpu9250-rs firmware v{}", env!("CARGO_PKG_VERSION"));

    let peripherals = board::init_system();

    info!("System initialized, spawning tasks...");

    spawner
        .spawn(apps::imu_poll::imu_task(claim_imu_i2c!(peripherals)))
        .unwrap();
    spawner.spawn(apps::imu_report::imu_report_task()).unwrap();

    loop {
        embassy_time::Timer::after(embassy_time::Duration::from_secs(60)).await;
        info!("System heartbeat - all tasks running");
    }
}
