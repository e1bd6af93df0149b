//! Reports IMU statistics and the latest reading once per second.

use super::imu_poll::{LATEST_SAMPLE, SETTINGS};
use defmt::{info, warn};
use embassy_time::{Duration, Instant};
use mpu9250_rs::ImuData;

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

#[embassy_executor::task]
pub async fn imu_report_task() -> ! {
    let mut sample_count = 0u32;
    let mut stale_count = 0u32;
    let mut last_log_time = Instant::now();

    loop {
        let report = LATEST_SAMPLE.wait().await;
        sample_count += 1;
        if !report.fresh {
            stale_count += 1;
        }

        let now = Instant::now();
        if now.duration_since(last_log_time) < REPORT_INTERVAL {
            continue;
        }

        let data = ImuData::from_raw(&report.sample, &SETTINGS);
        info!(
            "IMU Stats: {} samples/sec | Accel (m/s²): [{}, {}, {}] | Gyro (rad/s): [{}, {}, {}] | Mag (µT): [{}, {}, {}] | Temp: {} °C",
            sample_count,
            data.accel[0],
            data.accel[1],
            data.accel[2],
            data.gyro[0],
            data.gyro[1],
            data.gyro[2],
            data.mag[0],
            data.mag[1],
            data.mag[2],
            data.temperature
        );
        if stale_count > 0 {
            warn!("{} of {} samples were stale", stale_count, sample_count);
        }

        sample_count = 0;
        stale_count = 0;
        last_log_time = now;
    }
}
