//! IMU polling application.
//!
//! Configures the MPU-9250 once, then samples it at a fixed period and publishes
//! every sample, fresh or stale, to [`LATEST_SAMPLE`].

use crate::board::i2c::{new_imu_bus, I2cPeripherals, ImuBus};
use defmt::{info, warn};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker, Timer};
use mpu9250_rs::{DriverConfig, ImuError, Mpu9250, RawSample, SensorSettings};

/// Sensor settings applied at start-up.
///
/// 1 kHz internal rate / (1 + 9) = 100 Hz output, 41 Hz low-pass filter,
/// ±500 °/s, ±4 g, auto-selected PLL clock.
pub const SETTINGS: SensorSettings = SensorSettings::from_codes(9, 3, 1, 1, 0, 0, 1);

/// Time between samples
const POLL_PERIOD: Duration = Duration::from_millis(10);
/// Per-transaction bus timeout
const BUS_TIMEOUT: Duration = Duration::from_millis(10);
/// Delay before reconfiguring after a fault
const RESTART_DELAY: Duration = Duration::from_secs(5);
/// Failed samples in a row before the sensor is reconfigured
const MAX_CONSECUTIVE_FAILURES: u32 = 50;

/// One published sample
#[derive(Debug, Clone, Copy, defmt::Format)]
pub struct SampleReport {
    pub sample: RawSample,
    /// `false` if some fields are left over from an earlier sample
    pub fresh: bool,
}

/// Most recent sample, overwritten on every poll
pub static LATEST_SAMPLE: Signal<CriticalSectionRawMutex, SampleReport> = Signal::new();

struct ImuPoller<'d> {
    imu: Mpu9250<ImuBus<'d>>,
}

impl<'d> ImuPoller<'d> {
    fn initialize(&mut self) -> Result<(), ImuError> {
        info!("Initializing MPU-9250...");
        self.imu.configure(&SETTINGS)?;
        self.imu.verify_devices()?;
        info!("MPU-9250 initialized successfully");
        Ok(())
    }

    /// Configure the sensor and poll until it keeps failing
    async fn run(&mut self) -> Result<(), ImuError> {
        self.initialize()?;

        let mut sample = RawSample::default();
        let mut consecutive_failures = 0u32;
        let mut ticker = Ticker::every(POLL_PERIOD);

        loop {
            ticker.next().await;

            match self.imu.read_sample_into(&mut sample) {
                Ok(()) => {
                    consecutive_failures = 0;
                    LATEST_SAMPLE.signal(SampleReport { sample, fresh: true });
                }
                Err(e) => {
                    warn!("IMU read error: {:?}, publishing stale sample", e);
                    LATEST_SAMPLE.signal(SampleReport { sample, fresh: false });

                    consecutive_failures += 1;
                    if consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
                        return Err(e);
                    }
                }
            }
        }
    }
}

/// Embassy task owning the IMU bus.
///
/// On configuration failure, or after too many failed samples in a row, the
/// task logs the error and reconfigures the sensor after a 5-second delay.
#[embassy_executor::task]
pub async fn imu_task(i2c_peripherals: I2cPeripherals<'static>) -> ! {
    let config = DriverConfig {
        timeout: BUS_TIMEOUT,
        ..DriverConfig::default()
    };
    let bus = new_imu_bus(i2c_peripherals, config.timeout);
    let mut poller = ImuPoller {
        imu: Mpu9250::new(bus, config),
    };

    loop {
        match poller.run().await {
            Ok(()) => {
                // run() only returns on error
                info!("IMU task unexpectedly returned Ok(())");
            }
            Err(e) => {
                info!("IMU error: {:?}, restarting in 5 seconds...", e);
                Timer::after(RESTART_DELAY).await;
            }
        }
    }
}
