//! System initialization and clock configuration for STM32H753.

use embassy_stm32::{rcc::*, Config, Peripherals};

/// Initialize the STM32H753 system clocks.
///
/// - **480 MHz** system clock using PLL1 from HSI
/// - **240 MHz** AHB clock
/// - **120 MHz** APB clocks (I2C1 kernel clock is taken from APB1)
/// - **Scale0** voltage scaling
///
/// # Returns
///
/// The initialized [`Peripherals`] struct containing all STM32 peripheral instances.
///
/// # Panics
///
/// Panics if the clock configuration fails, which typically indicates
/// hardware issues or invalid clock settings.
pub fn init_system() -> Peripherals {
    let mut config = Config::default();

    // Enable high-speed internal oscillator (16 MHz)
    config.rcc.hsi = Some(HSIPrescaler::DIV1);

    // PLL1 = HSI(16MHz) / DIVM1(4) * DIVN1(60) / DIVP1(2) = 480MHz
    config.rcc.pll1 = Some(Pll {
        source: PllSource::HSI,
        prediv: PllPreDiv::DIV4,
        mul: PllMul::MUL60,
        divp: Some(PllDiv::DIV2),
        divq: None,
        divr: None,
    });

    config.rcc.sys = Sysclk::PLL1_P; // 480 MHz
    config.rcc.ahb_pre = AHBPrescaler::DIV2; // 240 MHz
    config.rcc.apb1_pre = APBPrescaler::DIV2; // 120 MHz
    config.rcc.apb2_pre = APBPrescaler::DIV2;
    config.rcc.apb3_pre = APBPrescaler::DIV2;
    config.rcc.apb4_pre = APBPrescaler::DIV2;

    config.rcc.voltage_scale = VoltageScale::Scale0;

    embassy_stm32::init(config)
}
