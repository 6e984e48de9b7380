//! The pin provider contract.
//!
//! Every board revision exposes the same accessor surface; higher layers
//! (codec driver, button input, SD-card mount) are written against this
//! trait and never see GPIO numbers directly.

use crate::bus::{I2cPins, I2cPort, I2sPins, I2sPort, SpiPins};
use crate::button::{Button, ButtonId};
use crate::error::PinConfigError;
use crate::gpio::GpioNum;

/// Accessor contract for one board revision.
///
/// All methods are pure lookups into an immutable table: no I/O, no
/// blocking, no interior mutability. They are safe to call from any number
/// of threads or tasks concurrently, and calling the same accessor twice
/// always yields the identical value.
///
/// Bus accessors return the full pin set by value, so a failed call can
/// never leave a caller holding partially populated wiring. Single-value
/// accessors use `None` for "not wired on this board" — an expected,
/// board-dependent outcome, not an error.
pub trait PinProvider {
    /// Pin routing for an I2C controller.
    ///
    /// # Errors
    ///
    /// [`PinConfigError::I2cPortNotWired`] if the board does not route the
    /// requested controller.
    fn i2c_pins(&self, port: I2cPort) -> Result<I2cPins, PinConfigError>;

    /// Pin routing for an I2S port.
    ///
    /// # Errors
    ///
    /// [`PinConfigError::I2sPortNotWired`] if the board does not route the
    /// requested port.
    fn i2s_pins(&self, port: I2sPort) -> Result<I2sPins, PinConfigError>;

    /// SPI wiring: the shared bus and the attached device, together.
    ///
    /// # Errors
    ///
    /// [`PinConfigError::SpiNotWired`] if the board has no SPI header.
    fn spi_pins(&self) -> Result<SpiPins, PinConfigError>;

    /// SD-card detect/interrupt line, if the slot has one.
    fn sdcard_intr_gpio(&self) -> Option<GpioNum>;

    /// Maximum number of concurrently open files on the SD card.
    fn sdcard_open_file_max(&self) -> Option<u8>;

    /// Power-amplifier enable line.
    fn pa_enable_gpio(&self) -> Option<GpioNum>;

    /// ADC input reading the button resistor ladder.
    fn adc_detect_gpio(&self) -> Option<GpioNum>;

    /// Ladder index of a logical button, if the board wires it.
    fn button_id(&self, button: Button) -> Option<ButtonId>;

    /// Codec reset line.
    fn codec_reset_gpio(&self) -> Option<GpioNum>;

    /// Reset line for the auxiliary chip (DSP on the LyraTD-MSC).
    fn aux_reset_gpio(&self) -> Option<GpioNum>;
}
