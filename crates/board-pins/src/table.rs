//! The per-board pin table and its [`PinProvider`] implementation.

use crate::bus::{I2cPins, I2cPort, I2sPins, I2sPort, SpiPins};
use crate::button::{Button, ButtonId, ButtonMap};
use crate::error::PinConfigError;
use crate::gpio::GpioNum;
use crate::provider::PinProvider;

/// One board revision's complete pin routing.
///
/// A `PinTable` is an immutable configuration value: each supported board
/// contributes one `const` table (see [`crate::boards`]), and tests may
/// build synthetic tables with struct-update syntax from
/// [`PinTable::EMPTY`]. `None` in any slot means the board does not wire
/// that resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinTable {
    /// Board revision name, used in diagnostics.
    pub name: &'static str,
    /// I2C controller 0 routing.
    pub i2c0: Option<I2cPins>,
    /// I2C controller 1 routing.
    pub i2c1: Option<I2cPins>,
    /// I2S port 0 routing.
    pub i2s0: Option<I2sPins>,
    /// I2S port 1 routing.
    pub i2s1: Option<I2sPins>,
    /// SPI bus + device routing.
    pub spi: Option<SpiPins>,
    /// SD-card detect/interrupt line.
    pub sdcard_intr: Option<GpioNum>,
    /// SD-card concurrent open-file limit.
    pub sdcard_open_file_max: Option<u8>,
    /// Power-amplifier enable line.
    pub pa_enable: Option<GpioNum>,
    /// ADC input for the button resistor ladder.
    pub adc_detect: Option<GpioNum>,
    /// Button ladder indices.
    pub buttons: ButtonMap,
    /// Codec reset line.
    pub codec_reset: Option<GpioNum>,
    /// Auxiliary-chip reset line.
    pub aux_reset: Option<GpioNum>,
}

impl PinTable {
    /// A table with nothing wired.
    ///
    /// Starting point for synthetic boards in tests:
    ///
    /// ```
    /// use board_pins::{GpioNum, PinProvider, PinTable};
    ///
    /// let rig = PinTable {
    ///     name: "bench-rig",
    ///     pa_enable: Some(GpioNum::new(4)),
    ///     ..PinTable::EMPTY
    /// };
    /// assert_eq!(rig.pa_enable_gpio().map(|p| p.get()), Some(4));
    /// ```
    pub const EMPTY: PinTable = PinTable {
        name: "unwired",
        i2c0: None,
        i2c1: None,
        i2s0: None,
        i2s1: None,
        spi: None,
        sdcard_intr: None,
        sdcard_open_file_max: None,
        pa_enable: None,
        adc_detect: None,
        buttons: ButtonMap::NONE,
        codec_reset: None,
        aux_reset: None,
    };
}

impl PinProvider for PinTable {
    fn i2c_pins(&self, port: I2cPort) -> Result<I2cPins, PinConfigError> {
        let slot = match port {
            I2cPort::I2c0 => self.i2c0,
            I2cPort::I2c1 => self.i2c1,
        };
        match slot {
            Some(pins) => Ok(pins),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{=str}: i2c port {} is not wired", self.name, port);
                Err(PinConfigError::I2cPortNotWired(port))
            }
        }
    }

    fn i2s_pins(&self, port: I2sPort) -> Result<I2sPins, PinConfigError> {
        let slot = match port {
            I2sPort::I2s0 => self.i2s0,
            I2sPort::I2s1 => self.i2s1,
        };
        match slot {
            Some(pins) => Ok(pins),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{=str}: i2s port {} is not wired", self.name, port);
                Err(PinConfigError::I2sPortNotWired(port))
            }
        }
    }

    fn spi_pins(&self) -> Result<SpiPins, PinConfigError> {
        match self.spi {
            Some(pins) => Ok(pins),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{=str}: spi is not wired", self.name);
                Err(PinConfigError::SpiNotWired)
            }
        }
    }

    fn sdcard_intr_gpio(&self) -> Option<GpioNum> {
        self.sdcard_intr
    }

    fn sdcard_open_file_max(&self) -> Option<u8> {
        self.sdcard_open_file_max
    }

    fn pa_enable_gpio(&self) -> Option<GpioNum> {
        self.pa_enable
    }

    fn adc_detect_gpio(&self) -> Option<GpioNum> {
        self.adc_detect
    }

    fn button_id(&self, button: Button) -> Option<ButtonId> {
        self.buttons.get(button)
    }

    fn codec_reset_gpio(&self) -> Option<GpioNum> {
        self.codec_reset
    }

    fn aux_reset_gpio(&self) -> Option<GpioNum> {
        self.aux_reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_reports_every_bus_unwired() {
        let t = PinTable::EMPTY;
        assert_eq!(
            t.i2c_pins(I2cPort::I2c0),
            Err(PinConfigError::I2cPortNotWired(I2cPort::I2c0))
        );
        assert_eq!(
            t.i2s_pins(I2sPort::I2s1),
            Err(PinConfigError::I2sPortNotWired(I2sPort::I2s1))
        );
        assert_eq!(t.spi_pins(), Err(PinConfigError::SpiNotWired));
    }

    #[test]
    fn empty_table_has_no_single_value_resources() {
        let t = PinTable::EMPTY;
        assert_eq!(t.sdcard_intr_gpio(), None);
        assert_eq!(t.sdcard_open_file_max(), None);
        assert_eq!(t.pa_enable_gpio(), None);
        assert_eq!(t.adc_detect_gpio(), None);
        assert_eq!(t.button_id(Button::Record), None);
        assert_eq!(t.codec_reset_gpio(), None);
        assert_eq!(t.aux_reset_gpio(), None);
    }

    #[test]
    fn ports_are_looked_up_independently() {
        let t = PinTable {
            i2c0: Some(I2cPins {
                sda: GpioNum::new(18),
                scl: GpioNum::new(23),
            }),
            ..PinTable::EMPTY
        };
        assert!(t.i2c_pins(I2cPort::I2c0).is_ok());
        assert_eq!(
            t.i2c_pins(I2cPort::I2c1),
            Err(PinConfigError::I2cPortNotWired(I2cPort::I2c1))
        );
    }
}
