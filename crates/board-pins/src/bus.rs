//! Bus port selectors and per-bus pin assignment structs.
//!
//! These structs carry only the fields this crate is responsible for: the
//! board's pin routing. Clock rates, transfer modes and DMA setup belong to
//! the bus drivers that consume them.

use crate::gpio::GpioNum;

/// I2C controller selector.
///
/// The ESP32 has two I2C controllers; a board may route either, both (to
/// the same header, as the LyraTD-MSC does) or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cPort {
    /// I2C controller 0.
    I2c0,
    /// I2C controller 1.
    I2c1,
}

/// I2S port selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2sPort {
    /// I2S port 0.
    I2s0,
    /// I2S port 1.
    I2s1,
}

/// I2C line assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cPins {
    /// Data line.
    pub sda: GpioNum,
    /// Clock line.
    pub scl: GpioNum,
}

/// I2S pin assignments.
///
/// `data_out`/`data_in` are optional because playback-only or capture-only
/// boards leave one direction unconnected. `mclk` is optional because the
/// master clock may be internally routed or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sPins {
    /// Master clock output, if routed to a pin.
    pub mclk: Option<GpioNum>,
    /// Bit clock.
    pub bclk: GpioNum,
    /// Word select (LRCK).
    pub ws: GpioNum,
    /// Serial data to the codec (playback).
    pub data_out: Option<GpioNum>,
    /// Serial data from the codec/ADC (capture).
    pub data_in: Option<GpioNum>,
}

/// SPI modes (CPOL, CPHA).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

/// Shared SPI bus line assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiBusPins {
    /// Master out, slave in.
    pub mosi: GpioNum,
    /// Master in, slave out. `None` for write-only wiring.
    pub miso: Option<GpioNum>,
    /// Clock line.
    pub sclk: GpioNum,
    /// Quad-SPI write-protect line, if wired.
    pub quadwp: Option<GpioNum>,
    /// Quad-SPI hold line, if wired.
    pub quadhd: Option<GpioNum>,
}

/// Per-device SPI wiring on the shared bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiDevicePins {
    /// Chip select.
    pub cs: GpioNum,
    /// SPI mode the device is wired for.
    pub mode: SpiMode,
}

/// Combined SPI wiring: the shared bus plus the one device the board
/// attaches to it.
///
/// Returned as a single value so the bus and device halves are populated
/// together or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiPins {
    /// Shared bus lines.
    pub bus: SpiBusPins,
    /// Device wiring on that bus.
    pub device: SpiDevicePins,
}
