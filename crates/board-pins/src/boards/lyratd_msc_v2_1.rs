//! ESP32-LyraTD-MSC V2.1 pin assignments.
//!
//! GPIO |     Function     |      Notes
//! -----+------------------+----------------------------------
//!  0   | I2S MCLK         | Routed to the codec via PIN_CTRL
//!  5   | I2S BCLK         |
//! 18   | I2C SDA          | Codec + DSP control, both controllers
//! 19   | Codec reset      | Active low
//! 21   | DSP reset        | ZL38063, active low
//! 22   | PA enable        | Speaker amplifier
//! 23   | I2C SCL          |
//! 25   | I2S WS (LRCK)    |
//! 26   | I2S DOUT         | Playback data to the codec
//! 34   | SD detect        | Input-only pin, card-present interrupt
//! 35   | I2S DIN          | Capture data from the mic array
//! 39   | ADC detect       | Button resistor ladder
//!
//! No SPI header on this revision.

use crate::bus::{I2cPins, I2sPins};
use crate::button::{ButtonId, ButtonMap};
use crate::gpio::GpioNum;
use crate::table::PinTable;

// Both I2C controllers are routed to the same SDA/SCL pair.
const I2C: I2cPins = I2cPins {
    sda: GpioNum::new(18),
    scl: GpioNum::new(23),
};

const I2S: I2sPins = I2sPins {
    mclk: Some(GpioNum::new(0)),
    bclk: GpioNum::new(5),
    ws: GpioNum::new(25),
    data_out: Some(GpioNum::new(26)),
    data_in: Some(GpioNum::new(35)),
};

/// Pin table for the LyraTD-MSC V2.1 revision.
pub const PINS: PinTable = PinTable {
    name: "lyratd-msc-v2.1",
    i2c0: Some(I2C),
    i2c1: Some(I2C),
    i2s0: Some(I2S),
    i2s1: Some(I2S),
    spi: None,
    sdcard_intr: Some(GpioNum::new(34)),
    sdcard_open_file_max: Some(5),
    pa_enable: Some(GpioNum::new(22)),
    adc_detect: Some(GpioNum::new(39)),
    buttons: ButtonMap {
        set: Some(ButtonId::new(0)),
        play: Some(ButtonId::new(1)),
        record: Some(ButtonId::new(2)),
        mode: Some(ButtonId::new(3)),
        volume_up: Some(ButtonId::new(4)),
        volume_down: Some(ButtonId::new(5)),
    },
    codec_reset: Some(GpioNum::new(19)),
    aux_reset: Some(GpioNum::new(21)),
};
