//! Pin assignment tables for ESP32 audio development boards.
//!
//! This crate is the glue between a build-time board selection and the bus
//! drivers above it: higher layers ask for "the I2C pins" or "the
//! record-button id" through [`PinProvider`] and never hold GPIO numbers of
//! their own.
//!
//! # Architecture
//!
//! ```text
//! Audio HAL (codec, buttons, SD card)
//!         ↓
//! PinProvider (this crate — accessor contract)
//!         ↓
//! PinTable const per board revision (boards::*)
//! ```
//!
//! Every accessor is a pure lookup into an immutable [`PinTable`]: no I/O,
//! no allocation, no locking, constant time. Absent resources are `None`;
//! unwired buses are a [`PinConfigError`]. There is no third state.
//!
//! # Features
//!
//! - `lyratd-msc-v2-1` (default): select the LyraTD-MSC V2.1 board table
//! - `defmt`: enable defmt logging and `defmt::Format` derives
//!
//! # Example
//!
//! ```
//! use board_pins::{boards, Button, I2cPort, PinProvider};
//!
//! let board = boards::active();
//! let i2c = board.i2c_pins(I2cPort::I2c0)?;
//! assert_eq!(i2c.sda.get(), 18);
//! assert_eq!(board.button_id(Button::Record).map(|id| id.get()), Some(2));
//! # Ok::<(), board_pins::PinConfigError>(())
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // error conditions documented on the trait

pub mod boards;
pub mod bus;
pub mod button;
pub mod error;
pub mod gpio;
pub mod provider;
pub mod table;

pub use bus::{I2cPins, I2cPort, I2sPins, I2sPort, SpiBusPins, SpiDevicePins, SpiMode, SpiPins};
pub use button::{Button, ButtonId, ButtonMap};
pub use error::PinConfigError;
pub use gpio::{GpioNum, OutOfRangeError};
pub use provider::PinProvider;
pub use table::PinTable;
