//! Property-based tests for the pin newtype and accessor purity.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use board_pins::{GpioNum, I2cPins, I2cPort, PinConfigError, PinProvider, PinTable};
use proptest::option;
use proptest::prelude::*;

fn arb_gpio() -> impl Strategy<Value = GpioNum> {
    (0u8..=GpioNum::MAX).prop_map(GpioNum::new)
}

fn arb_i2c() -> impl Strategy<Value = Option<I2cPins>> {
    option::of((arb_gpio(), arb_gpio()).prop_map(|(sda, scl)| I2cPins { sda, scl }))
}

proptest::proptest! {
    /// GpioNum::try_new never panics and accepts exactly 0..=39.
    #[test]
    fn gpio_try_new_matches_the_esp32_range(n in 0u8..=255u8) {
        match GpioNum::try_new(n) {
            Ok(gpio) => {
                prop_assert!(n <= GpioNum::MAX);
                prop_assert_eq!(gpio.get(), n);
            }
            Err(err) => {
                prop_assert!(n > GpioNum::MAX);
                prop_assert_eq!(err.value, n);
            }
        }
    }

    /// Input-only classification is a pure function of the pin number.
    #[test]
    fn gpio_input_only_iff_34_to_39(n in 0u8..=GpioNum::MAX) {
        prop_assert_eq!(GpioNum::new(n).is_input_only(), n >= 34);
    }

    /// For any table, the I2C accessor succeeds exactly when the slot is
    /// wired, returns the slot's pins verbatim, and is referentially
    /// transparent.
    #[test]
    fn i2c_accessor_is_a_pure_slot_lookup(i2c0 in arb_i2c(), i2c1 in arb_i2c()) {
        let table = PinTable { name: "fuzzed", i2c0, i2c1, ..PinTable::EMPTY };
        for (port, slot) in [(I2cPort::I2c0, i2c0), (I2cPort::I2c1, i2c1)] {
            let expected = match slot {
                Some(pins) => Ok(pins),
                None => Err(PinConfigError::I2cPortNotWired(port)),
            };
            prop_assert_eq!(table.i2c_pins(port), expected);
            prop_assert_eq!(table.i2c_pins(port), table.i2c_pins(port));
        }
    }
}
