//! GPIO number newtype.
//!
//! The ESP32 exposes GPIO 0–39; numbers 34–39 are input-only (no output
//! driver, no internal pull resistors). Board tables construct pins with
//! [`GpioNum::new`] in const context, so an out-of-range assignment fails
//! the build rather than surfacing at runtime.

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u8,
    /// The inclusive minimum allowed value.
    pub min: u8,
    /// The inclusive maximum allowed value.
    pub max: u8,
}

/// ESP32 GPIO number, validated to 0–39.
///
/// Construct with [`GpioNum::new`] (const, compile-time checked when used in
/// const context) or [`GpioNum::try_new`] (fallible, for runtime values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct GpioNum(u8);

impl GpioNum {
    /// Highest GPIO number on the ESP32.
    pub const MAX: u8 = 39;

    /// First input-only GPIO (34–39 have no output driver).
    pub const FIRST_INPUT_ONLY: u8 = 34;

    /// Create a `GpioNum`.
    ///
    /// Intended for const board tables, where an invalid number becomes a
    /// compile error. For runtime values prefer [`GpioNum::try_new`].
    ///
    /// # Panics
    ///
    /// Panics if `n > 39`.
    #[must_use]
    pub const fn new(n: u8) -> Self {
        assert!(n <= Self::MAX, "GPIO number out of range for ESP32 (0-39)");
        Self(n)
    }

    /// Create a `GpioNum`, returning an error if `n > 39`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `n > 39`.
    pub const fn try_new(n: u8) -> Result<Self, OutOfRangeError> {
        if n > Self::MAX {
            Err(OutOfRangeError {
                value: n,
                min: 0,
                max: Self::MAX,
            })
        } else {
            Ok(Self(n))
        }
    }

    /// Return the raw GPIO number (0–39).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// `true` for GPIO 34–39, which have no output driver.
    ///
    /// Useful as a sanity check when a table entry is wired to an output
    /// role (reset lines, PA enable).
    #[must_use]
    pub const fn is_input_only(self) -> bool {
        self.0 >= Self::FIRST_INPUT_ONLY
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_esp32_range() {
        assert_eq!(GpioNum::try_new(0).unwrap().get(), 0);
        assert_eq!(GpioNum::try_new(39).unwrap().get(), 39);
    }

    #[test]
    fn rejects_out_of_range() {
        let err = GpioNum::try_new(40).unwrap_err();
        assert_eq!(err.value, 40);
        assert_eq!(err.max, GpioNum::MAX);
    }

    #[test]
    fn input_only_boundary() {
        assert!(!GpioNum::new(33).is_input_only());
        assert!(GpioNum::new(34).is_input_only());
        assert!(GpioNum::new(39).is_input_only());
    }

    #[test]
    fn is_one_byte() {
        assert_eq!(core::mem::size_of::<GpioNum>(), 1);
    }
}
