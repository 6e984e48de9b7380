//! Error type for the bus-configuration accessors.

use thiserror_no_std::Error;

use crate::bus::{I2cPort, I2sPort};

/// Failure reported by a bus-configuration accessor.
///
/// Single-value accessors never fail — an absent resource is `None`. A bus
/// accessor fails only when the requested controller/port has no pins routed
/// on the selected board, and the caller receives no pin data at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinConfigError {
    /// The requested I2C controller has no pins routed on this board.
    #[error("i2c port {0:?} is not wired on this board")]
    I2cPortNotWired(I2cPort),
    /// The requested I2S port has no pins routed on this board.
    #[error("i2s port {0:?} is not wired on this board")]
    I2sPortNotWired(I2sPort),
    /// The board has no SPI wiring at all.
    #[error("spi bus is not wired on this board")]
    SpiNotWired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_bus() {
        let msg = format!("{}", PinConfigError::SpiNotWired);
        assert!(msg.contains("spi"));
        let msg = format!("{}", PinConfigError::I2sPortNotWired(I2sPort::I2s1));
        assert!(msg.contains("i2s"));
        assert!(msg.contains("I2s1"));
    }
}
