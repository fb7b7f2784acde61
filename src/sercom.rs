//! SERCOM operating mode decoding.

/// Operating mode of a SERCOM instance, from its `CTRLA.MODE` field.
///
/// The mode is read live on every report; a SERCOM can be reconfigured
/// between calls.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, strum::FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SercomMode {
    /// USART with external clock.
    Usart = 0,
    /// USART with internal clock.
    Uart = 1,
    /// SPI in slave operation.
    SpiSlave = 2,
    /// SPI in master operation.
    SpiMaster = 3,
    /// I2C slave.
    I2cSlave = 4,
    /// I2C master.
    I2cMaster = 5,
}

impl SercomMode {
    /// Decodes a raw `CTRLA.MODE` value; reserved values decode to `None`.
    pub fn from_raw(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Display name of the mode.
    pub const fn name(self) -> &'static str {
        match self {
            SercomMode::Usart => "USART",
            SercomMode::Uart => "UART",
            SercomMode::SpiSlave => "SPI Slave",
            SercomMode::SpiMaster => "SPI Master",
            SercomMode::I2cSlave => "I2C Slave",
            SercomMode::I2cMaster => "I2C Master",
        }
    }
}
