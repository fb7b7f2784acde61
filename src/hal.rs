//! Hardware access seams.
//!
//! The decode logic never touches memory-mapped registers or board metadata
//! directly; everything it needs is read through the two traits in this
//! module. A board crate implements them once, and the same reporter works
//! for any chip variant.

/// Datasheet-level port bank of a physical pin.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortBank {
    /// Port group A (`PAxx` pins)
    A,
    /// Port group B (`PBxx` pins)
    B,
}

impl PortBank {
    /// Datasheet-style bank prefix, `PA` or `PB`.
    pub const fn prefix(self) -> &'static str {
        match self {
            PortBank::A => "PA",
            PortBank::B => "PB",
        }
    }
}

/// What a board pin index refers to.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinKind {
    /// A plain digital pin.
    Digital,
    /// An analog-capable pin, renumbered `A0..` on the board silkscreen.
    Analog,
    /// The index does not correspond to a pin on this board.
    Invalid,
}

/// Board pin description lookup.
///
/// Maps the abstract board pin index (the number printed next to the pin)
/// onto the datasheet (bank, bit) coordinate.
pub trait PinLookup {
    /// What kind of pin this index refers to.
    fn pin_kind(&self, pin: u8) -> PinKind;

    /// Resolve a pin index to its (bank, bit) coordinate.
    ///
    /// Returns `None` for indices that are not pins; every valid pin resolves
    /// to exactly one coordinate.
    fn resolve_port_bit(&self, pin: u8) -> Option<(PortBank, u8)>;

    /// The `A<n>` analog channel number of an analog pin, `None` otherwise.
    fn analog_channel(&self, pin: u8) -> Option<u8>;

    /// Whether the index refers to a pin at all.
    fn is_valid_pin(&self, pin: u8) -> bool {
        self.pin_kind(pin) != PinKind::Invalid
    }
}

/// Live hardware configuration reads.
///
/// Each method is a single register read; values are read fresh on every
/// report call and never cached by this crate (the configuration can change
/// between calls).
pub trait RegisterAccess {
    /// The `PINCFG.PMUXEN` bit: is the multiplexer engaged for this pin?
    fn pinmux_enabled(&self, bank: PortBank, bit: u8) -> bool;

    /// The 3-bit multiplexer selector for this pin.
    ///
    /// Implementations handle the even/odd register half split
    /// (`PMUX[bit / 2].PMUXE` vs `.PMUXO`).
    fn pinmux_selector(&self, bank: PortBank, bit: u8) -> u8;

    /// The `DIR` bit: `true` when the pin is configured as an output.
    fn direction_is_output(&self, bank: PortBank, bit: u8) -> bool;

    /// The `CTRLA.MODE` field of a SERCOM instance.
    ///
    /// Returns `None` when the chip variant does not provide that instance,
    /// which suppresses the mode suffix in the report.
    fn sercom_mode(&self, module: u8) -> Option<u8>;
}
