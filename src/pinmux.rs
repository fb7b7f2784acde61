//! Peripheral function classes and pin resource descriptors.

use core::fmt::{self, Display};

/// Peripheral function classes selectable by the pin multiplexer.
///
/// The discriminant is the raw 3-bit selector value read from the `PMUX`
/// register half, matching the datasheet function letters A through H. Each
/// class covers one family of peripherals; most need further per-pin decoding
/// to name the exact sub-resource.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, strum::FromRepr, strum::EnumCount)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PeripheralFunction {
    /// "A": external interrupt lines.
    ExtInt = 0,
    /// "B": analog functions (REF, ADC, AC, PTC, DAC).
    Analog = 1,
    /// "C": serial communication modules.
    Sercom = 2,
    /// "D": alternate serial communication assignment.
    SercomAlt = 3,
    /// "E": TC or TCC timer waveform output.
    Timer = 4,
    /// "F": TCC timer waveform output.
    TimerControl = 5,
    /// "G": other communication peripherals (USB, I2S, SWD).
    Com = 6,
    /// "H": analog comparator or clock generator I/O.
    ClockOut = 7,
}

impl PeripheralFunction {
    /// Decodes a raw multiplexer selector value.
    ///
    /// The hardware field is 3 bits wide so values above 7 cannot occur from
    /// a register read, but they decode to `None` rather than panicking.
    pub fn from_selector(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Display name of the function class.
    ///
    /// Note that the primary and alternate SERCOM assignments share a name,
    /// and that the timer classes carry one even though timer reports print
    /// the waveform descriptor instead.
    pub const fn name(self) -> &'static str {
        match self {
            PeripheralFunction::ExtInt => "EIC",
            PeripheralFunction::Analog => "ADC",
            PeripheralFunction::Sercom | PeripheralFunction::SercomAlt => "SERCOM",
            PeripheralFunction::Timer => "TC/TCC",
            PeripheralFunction::TimerControl => "TCC",
            PeripheralFunction::Com => "COM",
            PeripheralFunction::ClockOut => "AC/GCLK",
        }
    }
}

/// A SERCOM pad assignment for one pin.
///
/// Which signal the pad carries (TX, RX, SCK, ...) depends on the module's
/// `CTRLA` pad routing fields and is not decoded here.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SercomPad {
    /// SERCOM instance index on the chip.
    pub module: u8,
    /// Pad index within the instance (each SERCOM has up to four pads).
    pub pad: u8,
}

/// A timer peripheral instance.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerInstance {
    /// Basic Timer/Counter.
    Tc(u8),
    /// Timer/Counter for Control applications.
    Tcc(u8),
}

impl Display for TimerInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerInstance::Tc(n) => write!(f, "TC{}", n),
            TimerInstance::Tcc(n) => write!(f, "TCC{}", n),
        }
    }
}

/// A timer waveform output routed to a pin, e.g. `TCC1/WO2`.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaveformOut {
    /// The timer instance driving the pin.
    pub instance: TimerInstance,
    /// Waveform output line index within the instance.
    pub line: u8,
}

impl Display for WaveformOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/WO{}", self.instance, self.line)
    }
}
