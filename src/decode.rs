//! Per-class decoders and the selector dispatch.
//!
//! Each decoder turns a (bank, bit) coordinate into the descriptive text for
//! one peripheral function class, writing through the caller's cursor. The
//! dispatch is an exhaustive match on [`PeripheralFunction`]; a raw selector
//! outside the 3-bit range decodes to nothing at all.

use core::fmt::{self, Write};

use crate::{
    hal::{PortBank, RegisterAccess},
    pinmux::{PeripheralFunction, WaveformOut},
    sercom::SercomMode,
    soc::{self, chip},
};

/// Decodes one selector value for one pin.
///
/// Writes nothing for a selector above 7; valid hardware cannot produce one,
/// and an impossible value is not an error.
pub(crate) fn dispatch<R: RegisterAccess>(
    regs: &R,
    bank: PortBank,
    bit: u8,
    selector: u8,
    out: &mut impl Write,
) -> fmt::Result {
    let Some(function) = PeripheralFunction::from_selector(selector) else {
        return Ok(());
    };

    match function {
        // These classes fan out to several internal destinations (REF, ADC,
        // AC, PTC, DAC for analog; AC or GCLK I/O for clock) which the pinmux
        // value alone does not disambiguate. Only the class name is reported.
        PeripheralFunction::ExtInt
        | PeripheralFunction::Analog
        | PeripheralFunction::ClockOut => out.write_str(function.name()),
        PeripheralFunction::Sercom | PeripheralFunction::SercomAlt => {
            decode_sercom(regs, bank, bit, function, out)
        }
        // Timer classes print the waveform descriptor alone, without the
        // class-name prefix the other classes carry.
        PeripheralFunction::Timer => decode_waveform(chip::TIMER_A, chip::TIMER_B, bank, bit, out),
        PeripheralFunction::TimerControl => {
            decode_waveform(chip::TIMER_CTRL_A, chip::TIMER_CTRL_B, bank, bit, out)
        }
        PeripheralFunction::Com => decode_com(bank, bit, out),
    }
}

/// SERCOM and alternate SERCOM decoding.
///
/// The pad assignment comes from the chip table for the selected class; when
/// one exists, the addressed module's live `CTRLA.MODE` is read and its name
/// appended. A pin with no assignment for this class reports the bare class
/// name and the mode read is skipped.
fn decode_sercom<R: RegisterAccess>(
    regs: &R,
    bank: PortBank,
    bit: u8,
    function: PeripheralFunction,
    out: &mut impl Write,
) -> fmt::Result {
    out.write_str(function.name())?;

    let table = match (function, bank) {
        (PeripheralFunction::SercomAlt, PortBank::A) => chip::SERCOM_ALT_A,
        (PeripheralFunction::SercomAlt, PortBank::B) => chip::SERCOM_ALT_B,
        (_, PortBank::A) => chip::SERCOM_A,
        (_, PortBank::B) => chip::SERCOM_B,
    };
    let Some(assignment) = soc::lookup(table, bit) else {
        return Ok(());
    };
    write!(out, "{} P{}", assignment.module, assignment.pad)?;

    if let Some(mode) = regs.sercom_mode(assignment.module).and_then(SercomMode::from_raw) {
        write!(out, "({})", mode.name())?;
    }
    Ok(())
}

fn decode_waveform(
    bank_a: &[Option<WaveformOut>],
    bank_b: &[Option<WaveformOut>],
    bank: PortBank,
    bit: u8,
    out: &mut impl Write,
) -> fmt::Result {
    let table = match bank {
        PortBank::A => bank_a,
        PortBank::B => bank_b,
    };
    if let Some(waveform) = soc::lookup(table, bit) {
        write!(out, "{}", waveform)?;
    }
    Ok(())
}

/// Special hard-wired communication functions.
fn decode_com(bank: PortBank, bit: u8, out: &mut impl Write) -> fmt::Result {
    out.write_str(PeripheralFunction::Com.name())?;
    if bank == PortBank::A {
        if (23..=25).contains(&bit) {
            out.write_str("(USB)")?;
        }
        if (30..=31).contains(&bit) {
            out.write_str("(SWD)")?;
        }
    }
    Ok(())
}
