//! Report generation.
//!
//! One call, one pin, one caller-owned buffer. The reporter holds the
//! injected hardware collaborators and no mutable state of its own, so
//! concurrent callers only need distinct buffers.

use core::fmt::{self, Write};

use crate::{
    decode,
    hal::{PinKind, PinLookup, RegisterAccess},
};

/// Errors returned from [`PinmuxReporter::report`].
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The caller's buffer was too small; it holds a truncated prefix.
    BufferOverflow,
}

/// Bounded write cursor over the caller's byte buffer.
///
/// Writes that do not fit copy the fitting prefix and fail, which aborts the
/// report with [`Error::BufferOverflow`]. The cursor lives only for the
/// duration of one report call.
struct ReportCursor<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> ReportCursor<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// The filled prefix of the buffer.
    ///
    /// Only called on the success path, where every `write_str` completed in
    /// full, so the prefix is a sequence of complete UTF-8 strings.
    fn into_str(self) -> &'a str {
        let (filled, _) = self.buf.split_at(self.len);
        unsafe { core::str::from_utf8_unchecked(filled) }
    }
}

impl Write for ReportCursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let available = self.buf.len() - self.len;
        let bytes = s.as_bytes();
        if bytes.len() > available {
            self.buf[self.len..].copy_from_slice(&bytes[..available]);
            self.len = self.buf.len();
            return Err(fmt::Error);
        }
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

/// Two-digit zero-padded number; values past two digits render as `***`.
fn write_n2(out: &mut impl Write, n: u8) -> fmt::Result {
    if n <= 99 {
        write!(out, "{:02}", n)
    } else {
        out.write_str("***")
    }
}

/// Generates pinmux reports against injected board and register access.
///
/// Construct one per board; [`report`](Self::report) can then be called for
/// any pin, any number of times. All hardware state is read fresh per call.
pub struct PinmuxReporter<P, R> {
    pins: P,
    regs: R,
}

impl<P, R> PinmuxReporter<P, R>
where
    P: PinLookup,
    R: RegisterAccess,
{
    /// Creates a reporter from the injected collaborators.
    pub fn new(pins: P, regs: R) -> Self {
        Self { pins, regs }
    }

    /// Describes one pin's multiplexer configuration into `buf`.
    ///
    /// Returns the filled portion of `buf` as text. An index that is not a
    /// pin yields an empty string by design, not an error; callers detect it
    /// by checking for emptiness. `name` optionally labels the pin with a
    /// logical name, taking precedence over analog renumbering.
    pub fn report<'buf>(
        &self,
        pin: u8,
        name: Option<&str>,
        buf: &'buf mut [u8],
    ) -> Result<&'buf str, Error> {
        let mut out = ReportCursor::new(buf);
        match self.render(pin, name, &mut out) {
            Ok(()) => Ok(out.into_str()),
            Err(fmt::Error) => Err(Error::BufferOverflow),
        }
    }

    /// Reports every pin index below `pin_count`, reusing one buffer.
    ///
    /// `visit` is called with the pin index and its report line; indices that
    /// are not pins are skipped.
    pub fn report_all<F>(&self, pin_count: u8, buf: &mut [u8], mut visit: F) -> Result<(), Error>
    where
        F: FnMut(u8, &str),
    {
        for pin in 0..pin_count {
            let line = self.report(pin, None, &mut *buf)?;
            if !line.is_empty() {
                visit(pin, line);
            }
        }
        Ok(())
    }

    fn render(&self, pin: u8, name: Option<&str>, out: &mut ReportCursor<'_>) -> fmt::Result {
        if self.pins.pin_kind(pin) == PinKind::Invalid {
            return Ok(());
        }
        let Some((bank, bit)) = self.pins.resolve_port_bit(pin) else {
            return Ok(());
        };

        write_n2(out, pin)?;
        match name {
            Some(label) if !label.is_empty() => write!(out, " [{}] ", label)?,
            _ => match self.pins.analog_channel(pin) {
                Some(channel) => {
                    out.write_str(" (A")?;
                    write_n2(out, channel)?;
                    out.write_str(") ")?;
                }
                None => out.write_str("      ")?,
            },
        }

        out.write_str(bank.prefix())?;
        write_n2(out, bit)?;
        out.write_str("  ")?;

        if self.regs.pinmux_enabled(bank, bit) {
            let selector = self.regs.pinmux_selector(bank, bit);
            out.write_str("PMUX(")?;
            write_n2(out, selector)?;
            out.write_str(") ")?;
            decode::dispatch(&self.regs, bank, bit, selector, out)
        } else {
            out.write_str("GPIO ")?;
            out.write_str(if self.regs.direction_is_output(bank, bit) {
                "O"
            } else {
                "I"
            })
        }
    }
}

#[cfg(all(test, feature = "samd21g"))]
mod tests {
    use std::{string::String, vec::Vec};

    use super::*;
    use crate::hal::PortBank;

    #[derive(Clone, Copy)]
    struct TestPin {
        bank: PortBank,
        bit: u8,
        kind: PinKind,
        analog: Option<u8>,
    }

    const fn digital(bank: PortBank, bit: u8) -> TestPin {
        TestPin {
            bank,
            bit,
            kind: PinKind::Digital,
            analog: None,
        }
    }

    const fn analog(bank: PortBank, bit: u8, channel: u8) -> TestPin {
        TestPin {
            bank,
            bit,
            kind: PinKind::Analog,
            analog: Some(channel),
        }
    }

    struct TestBoard(&'static [TestPin]);

    impl PinLookup for TestBoard {
        fn pin_kind(&self, pin: u8) -> PinKind {
            self.0
                .get(pin as usize)
                .map(|p| p.kind)
                .unwrap_or(PinKind::Invalid)
        }

        fn resolve_port_bit(&self, pin: u8) -> Option<(PortBank, u8)> {
            self.0.get(pin as usize).map(|p| (p.bank, p.bit))
        }

        fn analog_channel(&self, pin: u8) -> Option<u8> {
            self.0.get(pin as usize).and_then(|p| p.analog)
        }
    }

    struct TestRegs {
        pmux_enabled: bool,
        selector: u8,
        output: bool,
        sercom_modes: [Option<u8>; 6],
    }

    impl TestRegs {
        fn gpio(output: bool) -> Self {
            Self {
                pmux_enabled: false,
                selector: 0,
                output,
                sercom_modes: [None; 6],
            }
        }

        fn muxed(selector: u8) -> Self {
            Self {
                pmux_enabled: true,
                selector,
                output: false,
                sercom_modes: [None; 6],
            }
        }

        fn with_sercom_mode(mut self, module: u8, mode: u8) -> Self {
            self.sercom_modes[module as usize] = Some(mode);
            self
        }
    }

    impl RegisterAccess for TestRegs {
        fn pinmux_enabled(&self, _bank: PortBank, _bit: u8) -> bool {
            self.pmux_enabled
        }

        fn pinmux_selector(&self, _bank: PortBank, _bit: u8) -> u8 {
            self.selector
        }

        fn direction_is_output(&self, _bank: PortBank, _bit: u8) -> bool {
            self.output
        }

        fn sercom_mode(&self, module: u8) -> Option<u8> {
            self.sercom_modes
                .get(module as usize)
                .copied()
                .flatten()
        }
    }

    const BOARD: TestBoard = TestBoard(&[
        digital(PortBank::A, 11),  // 0
        digital(PortBank::A, 10),  // 1
        digital(PortBank::A, 14),  // 2
        digital(PortBank::A, 9),   // 3
        digital(PortBank::A, 8),   // 4
        digital(PortBank::A, 23),  // 5
        digital(PortBank::A, 17),  // 6
        analog(PortBank::A, 2, 0), // 7
        analog(PortBank::B, 8, 2), // 8
    ]);

    fn line(regs: TestRegs, pin: u8, name: Option<&str>) -> String {
        let mut buf = [0u8; 80];
        let reporter = PinmuxReporter::new(BOARD, regs);
        String::from(reporter.report(pin, name, &mut buf).unwrap())
    }

    #[test]
    fn invalid_pin_reports_nothing() {
        let mut buf = [0u8; 80];
        let reporter = PinmuxReporter::new(BOARD, TestRegs::gpio(false));
        assert_eq!(reporter.report(9, None, &mut buf).unwrap(), "");
        assert_eq!(reporter.report(200, Some("X"), &mut buf).unwrap(), "");
    }

    #[test]
    fn gpio_direction() {
        assert_eq!(line(TestRegs::gpio(true), 6, None), "06      PA17  GPIO O");
        assert_eq!(line(TestRegs::gpio(false), 6, None), "06      PA17  GPIO I");
    }

    #[test]
    fn logical_name_wins_over_analog_renumbering() {
        assert_eq!(
            line(TestRegs::gpio(true), 6, Some("LED")),
            "06 [LED] PA17  GPIO O"
        );
        assert_eq!(
            line(TestRegs::gpio(false), 7, Some("AREF")),
            "07 [AREF] PA02  GPIO I"
        );
    }

    #[test]
    fn analog_pins_show_their_channel() {
        assert_eq!(line(TestRegs::gpio(false), 7, None), "07 (A00) PA02  GPIO I");
        assert_eq!(line(TestRegs::gpio(false), 8, None), "08 (A02) PB08  GPIO I");
    }

    #[test]
    fn sercom_report_with_live_mode() {
        // Pin 4 is PA08; primary SERCOM pad 0 of module 0, running as I2C master.
        assert_eq!(
            line(TestRegs::muxed(2).with_sercom_mode(0, 5), 4, None),
            "04      PA08  PMUX(02) SERCOM0 P0(I2C Master)"
        );
    }

    #[test]
    fn com_usb_report() {
        assert_eq!(
            line(TestRegs::muxed(6), 5, None),
            "05      PA23  PMUX(06) COM(USB)"
        );
    }

    #[test]
    fn timer_report_has_no_class_prefix() {
        let text = line(TestRegs::muxed(4), 2, None);
        assert_eq!(text, "02      PA14  PMUX(04) TC3/WO0");
        assert!(!text.contains("TC/TCC"));
    }

    #[test]
    fn ext_int_report_is_name_only() {
        assert_eq!(line(TestRegs::muxed(0), 4, None), "04      PA08  PMUX(00) EIC");
    }

    #[test]
    fn impossible_selector_ends_after_the_raw_value() {
        assert_eq!(line(TestRegs::muxed(9), 4, None), "04      PA08  PMUX(09) ");
    }

    #[test]
    fn overflowing_buffer_truncates_and_flags() {
        let reporter = PinmuxReporter::new(BOARD, TestRegs::gpio(true));
        let mut buf = [0u8; 10];
        assert_eq!(reporter.report(6, None, &mut buf), Err(Error::BufferOverflow));
        assert_eq!(&buf, b"06      PA");

        // A zero-length buffer cannot even hold the pin number.
        let mut empty: [u8; 0] = [];
        assert_eq!(reporter.report(6, None, &mut empty), Err(Error::BufferOverflow));
    }

    #[test]
    fn report_all_skips_invalid_pins() {
        let reporter = PinmuxReporter::new(BOARD, TestRegs::gpio(false));
        let mut buf = [0u8; 80];
        let mut seen = Vec::new();
        reporter
            .report_all(12, &mut buf, |pin, text| {
                assert!(text.ends_with("GPIO I"));
                seen.push(pin);
            })
            .unwrap();
        assert_eq!(seen, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
