//! Diagnostic pin multiplexer reporting for SAMD21-class devices.
//!
//! ## Overview
//!
//! Every SAMD21 pin carries a 3-bit multiplexer selector choosing which
//! peripheral function (external interrupt, analog, SERCOM, timer, ...) is
//! electrically connected to it. This crate decodes that configuration into a
//! human-readable line per pin, for debugging pin assignment conflicts from
//! firmware:
//!
//! ```text
//! 04      PA08  PMUX(02) SERCOM0 P0(I2C Master)
//! 13 [LED] PA17  GPIO O
//! ```
//!
//! The crate is read-only and hardware-agnostic: live register state (pinmux
//! enable, selector, direction, SERCOM mode) and board pin descriptions are
//! supplied through the [`hal::RegisterAccess`] and [`hal::PinLookup`] traits.
//! The chip-specific pin-to-resource tables are selected with a chip feature
//! flag.
//!
//! ## Usage
//!
//! Implement the two traits in [`hal`] for your board, then drive
//! [`report::PinmuxReporter`]:
//!
//! ```rust,ignore
//! use samd_pinmux_report::report::PinmuxReporter;
//!
//! let reporter = PinmuxReporter::new(board_pins, live_registers);
//! let mut buf = [0u8; 80];
//! let line = reporter.report(4, None, &mut buf)?;
//! ```
//!
//! An invalid pin index produces an empty line rather than an error; the only
//! failure is [`report::Error::BufferOverflow`] when the caller's buffer is
//! too small.
//!
//! ## Feature Flags
#![doc = document_features::document_features!()]
#![deny(missing_docs)]
#![no_std]

#[cfg(test)]
extern crate std;

pub mod hal;
pub mod pinmux;
pub mod report;
pub mod sercom;

pub(crate) mod decode;
pub(crate) mod soc;

#[cfg(not(any(feature = "samd21g", feature = "samd21e")))]
compile_error!(
    "A chip variant must be selected: enable the `samd21g` or `samd21e` feature"
);
