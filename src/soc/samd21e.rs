//! Pin-to-resource tables for the SAMD21E (32-pin packages).
//!
//! Same die as the SAMD21G, but no bank B pins are bonded out, so every
//! bank B table is empty and all bank B lookups read as "no resource".
//! SERCOM instances 4 and 5 are also absent on this variant, so entries
//! naming them are pruned relative to the SAMD21G tables.

use super::{pad, tc, tcc};
use crate::pinmux::{SercomPad, WaveformOut};

/// Function C: primary SERCOM assignment, bank A.
pub(crate) const SERCOM_A: &[Option<SercomPad>] = &[
    None,       // PA00
    None,       // PA01
    None,       // PA02
    None,       // PA03
    None,       // PA04
    None,       // PA05
    None,       // PA06
    None,       // PA07
    pad(0, 0),  // PA08
    pad(0, 1),  // PA09
    pad(0, 2),  // PA10
    pad(0, 3),  // PA11
    None,       // PA12
    None,       // PA13
    pad(2, 2),  // PA14
    pad(2, 3),  // PA15
    pad(1, 0),  // PA16
    pad(1, 1),  // PA17
    pad(1, 2),  // PA18
    pad(1, 3),  // PA19
    None,       // PA20
    None,       // PA21
    pad(3, 0),  // PA22
    pad(3, 1),  // PA23
    pad(3, 2),  // PA24
    pad(3, 3),  // PA25
];

/// Function C: primary SERCOM assignment, bank B (not bonded out).
pub(crate) const SERCOM_B: &[Option<SercomPad>] = &[];

/// Function D: alternate SERCOM assignment, bank A.
pub(crate) const SERCOM_ALT_A: &[Option<SercomPad>] = &[
    pad(1, 0),  // PA00
    pad(1, 1),  // PA01
    None,       // PA02
    None,       // PA03
    pad(0, 0),  // PA04
    pad(0, 1),  // PA05
    pad(0, 2),  // PA06
    pad(0, 3),  // PA07
    pad(2, 0),  // PA08
    pad(2, 1),  // PA09
    pad(2, 2),  // PA10
    pad(2, 3),  // PA11
    None,       // PA12
    None,       // PA13
    None,       // PA14
    None,       // PA15
    pad(3, 0),  // PA16
    pad(3, 1),  // PA17
    pad(3, 2),  // PA18
    pad(3, 3),  // PA19
    None,       // PA20
    None,       // PA21
    None,       // PA22
    None,       // PA23
    None,       // PA24
    None,       // PA25
    None,       // PA26
    None,       // PA27
    None,       // PA28
    None,       // PA29
    pad(1, 2),  // PA30
    pad(1, 3),  // PA31
];

/// Function D: alternate SERCOM assignment, bank B (not bonded out).
pub(crate) const SERCOM_ALT_B: &[Option<SercomPad>] = &[];

/// Function E: TC or TCC waveform outputs, bank A.
pub(crate) const TIMER_A: &[Option<WaveformOut>] = &[
    tcc(2, 0),  // PA00
    tcc(2, 1),  // PA01
    None,       // PA02
    None,       // PA03
    tcc(0, 0),  // PA04
    tcc(0, 1),  // PA05
    tcc(1, 0),  // PA06
    tcc(1, 1),  // PA07
    tcc(0, 0),  // PA08
    tcc(0, 1),  // PA09
    tcc(1, 0),  // PA10
    tcc(1, 1),  // PA11
    None,       // PA12
    None,       // PA13
    tc(3, 0),   // PA14
    tc(3, 1),   // PA15
    tcc(2, 0),  // PA16
    tcc(2, 1),  // PA17
    tc(3, 0),   // PA18
    tc(3, 1),   // PA19
    None,       // PA20
    None,       // PA21
    tc(4, 0),   // PA22
    tc(4, 1),   // PA23
    tc(5, 0),   // PA24
    tc(5, 1),   // PA25
    None,       // PA26
    None,       // PA27
    None,       // PA28
    None,       // PA29
    tcc(1, 0),  // PA30
    tcc(1, 0),  // PA31
];

/// Function E: TC or TCC waveform outputs, bank B (not bonded out).
pub(crate) const TIMER_B: &[Option<WaveformOut>] = &[];

/// Function F: TCC waveform outputs, bank A.
pub(crate) const TIMER_CTRL_A: &[Option<WaveformOut>] = &[
    None,       // PA00
    None,       // PA01
    None,       // PA02
    None,       // PA03
    None,       // PA04
    None,       // PA05
    None,       // PA06
    None,       // PA07
    tcc(1, 2),  // PA08
    tcc(1, 3),  // PA09
    tcc(0, 2),  // PA10
    tcc(0, 3),  // PA11
    None,       // PA12
    None,       // PA13
    tcc(0, 4),  // PA14
    tcc(0, 5),  // PA15
    tcc(0, 6),  // PA16
    tcc(0, 7),  // PA17
    tcc(0, 2),  // PA18
    tcc(0, 3),  // PA19
    None,       // PA20
    None,       // PA21
    tcc(0, 5),  // PA22
    tcc(1, 2),  // PA23
    tcc(1, 3),  // PA24
];

/// Function F: TCC waveform outputs, bank B (not bonded out).
pub(crate) const TIMER_CTRL_B: &[Option<WaveformOut>] = &[];
