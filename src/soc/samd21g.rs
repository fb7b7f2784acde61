//! Pin-to-resource tables for the SAMD21G (48-pin packages).
//!
//! Assignments follow the SAMD21 datasheet I/O multiplexing table. Pins with
//! no assignment for a class are `None`; bank B exists but is shorter than
//! bank A for some classes.

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
    pad(2, 0),  // PA12
    pad(2, 1),  // PA13
    pad(2, 2),  // PA14
    pad(2, 3),  // PA15
    pad(1, 0),  // PA16
    pad(1, 1),  // PA17
    pad(1, 2),  // PA18
    pad(1, 3),  // PA19
    pad(5, 2),  // PA20
    pad(5, 3),  // PA21
    pad(3, 0),  // PA22
    pad(3, 1),  // PA23
    pad(3, 2),  // PA24
    pad(3, 3),  // PA25
];

/// Function C: primary SERCOM assignment, bank B.
pub(crate) const SERCOM_B: &[Option<SercomPad>] = &[
    None,       // PB00
    None,       // PB01
    None,       // PB02
    None,       // PB03
    None,       // PB04
    None,       // PB05
    None,       // PB06
    None,       // PB07
    None,       // PB08
    None,       // PB09
    None,       // PB10
    None,       // PB11
    pad(4, 0),  // PB12
    pad(4, 1),  // PB13
    pad(4, 2),  // PB14
    pad(4, 3),  // PB15
    pad(5, 0),  // PB16
    pad(5, 1),  // PB17
];

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
    pad(4, 0),  // PA12
    pad(4, 1),  // PA13
    pad(4, 2),  // PA14
    pad(4, 3),  // PA15
    pad(3, 0),  // PA16
    pad(3, 1),  // PA17
    pad(3, 2),  // PA18
    pad(3, 3),  // PA19
    pad(3, 2),  // PA20
    pad(3, 3),  // PA21
    pad(5, 0),  // PA22
    pad(5, 1),  // PA23
    pad(5, 2),  // PA24
    pad(5, 3),  // PA25
    None,       // PA26
    None,       // PA27
    None,       // PA28
    None,       // PA29
    pad(1, 2),  // PA30
    pad(1, 3),  // PA31
];

/// Function D: alternate SERCOM assignment, bank B.
pub(crate) const SERCOM_ALT_B: &[Option<SercomPad>] = &[
    pad(5, 2),  // PB00
    pad(5, 3),  // PB01
    pad(5, 0),  // PB02
    pad(5, 1),  // PB03
    None,       // PB04
    None,       // PB05
    None,       // PB06
    None,       // PB07
    pad(4, 0),  // PB08
    pad(4, 1),  // PB09
    pad(4, 2),  // PB10
    pad(4, 3),  // PB11
    None,       // PB12
    None,       // PB13
    None,       // PB14
    None,       // PB15
    None,       // PB16
    None,       // PB17
    None,       // PB18
    None,       // PB19
    None,       // PB20
    None,       // PB21
    pad(5, 2),  // PB22
    pad(5, 3),  // PB23
    None,       // PB24
    None,       // PB25
    None,       // PB26
    None,       // PB27
    None,       // PB28
    None,       // PB29
    pad(5, 0),  // PB30
    pad(5, 1),  // PB31
];

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
    tcc(2, 0),  // PA12
    tcc(2, 1),  // PA13
    tc(3, 0),   // PA14
    tc(3, 1),   // PA15
    tcc(2, 0),  // PA16
    tcc(2, 1),  // PA17
    tc(3, 0),   // PA18
    tc(3, 1),   // PA19
    tc(7, 0),   // PA20
    tc(7, 1),   // PA21
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

/// Function E: TC or TCC waveform outputs, bank B.
pub(crate) const TIMER_B: &[Option<WaveformOut>] = &[
    tc(7, 0),   // PB00
    tc(7, 1),   // PB01
    tc(6, 0),   // PB02
    tc(6, 1),   // PB03
    None,       // PB04
    None,       // PB05
    None,       // PB06
    None,       // PB07
    tc(4, 0),   // PB08
    tc(4, 1),   // PB09
    tc(5, 0),   // PB10
    tc(5, 1),   // PB11
    tc(4, 0),   // PB12
    tc(4, 1),   // PB13
    tc(5, 0),   // PB14
    tc(5, 1),   // PB15
    tc(6, 0),   // PB16
    tc(6, 1),   // PB17
    None,       // PB18
    None,       // PB19
    None,       // PB20
    None,       // PB21
    tc(7, 0),   // PB22
    tc(7, 1),   // PB23
    None,       // PB24
    None,       // PB25
    None,       // PB26
    None,       // PB27
    None,       // PB28
    None,       // PB29
    tcc(0, 0),  // PB30
    tcc(0, 1),  // PB31
];

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
    tcc(0, 6),  // PA12
    tcc(0, 7),  // PA13
    tcc(0, 4),  // PA14
    tcc(0, 5),  // PA15
    tcc(0, 6),  // PA16
    tcc(0, 7),  // PA17
    tcc(0, 2),  // PA18
    tcc(0, 3),  // PA19
    tcc(0, 6),  // PA20
    tcc(0, 7),  // PA21
    tcc(0, 5),  // PA22
    tcc(1, 2),  // PA23
    tcc(1, 3),  // PA24
];

/// Function F: TCC waveform outputs, bank B.
pub(crate) const TIMER_CTRL_B: &[Option<WaveformOut>] = &[
    None,       // PB00
    None,       // PB01
    None,       // PB02
    None,       // PB03
    None,       // PB04
    None,       // PB05
    None,       // PB06
    None,       // PB07
    None,       // PB08
    None,       // PB09
    tcc(0, 4),  // PB10
    tcc(0, 5),  // PB11
    tcc(0, 6),  // PB12
    tcc(0, 7),  // PB13
    None,       // PB14
    None,       // PB15
    tcc(0, 4),  // PB16
    tcc(0, 5),  // PB17
    None,       // PB18
    None,       // PB19
    None,       // PB20
    None,       // PB21
    None,       // PB22
    None,       // PB23
    None,       // PB24
    None,       // PB25
    None,       // PB26
    None,       // PB27
    None,       // PB28
    None,       // PB29
    tcc(1, 2),  // PB30
    tcc(1, 3),  // PB31
];
