//! Chip-variant pin-to-resource tables.
//!
//! Everything in here is data, not logic: a different chip variant swaps in
//! different table contents and the decoders stay untouched. Tables are
//! indexed by the bit number within a port bank; a bit past the end of a
//! table, or a `None` entry, means the class has no resource on that pin.

use crate::pinmux::{SercomPad, TimerInstance, WaveformOut};

cfg_if::cfg_if! {
    if #[cfg(feature = "samd21g")] {
        pub(crate) mod samd21g;
        pub(crate) use samd21g as chip;
    } else if #[cfg(feature = "samd21e")] {
        pub(crate) mod samd21e;
        pub(crate) use samd21e as chip;
    }
}

/// Bounded table lookup: out-of-range bits read as "no resource".
pub(crate) fn lookup<T: Copy>(table: &[Option<T>], bit: u8) -> Option<T> {
    table.get(bit as usize).copied().flatten()
}

// Table entry shorthands used by the chip data modules.

const fn pad(module: u8, pad: u8) -> Option<SercomPad> {
    Some(SercomPad { module, pad })
}

const fn tc(instance: u8, line: u8) -> Option<WaveformOut> {
    Some(WaveformOut {
        instance: TimerInstance::Tc(instance),
        line,
    })
}

const fn tcc(instance: u8, line: u8) -> Option<WaveformOut> {
    Some(WaveformOut {
        instance: TimerInstance::Tcc(instance),
        line,
    })
}

#[cfg(all(test, feature = "samd21g"))]
mod tests {
    use super::*;

    #[test]
    fn sercom_tables_spot_checks() {
        assert_eq!(lookup(chip::SERCOM_A, 8), pad(0, 0));
        assert_eq!(lookup(chip::SERCOM_A, 21), pad(5, 3));
        assert_eq!(lookup(chip::SERCOM_A, 0), None);
        assert_eq!(lookup(chip::SERCOM_B, 12), pad(4, 0));
        assert_eq!(lookup(chip::SERCOM_B, 17), pad(5, 1));
        assert_eq!(lookup(chip::SERCOM_ALT_A, 0), pad(1, 0));
        assert_eq!(lookup(chip::SERCOM_ALT_A, 31), pad(1, 3));
        assert_eq!(lookup(chip::SERCOM_ALT_B, 2), pad(5, 0));
        assert_eq!(lookup(chip::SERCOM_ALT_B, 30), pad(5, 0));
    }

    #[test]
    fn timer_tables_spot_checks() {
        assert_eq!(lookup(chip::TIMER_A, 14), tc(3, 0));
        assert_eq!(lookup(chip::TIMER_A, 0), tcc(2, 0));
        assert_eq!(lookup(chip::TIMER_B, 30), tcc(0, 0));
        assert_eq!(lookup(chip::TIMER_CTRL_A, 8), tcc(1, 2));
        assert_eq!(lookup(chip::TIMER_CTRL_A, 20), tcc(0, 6));
        assert_eq!(lookup(chip::TIMER_CTRL_B, 13), tcc(0, 7));
        assert_eq!(lookup(chip::TIMER_CTRL_B, 0), None);
    }

    #[test]
    fn lookups_past_table_end_are_none() {
        // The primary SERCOM tables stop short of bit 31 on purpose.
        assert!(chip::SERCOM_A.len() < 32);
        assert_eq!(lookup(chip::SERCOM_A, 31), None);
        assert_eq!(lookup(chip::SERCOM_B, 31), None);
        assert_eq!(lookup(chip::TIMER_CTRL_A, 31), None);
        for table in [chip::SERCOM_A, chip::SERCOM_B, chip::SERCOM_ALT_A, chip::SERCOM_ALT_B] {
            assert!(table.len() <= 32);
            assert_eq!(lookup(table, 32), None);
        }
    }

    #[test]
    fn timer_class_entries_only_name_timer_instances() {
        for table in [chip::TIMER_CTRL_A, chip::TIMER_CTRL_B] {
            for entry in table.iter().flatten() {
                // Function F pins are always driven by a TCC.
                assert!(matches!(entry.instance, TimerInstance::Tcc(_)));
            }
        }
    }
}

// The cfg_if chain above prefers samd21g when both chip features are on, so
// these only compile when samd21e is the selected variant.
#[cfg(all(test, feature = "samd21e", not(feature = "samd21g")))]
mod samd21e_tests {
    use super::*;

    #[test]
    fn bank_b_is_not_bonded_out() {
        for bit in 0..=32 {
            assert_eq!(lookup(chip::SERCOM_B, bit), None);
            assert_eq!(lookup(chip::SERCOM_ALT_B, bit), None);
            assert_eq!(lookup(chip::TIMER_B, bit), None);
            assert_eq!(lookup(chip::TIMER_CTRL_B, bit), None);
        }
    }

    #[test]
    fn entries_naming_absent_sercoms_are_pruned() {
        // SERCOM4 and SERCOM5 do not exist on this variant.
        for table in [chip::SERCOM_A, chip::SERCOM_ALT_A] {
            for entry in table.iter().flatten() {
                assert!(entry.module < 4);
            }
        }
        // Primary PA20/PA21 and alternate PA22..=PA25 name SERCOM5 on the
        // SAMD21G; here they read as no resource.
        assert_eq!(lookup(chip::SERCOM_A, 20), None);
        assert_eq!(lookup(chip::SERCOM_A, 21), None);
        for bit in 22..=25 {
            assert_eq!(lookup(chip::SERCOM_ALT_A, bit), None);
        }
    }

    #[test]
    fn bank_a_spot_checks() {
        assert_eq!(lookup(chip::SERCOM_A, 8), pad(0, 0));
        assert_eq!(lookup(chip::SERCOM_ALT_A, 30), pad(1, 2));
        assert_eq!(lookup(chip::TIMER_A, 14), tc(3, 0));
        assert_eq!(lookup(chip::TIMER_A, 31), tcc(1, 0));
        assert_eq!(lookup(chip::TIMER_CTRL_A, 8), tcc(1, 2));
        assert_eq!(lookup(chip::TIMER_CTRL_A, 25), None);
    }
}
