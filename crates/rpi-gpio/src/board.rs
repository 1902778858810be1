//! Physical header numbering for the 40-pin Raspberry Pi header.

use tracing::trace;

use crate::PinError;

/// Number of pins on the header.
pub const HEADER_PINS: i64 = 40;

// Indexed by physical pin - 1. `None` for power and ground.
const HEADER_TO_BCM: [Option<u8>; HEADER_PINS as usize] = [
    None,     // 1  3V3
    None,     // 2  5V
    Some(2),  // 3
    None,     // 4  5V
    Some(3),  // 5
    None,     // 6  GND
    Some(4),  // 7
    Some(14), // 8
    None,     // 9  GND
    Some(15), // 10
    Some(17), // 11
    Some(18), // 12
    Some(27), // 13
    None,     // 14 GND
    Some(22), // 15
    Some(23), // 16
    None,     // 17 3V3
    Some(24), // 18
    Some(10), // 19
    None,     // 20 GND
    Some(9),  // 21
    Some(25), // 22
    Some(11), // 23
    Some(8),  // 24
    None,     // 25 GND
    Some(7),  // 26
    Some(0),  // 27
    Some(1),  // 28
    Some(5),  // 29
    None,     // 30 GND
    Some(6),  // 31
    Some(12), // 32
    Some(13), // 33
    None,     // 34 GND
    Some(19), // 35
    Some(16), // 36
    Some(26), // 37
    Some(20), // 38
    None,     // 39 GND
    Some(21), // 40
];

/// Resolve a physical header pin to its BCM GPIO number.
///
/// # Errors
/// Returns `PinError::InvalidPin` for pins outside the header and for power or
/// ground pins.
pub fn to_bcm(physical: i64) -> Result<u8, PinError> {
    let bcm = physical
        .checked_sub(1)
        .and_then(|index| HEADER_TO_BCM.get(usize::try_from(index).ok()?).copied())
        .flatten()
        .ok_or(PinError::InvalidPin(physical))?;
    trace!("header pin {physical} is GPIO {bcm}");
    Ok(bcm)
}

#[cfg(test)]
mod tests {
    use super::{to_bcm, HEADER_PINS};
    use crate::PinError;

    #[test]
    fn known_pins() {
        assert_eq!(to_bcm(3).unwrap(), 2);
        assert_eq!(to_bcm(11).unwrap(), 17);
        assert_eq!(to_bcm(12).unwrap(), 18);
        assert_eq!(to_bcm(18).unwrap(), 24);
        assert_eq!(to_bcm(27).unwrap(), 0);
        assert_eq!(to_bcm(40).unwrap(), 21);
    }

    #[test]
    fn power_and_ground_rejected() {
        for pin in [1, 2, 4, 6, 9, 14, 17, 20, 25, 30, 34, 39] {
            assert!(matches!(to_bcm(pin), Err(PinError::InvalidPin(p)) if p == pin));
        }
    }

    #[test]
    fn out_of_range_rejected() {
        for pin in [0, -1, HEADER_PINS + 1, 999, i64::from(u32::MAX) + 1, i64::MIN, i64::MAX] {
            assert!(matches!(to_bcm(pin), Err(PinError::InvalidPin(p)) if p == pin));
        }
    }

    #[test]
    fn every_gpio_mapped_once() {
        let mut seen = [false; 28];
        for pin in 1..=HEADER_PINS {
            if let Ok(bcm) = to_bcm(pin) {
                assert!(!seen[usize::from(bcm)], "GPIO {bcm} mapped twice");
                seen[usize::from(bcm)] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
