//! SSN-specific validation.
//!
//! The dashed SSN rule accepts any `XXX-XX-XXXX` shape. The bare nine-digit
//! rule is far noisier, so it only keeps numbers the SSA could have issued.

/// Check the area, group and serial numbers against never-issued ranges.
///
/// Area `000`, `666` and `900`-`999`, group `00` and serial `0000` are invalid.
#[must_use]
pub const fn is_valid_parts(area: u16, group: u16, serial: u16) -> bool {
    if area == 0 || area == 666 || area >= 900 {
        return false;
    }
    group != 0 && serial != 0
}

/// Validate a bare nine-digit candidate.
#[must_use]
pub fn is_valid_bare(digits: &str) -> bool {
    if digits.len() != 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let area: u16 = digits[0..3].parse().unwrap_or(0);
    let group: u16 = digits[3..5].parse().unwrap_or(0);
    let serial: u16 = digits[5..9].parse().unwrap_or(0);
    is_valid_parts(area, group, serial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bare() {
        assert!(is_valid_bare("123456789"));
        assert!(!is_valid_bare("000456789"));
        assert!(!is_valid_bare("666456789"));
        assert!(!is_valid_bare("900456789"));
        assert!(!is_valid_bare("999456789"));
        assert!(!is_valid_bare("123006789"));
        assert!(!is_valid_bare("123450000"));
        assert!(!is_valid_bare("12345678"));
        assert!(!is_valid_bare("12345678a"));
    }

    #[test]
    fn parts_boundaries() {
        assert!(is_valid_parts(1, 1, 1));
        assert!(is_valid_parts(899, 99, 9999));
        assert!(!is_valid_parts(666, 12, 3456));
        assert!(!is_valid_parts(900, 12, 3456));
    }
}
