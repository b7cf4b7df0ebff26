//! Fixed-width binary renderings of snowflakes and their fields
//!
//! Every field of a snowflake has a fixed width, so its binary digits are
//! always left-padded with `0` up to that width. The full identifier is
//! rendered the same way at 64 bits.

use crate::config::TOTAL_BITS;

/// Left-pad `digits` with `0` up to `width` characters
///
/// Input already at or beyond `width` is returned unchanged.
pub fn pad_start(digits: &str, width: usize) -> String {
    if digits.len() >= width {
        return digits.to_string();
    }
    let mut padded = String::with_capacity(width);
    padded.extend(std::iter::repeat_n('0', width - digits.len()));
    padded.push_str(digits);
    padded
}

/// Render the low `width` bits of `value` as a zero-padded binary string
///
/// A zero width renders as an empty string.
pub fn to_binary(value: u64, width: u32) -> String {
    if width == 0 {
        return String::new();
    }
    let masked = if width >= u64::BITS {
        value
    } else {
        value & ((1u64 << width) - 1)
    };
    pad_start(&format!("{masked:b}"), width as usize)
}

/// Render a full identifier as exactly 64 binary digits
#[inline]
pub fn to_binary64(id: u64) -> String {
    to_binary(id, TOTAL_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_start() {
        assert_eq!(pad_start("1", 5), "00001");
        assert_eq!(pad_start("", 3), "000");
        assert_eq!(pad_start("101", 3), "101");
        assert_eq!(pad_start("10101", 3), "10101");
    }

    #[test]
    fn test_to_binary_field_widths() {
        assert_eq!(to_binary(1, 5), "00001");
        assert_eq!(to_binary(0, 5), "00000");
        assert_eq!(to_binary(4094, 12), "111111111110");
        assert_eq!(to_binary(0, 42).len(), 42);
    }

    #[test]
    fn test_to_binary_masks_overflowing_value() {
        assert_eq!(to_binary(0b100001, 5), "00001");
    }

    #[test]
    fn test_to_binary_zero_width_is_empty() {
        assert_eq!(to_binary(0, 0), "");
        assert_eq!(to_binary(u64::MAX, 0), "");
    }

    #[test]
    fn test_to_binary64() {
        assert_eq!(to_binary64(0), "0".repeat(64));
        assert_eq!(to_binary64(u64::MAX), "1".repeat(64));
        assert_eq!(
            to_binary64(266241948824764416),
            "0000001110110001111000011010010001010000000000100000000000000000"
        );
    }
}
