//! Check digit calculation for Royal Mail serial numbers
//!
//! The check digit is a weighted modulo-11 checksum over the eight serial
//! digits, with two fixed remappings for the wraparound results.

use crate::error::{BarcodeError, Result};
use crate::format::SERIAL_LENGTH;

/// Positional weights, most significant digit first
pub const WEIGHTS: [u32; SERIAL_LENGTH] = [8, 6, 4, 2, 3, 5, 9, 7];

/// Calculate the expected check digit for an eight-digit serial number
///
/// The serial must be exactly [`SERIAL_LENGTH`] ASCII digits; anything else
/// is a caller contract violation and returns
/// [`BarcodeError::InvalidInput`] rather than a meaningless digit.
///
/// The digit is `11 - (weighted_sum % 11)`, remapped `10 -> 0` and then
/// `11 -> 5`.
pub fn calculate_check_digit(serial_number: &str) -> Result<u8> {
    let digits = serial_number.as_bytes();
    if digits.len() != SERIAL_LENGTH || !digits.iter().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::InvalidInput);
    }

    let weighted_sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&digit, weight)| u32::from(digit - b'0') * weight)
        .sum();

    match 11 - (weighted_sum % 11) {
        10 => Ok(0),
        11 => Ok(5),
        digit => Ok(digit as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        // (4*8) + (7*6) + (3*4) + (1*2) + (2*3) + (4*5) + (8*9) + (2*7) = 200
        // 11 - (200 % 11) = 11 - 2 = 9
        assert_eq!(calculate_check_digit("47312482"), Ok(9));
    }

    #[test]
    fn raw_ten_maps_to_zero() {
        // sum = 56, 56 % 11 = 1, 11 - 1 = 10 -> 0
        assert_eq!(calculate_check_digit("70000000"), Ok(0));
    }

    #[test]
    fn raw_eleven_maps_to_five() {
        // sum = 0, 0 % 11 = 0, 11 - 0 = 11 -> 5
        assert_eq!(calculate_check_digit("00000000"), Ok(5));
    }

    #[test]
    fn in_range_results_pass_through() {
        // 5*8 + 4*6 + 5*4 + 5*2 + 5*3 + 4*5 + 5*9 + 3*7 = 195, 11 - (195 % 11) = 3
        assert_eq!(calculate_check_digit("54555453"), Ok(3));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(calculate_check_digit("1234567"), Err(BarcodeError::InvalidInput));
        assert_eq!(calculate_check_digit("123456789"), Err(BarcodeError::InvalidInput));
        assert_eq!(calculate_check_digit(""), Err(BarcodeError::InvalidInput));
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(calculate_check_digit("ABCDEFGH"), Err(BarcodeError::InvalidInput));
        assert_eq!(calculate_check_digit("4731248a"), Err(BarcodeError::InvalidInput));
        assert_eq!(calculate_check_digit("-7312482"), Err(BarcodeError::InvalidInput));
    }
}
