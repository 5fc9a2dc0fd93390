use crate::core::constants::{
    CodeFormat, GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES, LATITUDE_MAX, LONGITUDE_MAX,
    PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, alphabet_index,
};
use crate::core::geometry::CodeArea;
use crate::core::validation::is_full_with;
use crate::util::error::PlusCodeError;

/// Decodes a full code into the area it addresses.
///
/// The exact inverse of the encoder: for any code `encode` produces, the
/// returned bounds contain the encoded location and `code_length` equals
/// the number of significant digits. Short or malformed codes are rejected.
///
/// # Example
/// ```
/// use pluscodes_rs::decode;
///
/// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
/// let area = decode("8FVC2222+22")?;
/// assert!(area.contains(47.0000625, 8.0000625));
/// assert_eq!(area.code_length, 10);
/// # Ok(())
/// # }
/// ```
pub fn decode(code: &str) -> Result<CodeArea, PlusCodeError> {
    decode_with(&CodeFormat::canonical(), code)
}

/// Decodes a full code under an explicit code layout.
pub fn decode_with(format: &CodeFormat, code: &str) -> Result<CodeArea, PlusCodeError> {
    if !is_full_with(format, code) {
        return Err(PlusCodeError::NotFullCode(code.to_string()));
    }

    // Strip the separator and any padding, then map the remaining digits
    // through the alphabet. Validation above guarantees every remaining
    // character maps.
    let digits: Vec<usize> = code
        .chars()
        .filter(|&c| c != format.separator && c != format.padding)
        .filter_map(alphabet_index)
        .collect();

    let pair_digits = &digits[..digits.len().min(PAIR_CODE_LENGTH)];
    let pair_area = decode_pairs(pair_digits);
    if digits.len() <= PAIR_CODE_LENGTH {
        return Ok(pair_area);
    }

    let grid_area = decode_grid(&digits[PAIR_CODE_LENGTH..]);
    Ok(CodeArea::new(
        pair_area.latitude_lo + grid_area.latitude_lo,
        pair_area.longitude_lo + grid_area.longitude_lo,
        pair_area.latitude_lo + grid_area.latitude_hi,
        pair_area.longitude_lo + grid_area.longitude_hi,
        pair_area.code_length + grid_area.code_length,
    ))
}

/// Pair phase: interleaved digits, latitude on even offsets and longitude on
/// odd, each weighted by its pair resolution. Bounds come back shifted out
/// of the non-negative encoding ranges.
fn decode_pairs(digits: &[usize]) -> CodeArea {
    let (latitude_lo, latitude_hi) = decode_pair_sequence(digits, 0);
    let (longitude_lo, longitude_hi) = decode_pair_sequence(digits, 1);

    CodeArea::new(
        latitude_lo - LATITUDE_MAX,
        longitude_lo - LONGITUDE_MAX,
        latitude_hi - LATITUDE_MAX,
        longitude_hi - LONGITUDE_MAX,
        digits.len(),
    )
}

fn decode_pair_sequence(digits: &[usize], offset: usize) -> (f64, f64) {
    let mut index = 0;
    let mut value = 0.0;
    while index * 2 + offset < digits.len() {
        value += digits[index * 2 + offset] as f64 * PAIR_RESOLUTIONS[index];
        index += 1;
    }
    (value, value + PAIR_RESOLUTIONS[index - 1])
}

/// Grid phase: each digit selects a row/column in a 4x5 subdivision of the
/// running cell. Returns offsets relative to the pair-phase lower bound.
fn decode_grid(digits: &[usize]) -> CodeArea {
    let mut latitude_lo = 0.0;
    let mut longitude_lo = 0.0;
    let mut lat_place_value = GRID_SIZE_DEGREES;
    let mut lng_place_value = GRID_SIZE_DEGREES;

    for &digit in digits {
        let row = digit / GRID_COLUMNS;
        let col = digit % GRID_COLUMNS;
        lat_place_value /= GRID_ROWS as f64;
        lng_place_value /= GRID_COLUMNS as f64;
        latitude_lo += row as f64 * lat_place_value;
        longitude_lo += col as f64 * lng_place_value;
    }

    CodeArea::new(
        latitude_lo,
        longitude_lo,
        latitude_lo + lat_place_value,
        longitude_lo + lng_place_value,
        digits.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn test_decode_ten_digits() -> Result<(), PlusCodeError> {
        let area = decode("8FVC2222+22")?;
        assert!((area.latitude_lo - 47.0).abs() < EPS);
        assert!((area.longitude_lo - 8.0).abs() < EPS);
        assert!((area.latitude_hi - 47.000125).abs() < EPS);
        assert!((area.longitude_hi - 8.000125).abs() < EPS);
        assert!((area.latitude_center - 47.0000625).abs() < EPS);
        assert!((area.longitude_center - 8.0000625).abs() < EPS);
        assert_eq!(area.code_length, 10);
        Ok(())
    }

    #[test]
    fn test_decode_padded_code() -> Result<(), PlusCodeError> {
        let area = decode("7FG49Q00+")?;
        assert!((area.latitude_lo - 20.35).abs() < EPS);
        assert!((area.longitude_lo - 2.75).abs() < EPS);
        assert!((area.latitude_hi - 20.4).abs() < EPS);
        assert!((area.longitude_hi - 2.8).abs() < EPS);
        assert_eq!(area.code_length, 6);
        Ok(())
    }

    #[test]
    fn test_decode_grid_refined_code() -> Result<(), PlusCodeError> {
        let area = decode("8FVC2222+22G")?;
        assert_eq!(area.code_length, 11);
        assert!((area.latitude_hi - area.latitude_lo - 0.000025).abs() < 1e-12);
        assert!((area.longitude_hi - area.longitude_lo - 0.00003125).abs() < 1e-12);
        assert!(area.contains(47.0000625, 8.0000625));
        Ok(())
    }

    #[test]
    fn test_decode_accepts_lowercase() -> Result<(), PlusCodeError> {
        assert_eq!(decode("8fvc2222+22")?, decode("8FVC2222+22")?);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_non_full_codes() {
        for code in ["", "2222+22", "+2222", "8FVC2222", "8FVC2222+2", "J2222222+"] {
            assert!(
                matches!(decode(code), Err(PlusCodeError::NotFullCode(_))),
                "decode accepted {:?}",
                code
            );
        }
    }

    #[test]
    fn test_decode_with_dotted_legacy_layout() -> Result<(), PlusCodeError> {
        let format = CodeFormat::dotted_legacy();
        let area = decode_with(&format, "8FVC.222222")?;
        assert!((area.latitude_lo - 47.0).abs() < EPS);
        assert!((area.longitude_lo - 8.0).abs() < EPS);
        assert_eq!(area.code_length, 10);
        Ok(())
    }
}
