use crate::core::constants::{
    CODE_ALPHABET, CodeFormat, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES,
    LATITUDE_MAX, LONGITUDE_MAX, MAX_CODE_LENGTH, MIN_CODE_LENGTH, PAIR_CODE_LENGTH,
    PAIR_RESOLUTIONS,
};
use crate::core::precision::latitude_precision;
use crate::util::coord::{clip_latitude, normalize_longitude};
use crate::util::error::PlusCodeError;

/// Encodes a location into a code with the given number of significant digits.
///
/// Latitude is clipped to [-90, 90] and longitude wrapped into [-180, 180),
/// so any finite coordinates are accepted. Lengths below 4, or odd lengths
/// below 10, are rejected; lengths above 15 are clamped. Two nearby
/// locations share a common code prefix in proportion to their proximity.
///
/// # Example
/// ```
/// use pluscodes_rs::encode;
///
/// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
/// let code = encode(47.0000625, 8.0000625, 10)?;
/// assert_eq!(code, "8FVC2222+22");
/// # Ok(())
/// # }
/// ```
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, PlusCodeError> {
    encode_with(&CodeFormat::canonical(), latitude, longitude, code_length)
}

/// Encodes a location using an explicit code layout.
pub fn encode_with(
    format: &CodeFormat,
    latitude: f64,
    longitude: f64,
    code_length: usize,
) -> Result<String, PlusCodeError> {
    if code_length < MIN_CODE_LENGTH
        || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Err(PlusCodeError::InvalidCodeLength(code_length));
    }
    let code_length = code_length.min(MAX_CODE_LENGTH);

    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    // The north pole sits on a cell boundary; nudge it into the top cell so
    // the resulting code still decodes.
    if latitude == LATITUDE_MAX {
        latitude -= latitude_precision(code_length);
    }

    let mut code = encode_pairs(
        format,
        latitude,
        longitude,
        code_length.min(PAIR_CODE_LENGTH),
    );
    if code_length > PAIR_CODE_LENGTH {
        code.push_str(&encode_grid(
            latitude,
            longitude,
            code_length - PAIR_CODE_LENGTH,
        ));
    }

    Ok(code)
}

/// Pair phase: up to ten digits alternating latitude and longitude, each
/// consuming the place value of its pair index. Codes shorter than the
/// separator offset are padded up to it; the separator lands after the
/// eighth digit or at the end of a padded code.
fn encode_pairs(format: &CodeFormat, latitude: f64, longitude: f64, code_length: usize) -> String {
    let alphabet = CODE_ALPHABET.as_bytes();
    let mut code = String::with_capacity(MAX_CODE_LENGTH + 1);

    // Shift both axes into non-negative ranges.
    let mut adjusted_latitude = latitude + LATITUDE_MAX;
    let mut adjusted_longitude = longitude + LONGITUDE_MAX;

    let mut digit_count = 0;
    while digit_count < code_length {
        let place_value = PAIR_RESOLUTIONS[digit_count / 2];

        let digit = ((adjusted_latitude / place_value).floor() as usize).min(ENCODING_BASE - 1);
        adjusted_latitude -= digit as f64 * place_value;
        code.push(alphabet[digit] as char);
        digit_count += 1;
        if digit_count == code_length {
            break;
        }

        let digit = ((adjusted_longitude / place_value).floor() as usize).min(ENCODING_BASE - 1);
        adjusted_longitude -= digit as f64 * place_value;
        code.push(alphabet[digit] as char);
        digit_count += 1;

        if digit_count == format.separator_position && digit_count < code_length {
            code.push(format.separator);
        }
    }

    while code.len() < format.separator_position {
        code.push(format.padding);
    }
    if code.len() == format.separator_position {
        code.push(format.separator);
    }

    code
}

/// Grid phase: each extra digit subdivides the current cell into a 4x5
/// (columns x rows) grid, encoding `row * 4 + col`.
fn encode_grid(latitude: f64, longitude: f64, code_length: usize) -> String {
    let alphabet = CODE_ALPHABET.as_bytes();
    let mut code = String::with_capacity(code_length);

    let mut lat_place_value = GRID_SIZE_DEGREES;
    let mut lng_place_value = GRID_SIZE_DEGREES;
    let mut adjusted_latitude = (latitude + LATITUDE_MAX) % lat_place_value;
    let mut adjusted_longitude = (longitude + LONGITUDE_MAX) % lng_place_value;

    for _ in 0..code_length {
        let row = ((adjusted_latitude / (lat_place_value / GRID_ROWS as f64)).floor() as usize)
            .min(GRID_ROWS - 1);
        let col = ((adjusted_longitude / (lng_place_value / GRID_COLUMNS as f64)).floor() as usize)
            .min(GRID_COLUMNS - 1);
        lat_place_value /= GRID_ROWS as f64;
        lng_place_value /= GRID_COLUMNS as f64;
        adjusted_latitude -= row as f64 * lat_place_value;
        adjusted_longitude -= col as f64 * lng_place_value;
        code.push(alphabet[row * GRID_COLUMNS + col] as char);
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ten_digits() -> Result<(), PlusCodeError> {
        assert_eq!(encode(47.0000625, 8.0000625, 10)?, "8FVC2222+22");
        assert_eq!(encode(-41.2730625, 174.7859375, 10)?, "4VCPPQGP+Q9");
        Ok(())
    }

    #[test]
    fn test_encode_pads_short_codes() -> Result<(), PlusCodeError> {
        assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
        assert_eq!(encode(20.375, 2.775, 4)?, "7FG40000+");
        Ok(())
    }

    #[test]
    fn test_encode_eight_digits_ends_with_separator() -> Result<(), PlusCodeError> {
        assert_eq!(encode(47.0000625, 8.0000625, 8)?, "8FVC2222+");
        Ok(())
    }

    #[test]
    fn test_encode_grid_refinement() -> Result<(), PlusCodeError> {
        assert_eq!(encode(47.0000625, 8.0000625, 11)?, "8FVC2222+22G");
        Ok(())
    }

    #[test]
    fn test_encode_rejects_bad_lengths() {
        assert!(matches!(
            encode(47.0, 8.0, 3),
            Err(PlusCodeError::InvalidCodeLength(3))
        ));
        assert!(matches!(
            encode(47.0, 8.0, 5),
            Err(PlusCodeError::InvalidCodeLength(5))
        ));
        assert!(matches!(
            encode(47.0, 8.0, 9),
            Err(PlusCodeError::InvalidCodeLength(9))
        ));
        assert!(encode(47.0, 8.0, 11).is_ok());
    }

    #[test]
    fn test_encode_clamps_very_long_requests() -> Result<(), PlusCodeError> {
        let code = encode(47.0000625, 8.0000625, 40)?;
        // 15 digits plus the separator.
        assert_eq!(code.len(), MAX_CODE_LENGTH + 1);
        Ok(())
    }

    #[test]
    fn test_encode_pole_is_representable() -> Result<(), PlusCodeError> {
        assert_eq!(encode(90.0, 1.0, 4)?, "CFX30000+");
        let code = encode(90.0, 0.0, 10)?;
        assert_eq!(code.len(), 11);
        Ok(())
    }

    #[test]
    fn test_encode_normalizes_longitude() -> Result<(), PlusCodeError> {
        assert_eq!(encode(10.0, 180.0, 10)?, encode(10.0, -180.0, 10)?);
        assert_eq!(encode(10.0, 365.0, 10)?, encode(10.0, 5.0, 10)?);
        assert_eq!(encode(10.0, -725.0, 10)?, encode(10.0, -5.0, 10)?);
        Ok(())
    }

    #[test]
    fn test_encode_clips_latitude() -> Result<(), PlusCodeError> {
        assert_eq!(encode(95.0, 8.0, 10)?, encode(90.0, 8.0, 10)?);
        assert_eq!(encode(-95.0, 8.0, 10)?, encode(-90.0, 8.0, 10)?);
        Ok(())
    }

    #[test]
    fn test_encode_is_deterministic() -> Result<(), PlusCodeError> {
        let first = encode(-33.8688, 151.2093, 12)?;
        let second = encode(-33.8688, 151.2093, 12)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_nearby_locations_share_prefix() -> Result<(), PlusCodeError> {
        let here = encode(47.3655, 8.5249, 10)?;
        let nearby = encode(47.3656, 8.5250, 10)?;
        assert_eq!(&here[..6], &nearby[..6]);
        Ok(())
    }

    #[test]
    fn test_encode_with_dotted_legacy_layout() -> Result<(), PlusCodeError> {
        let format = CodeFormat::dotted_legacy();
        let code = encode_with(&format, 47.0000625, 8.0000625, 10)?;
        assert_eq!(code, "8FVC.222222");
        assert_eq!(encode_with(&format, 47.0000625, 8.0000625, 4)?, "8FVC.");
        Ok(())
    }
}
