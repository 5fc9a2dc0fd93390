use crate::core::constants::{CodeFormat, ENCODING_BASE, LATITUDE_MAX, PAIR_CODE_LENGTH};
use crate::core::decode::decode_with;
use crate::core::encode::encode_with;
use crate::core::precision::latitude_precision;
use crate::core::validation::{is_full_with, is_padded_with, is_short_with};
use crate::util::coord::{clip_latitude, normalize_longitude};
use crate::util::error::PlusCodeError;

/// Digit counts a short code may omit, tried finest first so the closest
/// references shed the most characters.
const SHORTENING_TIERS: [usize; 3] = [8, 6, 4];

/// Removes leading digits from a full code, given a nearby reference
/// location that later allows [`recover`] to restore them.
///
/// The reference must fall within a quarter of the precision of one of the
/// supported prefix lengths (8, 6 or 4 digits); the closest tier that
/// matches decides how many characters are dropped. Padded codes cannot be
/// shortened — their padding already signals reduced precision.
///
/// # Example
/// ```
/// use pluscodes_rs::shorten;
///
/// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
/// let short = shorten("8FVC2222+22", 47.0000625, 8.0000625)?;
/// assert_eq!(short, "+22");
/// # Ok(())
/// # }
/// ```
pub fn shorten(
    code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
) -> Result<String, PlusCodeError> {
    shorten_with(
        &CodeFormat::canonical(),
        code,
        reference_latitude,
        reference_longitude,
    )
}

/// Shortens a code under an explicit code layout.
pub fn shorten_with(
    format: &CodeFormat,
    code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
) -> Result<String, PlusCodeError> {
    if !is_full_with(format, code) {
        return Err(PlusCodeError::NotFullCode(code.to_string()));
    }
    if is_padded_with(format, code) {
        return Err(PlusCodeError::PaddedCode(code.to_string()));
    }

    let area = decode_with(format, code)?;
    let latitude_diff = (reference_latitude - area.latitude_center).abs();
    let longitude_diff = (reference_longitude - area.longitude_center).abs();

    // Regenerate from the decoded center at the code's own digit count so
    // the dropped prefix and the retained suffix stay consistent.
    let regenerated = encode_with(
        format,
        area.latitude_center,
        area.longitude_center,
        area.code_length,
    )?;

    for &tier in &SHORTENING_TIERS {
        // Only prefixes ending at or before the separator can be dropped
        // wholesale; the remainder keeps its separator and stays parseable.
        if tier > format.separator_position {
            continue;
        }
        let margin = latitude_precision(tier) / 4.0;
        if latitude_diff < margin && longitude_diff < margin {
            return Ok(regenerated[tier..].to_string());
        }
    }

    Err(PlusCodeError::ReferenceTooFar)
}

/// Restores a short code to a full code using a nearby reference location.
///
/// A full code passes through unchanged. The omitted prefix is taken from
/// the reference location's own code; when the naive combination lands in
/// the cell next to the reference, the result is shifted one prefix
/// precision toward the reference (latitude only while it stays inside
/// ±90°) and re-encoded at the requested length.
///
/// # Example
/// ```
/// use pluscodes_rs::recover;
///
/// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
/// let full = recover("+22", 47.0, 8.0, 10)?;
/// assert_eq!(full, "8FVC2222+22");
/// # Ok(())
/// # }
/// ```
pub fn recover(
    short_code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
    code_length: usize,
) -> Result<String, PlusCodeError> {
    recover_with(
        &CodeFormat::canonical(),
        short_code,
        reference_latitude,
        reference_longitude,
        code_length,
    )
}

/// Recovers a short code under an explicit code layout.
pub fn recover_with(
    format: &CodeFormat,
    short_code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
    code_length: usize,
) -> Result<String, PlusCodeError> {
    if !is_short_with(format, short_code) {
        if is_full_with(format, short_code) {
            return Ok(short_code.to_string());
        }
        return Err(PlusCodeError::NotShortCode(short_code.to_string()));
    }

    let reference_latitude = clip_latitude(reference_latitude);
    let reference_longitude = normalize_longitude(reference_longitude);

    let Some(separator_idx) = short_code.find(format.separator) else {
        return Err(PlusCodeError::NotShortCode(short_code.to_string()));
    };
    let digits_to_recover = format.separator_position - separator_idx;
    // Size in degrees of the cell the omitted prefix addresses.
    let prefix_precision = (ENCODING_BASE as f64).powi(2 - (digits_to_recover as i32) / 2);

    let reference_code = encode_with(
        format,
        reference_latitude,
        reference_longitude,
        PAIR_CODE_LENGTH,
    )?;
    let candidate = format!("{}{}", &reference_code[..digits_to_recover], short_code);
    let area = decode_with(format, &candidate)?;

    // If the candidate center sits more than half a prefix cell from the
    // reference, the reference lies in a neighboring cell; move one cell
    // toward it.
    let mut latitude = area.latitude_center;
    let mut longitude = area.longitude_center;

    let latitude_diff = latitude - reference_latitude;
    if latitude_diff > prefix_precision / 2.0 && latitude - prefix_precision > -LATITUDE_MAX {
        latitude -= prefix_precision;
    } else if latitude_diff < -prefix_precision / 2.0 && latitude + prefix_precision < LATITUDE_MAX
    {
        latitude += prefix_precision;
    }

    let longitude_diff = longitude - reference_longitude;
    if longitude_diff > prefix_precision / 2.0 {
        longitude -= prefix_precision;
    } else if longitude_diff < -prefix_precision / 2.0 {
        longitude += prefix_precision;
    }

    encode_with(format, latitude, longitude, code_length)
}
