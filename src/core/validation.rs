use crate::core::constants::{
    CodeFormat, ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, alphabet_index,
};
use crate::core::decode::decode_with;

/// Structural validity: alphabet membership, separator placement and padding
/// layout. No numeric interpretation. Case-insensitive.
pub fn is_valid(code: &str) -> bool {
    is_valid_with(&CodeFormat::canonical(), code)
}

/// Structural validity under an explicit code layout.
pub fn is_valid_with(format: &CodeFormat, code: &str) -> bool {
    if code.len() < 2 {
        return false;
    }

    // Exactly one separator, on a pair boundary, no later than its canonical
    // position.
    let mut separators = code.match_indices(format.separator);
    let sep_idx = match separators.next() {
        Some((idx, _)) => idx,
        None => return false,
    };
    if separators.next().is_some() {
        return false;
    }
    if sep_idx % 2 != 0 || sep_idx > format.separator_position {
        return false;
    }

    // A lone trailing digit leaves the latitude/longitude interleave
    // misaligned.
    if code.len() - sep_idx - 1 == 1 {
        return false;
    }

    // Padding: one contiguous block running up to the separator, starting on
    // a pair boundary after at least one real digit pair, with nothing after
    // the separator.
    if let Some(pad_start) = code.find(format.padding) {
        if pad_start == 0 || pad_start % 2 != 0 {
            return false;
        }
        if pad_start > sep_idx {
            return false;
        }
        if !code[pad_start..sep_idx].chars().all(|c| c == format.padding) {
            return false;
        }
        if sep_idx != code.len() - 1 {
            return false;
        }
    }

    // Everything else must come from the digit alphabet.
    code.char_indices()
        .all(|(idx, c)| idx == sep_idx || c == format.padding || alphabet_index(c).is_some())
}

/// True for valid codes whose separator sits before its canonical position.
/// Short codes are ambiguous without a nearby reference location.
pub fn is_short(code: &str) -> bool {
    is_short_with(&CodeFormat::canonical(), code)
}

/// Short-code check under an explicit code layout.
pub fn is_short_with(format: &CodeFormat, code: &str) -> bool {
    if !is_valid_with(format, code) {
        return false;
    }
    match code.find(format.separator) {
        Some(idx) => idx < format.separator_position,
        None => false,
    }
}

/// True for valid, non-short codes whose leading digit pair stays inside the
/// 20x20 grid covering [-90, 90) x [-180, 180).
pub fn is_full(code: &str) -> bool {
    is_full_with(&CodeFormat::canonical(), code)
}

/// Full-code check under an explicit code layout.
pub fn is_full_with(format: &CodeFormat, code: &str) -> bool {
    if !is_valid_with(format, code) {
        return false;
    }
    if is_short_with(format, code) {
        return false;
    }

    let mut chars = code.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let Some(first_lat_digit) = alphabet_index(first) else {
        return false;
    };
    if (first_lat_digit * ENCODING_BASE) as f64 >= LATITUDE_MAX * 2.0 {
        return false;
    }
    if let Some(second) = chars.next() {
        let Some(first_lng_digit) = alphabet_index(second) else {
            return false;
        };
        if (first_lng_digit * ENCODING_BASE) as f64 >= LONGITUDE_MAX * 2.0 {
            return false;
        }
    }
    true
}

/// True when the code carries padding, i.e. encodes fewer digits than its
/// separator position suggests.
pub fn is_padded(code: &str) -> bool {
    is_padded_with(&CodeFormat::canonical(), code)
}

/// Padding check under an explicit code layout.
pub fn is_padded_with(format: &CodeFormat, code: &str) -> bool {
    code.contains(format.padding)
}

/// True iff the code decodes and its bounds contain the point.
pub fn contains(code: &str, latitude: f64, longitude: f64) -> bool {
    contains_with(&CodeFormat::canonical(), code, latitude, longitude)
}

/// Containment check under an explicit code layout.
pub fn contains_with(format: &CodeFormat, code: &str, latitude: f64, longitude: f64) -> bool {
    decode_with(format, code)
        .map(|area| area.contains(latitude, longitude))
        .unwrap_or(false)
}
