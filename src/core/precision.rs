use crate::core::constants::{
    ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, MAX_CODE_LENGTH, MIN_CODE_LENGTH, PAIR_CODE_LENGTH,
};
use crate::util::error::PlusCodeError;

/// Height and width in degrees of the cell addressed by a digit count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDimensions {
    pub code_length: usize,
    pub height_degrees: f64,
    pub width_degrees: f64,
}

/// Returns the latitude extent in degrees of a cell at the given digit count.
///
/// Pair-phase lengths halve through the resolution table; grid-phase digits
/// divide the latitude edge by the grid row count.
pub fn latitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        (ENCODING_BASE as f64).powi(2 - (code_length as i32) / 2)
    } else {
        (ENCODING_BASE as f64).powi(-3)
            / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
    }
}

/// Returns the longitude extent in degrees of a cell at the given digit count.
///
/// Identical to the latitude extent through the pair phase; grid-phase digits
/// divide the longitude edge by the grid column count instead.
pub fn longitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        latitude_precision(code_length)
    } else {
        (ENCODING_BASE as f64).powi(-3)
            / (GRID_COLUMNS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
    }
}

/// Returns both cell extents for a digit count the encoder accepts.
pub fn cell_dimensions(code_length: usize) -> Result<CellDimensions, PlusCodeError> {
    if code_length < MIN_CODE_LENGTH
        || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Err(PlusCodeError::InvalidCodeLength(code_length));
    }
    let code_length = code_length.min(MAX_CODE_LENGTH);

    Ok(CellDimensions {
        code_length,
        height_degrees: latitude_precision(code_length),
        width_degrees: longitude_precision(code_length),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_phase_precision() {
        assert!((latitude_precision(2) - 20.0).abs() < 1e-12);
        assert!((latitude_precision(4) - 1.0).abs() < 1e-12);
        assert!((latitude_precision(6) - 0.05).abs() < 1e-12);
        assert!((latitude_precision(8) - 0.0025).abs() < 1e-12);
        assert!((latitude_precision(10) - 0.000125).abs() < 1e-12);
        assert_eq!(latitude_precision(6), longitude_precision(6));
    }

    #[test]
    fn test_grid_phase_precision() {
        assert!((latitude_precision(11) - 0.000125 / 5.0).abs() < 1e-15);
        assert!((longitude_precision(11) - 0.000125 / 4.0).abs() < 1e-15);
        assert!((latitude_precision(12) - 0.000125 / 25.0).abs() < 1e-15);
        assert!((longitude_precision(12) - 0.000125 / 16.0).abs() < 1e-15);
    }

    #[test]
    fn test_cell_dimensions() -> Result<(), PlusCodeError> {
        let dims = cell_dimensions(10)?;
        assert_eq!(dims.code_length, 10);
        assert!((dims.height_degrees - 0.000125).abs() < 1e-12);
        assert!((dims.width_degrees - 0.000125).abs() < 1e-12);

        let dims = cell_dimensions(11)?;
        assert!(dims.height_degrees < dims.width_degrees);
        Ok(())
    }

    #[test]
    fn test_cell_dimensions_rejects_bad_lengths() {
        assert!(matches!(
            cell_dimensions(3),
            Err(PlusCodeError::InvalidCodeLength(3))
        ));
        assert!(matches!(
            cell_dimensions(7),
            Err(PlusCodeError::InvalidCodeLength(7))
        ));
    }

    #[test]
    fn test_cell_dimensions_clamps_long_requests() -> Result<(), PlusCodeError> {
        assert_eq!(cell_dimensions(20)?, cell_dimensions(15)?);
        Ok(())
    }
}
