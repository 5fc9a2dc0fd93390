pub mod constants;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod precision;
pub mod shorten;
pub mod validation;

pub use constants::{
    CODE_ALPHABET, CodeFormat, DEFAULT_CODE_LENGTH, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS,
    GRID_SIZE_DEGREES, LATITUDE_MAX, LONGITUDE_MAX, MAX_CODE_LENGTH, MIN_CODE_LENGTH,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
pub use decode::{decode, decode_with};
pub use encode::{encode, encode_with};
pub use geometry::CodeArea;
pub use precision::{CellDimensions, cell_dimensions, latitude_precision, longitude_precision};
pub use shorten::{recover, recover_with, shorten, shorten_with};
pub use validation::{
    contains, contains_with, is_full, is_full_with, is_padded, is_padded_with, is_short,
    is_short_with, is_valid, is_valid_with,
};
