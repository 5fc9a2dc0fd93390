//! # pluscodes-rs
//!
//! An Open Location Code ("plus code") codec: convert latitude/longitude
//! pairs into short alphanumeric codes and back, shorten codes relative to
//! a nearby reference location, and recover them again.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - the codec itself
//!
//! ```
//! use pluscodes_rs::{decode, encode, shorten};
//!
//! # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
//! let code = encode(47.0000625, 8.0000625, 10)?;
//! assert_eq!(code, "8FVC2222+22");
//!
//! let area = decode(&code)?;
//! assert!(area.contains(47.0000625, 8.0000625));
//!
//! let short = shorten(&code, 47.0, 8.0)?;
//! assert_eq!(short, "+22");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PlusCode` - Single Cell Operations
//!
//! ```
//! use pluscodes_rs::PlusCode;
//!
//! # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
//! let cell = PlusCode::from_lat_lng(20.375, 2.775, 6)?;
//! println!("{}", cell.code);
//! let polygon = cell.to_polygon();
//! # let _ = polygon;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CodeGrid` - Collections of Cells
//!
//! ```
//! use pluscodes_rs::CodeGrid;
//! use geo_types::point;
//!
//! let grid = CodeGrid::builder()
//!     .code_length(8)
//!     .extent(47.0, 8.0, 47.01, 8.01)
//!     .build();
//!
//! let pt = point! { x: 8.0051, y: 47.0051 };
//! if let Some(cell) = grid.get_cell_at(&pt) {
//!     println!("{}", cell.code);
//! }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{CodeGrid, CodeGridBuilder, PlusCode};
pub use crate::core::{
    CODE_ALPHABET, CellDimensions, CodeArea, CodeFormat, DEFAULT_CODE_LENGTH, ENCODING_BASE,
    MAX_CODE_LENGTH, MIN_CODE_LENGTH, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR,
    SEPARATOR_POSITION, cell_dimensions, contains, contains_with, decode, decode_with, encode,
    encode_with, is_full, is_full_with, is_padded, is_padded_with, is_short, is_short_with,
    is_valid, is_valid_with, latitude_precision, longitude_precision, recover, recover_with,
    shorten, shorten_with,
};
pub use crate::util::{Coordinate, PlusCodeError, clip_latitude, normalize_longitude};

pub use geo_types;
