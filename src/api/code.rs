use crate::core::decode::decode;
use crate::core::encode::encode;
use crate::core::geometry::CodeArea;
use crate::core::shorten::{recover, shorten};
use crate::util::coord::Coordinate;
use crate::util::error::PlusCodeError;
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A single plus-code cell: the code string together with the area it
/// addresses.
///
/// Construct one from coordinates or by parsing an existing full code; the
/// decoded bounds travel with the value, so geometry lookups never re-parse.
///
/// # Example
///
/// ```
/// use pluscodes_rs::PlusCode;
///
/// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
/// let cell = PlusCode::from_lat_lng(47.0000625, 8.0000625, 10)?;
/// assert_eq!(cell.code, "8FVC2222+22");
///
/// // Convert to a polygon for map overlays.
/// let polygon = cell.to_polygon();
/// # let _ = polygon;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlusCode {
    /// The code string, e.g. `8FVC2222+22`
    pub code: String,
    /// The latitude/longitude area the code decodes to
    pub area: CodeArea,
}

impl PlusCode {
    /// Create a PlusCode from a latitude/longitude pair in degrees.
    ///
    /// # Example
    /// ```
    /// use pluscodes_rs::PlusCode;
    ///
    /// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
    /// let cell = PlusCode::from_lat_lng(20.375, 2.775, 6)?;
    /// assert_eq!(cell.code, "7FG49Q00+");
    /// assert_eq!(cell.code_length(), 6);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_lng(
        latitude: f64,
        longitude: f64,
        code_length: usize,
    ) -> Result<Self, PlusCodeError> {
        let code = encode(latitude, longitude, code_length)?;
        let area = decode(&code)?;
        Ok(Self { code, area })
    }

    /// Create a PlusCode from a point value (x = longitude, y = latitude).
    ///
    /// # Example
    /// ```
    /// use pluscodes_rs::PlusCode;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
    /// // From tuple
    /// let cell = PlusCode::from_point(&(8.0000625, 47.0000625), 10)?;
    /// // From Point
    /// let cell = PlusCode::from_point(&Point::new(8.0000625, 47.0000625), 10)?;
    /// assert_eq!(cell.code, "8FVC2222+22");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_point(coord: &impl Coordinate, code_length: usize) -> Result<Self, PlusCodeError> {
        Self::from_lat_lng(coord.y(), coord.x(), code_length)
    }

    /// Parse an existing full code.
    ///
    /// # Example
    /// ```
    /// use pluscodes_rs::PlusCode;
    ///
    /// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
    /// let cell = PlusCode::parse("8FVC2222+22")?;
    /// assert!(cell.contains(47.0000625, 8.0000625));
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(code: &str) -> Result<Self, PlusCodeError> {
        let area = decode(code)?;
        Ok(Self {
            code: code.to_ascii_uppercase(),
            area,
        })
    }

    /// Restore a short code to a PlusCode using a nearby reference location.
    ///
    /// # Example
    /// ```
    /// use pluscodes_rs::PlusCode;
    ///
    /// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
    /// let cell = PlusCode::recover("+22", &(8.0, 47.0), 10)?;
    /// assert_eq!(cell.code, "8FVC2222+22");
    /// # Ok(())
    /// # }
    /// ```
    pub fn recover(
        short_code: &str,
        reference: &impl Coordinate,
        code_length: usize,
    ) -> Result<Self, PlusCodeError> {
        let code = recover(short_code, reference.y(), reference.x(), code_length)?;
        Self::parse(&code)
    }

    /// Number of significant digits in the code.
    pub fn code_length(&self) -> usize {
        self.area.code_length
    }

    /// Center of the cell (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        self.area.center()
    }

    /// Returns true when the point lies inside the cell, edges included.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.area.contains(latitude, longitude)
    }

    /// Shorten this code relative to a nearby reference location.
    ///
    /// # Example
    /// ```
    /// use pluscodes_rs::PlusCode;
    ///
    /// # fn main() -> Result<(), pluscodes_rs::PlusCodeError> {
    /// let cell = PlusCode::from_lat_lng(47.0000625, 8.0000625, 10)?;
    /// let short = cell.shorten(47.0000625, 8.0000625)?;
    /// assert_eq!(short, "+22");
    /// # Ok(())
    /// # }
    /// ```
    pub fn shorten(
        &self,
        reference_latitude: f64,
        reference_longitude: f64,
    ) -> Result<String, PlusCodeError> {
        shorten(&self.code, reference_latitude, reference_longitude)
    }

    /// Cell bounds as a rectangle (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        self.area.to_rect()
    }

    /// Cell bounds as a closed polygon ring, suitable for map overlays.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.area.to_polygon()
    }

    /// Physical size of the cell in meters at its latitude.
    pub fn distance_across(&self) -> f64 {
        self.area.distance_across()
    }
}
