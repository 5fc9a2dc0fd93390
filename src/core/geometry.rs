use crate::core::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use geo::{Distance, Haversine};
use geo_types::{Coord, LineString, Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// The area a code decodes to: a latitude/longitude bounding rectangle plus
/// the number of significant digits that produced it.
///
/// A `CodeArea` is a plain value created fresh by every decode. The center
/// is computed at construction and clamped so it never exceeds the maximum
/// latitude or longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeArea {
    pub latitude_lo: f64,
    pub longitude_lo: f64,
    pub latitude_hi: f64,
    pub longitude_hi: f64,
    pub latitude_center: f64,
    pub longitude_center: f64,
    pub code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            latitude_center: (latitude_lo + (latitude_hi - latitude_lo) / 2.0).min(LATITUDE_MAX),
            longitude_center: (longitude_lo + (longitude_hi - longitude_lo) / 2.0)
                .min(LONGITUDE_MAX),
            code_length,
        }
    }

    /// Center of the area as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude_center, self.latitude_center)
    }

    pub fn northwest(&self) -> Point<f64> {
        Point::new(self.longitude_lo, self.latitude_hi)
    }

    pub fn northeast(&self) -> Point<f64> {
        Point::new(self.longitude_hi, self.latitude_hi)
    }

    pub fn southwest(&self) -> Point<f64> {
        Point::new(self.longitude_lo, self.latitude_lo)
    }

    pub fn southeast(&self) -> Point<f64> {
        Point::new(self.longitude_hi, self.latitude_lo)
    }

    /// Returns true when the point lies within the bounds, edges included.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.latitude_lo <= latitude
            && latitude <= self.latitude_hi
            && self.longitude_lo <= longitude
            && longitude <= self.longitude_hi
    }

    /// Bounds as an axis-aligned rectangle (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord { x: self.longitude_lo, y: self.latitude_lo },
            Coord { x: self.longitude_hi, y: self.latitude_hi },
        )
    }

    /// Bounds as a closed polygon ring, suitable for map overlays.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let coords = vec![
            Coord { x: self.longitude_lo, y: self.latitude_lo },
            Coord { x: self.longitude_hi, y: self.latitude_lo },
            Coord { x: self.longitude_hi, y: self.latitude_hi },
            Coord { x: self.longitude_lo, y: self.latitude_hi },
            Coord { x: self.longitude_lo, y: self.latitude_lo },
        ];

        Polygon::new(LineString::from(coords), vec![])
    }

    /// Physical size of the cell in meters: the mean of the great-circle
    /// distances along the north edge and the falling diagonal. A proxy for
    /// the code's precision at its latitude, not part of the codec contract.
    pub fn distance_across(&self) -> f64 {
        let north_edge = Haversine.distance(self.northwest(), self.northeast());
        let diagonal = Haversine.distance(self.northwest(), self.southeast());
        (north_edge + diagonal) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_midpoint() {
        let area = CodeArea::new(47.0, 8.0, 47.000125, 8.000125, 10);
        assert!((area.latitude_center - 47.0000625).abs() < 1e-12);
        assert!((area.longitude_center - 8.0000625).abs() < 1e-12);
        assert_eq!(area.code_length, 10);
    }

    #[test]
    fn test_center_clamped_at_bounds() {
        let area = CodeArea::new(89.0, 179.0, 91.0, 181.0, 2);
        assert_eq!(area.latitude_center, 90.0);
        assert_eq!(area.longitude_center, 180.0);
    }

    #[test]
    fn test_corners() {
        let area = CodeArea::new(47.0, 8.0, 47.05, 8.05, 6);
        assert_eq!(area.northwest(), Point::new(8.0, 47.05));
        assert_eq!(area.northeast(), Point::new(8.05, 47.05));
        assert_eq!(area.southwest(), Point::new(8.0, 47.0));
        assert_eq!(area.southeast(), Point::new(8.05, 47.0));
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let area = CodeArea::new(47.0, 8.0, 47.05, 8.05, 6);
        assert!(area.contains(47.0, 8.0));
        assert!(area.contains(47.05, 8.05));
        assert!(area.contains(47.02, 8.01));
        assert!(!area.contains(47.06, 8.01));
        assert!(!area.contains(47.02, 7.99));
    }

    #[test]
    fn test_to_rect() {
        let area = CodeArea::new(47.0, 8.0, 47.05, 8.05, 6);
        let rect = area.to_rect();
        assert_eq!(rect.min().x, 8.0);
        assert_eq!(rect.min().y, 47.0);
        assert_eq!(rect.max().x, 8.05);
        assert_eq!(rect.max().y, 47.05);
    }

    #[test]
    fn test_to_polygon_closed_ring() {
        let area = CodeArea::new(47.0, 8.0, 47.05, 8.05, 6);
        let polygon = area.to_polygon();
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);
    }

    #[test]
    fn test_distance_across_scale() {
        // A 10-digit cell is roughly a dozen meters across at mid latitudes.
        let area = CodeArea::new(47.0, 8.0, 47.000125, 8.000125, 10);
        let distance = area.distance_across();
        assert!(distance > 5.0 && distance < 30.0, "distance {}", distance);

        let coarser = CodeArea::new(47.0, 8.0, 47.05, 8.05, 6);
        assert!(coarser.distance_across() > distance);
    }

    #[test]
    fn test_serde_round_trip() {
        let area = CodeArea::new(47.0, 8.0, 47.000125, 8.000125, 10);
        let json = serde_json::to_string(&area).unwrap();
        let back: CodeArea = serde_json::from_str(&json).unwrap();
        assert_eq!(area, back);
    }
}
