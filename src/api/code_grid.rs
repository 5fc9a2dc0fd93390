use crate::api::code::PlusCode;
use crate::core::constants::{
    LATITUDE_MAX, LONGITUDE_MAX, MAX_CODE_LENGTH, MIN_CODE_LENGTH, PAIR_CODE_LENGTH,
};
use crate::core::encode::encode;
use crate::core::precision::{latitude_precision, longitude_precision};
use crate::util::coord::clip_latitude;
use geo_types::{Point, Polygon, Rect};
use rayon::prelude::*;

/// A collection of plus-code cells tiling a latitude/longitude extent at a
/// single code length. Useful for rendering code boundaries over a map view.
#[derive(Debug, Clone)]
pub struct CodeGrid {
    cells: Vec<PlusCode>,
    code_length: usize,
}

impl CodeGrid {
    pub fn builder() -> CodeGridBuilder {
        CodeGridBuilder::new()
    }

    /// Tile the extent with the cells of the given code length. Extents are
    /// clamped to the valid coordinate ranges; a code length the encoder
    /// rejects yields an empty grid.
    pub fn from_extent(
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
        code_length: usize,
    ) -> Self {
        let cells = generate_cells_for_extent(
            min_latitude,
            min_longitude,
            max_latitude,
            max_longitude,
            code_length,
        );
        Self { cells, code_length }
    }

    /// Tile a rectangle (x = longitude, y = latitude).
    pub fn from_rect(rect: &Rect<f64>, code_length: usize) -> Self {
        Self::from_extent(
            rect.min().y,
            rect.min().x,
            rect.max().y,
            rect.max().x,
            code_length,
        )
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[PlusCode] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlusCode> {
        self.cells.iter()
    }

    /// Returns the cell containing the point (x = longitude, y = latitude).
    pub fn get_cell_at(&self, point: &Point<f64>) -> Option<&PlusCode> {
        let code = encode(point.y(), point.x(), self.code_length).ok()?;
        self.cells.iter().find(|cell| cell.code == code)
    }

    /// Converts every cell to its boundary polygon.
    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.par_iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&PlusCode>
    where
        F: Fn(&PlusCode) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

#[derive(Debug, Default)]
pub struct CodeGridBuilder {
    code_length: Option<usize>,
    min_latitude: Option<f64>,
    min_longitude: Option<f64>,
    max_latitude: Option<f64>,
    max_longitude: Option<f64>,
}

impl CodeGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = Some(code_length);
        self
    }

    pub fn extent(
        mut self,
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
    ) -> Self {
        self.min_latitude = Some(min_latitude);
        self.min_longitude = Some(min_longitude);
        self.max_latitude = Some(max_latitude);
        self.max_longitude = Some(max_longitude);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_latitude = Some(rect.min().y);
        self.min_longitude = Some(rect.min().x);
        self.max_latitude = Some(rect.max().y);
        self.max_longitude = Some(rect.max().x);
        self
    }

    pub fn build(self) -> CodeGrid {
        let code_length = self.code_length.expect("code_length must be set");
        let min_latitude = self.min_latitude.expect("extent must be set");
        let min_longitude = self.min_longitude.expect("extent must be set");
        let max_latitude = self.max_latitude.expect("extent must be set");
        let max_longitude = self.max_longitude.expect("extent must be set");

        CodeGrid::from_extent(
            min_latitude,
            min_longitude,
            max_latitude,
            max_longitude,
            code_length,
        )
    }
}

fn generate_cells_for_extent(
    min_latitude: f64,
    min_longitude: f64,
    max_latitude: f64,
    max_longitude: f64,
    code_length: usize,
) -> Vec<PlusCode> {
    if code_length < MIN_CODE_LENGTH
        || code_length > MAX_CODE_LENGTH
        || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Vec::new();
    }

    let min_latitude = clip_latitude(min_latitude);
    let max_latitude = clip_latitude(max_latitude);
    let min_longitude = min_longitude.clamp(-LONGITUDE_MAX, LONGITUDE_MAX);
    let max_longitude = max_longitude.clamp(-LONGITUDE_MAX, LONGITUDE_MAX);
    if min_latitude > max_latitude || min_longitude > max_longitude {
        return Vec::new();
    }

    let lat_step = latitude_precision(code_length);
    let lng_step = longitude_precision(code_length);

    let min_row = ((min_latitude + LATITUDE_MAX) / lat_step).floor() as i64;
    let max_row = ((max_latitude + LATITUDE_MAX) / lat_step).floor() as i64;
    let min_col = ((min_longitude + LONGITUDE_MAX) / lng_step).floor() as i64;
    let max_col = ((max_longitude + LONGITUDE_MAX) / lng_step).floor() as i64;

    let mut cells = Vec::new();

    for row in min_row..=max_row {
        let center_latitude = (row as f64 + 0.5) * lat_step - LATITUDE_MAX;
        if center_latitude >= LATITUDE_MAX {
            continue;
        }
        for col in min_col..=max_col {
            let center_longitude = (col as f64 + 0.5) * lng_step - LONGITUDE_MAX;
            if center_longitude >= LONGITUDE_MAX {
                continue;
            }

            let cell = match PlusCode::from_lat_lng(center_latitude, center_longitude, code_length)
            {
                Ok(cell) => cell,
                Err(_) => continue,
            };
            cells.push(cell);
        }
    }

    cells
}
