use crate::error::{HitZoneError, HzResult};
use serde::{Deserialize, Serialize};

/// Side length of the normalized strike-zone plane. Coordinates run 0..=99.
pub const PLANE_SIZE: usize = 100;

/// One observed event location in the normalized plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Global score extremes, both seeded at zero. A grid whose cells are all
/// negative still reports `max == 0` (and vice versa); downstream shading
/// is relative to zero, not to the hottest cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBounds {
    pub max: i32,
    pub min: i32,
}

/// The scored grid: row-major, row = y bucket, col = x bucket. Each cell
/// holds hits minus strikes for the points that landed in it.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneMap {
    pub cells: Vec<Vec<i32>>,
    pub bounds: ScoreBounds,
    pub boxes_per_side: usize,
}

impl ZoneMap {
    pub fn score(&self, row: usize, col: usize) -> i32 {
        self.cells[row][col]
    }
}

/// Translates the user-facing `detail` divisor into a grid side length.
/// `detail` must evenly divide the plane, otherwise buckets would be
/// ragged and partially overlapping.
pub fn boxes_for_detail(detail: usize) -> HzResult<usize> {
    if detail == 0 || detail > PLANE_SIZE {
        return Err(HitZoneError::InvalidConfig(format!(
            "detail must be in [1, {}], got {}",
            PLANE_SIZE, detail
        )));
    }
    if PLANE_SIZE % detail != 0 {
        return Err(HitZoneError::InvalidConfig(format!(
            "detail must evenly divide {}, got {}",
            PLANE_SIZE, detail
        )));
    }
    Ok(PLANE_SIZE / detail)
}

/// Buckets both point sets into a shared `boxes_per_side` square grid.
/// Hits increment their cell, strikes decrement it; a single scan then
/// fixes the zero-seeded bounds. Point order never affects the result.
pub fn aggregate(hits: &[Point], strikes: &[Point], boxes_per_side: usize) -> HzResult<ZoneMap> {
    if boxes_per_side == 0 || boxes_per_side > PLANE_SIZE {
        return Err(HitZoneError::InvalidConfig(format!(
            "boxes_per_side must be in [1, {}], got {}",
            PLANE_SIZE, boxes_per_side
        )));
    }

    let cell_span = PLANE_SIZE / boxes_per_side;
    let mut cells = vec![vec![0i32; boxes_per_side]; boxes_per_side];

    for p in hits {
        let (row, col) = bucket_of(*p, cell_span, boxes_per_side)?;
        cells[row][col] += 1;
    }
    for p in strikes {
        let (row, col) = bucket_of(*p, cell_span, boxes_per_side)?;
        cells[row][col] -= 1;
    }

    let mut bounds = ScoreBounds::default();
    for row in &cells {
        for &score in row {
            if score > bounds.max {
                bounds.max = score;
            }
            if score < bounds.min {
                bounds.min = score;
            }
        }
    }

    Ok(ZoneMap {
        cells,
        bounds,
        boxes_per_side,
    })
}

fn bucket_of(p: Point, cell_span: usize, boxes_per_side: usize) -> HzResult<(usize, usize)> {
    if p.x as usize >= PLANE_SIZE || p.y as usize >= PLANE_SIZE {
        return Err(HitZoneError::OutOfRange(format!(
            "point ({}, {}) is outside the {}x{} plane",
            p.x, p.y, PLANE_SIZE, PLANE_SIZE
        )));
    }

    // When boxes_per_side does not divide the plane evenly the last
    // row/column is wider than nominal; the clamp keeps 95..=99 from
    // indexing past the grid.
    let col = (p.x as usize / cell_span).min(boxes_per_side - 1);
    let row = (p.y as usize / cell_span).min(boxes_per_side - 1);
    Ok((row, col))
}
