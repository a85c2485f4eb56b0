use crate::error::{HitZoneError, HzResult};
use crate::zone::Point;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Raw per-axis samples as they appear in the source file, before any
/// rescaling. Both vectors always have the same length.
#[derive(Debug)]
pub struct RawSamples {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl RawSamples {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Parses a two-column `<x>,<y>` CSV. The first record is a header and is
/// skipped; records with fewer than two fields are skipped silently.
pub fn read_samples<P: AsRef<Path>>(path: P) -> HzResult<RawSamples> {
    let file = File::open(path.as_ref())?;
    read_samples_from_reader(file)
}

pub fn read_samples_from_reader<R: Read>(reader: R) -> HzResult<RawSamples> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut skipped = 0;

    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let x = parse_field(rec[0].trim(), idx)?;
        let y = parse_field(rec[1].trim(), idx)?;
        xs.push(x);
        ys.push(y);
    }

    if skipped > 0 {
        debug!("Skipped {} short rows", skipped);
    }

    Ok(RawSamples { xs, ys })
}

fn parse_field(field: &str, idx: usize) -> HzResult<f64> {
    field.parse::<f64>().map_err(|_| {
        // Row numbering is 1-based and counts the header line.
        HitZoneError::Parse(format!("row {}: invalid number '{}'", idx + 2, field))
    })
}

/// Rescales each axis independently into [0, 99] and truncates to integer
/// coordinates.
///
/// The remap is `((v + |min|) / (|min| + max)) * 99`, a min-shifted
/// normalization rather than a min-max span. Output parity with the
/// original data files depends on this exact formula.
pub fn normalize(samples: &RawSamples) -> HzResult<Vec<Point>> {
    if samples.is_empty() {
        return Err(HitZoneError::Parse("no data rows".to_string()));
    }

    let (min_x, max_x) = axis_range(&samples.xs);
    let (min_y, max_y) = axis_range(&samples.ys);

    let span_x = min_x.abs() + max_x;
    let span_y = min_y.abs() + max_y;
    if span_x == 0.0 {
        return Err(HitZoneError::DegenerateRange(format!(
            "x axis spans nothing (min {}, max {})",
            min_x, max_x
        )));
    }
    if span_y == 0.0 {
        return Err(HitZoneError::DegenerateRange(format!(
            "y axis spans nothing (min {}, max {})",
            min_y, max_y
        )));
    }

    let points = samples
        .xs
        .iter()
        .zip(samples.ys.iter())
        .map(|(&x, &y)| {
            let nx = ((x + min_x.abs()) / span_x) * 99.0;
            let ny = ((y + min_y.abs()) / span_y) * 99.0;
            Point::new(nx as u8, ny as u8)
        })
        .collect();

    Ok(points)
}

fn axis_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

/// Convenience wrapper: open, parse and normalize a coordinate file.
pub fn load_points<P: AsRef<Path>>(path: P) -> HzResult<Vec<Point>> {
    let samples = read_samples(path.as_ref())?;
    let points = normalize(&samples)?;
    info!(
        "📂 Loaded {} points from {}",
        points.len(),
        path.as_ref().display()
    );
    Ok(points)
}
