use crate::error::HzResult;
use crate::palette::{self, ColorScheme, Rgb};
use crate::zone::ZoneMap;
use image::RgbImage;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::info;

/// Which gradient passes get composited over the flat cell colors.
/// `corners` blends toward the four diagonal neighbors, `edges` toward
/// the four orthogonal ones, `full` layers both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OverlayMode {
    None,
    Corners,
    Edges,
    Full,
}

impl OverlayMode {
    fn corners(self) -> bool {
        matches!(self, Self::Corners | Self::Full)
    }

    fn edges(self) -> bool {
        matches!(self, Self::Edges | Self::Full)
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub cell_px: u32,
    pub overlay: OverlayMode,
    pub scheme: ColorScheme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_px: 24,
            overlay: OverlayMode::Full,
            scheme: ColorScheme::default(),
        }
    }
}

/// Flat per-cell colors, same row/col layout as the map.
pub fn color_grid(map: &ZoneMap, scheme: &ColorScheme) -> Vec<Vec<Rgb>> {
    map.cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|&score| palette::cell_color(score, map.bounds, scheme))
                .collect()
        })
        .collect()
}

// Diagonal then orthogonal neighbor offsets, both in (dx, dy) order
// starting top-left/top and continuing clockwise.
const CORNER_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];
const EDGE_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

pub fn render(map: &ZoneMap, opts: &RenderOptions) -> RgbImage {
    let n = map.boxes_per_side;
    let s = opts.cell_px;
    let colors = color_grid(map, &opts.scheme);
    let mut img = RgbImage::new(n as u32 * s, n as u32 * s);

    for row in 0..n {
        for col in 0..n {
            let base = colors[row][col];
            let corner_mix = CORNER_OFFSETS.map(|(dx, dy)| corner_blend(&colors, row, col, dx, dy));
            let edge_mix = EDGE_OFFSETS.map(|(dx, dy)| edge_blend(&colors, row, col, dx, dy));

            for py in 0..s {
                for px in 0..s {
                    let fx = (px as f32 + 0.5) / s as f32;
                    let fy = (py as f32 + 0.5) / s as f32;

                    let mut color = base;
                    if opts.overlay.corners() {
                        let (j, t) = corner_position(fx, fy);
                        color = grade(corner_mix[j], color, t, 0.2);
                    }
                    if opts.overlay.edges() {
                        let (j, t) = edge_position(fx, fy);
                        color = grade(edge_mix[j], color, t, 0.5);
                    }

                    img.put_pixel(
                        col as u32 * s + px,
                        row as u32 * s + py,
                        image::Rgb([color.r, color.g, color.b]),
                    );
                }
            }
        }
    }

    img
}

pub fn render_to_file<P: AsRef<Path>>(map: &ZoneMap, opts: &RenderOptions, path: P) -> HzResult<()> {
    let img = render(map, opts);
    img.save(path.as_ref())?;
    info!(
        "🖼️  Wrote {} ({} px, {} cells per side)",
        path.as_ref().display(),
        img.width(),
        map.boxes_per_side
    );
    Ok(())
}

/// Clamps a neighbor offset component to the cell itself when it would
/// leave the grid.
fn offset(n: usize, base: usize, d: i32) -> usize {
    let target = base as i32 + d;
    if target < 0 || target >= n as i32 {
        base
    } else {
        target as usize
    }
}

/// Compound target color toward a diagonal neighbor: the blend of
/// (self + diagonal) with (horizontal + vertical neighbor).
fn corner_blend(colors: &[Vec<Rgb>], row: usize, col: usize, dx: i32, dy: i32) -> Rgb {
    let n = colors.len();
    let base = colors[row][col];
    let diag = colors[offset(n, row, dy)][offset(n, col, dx)];
    let horiz = colors[row][offset(n, col, dx)];
    let vert = colors[offset(n, row, dy)][col];
    palette::blend(palette::blend(base, diag), palette::blend(horiz, vert))
}

fn edge_blend(colors: &[Vec<Rgb>], row: usize, col: usize, dx: i32, dy: i32) -> Rgb {
    let n = colors.len();
    let base = colors[row][col];
    palette::blend(base, colors[offset(n, row, dy)][offset(n, col, dx)])
}

/// Quadrant index (matching CORNER_OFFSETS order) and the gradient
/// position for a pixel: 0 at the cell corner, 1 at the cell center,
/// constant along 45-degree lines.
fn corner_position(fx: f32, fy: f32) -> (usize, f32) {
    let right = fx >= 0.5;
    let bottom = fy >= 0.5;
    let j = match (right, bottom) {
        (false, false) => 0,
        (true, false) => 1,
        (true, true) => 2,
        (false, true) => 3,
    };
    let cx = if right { 1.0 } else { 0.0 };
    let cy = if bottom { 1.0 } else { 0.0 };
    let t = (fx - cx).abs() + (fy - cy).abs();
    (j, t)
}

/// Triangle index (matching EDGE_OFFSETS order) and gradient position:
/// 0 at the nearest cell edge, 1 at the center.
fn edge_position(fx: f32, fy: f32) -> (usize, f32) {
    let dists = [fy, 1.0 - fx, 1.0 - fy, fx];
    let mut j = 0;
    for (i, &d) in dists.iter().enumerate() {
        if d < dists[j] {
            j = i;
        }
    }
    (j, 2.0 * dists[j])
}

/// Linear gradient sample: holds `from` until `stop`, then fades into
/// `to` at position 1.
fn grade(from: Rgb, to: Rgb, t: f32, stop: f32) -> Rgb {
    if t <= stop {
        from
    } else {
        let k = (t - stop) / (1.0 - stop);
        palette::blend_weighted(to, k, from, 1.0 - k)
    }
}
