use crate::error::{HitZoneError, HzResult};
use crate::zone::ScoreBounds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const HIT_RED: Rgb = Rgb::new(255, 0, 0);
pub const STRIKE_BLUE: Rgb = Rgb::new(0, 0, 255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `"rrggbb"` or `"#rrggbb"`.
    pub fn from_hex(s: &str) -> HzResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(HitZoneError::Parse(format!(
                "color '{}' is not a 6-digit hex code",
                s
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| HitZoneError::Parse(format!("color '{}' has a non-hex digit", s)))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Weighted channel average of two colors. Weights are normalized by
/// their sum, so `blend_weighted(a, 1.0, b, 3.0)` is one part `a` to
/// three parts `b`. Equal zero weights fall back to an even split.
pub fn blend_weighted(c1: Rgb, i1: f32, c2: Rgb, i2: f32) -> Rgb {
    let total = i1 + i2;
    let (w1, w2) = if total > 0.0 {
        (i1 / total, i2 / total)
    } else {
        (0.5, 0.5)
    };
    let mix = |a: u8, b: u8| (a as f32 * w1 + b as f32 * w2).round() as u8;
    Rgb::new(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b))
}

/// Even 50/50 blend.
pub fn blend(c1: Rgb, c2: Rgb) -> Rgb {
    blend_weighted(c1, 0.5, c2, 0.5)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub hit: Rgb,
    pub strike: Rgb,
    pub neutral: Rgb,
}

#[derive(Debug, Deserialize)]
struct SchemeFile {
    hit: String,
    strike: String,
    neutral: Option<String>,
}

impl ColorScheme {
    /// Neutral defaults to the even blend of the two poles.
    pub fn new(hit: Rgb, strike: Rgb) -> Self {
        Self {
            hit,
            strike,
            neutral: blend(hit, strike),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HzResult<Self> {
        let content = fs::read_to_string(path)?;
        let raw: SchemeFile = serde_json::from_str(&content)?;
        let hit = Rgb::from_hex(&raw.hit)?;
        let strike = Rgb::from_hex(&raw.strike)?;
        let neutral = match raw.neutral {
            Some(hex) => Rgb::from_hex(&hex)?,
            None => blend(hit, strike),
        };
        Ok(Self {
            hit,
            strike,
            neutral,
        })
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new(HIT_RED, STRIKE_BLUE)
    }
}

/// Shades one cell score. Hit-dominant cells pull the hit color toward
/// neutral with intensity `score / max`; strike-dominant cells mirror
/// that against `min`. A zero score is exactly neutral.
pub fn cell_color(score: i32, bounds: ScoreBounds, scheme: &ColorScheme) -> Rgb {
    if score > 0 {
        let intensity = score as f32 / bounds.max as f32;
        blend_weighted(scheme.hit, intensity, scheme.neutral, 1.0 - intensity)
    } else if score < 0 {
        let intensity = score.unsigned_abs() as f32 / bounds.min.unsigned_abs() as f32;
        blend_weighted(scheme.strike, intensity, scheme.neutral, 1.0 - intensity)
    } else {
        scheme.neutral
    }
}
