use crate::error::HzResult;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes a demo coordinate CSV with `count` random samples.
///
/// Samples mimic plate-tracking data: x is horizontal offset from the
/// plate center in feet (can be negative), y is height above the ground.
/// Negative x values matter because they exercise the min-shifted
/// normalization path.
pub fn write_demo_csv<P: AsRef<Path>>(path: P, count: usize, rng: &mut fastrand::Rng) -> HzResult<()> {
    let mut out = String::from("x,y\n");
    for _ in 0..count {
        let x = rng.f64() * 3.0 - 1.5;
        let y = rng.f64() * 3.0 + 1.0;
        let _ = writeln!(out, "{:.2},{:.2}", x, y);
    }

    fs::write(path.as_ref(), out)?;
    info!("💾 Wrote {} samples to {}", count, path.as_ref().display());
    Ok(())
}
