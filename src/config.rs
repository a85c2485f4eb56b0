use crate::error::HzResult;
use crate::palette::{ColorScheme, Rgb};
use crate::render::{OverlayMode, RenderOptions};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ZoneParams {
    /// Grid fineness: a divisor of 100. Smaller values give more,
    /// smaller cells.
    #[arg(long, default_value_t = 5)]
    pub detail: usize,
}

#[derive(Args, Debug, Clone)]
pub struct RenderParams {
    #[arg(long, default_value_t = 24)]
    pub cell_px: u32,

    #[arg(long, default_value = "full")]
    pub overlay: OverlayMode,

    #[arg(long, default_value = "ff0000")]
    pub hit_color: String,

    #[arg(long, default_value = "0000ff")]
    pub strike_color: String,

    /// Optional JSON color scheme file; overrides the hex flags.
    #[arg(long)]
    pub scheme: Option<String>,
}

impl RenderParams {
    pub fn color_scheme(&self) -> HzResult<ColorScheme> {
        if let Some(path) = &self.scheme {
            return ColorScheme::load_from_file(path);
        }
        Ok(ColorScheme::new(
            Rgb::from_hex(&self.hit_color)?,
            Rgb::from_hex(&self.strike_color)?,
        ))
    }

    pub fn render_options(&self) -> HzResult<RenderOptions> {
        Ok(RenderOptions {
            cell_px: self.cell_px,
            overlay: self.overlay,
            scheme: self.color_scheme()?,
        })
    }
}
