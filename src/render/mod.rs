//// # Rendering
////
//// Every figure implements [`Figure`], drawing itself on a `plotters`
//// drawing area. [`save`] picks the backend from the file extension, so the
//// same figure can be written as a PNG or as an SVG.
////
//// Fonts and languages are part of [`RenderConfig`], which is passed down
//// explicitly to each figure: nothing here touches global state.

mod binomial;
mod clt;
mod labels;
mod session;

pub use binomial::BinomialFigure;
pub use clt::CltGridFigure;
pub use labels::Locale;
pub use session::SessionFigure;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const WHEAT: RGBColor = RGBColor(245, 222, 179);
pub const LIGHT_YELLOW: RGBColor = RGBColor(255, 255, 224);

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub locale: Locale,
    pub font_family: String,
    /// Size in pixels of single-chart figures.
    pub size: (u32, u32),
    /// Size in pixels of each panel of a grid figure.
    pub panel_size: (u32, u32),
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl RenderConfig {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            font_family: locale.font_family().to_string(),
            size: (1200, 800),
            panel_size: (700, 600),
        }
    }

    pub fn font(&self, size: f64) -> TextStyle<'_> {
        TextStyle::from((self.font_family.as_str(), size).into_font())
    }
}

pub trait Figure {
    fn size(&self, config: &RenderConfig) -> (u32, u32);

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &RenderConfig,
    ) -> Result<()>
    where
        DB::ErrorType: 'static;
}

/// Renders `figure` to `path`, as SVG if the extension is `.svg` and as a
/// bitmap otherwise.
pub fn save<F: Figure, P: AsRef<Path>>(figure: &F, path: P, config: &RenderConfig) -> Result<()> {
    let path = path.as_ref();
    let size = figure.size(config);
    let is_svg = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        figure.draw(&root, config)?;
        root.present().with_context(|| format!("writing {:?}", path))?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        figure.draw(&root, config)?;
        root.present().with_context(|| format!("writing {:?}", path))?;
    }
    log::debug!("Figure written to {:?}", path);
    Ok(())
}

/// Draws `lines` top-aligned at `(x, y)` over a filled box.
pub(crate) fn text_box<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lines: &[String],
    (x, y): (i32, i32),
    background: RGBColor,
    style: &TextStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let line_height = style.font.get_size() as i32 + 4;
    let mut width = 0;
    for line in lines {
        let (w, _) = area.estimate_text_size(line, style)?;
        width = width.max(w as i32);
    }
    let height = line_height * lines.len() as i32;
    area.draw(&Rectangle::new(
        [(x - 6, y - 6), (x + width + 6, y + height + 2)],
        background.mix(0.8).filled(),
    ))?;
    area.draw(&Rectangle::new(
        [(x - 6, y - 6), (x + width + 6, y + height + 2)],
        BLACK.mix(0.3),
    ))?;
    for (i, line) in lines.iter().enumerate() {
        area.draw_text(line, style, (x, y + i as i32 * line_height))?;
    }
    Ok(())
}

/// Restricts a polyline to the abscissas in `[lo, hi]`.
pub(crate) fn clip_x(points: &[(f64, f64)], lo: f64, hi: f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|(x, _)| *x >= lo && *x <= hi)
        .collect()
}
