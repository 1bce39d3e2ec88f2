use super::{clip_x, text_box, Figure, RenderConfig, LIGHT_YELLOW, ORANGE, STEEL_BLUE, WHEAT};
use crate::interactive::{SessionView, Snapshot};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// The current state of an interactive session: instructions while the
/// history is empty, the histogram of the sample means afterwards.
pub struct SessionFigure<'a> {
    pub view: &'a SessionView,
    pub bounds: (f64, f64),
}

impl<'a> Figure for SessionFigure<'a> {
    fn size(&self, config: &RenderConfig) -> (u32, u32) {
        config.size
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &RenderConfig,
    ) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let (a, b) = self.bounds;
        let sample_size = match self.view {
            SessionView::Empty { sample_size, .. } => *sample_size,
            SessionView::Accumulating(snapshot) => snapshot.sample_size,
        };
        root.fill(&WHITE)?;
        let body = root.titled(
            &config.locale.interactive_title(a, b, sample_size),
            config.font(24.0),
        )?;
        match self.view {
            SessionView::Empty {
                sample_size,
                samples_per_click,
            } => {
                let lines = config
                    .locale
                    .placeholder(a, b, *sample_size, *samples_per_click);
                draw_placeholder(&body, &lines, config)
            }
            SessionView::Accumulating(snapshot) => draw_snapshot(&body, snapshot, config),
        }
    }
}

fn draw_placeholder<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lines: &[String],
    config: &RenderConfig,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (w, h) = area.dim_in_pixel();
    let style = config
        .font(20.0)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let line_height = 30;
    let box_height = line_height * lines.len() as i32 + 40;
    let (cx, cy) = (w as i32 / 2, h as i32 / 2);
    area.draw(&Rectangle::new(
        [(cx - 300, cy - box_height / 2), (cx + 300, cy + box_height / 2)],
        LIGHT_YELLOW.mix(0.8).filled(),
    ))?;
    let top = cy - (line_height * (lines.len() as i32 - 1)) / 2;
    for (i, line) in lines.iter().enumerate() {
        area.draw_text(line, &style, (cx, top + i as i32 * line_height))?;
    }
    Ok(())
}

/// The parts of a snapshot that fall in its x-range, with bars cut at the
/// range boundaries, and the height of the y axis.
#[derive(Debug, Clone, PartialEq)]
struct SnapshotLayout {
    x_lo: f64,
    x_hi: f64,
    /// `(lo, hi, density)` of each visible bar
    bars: Vec<(f64, f64, f64)>,
    curve: Vec<(f64, f64)>,
    y_max: f64,
}

impl SnapshotLayout {
    fn of(snapshot: &Snapshot) -> Self {
        let x_lo = snapshot.x_range.start;
        let x_hi = snapshot.x_range.end;
        let curve = clip_x(&snapshot.curve, x_lo, x_hi);
        let bars: Vec<(f64, f64, f64)> = snapshot
            .histogram
            .bins
            .iter()
            .filter(|bin| bin.hi > x_lo && bin.lo < x_hi)
            .map(|bin| (bin.lo.max(x_lo), bin.hi.min(x_hi), bin.density))
            .collect();
        let y_max = bars
            .iter()
            .map(|(_, _, d)| *d)
            .chain(curve.iter().map(|(_, y)| *y))
            .fold(0.0, f64::max)
            .max(1e-9)
            * 1.15;
        Self {
            x_lo,
            x_hi,
            bars,
            curve,
            y_max,
        }
    }
}

fn draw_snapshot<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    snapshot: &Snapshot,
    config: &RenderConfig,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let labels = config.locale;
    let SnapshotLayout {
        x_lo,
        x_hi,
        bars,
        curve,
        y_max,
    } = SnapshotLayout::of(snapshot);

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(labels.sample_mean())
        .y_desc(labels.density())
        .axis_desc_style(config.font(16.0))
        .label_style(config.font(12.0))
        .draw()?;

    chart
        .draw_series(bars.iter().map(|&(lo, hi, density)| {
            Rectangle::new([(lo, 0.0), (hi, density)], STEEL_BLUE.mix(0.7).filled())
        }))?
        .label(labels.means_histogram(Some(snapshot.observed.count)))
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 16, y + 5)], STEEL_BLUE.mix(0.7).filled()));
    chart.draw_series(
        bars.iter()
            .map(|&(lo, hi, density)| Rectangle::new([(lo, 0.0), (hi, density)], WHITE)),
    )?;

    chart
        .draw_series(LineSeries::new(curve, RED.stroke_width(3)))?
        .label(labels.normal_curve(snapshot.theoretical.mean(), snapshot.theoretical.std_dev()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(3)));

    let m = snapshot.observed.mean;
    if m >= x_lo && m <= x_hi {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(m, 0.0), (m, y_max)],
                ORANGE.stroke_width(2),
            )))?
            .label(labels.mean_marker(m))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], ORANGE.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(config.font(14.0))
        .draw()?;

    let mut lines = labels.session_counts(snapshot.observed.count, snapshot.sample_size);
    lines.extend(labels.comparison(
        snapshot.observed.mean,
        snapshot.theoretical.mean(),
        snapshot.observed.std_dev,
        snapshot.theoretical.std_dev(),
    ));
    text_box(area, &lines, (90, 30), WHEAT, &config.font(14.0))?;
    Ok(())
}
