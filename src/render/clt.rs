use super::{text_box, Figure, RenderConfig, STEEL_BLUE, WHEAT};
use crate::clt::CltPanel;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

const COLUMNS: usize = 3;
const TITLE_HEIGHT: u32 = 60;

/// One histogram panel per sample size, three per row, under a shared title.
pub struct CltGridFigure<'a> {
    pub panels: &'a [CltPanel],
    pub experiments: usize,
    pub bounds: (f64, f64),
}

impl<'a> CltGridFigure<'a> {
    fn grid(&self) -> (usize, usize) {
        let cols = self.panels.len().clamp(1, COLUMNS);
        let rows = (self.panels.len() + cols - 1) / cols;
        (rows.max(1), cols)
    }
}

impl<'a> Figure for CltGridFigure<'a> {
    fn size(&self, config: &RenderConfig) -> (u32, u32) {
        let (rows, cols) = self.grid();
        let (w, h) = config.panel_size;
        (w * cols as u32, h * rows as u32 + TITLE_HEIGHT)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &RenderConfig,
    ) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let labels = config.locale;
        let (a, b) = self.bounds;
        root.fill(&WHITE)?;
        let body = root.titled(
            &labels.batch_title(a, b, self.experiments),
            config.font(26.0),
        )?;
        let areas = body.split_evenly(self.grid());
        for (panel, area) in self.panels.iter().zip(areas.iter()) {
            draw_panel(panel, area, config)?;
        }
        Ok(())
    }
}

fn draw_panel<DB: DrawingBackend>(
    panel: &CltPanel,
    area: &DrawingArea<DB, Shift>,
    config: &RenderConfig,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let labels = config.locale;
    let (x_lo, x_hi) = match (panel.histogram.bins.first(), panel.histogram.bins.last()) {
        (Some(first), Some(last)) => (first.lo, last.hi),
        _ => (panel.observed.min, panel.observed.max),
    };
    let curve_max = panel.curve.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    let y_max = panel.histogram.max_density().max(curve_max).max(1e-9) * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption(labels.sample_size_caption(panel.sample_size), config.font(20.0))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(labels.sample_mean())
        .y_desc(labels.density())
        .axis_desc_style(config.font(14.0))
        .label_style(config.font(11.0))
        .x_labels(6)
        .draw()?;

    chart
        .draw_series(panel.histogram.bins.iter().map(|bin| {
            Rectangle::new([(bin.lo, 0.0), (bin.hi, bin.density)], STEEL_BLUE.mix(0.7).filled())
        }))?
        .label(labels.means_histogram(None))
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 16, y + 5)], STEEL_BLUE.mix(0.7).filled()));
    chart.draw_series(
        panel
            .histogram
            .bins
            .iter()
            .map(|bin| Rectangle::new([(bin.lo, 0.0), (bin.hi, bin.density)], WHITE)),
    )?;

    chart
        .draw_series(LineSeries::new(panel.curve.iter().copied(), RED.stroke_width(2)))?
        .label(labels.normal_curve(panel.theoretical.mean(), panel.theoretical.std_dev()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(config.font(11.0))
        .draw()?;

    let lines = labels.comparison(
        panel.observed.mean,
        panel.theoretical.mean(),
        panel.observed.std_dev,
        panel.theoretical.std_dev(),
    );
    text_box(area, &lines, (80, 50), WHEAT, &config.font(11.0))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::clt::CltExperiment;
    use indicatif::ProgressBar;

    fn figure_for(sizes: Vec<usize>) -> (Vec<CltPanel>, usize) {
        let experiment = CltExperiment {
            sample_sizes: sizes,
            experiments: 20,
            ..Default::default()
        };
        (experiment.run(&ProgressBar::hidden()).unwrap(), 20)
    }

    #[test]
    fn test_grid_layout() {
        for (sizes, expected) in [
            (vec![1], (1, 1)),
            (vec![1, 2], (1, 2)),
            (vec![1, 2, 5], (1, 3)),
            (vec![1, 2, 5, 10], (2, 3)),
            (vec![1, 2, 5, 10, 30, 100], (2, 3)),
            (vec![1, 2, 3, 4, 5, 6, 7], (3, 3)),
        ] {
            let (panels, experiments) = figure_for(sizes);
            let figure = CltGridFigure {
                panels: &panels,
                experiments,
                bounds: (0.0, 1.0),
            };
            assert_eq!(figure.grid(), expected);
        }
    }

    #[test]
    fn test_size_grows_with_grid() {
        let (panels, experiments) = figure_for(vec![1, 2, 5, 10]);
        let figure = CltGridFigure {
            panels: &panels,
            experiments,
            bounds: (0.0, 1.0),
        };
        let config = RenderConfig::default();
        assert_eq!(figure.size(&config), (2100, 1260));
    }
}
