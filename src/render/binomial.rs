use super::{Figure, RenderConfig, STEEL_BLUE};
use crate::binomial::Binomial;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Bar chart of a binomial mass function.
pub struct BinomialFigure<'a> {
    pub binomial: &'a Binomial,
    pub table: &'a [(u64, f64)],
}

impl<'a> Figure for BinomialFigure<'a> {
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
        let n = self.binomial.n() as f64;
        let y_max = self
            .table
            .iter()
            .map(|(_, mass)| *mass)
            .fold(0.0f64, f64::max)
            .max(1e-12)
            * 1.1;

        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(root)
            .caption(
                config
                    .locale
                    .binomial_title(self.binomial.n(), self.binomial.p()),
                config.font(24.0),
            )
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5..n + 0.5, 0.0..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("k")
            .y_desc("P(X=k)")
            .axis_desc_style(config.font(16.0))
            .label_style(config.font(12.0))
            .draw()?;

        chart.draw_series(self.table.iter().map(|&(k, mass)| {
            let k = k as f64;
            Rectangle::new([(k - 0.4, 0.0), (k + 0.4, mass)], STEEL_BLUE.filled())
        }))?;
        Ok(())
    }
}
