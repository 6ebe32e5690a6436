//! Client-rendered charts for the numeric comparison series.
//!
//! The backend remains the sole source of rendered chart images; those
//! arrive as base64 blobs and are displayed untouched. Only the series
//! the backend returns in numeric form are drawn here, into an
//! in-memory SVG string that the views inject directly.

use anyhow::{anyhow, Result};
use contracts::sales::breakdown::ProductSalesSeries;
use plotters::prelude::*;

use crate::shared::series::align_values;

const CHART_SIZE: (u32, u32) = (720, 360);

/// Palette matching the backend-rendered product charts.
const PRODUCT_COLORS: [RGBColor; 4] = [
    RGBColor(75, 192, 192),
    RGBColor(153, 102, 255),
    RGBColor(255, 159, 64),
    RGBColor(255, 99, 132),
];

pub const CURRENT_COLOR: RGBColor = RGBColor(54, 162, 235);
pub const PREVIOUS_COLOR: RGBColor = RGBColor(255, 99, 132);
pub const TOTAL_COLOR: RGBColor = RGBColor(75, 192, 192);

/// One bar series: a legend name and one value per label.
pub struct BarSeries {
    pub name: &'static str,
    pub color: RGBColor,
    pub values: Vec<f64>,
}

/// Builds the four product bar series, each aligned to `len` labels.
pub fn product_series(len: usize, sales: &ProductSalesSeries) -> Vec<BarSeries> {
    sales
        .products()
        .into_iter()
        .zip(PRODUCT_COLORS)
        .map(|((name, values), color)| BarSeries {
            name,
            color,
            values: align_values(len, values),
        })
        .collect()
}

/// Simple categorical bar chart; every bar carries its own color.
pub fn bar_svg(title: &str, bars: &[(String, f64, RGBColor)]) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("failed to fill chart background: {e}"))?;

        let labels: Vec<String> = bars.iter().map(|(label, _, _)| label.clone()).collect();
        let y_max = headroom(bars.iter().map(|(_, value, _)| *value));
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(12)
            .x_label_area_size(32)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0..bars.len().max(1) as f64, 0.0..y_max)
            .map_err(|e| anyhow!("failed to build chart: {e}"))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars.len().max(1))
            .x_label_formatter(&|x| label_at(&labels, *x))
            .y_desc("Total Sales")
            .draw()
            .map_err(|e| anyhow!("failed to draw chart mesh: {e}"))?;

        chart
            .draw_series(bars.iter().enumerate().map(|(i, (_, value, color))| {
                Rectangle::new(
                    [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, *value)],
                    color.filled(),
                )
            }))
            .map_err(|e| anyhow!("failed to draw bars: {e}"))?;

        root.present()
            .map_err(|e| anyhow!("failed to finalize chart: {e}"))?;
    }
    Ok(svg)
}

/// Grouped bar chart: one bar per series within each label slot.
pub fn grouped_bar_svg(title: &str, labels: &[String], series: &[BarSeries]) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("failed to fill chart background: {e}"))?;

        let groups = labels.len().max(1);
        let y_max = headroom(series.iter().flat_map(|s| s.values.iter().copied()));
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(12)
            .x_label_area_size(32)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0..groups as f64, 0.0..y_max)
            .map_err(|e| anyhow!("failed to build chart: {e}"))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(groups)
            .x_label_formatter(&|x| label_at(labels, *x))
            .y_desc("Sales ($)")
            .draw()
            .map_err(|e| anyhow!("failed to draw chart mesh: {e}"))?;

        let slot = 0.8 / series.len().max(1) as f64;
        for (index, s) in series.iter().enumerate() {
            let color = s.color;
            chart
                .draw_series(s.values.iter().take(groups).enumerate().map(
                    |(group, value)| {
                        let left = group as f64 + 0.1 + index as f64 * slot;
                        Rectangle::new(
                            [(left, 0.0), (left + slot * 0.9, *value)],
                            color.filled(),
                        )
                    },
                ))
                .map_err(|e| anyhow!("failed to draw bars: {e}"))?
                .label(s.name)
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 4), (x + 10, y + 4)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .draw()
            .map_err(|e| anyhow!("failed to draw chart legend: {e}"))?;

        root.present()
            .map_err(|e| anyhow!("failed to finalize chart: {e}"))?;
    }
    Ok(svg)
}

/// Line chart of one series over the given labels.
pub fn line_svg(title: &str, labels: &[String], values: &[f64]) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("failed to fill chart background: {e}"))?;

        let points = labels.len().max(1);
        let aligned = align_values(labels.len(), values);
        let y_max = headroom(aligned.iter().copied());
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(12)
            .x_label_area_size(32)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0..points as f64, 0.0..y_max)
            .map_err(|e| anyhow!("failed to build chart: {e}"))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(points)
            .x_label_formatter(&|x| label_at(labels, *x))
            .y_desc("Total Sales")
            .draw()
            .map_err(|e| anyhow!("failed to draw chart mesh: {e}"))?;

        chart
            .draw_series(LineSeries::new(
                aligned
                    .iter()
                    .enumerate()
                    .map(|(i, value)| (i as f64 + 0.5, *value)),
                &TOTAL_COLOR,
            ))
            .map_err(|e| anyhow!("failed to draw line: {e}"))?
            .label("Total Sales")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], &TOTAL_COLOR));

        chart
            .draw_series(
                aligned
                    .iter()
                    .enumerate()
                    .map(|(i, value)| Circle::new((i as f64 + 0.5, *value), 3, TOTAL_COLOR.filled())),
            )
            .map_err(|e| anyhow!("failed to draw markers: {e}"))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .draw()
            .map_err(|e| anyhow!("failed to draw chart legend: {e}"))?;

        root.present()
            .map_err(|e| anyhow!("failed to finalize chart: {e}"))?;
    }
    Ok(svg)
}

fn label_at(labels: &[String], x: f64) -> String {
    if x < 0.0 {
        return String::new();
    }
    labels.get(x.floor() as usize).cloned().unwrap_or_default()
}

fn headroom(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.15
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_pair_bar_chart() {
        let bars = vec![
            ("Current Month".to_string(), 1234.5, CURRENT_COLOR),
            ("Previous Month".to_string(), 987.0, PREVIOUS_COLOR),
        ];
        let svg = bar_svg("Sales Comparison", &bars).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("rect"));
    }

    #[test]
    fn renders_grouped_bars_from_uneven_series() {
        let sales = ProductSalesSeries {
            product_1: vec![10.0, 20.0, 30.0],
            product_2: vec![1.0],
            ..Default::default()
        };
        let labels: Vec<String> = ["Month 7", "Month 8", "Month 9"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let series = product_series(labels.len(), &sales);
        assert!(series.iter().all(|s| s.values.len() == 3));

        let svg = grouped_bar_svg("Monthly Sales Comparison", &labels, &series).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn renders_a_line_even_when_values_are_short() {
        let labels: Vec<String> = ["July 2011", "August 2011"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let svg = line_svg("Total Sales", &labels, &[42.0]).unwrap();
        assert!(svg.contains("polyline"));
    }

    #[test]
    fn empty_input_still_renders_a_frame() {
        let svg = bar_svg("Sales Comparison", &[]).unwrap();
        assert!(svg.contains("<svg"));
    }
}
