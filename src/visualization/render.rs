//! SVG rendering of the three standard plots.
//!
//! Every function opens its own backend for one file and presents it before returning, so no
//! plotting state outlives a call.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{DataError, DataResult};

use super::stats::{BoxStats, CorrelationMatrix, HistogramBin};

const FONT: &str = "sans-serif";

// Qualitative palette for boxes.
const SET2: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

/// Diverging blue → grey → red color for a correlation in `[-1, 1]`; `NaN` is light grey.
pub fn coolwarm(r: f64) -> RGBColor {
    if r.is_nan() {
        return RGBColor(240, 240, 240);
    }
    let blue = (59.0, 76.0, 192.0);
    let mid = (221.0, 221.0, 221.0);
    let red = (180.0, 4.0, 38.0);

    let t = (r.clamp(-1.0, 1.0) + 1.0) / 2.0;
    let (from, to, f) = if t < 0.5 { (blue, mid, t * 2.0) } else { (mid, red, (t - 0.5) * 2.0) };
    let lerp = |a: f64, b: f64| (a + (b - a) * f).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Correlation heatmap with every cell annotated to two decimals.
pub fn render_heatmap(matrix: &CorrelationMatrix, path: &Path, size: (u32, u32)) -> DataResult<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(DataError::plot)?;
    let area = root
        .titled("Correlation Heatmap", (FONT, 24))
        .map_err(DataError::plot)?;

    if matrix.is_empty() {
        area.draw(&Text::new("no numeric columns", (20, 20), (FONT, 16)))
            .map_err(DataError::plot)?;
        return root.present().map_err(DataError::plot);
    }

    let n = matrix.len() as i32;
    let (w, h) = area.dim_in_pixel();
    let (label_w, label_h) = (120_i32, 30_i32);
    let cell_w = ((w as i32 - label_w) / n).max(1);
    let cell_h = ((h as i32 - label_h) / n).max(1);

    let centered = TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
    let row_label = TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    let col_label = TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Top));

    for (i, row) in matrix.values.iter().enumerate() {
        let y0 = i as i32 * cell_h;
        area.draw(&Text::new(
            matrix.columns[i].clone(),
            (5, y0 + cell_h / 2),
            row_label.clone(),
        ))
        .map_err(DataError::plot)?;

        for (j, &r) in row.iter().enumerate() {
            let x0 = label_w + j as i32 * cell_w;
            area.draw(&Rectangle::new(
                [(x0, y0), (x0 + cell_w, y0 + cell_h)],
                coolwarm(r).filled(),
            ))
            .map_err(DataError::plot)?;
            area.draw(&Rectangle::new(
                [(x0, y0), (x0 + cell_w, y0 + cell_h)],
                WHITE.stroke_width(1),
            ))
            .map_err(DataError::plot)?;
            area.draw(&Text::new(
                format!("{r:.2}"),
                (x0 + cell_w / 2, y0 + cell_h / 2),
                centered.clone(),
            ))
            .map_err(DataError::plot)?;
        }
    }

    for (j, name) in matrix.columns.iter().enumerate() {
        let x = label_w + j as i32 * cell_w + cell_w / 2;
        area.draw(&Text::new(name.clone(), (x, n * cell_h + 5), col_label.clone()))
            .map_err(DataError::plot)?;
    }

    root.present().map_err(DataError::plot)
}

/// Grid of histograms, one panel per named series.
pub fn render_histograms(
    series: &[(String, Vec<HistogramBin>)],
    path: &Path,
    size: (u32, u32),
) -> DataResult<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(DataError::plot)?;
    let area = root
        .titled("Histograms of Numerical Features", (FONT, 24))
        .map_err(DataError::plot)?;

    if series.is_empty() {
        area.draw(&Text::new("no numeric columns", (20, 20), (FONT, 16)))
            .map_err(DataError::plot)?;
        return root.present().map_err(DataError::plot);
    }

    let cols = (series.len() as f64).sqrt().ceil() as usize;
    let rows = series.len().div_ceil(cols);
    let panels = area.split_evenly((rows, cols));

    for ((name, bins), panel) in series.iter().zip(panels.iter()) {
        let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
            panel
                .titled(name, (FONT, 14))
                .map_err(DataError::plot)?;
            continue;
        };
        let y_max = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;

        let mut chart = ChartBuilder::on(panel)
            .caption(name, (FONT, 14))
            .margin(5)
            .x_label_area_size(20)
            .y_label_area_size(30)
            .build_cartesian_2d(first.lower..last.upper, 0f64..y_max * 1.05)
            .map_err(DataError::plot)?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(5)
            .y_labels(5)
            .draw()
            .map_err(DataError::plot)?;
        chart
            .draw_series(bins.iter().map(|b| {
                Rectangle::new([(b.lower, 0.0), (b.upper, b.count as f64)], BLUE.mix(0.6).filled())
            }))
            .map_err(DataError::plot)?;
    }

    root.present().map_err(DataError::plot)
}

/// Horizontal boxplot, one box per named series, top to bottom in input order.
pub fn render_boxplot(series: &[(String, BoxStats)], path: &Path, size: (u32, u32)) -> DataResult<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(DataError::plot)?;
    let area = root
        .titled("Boxplot of Numerical Features", (FONT, 24))
        .map_err(DataError::plot)?;

    if series.is_empty() {
        area.draw(&Text::new("no numeric columns", (20, 20), (FONT, 16)))
            .map_err(DataError::plot)?;
        return root.present().map_err(DataError::plot);
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (_, s) in series {
        let lo = s.outliers.first().copied().unwrap_or(s.lower_whisker).min(s.lower_whisker);
        let hi = s.outliers.last().copied().unwrap_or(s.upper_whisker).max(s.upper_whisker);
        x_min = x_min.min(lo);
        x_max = x_max.max(hi);
    }
    let pad = if x_max > x_min { (x_max - x_min) * 0.05 } else { 0.5 };
    let (x_min, x_max) = (x_min - pad, x_max + pad);
    let n = series.len() as f64;

    let mut chart = ChartBuilder::on(&area)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(10)
        .build_cartesian_2d(x_min..x_max, 0f64..n)
        .map_err(DataError::plot)?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .draw()
        .map_err(DataError::plot)?;

    let label_style = TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Left, VPos::Bottom));
    for (i, (name, s)) in series.iter().enumerate() {
        // First series at the top.
        let y = n - 1.0 - i as f64;
        let (y_lo, y_mid, y_hi) = (y + 0.2, y + 0.5, y + 0.8);
        let color = SET2[i % SET2.len()];

        chart
            .draw_series(std::iter::once(Rectangle::new([(s.q1, y_lo), (s.q3, y_hi)], color.filled())))
            .map_err(DataError::plot)?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(s.q1, y_lo), (s.q3, y_hi)],
                BLACK.stroke_width(1),
            )))
            .map_err(DataError::plot)?;

        let segments = vec![
            vec![(s.median, y_lo), (s.median, y_hi)],
            vec![(s.lower_whisker, y_mid), (s.q1, y_mid)],
            vec![(s.q3, y_mid), (s.upper_whisker, y_mid)],
            vec![(s.lower_whisker, y + 0.35), (s.lower_whisker, y + 0.65)],
            vec![(s.upper_whisker, y + 0.35), (s.upper_whisker, y + 0.65)],
        ];
        chart
            .draw_series(segments.into_iter().map(|pts| PathElement::new(pts, BLACK.stroke_width(1))))
            .map_err(DataError::plot)?;
        chart
            .draw_series(s.outliers.iter().map(|&x| Circle::new((x, y_mid), 3, BLACK.filled())))
            .map_err(DataError::plot)?;
        chart
            .draw_series(std::iter::once(Text::new(name.clone(), (x_min, y_hi + 0.15), label_style.clone())))
            .map_err(DataError::plot)?;
    }

    root.present().map_err(DataError::plot)
}

#[cfg(test)]
mod tests {
    use super::coolwarm;

    fn rgb(r: f64) -> (u8, u8, u8) {
        let c = coolwarm(r);
        (c.0, c.1, c.2)
    }

    #[test]
    fn coolwarm_endpoints() {
        assert_eq!(rgb(-1.0), (59, 76, 192));
        assert_eq!(rgb(0.0), (221, 221, 221));
        assert_eq!(rgb(1.0), (180, 4, 38));
        assert_eq!(rgb(f64::NAN), (240, 240, 240));
    }
}
