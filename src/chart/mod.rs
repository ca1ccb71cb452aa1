//! Trend chart rendering: daily volume as a line chart on a PNG raster,
//! base64-encoded for embedding in JSON responses.

pub mod draw;
pub mod font;

use std::io::Cursor;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose;
use image::ImageFormat;
use image::RgbImage;

use self::draw::draw_horizontal_line;
use self::draw::draw_marker;
use self::draw::draw_thick_line;
use self::draw::draw_vertical_line;
use self::draw::fill_rect;
use self::font::draw_text;
use self::font::text_height;
use self::font::text_width;
use crate::Result;
use crate::config::ChartConfig;
use crate::constants::CHART_SERIES_LABEL;
use crate::constants::CHART_TITLE;
use crate::constants::CHART_X_LABEL;
use crate::constants::CHART_Y_LABEL;
use crate::err_with_loc;
use crate::error::ChartError;
use crate::model::TrendSeries;
use crate::utils::compact_number;

pub mod colors {
    use image::Rgb;

    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    pub const DARK_GRAY: Rgb<u8> = Rgb([60, 60, 60]);
    pub const LIGHT_GRAY: Rgb<u8> = Rgb([225, 225, 225]);
    pub const BLUE: Rgb<u8> = Rgb([31, 119, 180]);
}

const MARGIN_LEFT: u32 = 80;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 56;
const MARGIN_BOTTOM: u32 = 56;
const GRID_LINES: u32 = 4;

#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: i64,
    right: i64,
    top: i64,
    bottom: i64,
}

impl PlotArea {
    // Unvalidated configs smaller than the margins still get a 1px plot
    fn new(config: &ChartConfig) -> Self {
        let left = MARGIN_LEFT as i64;
        let top = MARGIN_TOP as i64;
        Self {
            left,
            right: (config.width as i64 - MARGIN_RIGHT as i64).max(left + 1),
            top,
            bottom: (config.height as i64 - MARGIN_BOTTOM as i64).max(top + 1),
        }
    }

    fn width(&self) -> i64 { self.right - self.left }

    fn height(&self) -> i64 { self.bottom - self.top }
}

/// Renders the series and returns PNG bytes.
pub fn render_trend_chart(
    series: &TrendSeries,
    config: &ChartConfig,
) -> Result<Vec<u8>> {
    encode_png(&render_trend_image(series, config))
}

pub fn render_trend_image(
    series: &TrendSeries,
    config: &ChartConfig,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.width, config.height, colors::WHITE);
    let area = PlotArea::new(config);

    // An all-zero series still gets a usable axis
    let max_volume = series.max_volume();
    let y_max = if max_volume > 0.0 { max_volume } else { 1.0 };

    draw_frame(&mut img, &area, y_max);
    draw_date_ticks(&mut img, &area, series);
    draw_series(&mut img, &area, series, y_max);
    draw_legend(&mut img, &area);

    let title_x = (config.width as i64 - text_width(CHART_TITLE, 2) as i64) / 2;
    draw_text(&mut img, title_x, 16, CHART_TITLE, colors::BLACK, 2);

    img
}

fn draw_frame(
    img: &mut RgbImage,
    area: &PlotArea,
    y_max: f64,
) {
    for step in 0..=GRID_LINES {
        let y = area.bottom - area.height() * step as i64 / GRID_LINES as i64;
        if step > 0 {
            draw_horizontal_line(img, y, area.left + 1, area.right, colors::LIGHT_GRAY);
        }
        let label = compact_number(y_max * step as f64 / GRID_LINES as f64);
        let label_x = area.left - 8 - text_width(&label, 1) as i64;
        draw_text(img, label_x, y - (text_height(1) / 2) as i64, &label, colors::DARK_GRAY, 1);
    }

    draw_vertical_line(img, area.left, area.top, area.bottom, colors::BLACK);
    draw_horizontal_line(img, area.bottom, area.left, area.right, colors::BLACK);

    draw_text(img, 8, area.top - 18, CHART_Y_LABEL, colors::BLACK, 1);
    let x_label_x = area.left + (area.width() - text_width(CHART_X_LABEL, 1) as i64) / 2;
    draw_text(img, x_label_x, area.bottom + 32, CHART_X_LABEL, colors::BLACK, 1);
}

fn draw_date_ticks(
    img: &mut RgbImage,
    area: &PlotArea,
    series: &TrendSeries,
) {
    let label_y = area.bottom + 10;
    let (Some(first), Some(last)) = (series.first_date(), series.last_date()) else {
        return;
    };

    let first_label = first.format("%Y-%m-%d").to_string();
    if first == last {
        let x = area.left + (area.width() - text_width(&first_label, 1) as i64) / 2;
        draw_text(img, x, label_y, &first_label, colors::DARK_GRAY, 1);
        return;
    }

    draw_text(img, area.left, label_y, &first_label, colors::DARK_GRAY, 1);
    let last_label = last.format("%Y-%m-%d").to_string();
    draw_text(img, area.right - text_width(&last_label, 1) as i64, label_y, &last_label, colors::DARK_GRAY, 1);
}

fn draw_series(
    img: &mut RgbImage,
    area: &PlotArea,
    series: &TrendSeries,
    y_max: f64,
) {
    let points = series.points();
    let last_index = points.len().saturating_sub(1);
    let coords: Vec<(i64, i64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if last_index == 0 {
                area.left + area.width() / 2
            } else {
                area.left + (area.width() as f64 * i as f64 / last_index as f64).round() as i64
            };
            let y = area.bottom - (area.height() as f64 * point.volume / y_max).round() as i64;
            (x, y)
        })
        .collect();

    for pair in coords.windows(2) {
        draw_thick_line(img, pair[0], pair[1], colors::BLUE, 2);
    }
    // Markers only while they stay distinguishable
    if coords.len() == 1 || (coords.len() as i64) * 6 <= area.width() {
        for &point in &coords {
            draw_marker(img, point, 2, colors::BLUE);
        }
    }
}

fn draw_legend(
    img: &mut RgbImage,
    area: &PlotArea,
) {
    let label_width = text_width(CHART_SERIES_LABEL, 1) as i64;
    let box_width = 24 + 8 + label_width + 16;
    let box_height = 20;
    let x = area.right - box_width - 8;
    let y = area.top + 8;

    fill_rect(img, x, y, box_width as u32, box_height as u32, colors::WHITE);
    draw_horizontal_line(img, y, x, x + box_width, colors::LIGHT_GRAY);
    draw_horizontal_line(img, y + box_height, x, x + box_width, colors::LIGHT_GRAY);
    draw_vertical_line(img, x, y, y + box_height, colors::LIGHT_GRAY);
    draw_vertical_line(img, x + box_width, y, y + box_height, colors::LIGHT_GRAY);

    let swatch_y = y + box_height / 2;
    draw_thick_line(img, (x + 8, swatch_y), (x + 32, swatch_y), colors::BLUE, 2);
    draw_text(img, x + 40, swatch_y - (text_height(1) / 2) as i64, CHART_SERIES_LABEL, colors::BLACK, 1);
}

pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| err_with_loc!(ChartError::EncodeError(e)))?;
    Ok(bytes)
}

pub fn encode_base64(bytes: &[u8]) -> String { general_purpose::STANDARD.encode(bytes) }

pub fn write_chart(
    path: impl AsRef<Path>,
    bytes: &[u8],
) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, bytes)
        .map_err(|e| err_with_loc!(ChartError::WriteError(format!("{}: {}", path.display(), e))))?;
    Ok(())
}

/// True when `bytes` start with the PNG signature.
pub fn is_png(bytes: &[u8]) -> bool { bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) }
