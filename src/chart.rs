//! Bar chart of outcome percentages with a house edge callout.
//!
//! The layout is given in points on a 10x6 inch canvas and scaled by the DPI, so the default
//! 300 DPI output is 3000x1800 pixels. PNG and SVG are supported, picked by file extension.
use crate::game::Outcome;
use crate::tally::SimulationResults;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CHART_FILE: &str = "blackjack_simulation.png";
pub const DEFAULT_DPI: u32 = 300;
const WIDTH_IN: f64 = 10.0;
const HEIGHT_IN: f64 = 6.0;
/// Top of the y axis unless a bar needs more room
const Y_MAX: f64 = 55.0;
const FONT: &str = "sans-serif";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unsupported chart format for {0} (use .png or .svg)")]
    UnsupportedFormat(String),
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err<E: fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(ChartFormat::Png),
            Some("svg") => Ok(ChartFormat::Svg),
            _ => Err(ChartError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

struct Bar {
    outcome: Outcome,
    label: &'static str,
    color: RGBColor,
}

static BARS: [Bar; 4] = [
    Bar {
        outcome: Outcome::Player,
        label: "Player Wins",
        color: RGBColor(144, 238, 144), // lightgreen
    },
    Bar {
        outcome: Outcome::Dealer,
        label: "Dealer Wins",
        color: RGBColor(240, 128, 128), // lightcoral
    },
    Bar {
        outcome: Outcome::Push,
        label: "Pushes",
        color: RGBColor(173, 216, 230), // lightblue
    },
    Bar {
        outcome: Outcome::Blackjack,
        label: "Blackjacks",
        color: RGBColor(255, 215, 0), // gold
    },
];

/// Index of the dealer bar, where the house edge callout points
const DEALER_BAR: u32 = 1;

/// "10000" -> "10,000"
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn title(games: u64) -> String {
    format!(
        "Blackjack Outcomes: {} Hand Simulation (Stand on 17+)",
        thousands(games)
    )
}

pub fn house_edge_label(results: &SimulationResults) -> String {
    format!("House Edge: {:.1}%", results.house_edge())
}

/// Keep the default axis height unless a bar and its label wouldn't fit under it
fn y_max(results: &SimulationResults) -> f64 {
    BARS.iter()
        .map(|b| results.pct.get(b.outcome) + 5.0)
        .fold(Y_MAX, f64::max)
}

/// Right edge of bar `i`. The last segment has no following value to point at.
fn segment_end(i: u32) -> SegmentValue<u32> {
    if i + 1 == BARS.len() as u32 {
        SegmentValue::Last
    } else {
        SegmentValue::Exact(i + 1)
    }
}

/// Draw the whole chart onto `root`. `scale` converts points to backend pixels.
pub fn draw_outcomes<DB>(
    root: &DrawingArea<DB, Shift>,
    results: &SimulationResults,
    scale: f64,
) -> Result<(), ChartError>
where
    DB: DrawingBackend,
{
    let pt = |v: f64| v * scale;
    let px = |v: f64| pt(v).round() as i32;
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            title(results.games()),
            (FONT, pt(14.0), FontStyle::Bold).into_font(),
        )
        .margin(px(12.0) as u32)
        .x_label_area_size(px(30.0) as u32)
        .y_label_area_size(px(45.0) as u32)
        .build_cartesian_2d(
            (0u32..BARS.len() as u32 - 1).into_segmented(),
            0f64..y_max(results),
        )
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(TRANSPARENT)
        .y_desc("Percentage of Outcomes (%)")
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => BARS
                .get(*i as usize)
                .map(|b| b.label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .label_style((FONT, pt(10.0)).into_font())
        .axis_desc_style((FONT, pt(10.0)).into_font())
        .draw()
        .map_err(draw_err)?;

    let bar_margin = px(18.0) as u32;
    let bar = |i: u32, style: ShapeStyle| {
        let v = results.pct.get(BARS[i as usize].outcome);
        let mut rect = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (segment_end(i), v)],
            style,
        );
        rect.set_margin(0, 0, bar_margin, bar_margin);
        rect
    };
    chart
        .draw_series(
            (0..BARS.len() as u32).map(|i| bar(i, BARS[i as usize].color.mix(0.7).filled())),
        )
        .map_err(draw_err)?;
    chart
        .draw_series(
            (0..BARS.len() as u32).map(|i| bar(i, BLACK.stroke_width(px(1.0) as u32))),
        )
        .map_err(draw_err)?;

    let value_style = TextStyle::from((FONT, pt(10.0), FontStyle::Bold).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(BARS.iter().enumerate().map(|(i, b)| {
            let v = results.pct.get(b.outcome);
            Text::new(
                format!("{:.1}%", v),
                (SegmentValue::CenterOf(i as u32), v + 0.5),
                value_style.clone(),
            )
        }))
        .map_err(draw_err)?;

    // callout box sits 10pt right of the top of the dealer bar, vertically centered on it
    let label = house_edge_label(results);
    let callout_style = TextStyle::from((FONT, pt(10.0), FontStyle::Bold).into_font())
        .pos(Pos::new(HPos::Left, VPos::Center));
    let (w, h) = root
        .estimate_text_size(&label, &callout_style)
        .map_err(draw_err)?;
    let (w, h) = (w as i32, h as i32);
    let (dx, pad) = (px(10.0), px(5.0));
    let anchor = (
        SegmentValue::CenterOf(DEALER_BAR),
        results.pct.get(Outcome::Dealer),
    );
    chart
        .draw_series(std::iter::once(
            EmptyElement::at(anchor)
                + Rectangle::new(
                    [(dx, -h / 2 - pad), (dx + w + 2 * pad, h / 2 + pad)],
                    YELLOW.mix(0.8).filled(),
                )
                + Text::new(label, (dx + pad, 0), callout_style),
        ))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

pub trait ChartRenderer {
    fn render(&self, path: &Path, results: &SimulationResults) -> Result<(), ChartError>;
}

/// Renders with plotters onto a bitmap or SVG canvas
pub struct PlottersChartRenderer {
    pub dpi: u32,
}

impl Default for PlottersChartRenderer {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}

impl PlottersChartRenderer {
    pub fn size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (WIDTH_IN * dpi).round() as u32,
            (HEIGHT_IN * dpi).round() as u32,
        )
    }

    fn scale(&self) -> f64 {
        f64::from(self.dpi) / 72.0
    }
}

impl ChartRenderer for PlottersChartRenderer {
    /// Write the chart to `path`, replacing whatever is there
    fn render(&self, path: &Path, results: &SimulationResults) -> Result<(), ChartError> {
        let size = self.size();
        match ChartFormat::from_path(path)? {
            ChartFormat::Png => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                draw_outcomes(&root, results, self.scale())?;
            }
            ChartFormat::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                draw_outcomes(&root, results, self.scale())?;
            }
        }
        info!(path = %path.display(), width = size.0, height = size.1, "wrote chart");
        Ok(())
    }
}
