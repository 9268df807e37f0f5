//! Horizontal text bar charts.
//!
//! Share-of-total charts stand in for pie charts; the monthly chart overlays a
//! target marker on each bar.

use crate::currency::percent_of;

const DEFAULT_WIDTH: usize = 40;
const FILL: char = '#';
const MARKER: char = '+';

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub annotation: String,
    pub marker: Option<f64>,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64, annotation: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            annotation: annotation.into(),
            marker: None,
        }
    }

    pub fn with_marker(mut self, marker: f64) -> Self {
        self.marker = Some(marker);
        self
    }
}

#[derive(Debug, Clone)]
pub struct BarChart {
    bars: Vec<Bar>,
    width: usize,
    show_share: bool,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChart {
    pub fn new() -> Self {
        Self {
            bars: Vec::new(),
            width: DEFAULT_WIDTH,
            show_share: false,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Appends each bar's percentage of the summed values.
    pub fn with_share(mut self) -> Self {
        self.show_share = true;
        self
    }

    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    pub fn render(&self) -> String {
        let label_width = self
            .bars
            .iter()
            .map(|bar| bar.label.chars().count())
            .max()
            .unwrap_or(0);
        let scale = self
            .bars
            .iter()
            .flat_map(|bar| std::iter::once(bar.value).chain(bar.marker))
            .fold(0.0_f64, f64::max);
        let total: f64 = self.bars.iter().map(|bar| bar.value).sum();

        self.bars
            .iter()
            .map(|bar| {
                let mut line = format!(
                    "{:<label_width$} |{}| {}",
                    bar.label,
                    self.draw(bar, scale),
                    bar.annotation
                );
                if self.show_share {
                    line.push_str(&format!(" ({:.1}%)", percent_of(bar.value, total)));
                }
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(&self, bar: &Bar, scale: f64) -> String {
        let mut cells = vec![' '; self.width];
        let filled = self.cells_for(bar.value, scale);
        for cell in cells.iter_mut().take(filled) {
            *cell = FILL;
        }
        if let Some(marker) = bar.marker {
            let position = self.cells_for(marker, scale).saturating_sub(1);
            if let Some(cell) = cells.get_mut(position) {
                *cell = MARKER;
            }
        }
        cells.into_iter().collect()
    }

    fn cells_for(&self, value: f64, scale: f64) -> usize {
        if scale <= 0.0 || value <= 0.0 {
            return 0;
        }
        let ratio = (value / scale).min(1.0);
        // float to usize saturates, and ratio is already clamped to 0..=1
        (ratio * self.width as f64).round() as usize
    }
}
