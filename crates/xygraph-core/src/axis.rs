// File: crates/xygraph-core/src/axis.rs
// Summary: Axis model with label, units and optional manual ticks.

use crate::scale::{scale_axis, TickSet};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Axis {
    pub label: String,
    pub units: String,
    /// Explicit tick values; when set (and non-empty) they replace auto-scaling.
    pub ticks: Option<Vec<f64>>,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    /// Axis title as drawn next to the plot: `"label (units)"`, or just the label.
    pub fn title(&self) -> String {
        if self.label.is_empty() {
            String::new()
        } else if self.units.is_empty() {
            self.label.clone()
        } else {
            format!("{} ({})", self.label, self.units)
        }
    }

    pub fn has_title(&self) -> bool { !self.label.is_empty() }

    /// Ticks for `values` along `dimension_px`; manual ticks win over auto-scaling.
    pub fn resolve_ticks(&self, values: &[f64], dimension_px: i32, glyph_width: f32) -> TickSet {
        match self.ticks.as_deref().map(TickSet::from_values) {
            Some(manual) if !manual.is_empty() => manual,
            _ => scale_axis(values, dimension_px, glyph_width),
        }
    }
}
