// File: crates/xygraph-core/src/scale.rs
// Summary: Automatic axis scaling; picks "nice" evenly spaced ticks and formats their labels.

use log::{debug, warn};

/// Upper bound on generated ticks; denser steps are widened along the nice ladder.
pub const MAX_TICKS: usize = 10_000;

/// Largest tick index for which `index * step` still steps by whole indices (2^53).
const MAX_EXACT_INDEX: f64 = 9_007_199_254_740_992.0;

/// Nice step multipliers, scaled by the order of magnitude of the raw spacing.
const NICE_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Ticks for one axis: numeric positions plus their display labels.
///
/// Invariants: `values` is strictly increasing and `labels[i]` is the formatted form of
/// `values[i]`. Scaled tick sets also have constant spacing `step`, and every value is an
/// integer multiple of it.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    /// Distance between consecutive ticks; 0 when there is a single fallback tick.
    pub step: f64,
    /// Fraction digits used by `labels`; `None` when all ticks are integral.
    pub decimals: Option<usize>,
}

impl TickSet {
    /// Build a tick set from explicit values, labelled with their shortest display form.
    /// Values are sorted ascending; non-finite values and duplicates are dropped.
    /// `step` is the gap between the two lowest values.
    pub fn from_values(values: &[f64]) -> Self {
        let mut values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).map(normalize_zero).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        let labels = values.iter().map(|v| format!("{v}")).collect();
        let step = match values.as_slice() {
            [a, b, ..] => b - a,
            _ => 0.0,
        };
        Self { values, labels, step, decimals: None }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// First tick value, or 0 when empty.
    pub fn first(&self) -> f64 { self.values.first().copied().unwrap_or(0.0) }

    /// Last tick value, or 0 when empty.
    pub fn last(&self) -> f64 { self.values.last().copied().unwrap_or(0.0) }

    /// Length of the longest label in characters.
    pub fn max_label_chars(&self) -> usize {
        self.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }

    fn single(value: f64) -> Self {
        let value = normalize_zero(value);
        let label = if value.fract() == 0.0 { format!("{value:.0}") } else { format!("{value}") };
        Self { values: vec![value], labels: vec![label], step: 0.0, decimals: None }
    }
}

/// Compute tick labels for `values` drawn along `dimension_px` pixels, with labels whose
/// glyphs are roughly `glyph_width` pixels wide.
///
/// Returns at least one label. Labels are either all integers or all fixed-point with the
/// same number of fraction digits.
pub fn compute_ticks(values: &[f64], dimension_px: i32, glyph_width: f32) -> Vec<String> {
    scale_axis(values, dimension_px, glyph_width).labels
}

/// Like [`compute_ticks`], but also returns the numeric tick values and the chosen step.
pub fn scale_axis(values: &[f64], dimension_px: i32, glyph_width: f32) -> TickSet {
    let (min, max) = min_max(values);
    let range = max - min;
    let order = order_of_magnitude(range);
    let footprint = label_footprint(order, glyph_width as f64);
    let min_ticks = min_tick_count(dimension_px, footprint);
    let raw_spacing = range / min_ticks as f64;
    let mut step = nice_spacing(raw_spacing);
    debug!(
        "scale_axis: min={min} max={max} order={order} footprint={footprint} min_ticks={min_ticks} raw_spacing={raw_spacing} step={step}"
    );

    if step <= 0.0 || !step.is_finite() {
        warn!("scale_axis: degenerate tick spacing {raw_spacing}; using a single tick at 0");
        return TickSet::single(0.0);
    }

    let ticks = loop {
        if let Some(ticks) = tick_values(min, max, step) {
            break ticks;
        }
        let wider = nice_spacing(step);
        if wider <= step || !wider.is_finite() {
            warn!("scale_axis: no usable step over [{min}, {max}] past {step}; using a single tick");
            return TickSet::single(min);
        }
        debug!("scale_axis: step {step} gives too many or colliding ticks; widening to {wider}");
        step = wider;
    };

    let tolerance = step * 1e-6;
    if ticks.iter().all(|t| (t - t.round()).abs() <= tolerance) {
        let labels = ticks.iter().map(|t| format!("{:.0}", normalize_zero(t.round()))).collect();
        TickSet { values: ticks, labels, step, decimals: None }
    } else {
        let decimals = (-order_of_magnitude(step)).max(0) as usize;
        let labels = ticks.iter().map(|t| format!("{t:2.decimals$}")).collect();
        TickSet { values: ticks, labels, step, decimals: Some(decimals) }
    }
}

/// Multiples of `step` from the last one at or below `min` to the first one at or above `max`.
///
/// `None` when there would be more than [`MAX_TICKS`] of them, or when the tick indices
/// are too large for consecutive ticks to stay distinct.
fn tick_values(min: f64, max: f64, step: f64) -> Option<Vec<f64>> {
    let mut first = (min / step).floor();
    if first * step > min {
        first -= 1.0;
    }
    let mut last = (max / step).ceil();
    if last * step < max {
        last += 1.0;
    }
    let count = last - first + 1.0;
    if !count.is_finite() || count > MAX_TICKS as f64 {
        return None;
    }
    if first.abs() > MAX_EXACT_INDEX || last.abs() > MAX_EXACT_INDEX || (first + (count - 1.0)) - first != count - 1.0 {
        return None;
    }
    let ticks: Vec<f64> = (0..count as usize)
        .map(|k| normalize_zero((first + k as f64) * step))
        .collect();
    if ticks.windows(2).any(|w| w[1] <= w[0]) {
        return None;
    }
    Some(ticks)
}

/// Decimal order of magnitude of `value`'s absolute value, read from its six-decimal
/// fixed-point rendering.
///
/// `>= 1`: number of integer digits minus one (`36.0 -> 1`).
/// `< 1`: minus the position of the first non-zero fraction digit (`0.0034 -> -3`).
/// Zero, and anything that rounds to zero at six decimals, has order 0.
pub fn order_of_magnitude(value: f64) -> i32 {
    let magnitude = value.abs();
    let text = format!("{magnitude:.6}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if magnitude < 1.0 {
        match frac_part.find(|c: char| c != '0') {
            Some(idx) => -(idx as i32) - 1,
            None => 0,
        }
    } else {
        int_part.len() as i32 - 1
    }
}

/// Smallest of 1, 2, 5, 10 times `10^order(spacing)` strictly greater than `spacing`,
/// or 0 when none qualifies.
pub fn nice_spacing(spacing: f64) -> f64 {
    let base = 10f64.powi(order_of_magnitude(spacing));
    NICE_STEPS
        .iter()
        .map(|m| m * base)
        .find(|candidate| candidate - spacing > 0.0)
        .unwrap_or(0.0)
}

/// Estimated label width in pixels for values of the given order.
fn label_footprint(order: i32, glyph_width: f64) -> f64 {
    if order > 0 {
        (order + 2) as f64 * glyph_width
    } else {
        (order.abs() + 3) as f64 * glyph_width
    }
}

/// Ticks needed so each label gets twice its footprint; never less than one.
fn min_tick_count(dimension_px: i32, footprint: f64) -> usize {
    let count = (dimension_px as f64 / (footprint * 2.0)).ceil();
    if count.is_finite() && count >= 1.0 {
        count as usize
    } else {
        1
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}

#[inline]
fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
