//! Donut chart dataset and widget lifecycle.

use crate::view::format_percentage;

/// Slice labels in dataset order.
pub const SLICE_LABELS: [&str; 2] = ["Fraud", "Legitimate"];
/// Slice fill colors in dataset order.
pub const SLICE_COLORS: [&str; 2] = ["#ef4444", "#10b981"];
/// Hole diameter of the donut, in the form the chart library expects.
pub const CUTOUT: &str = "70%";

/// Slice values for the risk donut, as unit-interval fractions in
/// [`SLICE_LABELS`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSpec {
    pub values: [f64; 2],
}

impl DonutSpec {
    /// Split a probability into the fraud and legitimate slices. The
    /// legitimate share is floored at zero.
    pub fn for_probability(fraud: f64) -> Self {
        Self {
            values: [fraud, (1.0 - fraud).max(0.0)],
        }
    }
}

/// Tooltip line for one slice.
pub fn tooltip_label(label: &str, fraction: f64) -> String {
    format!("{label}: {}", format_percentage(fraction))
}

/// Handle to a live donut widget. `update` redraws the slices in place and
/// `destroy` releases the widget's resources; a destroyed instance must not
/// be touched again.
pub trait DonutRenderer {
    fn update(&self, spec: &DonutSpec);
    fn destroy(&self);
}

/// Owner of at most one live chart instance.
///
/// The first render creates the instance and later renders update it in
/// place. [`ChartSlot::clear`] destroys it, so the next render starts from a
/// fresh widget.
pub struct ChartSlot<R> {
    live: Option<R>,
}

impl<R> Default for ChartSlot<R> {
    fn default() -> Self {
        Self { live: None }
    }
}

impl<R: DonutRenderer> ChartSlot<R> {
    /// Render the given slices, creating the widget through `create` when
    /// none is live yet. `create` may decline (for example when the target
    /// canvas is not in the document), leaving the slot empty.
    pub fn render_with<F>(&mut self, spec: &DonutSpec, create: F)
    where
        F: FnOnce(&DonutSpec) -> Option<R>,
    {
        if let Some(chart) = &self.live {
            chart.update(spec);
            return;
        }
        self.live = create(spec);
    }

    /// Destroy the live widget, if any.
    pub fn clear(&mut self) {
        if let Some(chart) = self.live.take() {
            chart.destroy();
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }
}
