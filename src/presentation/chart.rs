// Chart refresh contract - boundary to the charting collaborator
use crate::domain::dashboard::{format_time, ChartFrame};
use crate::domain::series::{SeriesPoint, SeriesSnapshot};

/// A chart created by the backend. Mirrors the push/shift/destroy lifecycle
/// of the usual line-chart engines.
pub trait ChartInstance: Send {
    /// Push one label/value pair at the tail of the displayed dataset.
    fn push(&mut self, label: String, value: f64);
    /// Drop the oldest displayed point.
    fn shift(&mut self);
    /// Release the instance.
    fn destroy(&mut self);
}

/// Black-box charting engine consuming `{labels, values}` frames.
pub trait ChartBackend: Send {
    fn create(&mut self, frame: ChartFrame) -> Box<dyn ChartInstance>;
}

/// Owns the chart lifecycle and keeps the displayed window in lock-step
/// with the backing series: same length, same order, same eviction.
pub struct ChartRenderer {
    backend: Box<dyn ChartBackend>,
    instance: Option<Box<dyn ChartInstance>>,
    capacity: usize,
    shown: usize,
}

impl ChartRenderer {
    pub fn new(backend: Box<dyn ChartBackend>, capacity: usize) -> Self {
        Self {
            backend,
            instance: None,
            capacity,
            shown: 0,
        }
    }

    /// (Re)build the chart from a full snapshot. A previous instance for the
    /// same surface is destroyed before the new one is created.
    pub fn render(&mut self, snapshot: &SeriesSnapshot) {
        self.render_frame(ChartFrame::from_snapshot(snapshot));
    }

    /// Same as [`render`](Self::render) for an already-built frame (history
    /// charts arrive as frames, not snapshots).
    pub fn render_frame(&mut self, frame: ChartFrame) {
        self.teardown();
        self.shown = frame.values.len();
        self.instance = Some(self.backend.create(frame));
    }

    /// Extend an already-rendered chart with one point. Once the displayed
    /// window holds `capacity` points the oldest one is shifted out with the
    /// same append. Ignored when nothing is rendered yet.
    pub fn append_live(&mut self, point: SeriesPoint) {
        let Some(instance) = self.instance.as_mut() else {
            return;
        };
        if self.shown >= self.capacity {
            instance.shift();
            self.shown -= 1;
        }
        instance.push(format_time(point.timestamp), point.value.chart_value());
        self.shown += 1;
    }

    /// Release the chart instance. Safe to call when none exists.
    pub fn teardown(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.destroy();
        }
        self.shown = 0;
    }

    /// Number of points currently displayed.
    pub fn displayed_len(&self) -> usize {
        self.shown
    }
}
