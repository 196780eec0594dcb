// Live series domain model - bounded per-channel history
use chrono::{DateTime, Utc};
use std::collections::{HashMap, VecDeque};

use super::channel::{ChannelId, Reading};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: Reading,
}

impl SeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, value: Reading) -> Self {
        Self { timestamp, value }
    }
}

/// Bounded history for one channel. Appends go to the tail; once `capacity`
/// is reached every append evicts exactly one point from the head.
#[derive(Debug, Clone)]
pub struct Series {
    channel: ChannelId,
    label: String,
    capacity: usize,
    points: VecDeque<SeriesPoint>,
}

impl Series {
    pub fn new(channel: ChannelId, capacity: usize) -> Self {
        Self {
            channel,
            label: Self::display_label(channel),
            capacity,
            points: VecDeque::with_capacity(capacity),
        }
    }

    /// Display name with the unit baked in, fixed at creation.
    pub fn display_label(channel: ChannelId) -> String {
        if channel.unit().is_empty() {
            channel.label().to_string()
        } else {
            format!("{} ({})", channel.label(), channel.unit())
        }
    }

    fn push(&mut self, point: SeriesPoint) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    fn snapshot(&self) -> SeriesSnapshot {
        SeriesSnapshot {
            channel: self.channel,
            label: self.label.clone(),
            points: self.points.iter().copied().collect(),
        }
    }
}

/// Owned copy of a series at the moment of the call. Later appends to the
/// store never alter a snapshot already handed out.
#[derive(Debug, Clone)]
pub struct SeriesSnapshot {
    pub channel: ChannelId,
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

/// The per-channel live window shared by tiles and charts. One capacity for
/// all channels; exactly one caller (the poll tick) ever appends.
#[derive(Debug)]
pub struct LiveSeriesStore {
    capacity: usize,
    series: HashMap<ChannelId, Series>,
}

impl LiveSeriesStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            series: HashMap::new(),
        }
    }

    /// Create the channel's empty series if it does not exist yet. Called
    /// once per channel at startup so later appends never create channels
    /// by surprise.
    pub fn ensure_channel(&mut self, channel: ChannelId) {
        self.series
            .entry(channel)
            .or_insert_with(|| Series::new(channel, self.capacity));
    }

    /// Tail-append one point, evicting the oldest point once the window is
    /// full. A channel not seen before is created empty first.
    pub fn append(&mut self, channel: ChannelId, point: SeriesPoint) {
        let capacity = self.capacity;
        self.series
            .entry(channel)
            .or_insert_with(|| Series::new(channel, capacity))
            .push(point);
    }

    /// Ordered, isolated copy of the channel's points. Empty for a channel
    /// that was never appended to.
    pub fn snapshot(&self, channel: ChannelId) -> SeriesSnapshot {
        match self.series.get(&channel) {
            Some(series) => series.snapshot(),
            None => SeriesSnapshot {
                channel,
                label: Series::display_label(channel),
                points: Vec::new(),
            },
        }
    }

    /// Clear the channel back to an empty series. Idempotent.
    pub fn reset(&mut self, channel: ChannelId) {
        let capacity = self.capacity;
        self.series
            .insert(channel, Series::new(channel, capacity));
    }
}
