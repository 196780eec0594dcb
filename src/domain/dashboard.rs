// Dashboard view models
use chrono::{DateTime, Utc};

use super::channel::{ChannelId, Reading};
use super::series::SeriesSnapshot;

/// Current-value card for one channel.
#[derive(Debug, Clone)]
pub struct TileData {
    pub channel: ChannelId,
    pub title: String,
    pub unit: String,
    pub value: Option<Reading>,
    pub precision: usize,
}

impl TileData {
    pub fn new(channel: ChannelId, value: Option<Reading>) -> Self {
        Self {
            channel,
            title: channel.label().to_string(),
            unit: channel.unit().to_string(),
            value,
            precision: channel.precision(),
        }
    }

    /// Tile shown before the first successful poll.
    pub fn placeholder(channel: ChannelId) -> Self {
        Self::new(channel, None)
    }

    /// Display text for the card, `--` while no reading exists yet.
    pub fn value_text(&self) -> String {
        let Some(value) = self.value else {
            return if self.unit.is_empty() {
                "--".to_string()
            } else {
                format!("-- {}", self.unit)
            };
        };

        match value {
            Reading::Measure(v) => format!("{:.*} {}", self.precision, v, self.unit),
            Reading::Level(v) => {
                if self.unit.is_empty() {
                    v.to_string()
                } else {
                    format!("{} {}", v, self.unit)
                }
            }
            Reading::Flag(on) => match self.channel {
                ChannelId::Motion => if on { "DETECTED" } else { "NO" }.to_string(),
                _ => if on { "ON" } else { "OFF" }.to_string(),
            },
        }
    }
}

/// The {labels, values} shape the charting collaborator consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartFrame {
    pub fn from_snapshot(snapshot: &SeriesSnapshot) -> Self {
        Self {
            title: snapshot.label.clone(),
            labels: snapshot
                .points
                .iter()
                .map(|p| format_time(p.timestamp))
                .collect(),
            values: snapshot.points.iter().map(|p| p.value.chart_value()).collect(),
        }
    }
}

/// Axis label for one point.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}
