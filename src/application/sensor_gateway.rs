// Gateway trait for the sensor node HTTP API
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::channel::{ChannelId, Reading};

/// One successful `/data` poll, decoded into typed readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentReadings {
    pub temperature: f64,
    pub humidity: f64,
    pub gas: i64,
    pub water: i64,
    pub motion: bool,
    pub led: bool,
}

impl CurrentReadings {
    /// Channel-keyed view in the fixed channel order.
    pub fn per_channel(&self) -> [(ChannelId, Reading); 6] {
        [
            (ChannelId::Temperature, Reading::Measure(self.temperature)),
            (ChannelId::Humidity, Reading::Measure(self.humidity)),
            (ChannelId::Gas, Reading::Level(self.gas)),
            (ChannelId::Water, Reading::Level(self.water)),
            (ChannelId::Motion, Reading::Flag(self.motion)),
            (ChannelId::Led, Reading::Flag(self.led)),
        ]
    }
}

/// One historical sample as served by `/graph`. `time` is the node's own
/// `HH:MM:SS` label for the sample.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySample {
    pub time: String,
    pub value: Reading,
}

#[async_trait]
pub trait SensorGateway: Send + Sync {
    /// Latest readings from `GET /data`.
    async fn current_readings(&self) -> anyhow::Result<CurrentReadings>;

    /// Ordered day history for one channel from `GET /graph`.
    async fn day_history(
        &self,
        channel: ChannelId,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<HistorySample>>;

    /// Switch the LED relay via `POST /led`.
    async fn set_led(&self, on: bool) -> anyhow::Result<()>;
}
