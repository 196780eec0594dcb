// History service - day curves for the calendar view
use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::sensor_gateway::{HistorySample, SensorGateway};
use crate::domain::channel::ChannelId;
use crate::domain::dashboard::ChartFrame;
use crate::infrastructure::demo::DemoDataSource;

#[derive(Clone)]
pub struct HistoryService {
    gateway: Arc<dyn SensorGateway>,
    demo: DemoDataSource,
}

impl HistoryService {
    pub fn new(gateway: Arc<dyn SensorGateway>) -> Self {
        Self {
            gateway,
            demo: DemoDataSource::new(),
        }
    }

    /// Build the chart frame for one channel on one date. Falls back to a
    /// synthetic curve when the node has nothing for the date or cannot be
    /// reached.
    pub async fn day_chart(&self, channel: ChannelId, date: NaiveDate) -> ChartFrame {
        let samples = match self.gateway.day_history(channel, date).await {
            Ok(samples) if !samples.is_empty() => samples,
            Ok(_) => {
                tracing::debug!(%channel, %date, "No history for date, generating demo curve");
                self.demo.day_curve(channel)
            }
            Err(e) => {
                tracing::warn!(error = %e, %channel, "History fetch failed, generating demo curve");
                self.demo.day_curve(channel)
            }
        };

        frame_from_samples(channel, date, &samples)
    }
}

fn frame_from_samples(channel: ChannelId, date: NaiveDate, samples: &[HistorySample]) -> ChartFrame {
    ChartFrame {
        title: format!("{} {}", channel.label(), date),
        labels: samples.iter().map(|s| s.time.clone()).collect(),
        values: samples.iter().map(|s| s.value.chart_value()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sensor_gateway::CurrentReadings;
    use crate::domain::channel::Reading;
    use async_trait::async_trait;

    struct CannedGateway {
        samples: Vec<HistorySample>,
    }

    #[async_trait]
    impl SensorGateway for CannedGateway {
        async fn current_readings(&self) -> anyhow::Result<CurrentReadings> {
            anyhow::bail!("not used")
        }

        async fn day_history(
            &self,
            _channel: ChannelId,
            _date: NaiveDate,
        ) -> anyhow::Result<Vec<HistorySample>> {
            Ok(self.samples.clone())
        }

        async fn set_led(&self, _on: bool) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn test_day_chart_builds_frame_from_node_samples() {
        let gateway = Arc::new(CannedGateway {
            samples: vec![
                HistorySample {
                    time: "08:00:00".to_string(),
                    value: Reading::Measure(19.5),
                },
                HistorySample {
                    time: "08:00:05".to_string(),
                    value: Reading::Flag(true),
                },
            ],
        });

        let frame = HistoryService::new(gateway)
            .day_chart(ChannelId::Temperature, date())
            .await;

        assert_eq!(frame.title, "Temperature 2025-06-01");
        assert_eq!(frame.labels, vec!["08:00:00", "08:00:05"]);
        assert_eq!(frame.values, vec![19.5, 1.0]);
    }

    #[tokio::test]
    async fn test_day_chart_substitutes_demo_curve_when_empty() {
        let gateway = Arc::new(CannedGateway {
            samples: Vec::new(),
        });

        let frame = HistoryService::new(gateway)
            .day_chart(ChannelId::Humidity, date())
            .await;

        assert_eq!(frame.values.len(), 24);
        assert_eq!(frame.labels.len(), 24);
    }
}
