// Live dashboard service - periodic poll feeding the bounded store and chart
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::application::sensor_gateway::SensorGateway;
use crate::domain::channel::ChannelId;
use crate::domain::dashboard::TileData;
use crate::domain::series::{LiveSeriesStore, SeriesPoint, SeriesSnapshot};
use crate::infrastructure::demo::DemoDataSource;
use crate::presentation::chart::ChartRenderer;

/// Update pushed to the display surface after every poll cycle.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    Tiles(Vec<TileData>),
}

/// Owns the live window and the live chart. The tick loop is the only
/// writer; every append is followed synchronously by the matching chart
/// refresh, so store and display never drift apart.
pub struct LiveDashboardService {
    gateway: Arc<dyn SensorGateway>,
    demo: DemoDataSource,
    store: LiveSeriesStore,
    chart: ChartRenderer,
    live_channel: ChannelId,
    rendered: bool,
}

impl LiveDashboardService {
    pub fn new(
        gateway: Arc<dyn SensorGateway>,
        mut store: LiveSeriesStore,
        chart: ChartRenderer,
        live_channel: ChannelId,
    ) -> Self {
        for channel in ChannelId::ALL {
            store.ensure_channel(channel);
        }
        Self {
            gateway,
            demo: DemoDataSource::new(),
            store,
            chart,
            live_channel,
            rendered: false,
        }
    }

    /// Forward an LED toggle to the node.
    pub async fn set_led(&self, on: bool) -> anyhow::Result<()> {
        tracing::info!(on, "Switching LED");
        self.gateway.set_led(on).await
    }

    /// Read-only view of the live window for one channel.
    pub fn snapshot(&self, channel: ChannelId) -> SeriesSnapshot {
        self.store.snapshot(channel)
    }

    /// Spawn the poll loop, emitting one display update per cycle until the
    /// receiver is dropped.
    pub fn stream_updates(mut self, poll_interval: Duration) -> mpsc::Receiver<DashboardEvent> {
        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            loop {
                ticker.tick().await;
                let event = self.tick().await;
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });

        rx
    }

    /// One poll cycle: fetch readings (demo fallback on failure), append
    /// them to the store, refresh the live chart, report the tiles.
    pub async fn tick(&mut self) -> DashboardEvent {
        let readings = match self.gateway.current_readings().await {
            Ok(readings) => readings,
            Err(e) => {
                tracing::warn!(error = %e, "Sensor poll failed, substituting demo data");
                self.demo.current_readings()
            }
        };

        let now = Utc::now();
        let mut tiles = Vec::with_capacity(ChannelId::ALL.len());

        for (channel, reading) in readings.per_channel() {
            let point = SeriesPoint::new(now, reading);
            self.store.append(channel, point);

            if channel == self.live_channel {
                if self.rendered {
                    self.chart.append_live(point);
                } else {
                    self.chart.render(&self.store.snapshot(channel));
                    self.rendered = true;
                }
            }

            tiles.push(TileData::new(channel, Some(reading)));
        }

        tracing::debug!(
            channels = tiles.len(),
            displayed = self.chart.displayed_len(),
            "Poll cycle complete"
        );
        DashboardEvent::Tiles(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sensor_gateway::{CurrentReadings, HistorySample};
    use crate::domain::channel::Reading;
    use crate::presentation::chart::testing::RecordingBackend;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct StaticGateway {
        readings: CurrentReadings,
    }

    #[async_trait]
    impl SensorGateway for StaticGateway {
        async fn current_readings(&self) -> anyhow::Result<CurrentReadings> {
            Ok(self.readings)
        }

        async fn day_history(
            &self,
            _channel: ChannelId,
            _date: NaiveDate,
        ) -> anyhow::Result<Vec<HistorySample>> {
            Ok(Vec::new())
        }

        async fn set_led(&self, _on: bool) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct UnreachableGateway;

    #[async_trait]
    impl SensorGateway for UnreachableGateway {
        async fn current_readings(&self) -> anyhow::Result<CurrentReadings> {
            anyhow::bail!("connection refused")
        }

        async fn day_history(
            &self,
            _channel: ChannelId,
            _date: NaiveDate,
        ) -> anyhow::Result<Vec<HistorySample>> {
            anyhow::bail!("connection refused")
        }

        async fn set_led(&self, _on: bool) -> anyhow::Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    fn fixed_readings() -> CurrentReadings {
        CurrentReadings {
            temperature: 23.5,
            humidity: 48.0,
            gas: 210,
            water: 12,
            motion: true,
            led: true,
        }
    }

    fn service_with(gateway: Arc<dyn SensorGateway>, capacity: usize) -> (LiveDashboardService, crate::presentation::chart::testing::CallLog) {
        let (backend, log) = RecordingBackend::new();
        let service = LiveDashboardService::new(
            gateway,
            LiveSeriesStore::new(capacity),
            ChartRenderer::new(Box::new(backend), capacity),
            ChannelId::Temperature,
        );
        (service, log)
    }

    #[tokio::test]
    async fn test_tick_appends_every_channel_and_reports_tiles() {
        let gateway = Arc::new(StaticGateway {
            readings: fixed_readings(),
        });
        let (mut service, _log) = service_with(gateway, 60);

        let DashboardEvent::Tiles(tiles) = service.tick().await;
        assert_eq!(tiles.len(), ChannelId::ALL.len());

        for channel in ChannelId::ALL {
            assert_eq!(service.snapshot(channel).points.len(), 1);
        }
        assert_eq!(
            service.snapshot(ChannelId::Temperature).points[0].value,
            Reading::Measure(23.5)
        );
    }

    #[tokio::test]
    async fn test_first_tick_renders_then_later_ticks_append() {
        let gateway = Arc::new(StaticGateway {
            readings: fixed_readings(),
        });
        let (mut service, log) = service_with(gateway, 60);

        service.tick().await;
        service.tick().await;
        service.tick().await;

        let calls = log.calls();
        assert_eq!(calls[0], "create:1");
        assert_eq!(calls.iter().filter(|c| c.starts_with("create")).count(), 1);
        assert_eq!(calls.iter().filter(|c| c.starts_with("push")).count(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_node_substitutes_demo_data() {
        let (mut service, _log) = service_with(Arc::new(UnreachableGateway), 60);

        let DashboardEvent::Tiles(tiles) = service.tick().await;
        assert_eq!(tiles.len(), ChannelId::ALL.len());
        assert_eq!(service.snapshot(ChannelId::Humidity).points.len(), 1);
    }

    #[tokio::test]
    async fn test_live_window_stays_bounded() {
        let gateway = Arc::new(StaticGateway {
            readings: fixed_readings(),
        });
        let (mut service, _log) = service_with(gateway, 3);

        for _ in 0..5 {
            service.tick().await;
        }

        assert_eq!(service.snapshot(ChannelId::Temperature).points.len(), 3);
    }
}
