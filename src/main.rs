// Main entry point - Dependency injection and poll loop setup
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tokio_stream::wrappers::ReceiverStream;

use home_telemetry::application::history_service::HistoryService;
use home_telemetry::application::live_service::{DashboardEvent, LiveDashboardService};
use home_telemetry::domain::channel::ChannelId;
use home_telemetry::domain::dashboard::TileData;
use home_telemetry::domain::series::LiveSeriesStore;
use home_telemetry::infrastructure::config::load_dashboard_config;
use home_telemetry::infrastructure::http_gateway::HttpSensorGateway;
use home_telemetry::presentation::chart::ChartRenderer;
use home_telemetry::presentation::console::{ConsoleSurface, SparklineBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;
    let poll_interval = Duration::from_secs(config.node.poll_interval_secs);

    // Create gateway (infrastructure layer)
    let gateway = Arc::new(HttpSensorGateway::new(&config.node.base_url));

    // Create store and live chart (domain + presentation)
    let store = LiveSeriesStore::new(config.display.capacity);
    let live_chart = ChartRenderer::new(Box::new(SparklineBackend), config.display.capacity);

    // Create services (application layer)
    let history_service = HistoryService::new(gateway.clone());
    let live_service = LiveDashboardService::new(
        gateway.clone(),
        store,
        live_chart,
        config.display.live_channel,
    );

    // Restore the saved LED state, if configured
    if let Some(on) = config.node.led_on_start {
        if let Err(e) = live_service.set_led(on).await {
            tracing::warn!(error = %e, "Failed to restore LED state");
        }
    }

    let surface = ConsoleSurface;

    // Empty cards until the first poll lands
    let placeholders: Vec<TileData> = ChannelId::ALL
        .iter()
        .map(|&channel| TileData::placeholder(channel))
        .collect();
    surface.render_tiles(&placeholders);

    // Today's curve for the live channel, drawn once before going live
    let today = chrono::Utc::now().date_naive();
    let day_frame = history_service
        .day_chart(config.display.live_channel, today)
        .await;
    let mut day_chart = ChartRenderer::new(Box::new(SparklineBackend), config.display.capacity);
    day_chart.render_frame(day_frame);
    day_chart.teardown();

    println!(
        "Polling sensor node at {} every {}s",
        config.node.base_url, config.node.poll_interval_secs
    );

    // Stream live updates to the terminal surface
    let mut updates = ReceiverStream::new(live_service.stream_updates(poll_interval));
    while let Some(event) = updates.next().await {
        match event {
            DashboardEvent::Tiles(tiles) => surface.render_tiles(&tiles),
        }
    }

    Ok(())
}
