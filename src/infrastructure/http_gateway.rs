// HTTP gateway to the sensor node
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::application::sensor_gateway::{CurrentReadings, HistorySample, SensorGateway};
use crate::domain::channel::{ChannelId, Reading};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("sensor node returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct HttpSensorGateway {
    client: reqwest::Client,
    base_url: String,
}

/// Wire shape of `GET /data`.
#[derive(Debug, Deserialize)]
struct DataPayload {
    temp: f64,
    hum: f64,
    gas: i64,
    water: i64,
    motion: bool,
    // Older firmware has no explicit LED field; its LED tracks the PIR
    #[serde(default)]
    led: Option<bool>,
}

/// Wire shape of one `GET /graph` record. Flags arrive encoded as 0/1.
#[derive(Debug, Deserialize)]
struct GraphRecord {
    time: String,
    temp: f64,
    hum: f64,
    gas: i64,
    water: i64,
    motion: i64,
}

impl HttpSensorGateway {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn graph_url(&self, channel: ChannelId, date: NaiveDate) -> String {
        format!(
            "{}/graph?sensor={}&date={}",
            self.base_url,
            urlencoding::encode(channel.as_str()),
            date
        )
    }

    fn led_url(&self, on: bool) -> String {
        format!(
            "{}/led?state={}",
            self.base_url,
            if on { "on" } else { "off" }
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to reach sensor node at {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body }.into());
        }

        let text = response
            .text()
            .await
            .context("Failed to read sensor node response")?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body_preview = %text.chars().take(200).collect::<String>(),
                "Failed to parse sensor node response"
            );
            anyhow::anyhow!("Failed to parse sensor node response: {e}")
        })
    }
}

/// The record's reading for one channel, flags decoded from their 0/1
/// encoding. The LED follows the PIR, as wired on the node.
fn record_reading(record: &GraphRecord, channel: ChannelId) -> Reading {
    match channel {
        ChannelId::Temperature => Reading::Measure(record.temp),
        ChannelId::Humidity => Reading::Measure(record.hum),
        ChannelId::Gas => Reading::Level(record.gas),
        ChannelId::Water => Reading::Level(record.water),
        ChannelId::Motion | ChannelId::Led => Reading::Flag(record.motion != 0),
    }
}

#[async_trait]
impl SensorGateway for HttpSensorGateway {
    async fn current_readings(&self) -> Result<CurrentReadings> {
        let url = format!("{}/data", self.base_url);
        let payload: DataPayload = self.get_json(&url).await?;

        Ok(CurrentReadings {
            temperature: payload.temp,
            humidity: payload.hum,
            gas: payload.gas,
            water: payload.water,
            motion: payload.motion,
            led: payload.led.unwrap_or(payload.motion),
        })
    }

    async fn day_history(
        &self,
        channel: ChannelId,
        date: NaiveDate,
    ) -> Result<Vec<HistorySample>> {
        let url = self.graph_url(channel, date);
        let records: Vec<GraphRecord> = self.get_json(&url).await?;

        Ok(records
            .iter()
            .map(|record| HistorySample {
                time: record.time.clone(),
                value: record_reading(record, channel),
            })
            .collect())
    }

    async fn set_led(&self, on: bool) -> Result<()> {
        let url = self.led_url(on);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach sensor node at {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body }.into());
        }

        Ok(())
    }
}
