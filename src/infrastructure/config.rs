use serde::Deserialize;

use crate::domain::channel::ChannelId;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub node: NodeSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NodeSettings {
    /// Base URL of the sensor node, e.g. `http://192.168.1.50`.
    pub base_url: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// LED state to restore on startup; leave unset to not touch the relay.
    #[serde(default)]
    pub led_on_start: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    /// Points kept per channel, shared by every series and the live chart.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Channel shown on the live chart.
    #[serde(default = "default_live_channel")]
    pub live_channel: ChannelId,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            live_channel: default_live_channel(),
        }
    }
}

fn default_poll_interval() -> u64 {
    5
}

fn default_capacity() -> usize {
    60
}

fn default_live_channel() -> ChannelId {
    ChannelId::Temperature
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [node]
            base_url = "http://192.168.1.50"
            "#,
        )
        .unwrap();

        assert_eq!(config.node.poll_interval_secs, 5);
        assert_eq!(config.node.led_on_start, None);
        assert_eq!(config.display.capacity, 60);
        assert_eq!(config.display.live_channel, ChannelId::Temperature);
    }

    #[test]
    fn test_explicit_values_win() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [node]
            base_url = "http://sensors.local"
            poll_interval_secs = 2
            led_on_start = true

            [display]
            capacity = 30
            live_channel = "motion"
            "#,
        )
        .unwrap();

        assert_eq!(config.node.poll_interval_secs, 2);
        assert_eq!(config.node.led_on_start, Some(true));
        assert_eq!(config.display.capacity, 30);
        assert_eq!(config.display.live_channel, ChannelId::Motion);
    }
}
