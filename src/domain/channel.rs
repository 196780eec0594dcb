// Sensor channel domain model
use serde::Deserialize;
use std::fmt;

/// The fixed set of channels the sensor node reports. Known at startup,
/// never discovered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelId {
    Temperature,
    Humidity,
    Gas,
    Water,
    Motion,
    Led,
}

impl ChannelId {
    pub const ALL: [ChannelId; 6] = [
        ChannelId::Temperature,
        ChannelId::Humidity,
        ChannelId::Gas,
        ChannelId::Water,
        ChannelId::Motion,
        ChannelId::Led,
    ];

    /// Wire/query name, as used in `/graph?sensor=`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelId::Temperature => "temperature",
            ChannelId::Humidity => "humidity",
            ChannelId::Gas => "gas",
            ChannelId::Water => "water",
            ChannelId::Motion => "motion",
            ChannelId::Led => "led",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChannelId::Temperature => "Temperature",
            ChannelId::Humidity => "Humidity",
            ChannelId::Gas => "Gas Level",
            ChannelId::Water => "Rain",
            ChannelId::Motion => "Motion",
            ChannelId::Led => "LED",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ChannelId::Temperature => "°C",
            ChannelId::Humidity => "%",
            ChannelId::Gas => "units",
            ChannelId::Water => "%",
            ChannelId::Motion | ChannelId::Led => "",
        }
    }

    /// Fraction digits used when formatting tile values.
    pub fn precision(&self) -> usize {
        match self {
            ChannelId::Temperature | ChannelId::Humidity => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sensor reading. Boolean channels keep the raw flag; the 0/1
/// encoding happens only at the chart boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Continuous measurement (temperature, humidity).
    Measure(f64),
    /// Discrete level (gas, water).
    Level(i64),
    /// Presence flag (motion, LED).
    Flag(bool),
}

impl Reading {
    pub fn chart_value(&self) -> f64 {
        match *self {
            Reading::Measure(v) => v,
            Reading::Level(v) => v as f64,
            Reading::Flag(on) => {
                if on {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
