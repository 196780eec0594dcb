// Demo data generator - fallback readings when the node is unreachable
use rand::Rng;
use std::f64::consts::PI;

use crate::application::sensor_gateway::{CurrentReadings, HistorySample};
use crate::domain::channel::{ChannelId, Reading};

#[derive(Debug, Clone, Copy, Default)]
pub struct DemoDataSource;

impl DemoDataSource {
    pub fn new() -> Self {
        Self
    }

    /// Synthetic snapshot in the same ranges the real sensors report.
    pub fn current_readings(&self) -> CurrentReadings {
        let mut rng = rand::thread_rng();
        let motion = rng.gen_bool(0.3);
        CurrentReadings {
            temperature: round1(rng.gen_range(20.0..30.0)),
            humidity: round1(rng.gen_range(40.0..70.0)),
            gas: rng.gen_range(100..600),
            water: rng.gen_range(0..100),
            motion,
            // The node couples its LED to the PIR, demo data does the same
            led: motion,
        }
    }

    /// Synthetic hourly day curve. Temperature and humidity follow a
    /// diurnal wave, the rest stay in their sensor ranges.
    pub fn day_curve(&self, channel: ChannelId) -> Vec<HistorySample> {
        let mut rng = rand::thread_rng();
        (0..24)
            .map(|hour| {
                let value = match channel {
                    ChannelId::Temperature => Reading::Measure(round1(
                        16.0 + 8.0 * ((hour - 6) as f64 * PI / 12.0).sin()
                            + rng.gen_range(-1.0..1.0),
                    )),
                    ChannelId::Humidity => Reading::Measure(round1(
                        50.0 + 20.0 * ((hour - 12) as f64 * PI / 12.0).cos()
                            + rng.gen_range(-5.0..5.0),
                    )),
                    ChannelId::Gas => Reading::Level(rng.gen_range(100..300)),
                    ChannelId::Water => Reading::Level(if rng.gen_bool(0.2) {
                        rng.gen_range(1..100)
                    } else {
                        0
                    }),
                    ChannelId::Motion | ChannelId::Led => Reading::Flag(rng.gen_bool(0.2)),
                };
                HistorySample {
                    time: format!("{hour:02}:00"),
                    value,
                }
            })
            .collect()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
