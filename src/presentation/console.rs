// Terminal dashboard surface
use crate::domain::dashboard::{ChartFrame, TileData};
use crate::presentation::chart::{ChartBackend, ChartInstance};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Prints the tile cards, one row per channel.
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn render_tiles(&self, tiles: &[TileData]) {
        for tile in tiles {
            println!("{:<12} {}", tile.title, tile.value_text());
        }
        println!();
    }
}

/// Chart backend that redraws a unicode sparkline on every change.
pub struct SparklineBackend;

struct SparklineChart {
    title: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl SparklineChart {
    fn draw(&self) {
        if self.values.is_empty() {
            return;
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let line: String = self
            .values
            .iter()
            .map(|&v| level_char(v, min, max))
            .collect();

        let first = self.labels.first().map(String::as_str).unwrap_or("");
        let last = self.labels.last().map(String::as_str).unwrap_or("");
        println!("{} [{} .. {}]", self.title, first, last);
        println!("{line}");
    }
}

fn level_char(value: f64, min: f64, max: f64) -> char {
    let span = max - min;
    if span <= f64::EPSILON {
        return SPARK_LEVELS[0];
    }
    let idx = ((value - min) / span * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
    SPARK_LEVELS[idx.min(SPARK_LEVELS.len() - 1)]
}

impl ChartBackend for SparklineBackend {
    fn create(&mut self, frame: ChartFrame) -> Box<dyn ChartInstance> {
        let chart = SparklineChart {
            title: frame.title,
            labels: frame.labels,
            values: frame.values,
        };
        chart.draw();
        Box::new(chart)
    }
}

impl ChartInstance for SparklineChart {
    fn push(&mut self, label: String, value: f64) {
        self.labels.push(label);
        self.values.push(value);
        self.draw();
    }

    fn shift(&mut self) {
        if !self.values.is_empty() {
            self.labels.remove(0);
            self.values.remove(0);
        }
    }

    fn destroy(&mut self) {
        self.labels.clear();
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_char_spans_the_scale() {
        assert_eq!(level_char(0.0, 0.0, 7.0), '▁');
        assert_eq!(level_char(7.0, 0.0, 7.0), '█');
        assert_eq!(level_char(3.5, 0.0, 7.0), '▅');
    }

    #[test]
    fn test_flat_series_stays_on_the_baseline() {
        assert_eq!(level_char(5.0, 5.0, 5.0), '▁');
    }

    #[test]
    fn test_shift_and_push_keep_labels_and_values_aligned() {
        let mut chart = SparklineChart {
            title: "Temperature".to_string(),
            labels: vec!["a".to_string(), "b".to_string()],
            values: vec![1.0, 2.0],
        };

        chart.shift();
        chart.push("c".to_string(), 3.0);

        assert_eq!(chart.labels, vec!["b", "c"]);
        assert_eq!(chart.values, vec![2.0, 3.0]);
    }
}
