//! Timing series produced by the benchmark harness.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceVariant;

/// One timed scan: prefix length and wall-clock milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    /// Number of probe characters scanned, starting at 1.
    pub prefix_len: usize,
    /// Elapsed time for the full scan, sub-millisecond precision.
    pub elapsed_ms: f64,
}

/// Timings for one distance variant, ordered by increasing prefix length.
///
/// The recursive series stops at its length cutoff; lengths past it are
/// absent rather than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSeries {
    /// Variant that produced these timings.
    pub variant: DistanceVariant,
    /// Points in strictly increasing `prefix_len` order.
    pub points: Vec<TimingPoint>,
}

impl TimingSeries {
    /// Empty series for `variant`.
    pub fn new(variant: DistanceVariant) -> Self {
        Self {
            variant,
            points: Vec::new(),
        }
    }

    /// Chart label (`"Recursive"` or `"Iterative"`).
    pub fn label(&self) -> &'static str {
        self.variant.label()
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Elapsed milliseconds at `prefix_len`, or `None` if not computed.
    pub fn elapsed_at(&self, prefix_len: usize) -> Option<f64> {
        self.points
            .iter()
            .find(|point| point.prefix_len == prefix_len)
            .map(|point| point.elapsed_ms)
    }

    /// Convert to the `{label, points: [(x, y)]}` shape plotting code expects.
    pub fn to_chart(&self) -> ChartSeries {
        ChartSeries {
            label: self.label().to_string(),
            points: self
                .points
                .iter()
                .map(|point| (point.prefix_len, point.elapsed_ms))
                .collect(),
        }
    }
}

/// A labelled `(x, y)` series ready for a charting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// `"Recursive"` or `"Iterative"`.
    pub label: String,
    /// `(prefix length, elapsed ms)` pairs.
    pub points: Vec<(usize, f64)>,
}

/// Both timing series from one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Probe length in characters; the x-range is `1..=probe_len`.
    pub probe_len: usize,
    /// Recursive-variant timings, truncated at the cutoff.
    pub recursive: TimingSeries,
    /// Iterative-variant timings, one point per prefix length.
    pub iterative: TimingSeries,
}

impl BenchmarkReport {
    /// Series for `variant`.
    pub fn series(&self, variant: DistanceVariant) -> &TimingSeries {
        match variant {
            DistanceVariant::Recursive => &self.recursive,
            DistanceVariant::Iterative => &self.iterative,
        }
    }

    /// Both series in chart form, recursive first.
    pub fn chart_series(&self) -> [ChartSeries; 2] {
        [self.recursive.to_chart(), self.iterative.to_chart()]
    }

    /// Rows aligned by prefix length: `(prefix_len, recursive_ms, iterative_ms)`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Option<f64>, Option<f64>)> + '_ {
        (1..=self.probe_len).map(move |len| {
            (
                len,
                self.recursive.elapsed_at(len),
                self.iterative.elapsed_at(len),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(variant: DistanceVariant, lens: &[usize]) -> TimingSeries {
        TimingSeries {
            variant,
            points: lens
                .iter()
                .map(|&prefix_len| TimingPoint {
                    prefix_len,
                    elapsed_ms: prefix_len as f64 * 0.5,
                })
                .collect(),
        }
    }

    #[test]
    fn test_rows_mark_missing_recursive_points() {
        let report = BenchmarkReport {
            probe_len: 3,
            recursive: series(DistanceVariant::Recursive, &[1, 2]),
            iterative: series(DistanceVariant::Iterative, &[1, 2, 3]),
        };

        let rows: Vec<_> = report.rows().collect();
        assert_eq!(
            rows,
            vec![
                (1, Some(0.5), Some(0.5)),
                (2, Some(1.0), Some(1.0)),
                (3, None, Some(1.5)),
            ]
        );
    }

    #[test]
    fn test_chart_shape() {
        let chart = series(DistanceVariant::Recursive, &[1, 2]).to_chart();
        assert_eq!(chart.label, "Recursive");
        assert_eq!(chart.points, vec![(1, 0.5), (2, 1.0)]);

        let json = serde_json::to_string(&chart).unwrap();
        assert_eq!(json, r#"{"label":"Recursive","points":[[1,0.5],[2,1.0]]}"#);
    }
}
