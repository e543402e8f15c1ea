//! Consumers of search and benchmark results.
//!
//! The library never renders anything itself. Whatever displays a best match
//! or charts the timing series implements [`ResultSink`]; [`JsonSink`] is a
//! ready-made sink that writes one JSON document per line.

use std::io::{self, Write};

use serde::Serialize;

use crate::benchmark::{BenchmarkReport, ChartSeries, SuggestionReport};
use crate::search::MatchOutcome;

/// Receives results as they are produced.
pub trait ResultSink {
    /// A best-match query finished.
    fn match_found(&mut self, probe: &str, outcome: &MatchOutcome);

    /// A timed suggestion finished. Defaults to reporting only the match.
    fn suggestion(&mut self, probe: &str, report: &SuggestionReport) {
        self.match_found(probe, &report.outcome);
    }

    /// A benchmark run finished.
    fn benchmark(&mut self, report: &BenchmarkReport);
}

/// Writes newline-delimited JSON.
///
/// Matches are written as `{"probe", "word", "distance"}`, suggestions add the
/// timings, and benchmarks are written as the pair of chart series
/// `[{"label", "points": [[x, y], ...]}, ...]`. The first write error is
/// kept and returned by [`finish`](JsonSink::finish); later records are
/// dropped.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

#[derive(Serialize)]
struct MatchRecord<'a> {
    probe: &'a str,
    word: &'a str,
    distance: Option<usize>,
}

#[derive(Serialize)]
struct SuggestionRecord<'a> {
    probe: &'a str,
    word: &'a str,
    distance: Option<usize>,
    iterative_ms: f64,
    recursive_ms: Option<f64>,
}

impl<W: Write> JsonSink<W> {
    /// Sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush and return the writer, or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_record<T: Serialize>(&mut self, record: &T) {
        if self.error.is_some() {
            return;
        }

        let result = serde_json::to_writer(&mut self.writer, record)
            .map_err(io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));

        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn match_found(&mut self, probe: &str, outcome: &MatchOutcome) {
        self.write_record(&MatchRecord {
            probe,
            word: outcome.word(),
            distance: outcome.distance(),
        });
    }

    fn suggestion(&mut self, probe: &str, report: &SuggestionReport) {
        self.write_record(&SuggestionRecord {
            probe,
            word: report.outcome.word(),
            distance: report.outcome.distance(),
            iterative_ms: report.iterative_ms,
            recursive_ms: report.recursive_ms,
        });
    }

    fn benchmark(&mut self, report: &BenchmarkReport) {
        let series: [ChartSeries; 2] = report.chart_series();
        self.write_record(&series);
    }
}

/// Collects everything it receives, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// `(probe, outcome)` for every match.
    pub matches: Vec<(String, MatchOutcome)>,
    /// Every benchmark report.
    pub benchmarks: Vec<BenchmarkReport>,
}

impl ResultSink for MemorySink {
    fn match_found(&mut self, probe: &str, outcome: &MatchOutcome) {
        self.matches.push((probe.to_string(), outcome.clone()));
    }

    fn benchmark(&mut self, report: &BenchmarkReport) {
        self.benchmarks.push(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{TimingPoint, TimingSeries};
    use crate::distance::DistanceVariant;

    #[test]
    fn test_json_sink_match_lines() {
        let mut sink = JsonSink::new(Vec::new());
        sink.match_found(
            "rumha",
            &MatchOutcome::Found {
                word: "rumah".to_string(),
                distance: 2,
            },
        );
        sink.match_found("zzz", &MatchOutcome::NoCandidate);

        let out = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "{\"probe\":\"rumha\",\"word\":\"rumah\",\"distance\":2}\n\
             {\"probe\":\"zzz\",\"word\":\"\",\"distance\":null}\n"
        );
    }

    #[test]
    fn test_json_sink_benchmark_series() {
        let report = BenchmarkReport {
            probe_len: 1,
            recursive: TimingSeries {
                variant: DistanceVariant::Recursive,
                points: vec![TimingPoint {
                    prefix_len: 1,
                    elapsed_ms: 0.25,
                }],
            },
            iterative: TimingSeries {
                variant: DistanceVariant::Iterative,
                points: vec![TimingPoint {
                    prefix_len: 1,
                    elapsed_ms: 0.5,
                }],
            },
        };

        let mut sink = JsonSink::new(Vec::new());
        sink.benchmark(&report);
        let out = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(
            out.trim_end(),
            r#"[{"label":"Recursive","points":[[1,0.25]]},{"label":"Iterative","points":[[1,0.5]]}]"#
        );
    }

    #[derive(Debug)]
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_sink_reports_first_error() {
        let mut sink = JsonSink::new(FailingWriter);
        sink.match_found("a", &MatchOutcome::NoCandidate);
        sink.match_found("b", &MatchOutcome::NoCandidate);
        let err = sink.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_memory_sink_default_suggestion() {
        let mut sink = MemorySink::default();
        let report = SuggestionReport {
            outcome: MatchOutcome::NoCandidate,
            iterative_ms: 0.1,
            recursive_ms: None,
        };
        sink.suggestion("x", &report);
        assert_eq!(sink.matches, vec![("x".to_string(), MatchOutcome::NoCandidate)]);
    }
}
