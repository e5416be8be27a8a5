//! JSON line feed - a `BoardObserver` that writes events to any sink.
//!
//! Presentation events are fire-and-forget: a sink that stops accepting
//! bytes must not take the game down with it, so write failures are
//! swallowed here.

use std::io::Write;

use clusterfall_core::mission::Mission;
use clusterfall_core::observe::BoardObserver;
use clusterfall_types::{PieceColor, Shape};

use crate::events::FeedEvent;

/// Line-delimited JSON event sink.
#[derive(Debug)]
pub struct JsonFeed<W: Write> {
    sink: W,
}

impl<W: Write> JsonFeed<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Unwrap the sink (e.g. to flush a buffered writer on shutdown).
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, event: &FeedEvent) {
        if let Ok(line) = serde_json::to_string(event) {
            let _ = writeln!(self.sink, "{line}");
        }
    }
}

impl<W: Write> BoardObserver for JsonFeed<W> {
    fn on_piece_count_changed(&mut self, shape: Shape, count: u32) {
        self.emit(&FeedEvent::piece_count(shape, count));
    }

    fn on_next_preview(&mut self, shape: Shape, color: PieceColor) {
        self.emit(&FeedEvent::next_preview(shape, color));
    }

    fn on_score_changed(&mut self, score: u32) {
        self.emit(&FeedEvent::Score { score });
    }

    fn on_mission_changed(&mut self, mission: &Mission) {
        self.emit(&FeedEvent::mission(mission));
    }

    fn on_mission_time_changed(&mut self, seconds_left: f32) {
        self.emit(&FeedEvent::MissionTime { seconds_left });
    }

    fn on_game_over(&mut self) {
        self.emit(&FeedEvent::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_json_object_per_line() {
        let mut feed = JsonFeed::new(Vec::new());
        feed.on_score_changed(33);
        feed.on_game_over();

        let out = String::from_utf8(feed.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: FeedEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, FeedEvent::Score { score: 33 });
        let second: FeedEvent = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second, FeedEvent::GameOver);
    }

    /// Sink that always fails.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("broken"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("broken"))
        }
    }

    #[test]
    fn sink_failures_are_swallowed() {
        let mut feed = JsonFeed::new(BrokenSink);
        // Must not panic.
        feed.on_score_changed(1);
        feed.on_game_over();
    }
}
