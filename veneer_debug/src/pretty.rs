// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use veneer_core::trace::{
    ChannelWrite, DrawEvent, DrawSkippedEvent, PassBeginEvent, PassEndEvent, SkipReason,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn reason_name(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::Detached => "detached",
        SkipReason::Removed => "removed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] pass={} pending={}",
            e.pass_index, e.pending,
        );
    }

    fn on_draw(&mut self, e: &DrawEvent) {
        let r = e.rect;
        let _ = writeln!(
            self.writer,
            "[draw] pass={} entity={:?} writes={} rect=({}, {})..({}, {})",
            e.pass_index, e.entity, e.writes, r.x0, r.y0, r.x1, r.y1,
        );
    }

    fn on_draw_skipped(&mut self, e: &DrawSkippedEvent) {
        let _ = writeln!(
            self.writer,
            "[skip] pass={} entity={:?} reason={}",
            e.pass_index,
            e.entity,
            reason_name(e.reason),
        );
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:end] pass={} drawn={} skipped={}",
            e.pass_index, e.drawn, e.skipped,
        );
    }

    fn on_channel_writes(&mut self, pass_index: u64, writes: &[ChannelWrite]) {
        let Some(first) = writes.first() else {
            return;
        };
        let names: Vec<&str> = writes.iter().map(|w| w.channel.css_name()).collect();
        let _ = writeln!(
            self.writer,
            "[channels] pass={pass_index} slot={} {}",
            first.entity_index,
            names.join(","),
        );
    }
}
