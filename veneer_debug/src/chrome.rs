// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Render passes carry no clock, so each event's timestamp is its position in
//! the recording, one microsecond apart. Passes show up as slices and draws
//! as instants inside them.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for (ts, recorded) in (0_u64..).zip(decode(bytes)) {
        let event = match recorded {
            RecordedEvent::PassBegin(e) => json!({
                "ph": "B",
                "name": "RenderPass",
                "cat": "Pass",
                "ts": ts,
                "pid": 0,
                "tid": 0,
                "args": {
                    "pass_index": e.pass_index,
                    "pending": e.pending,
                }
            }),
            RecordedEvent::PassEnd(e) => json!({
                "ph": "E",
                "name": "RenderPass",
                "cat": "Pass",
                "ts": ts,
                "pid": 0,
                "tid": 0,
                "args": {
                    "pass_index": e.pass_index,
                    "drawn": e.drawn,
                    "skipped": e.skipped,
                }
            }),
            RecordedEvent::Draw(e) => json!({
                "ph": "i",
                "name": "Draw",
                "cat": "Entity",
                "ts": ts,
                "pid": 0,
                "tid": 0,
                "s": "t",
                "args": {
                    "pass_index": e.pass_index,
                    "entity": e.entity.index(),
                    "generation": e.entity.generation(),
                    "writes": e.writes,
                    "rect": [e.rect.x0, e.rect.y0, e.rect.x1, e.rect.y1],
                }
            }),
            RecordedEvent::DrawSkipped(e) => json!({
                "ph": "i",
                "name": "DrawSkipped",
                "cat": "Entity",
                "ts": ts,
                "pid": 0,
                "tid": 0,
                "s": "t",
                "args": {
                    "pass_index": e.pass_index,
                    "entity": e.entity.index(),
                    "reason": format!("{:?}", e.reason),
                }
            }),
            RecordedEvent::ChannelWrites { pass_index, writes } => {
                let channels: Vec<&str> = writes.iter().map(|w| w.channel.css_name()).collect();
                json!({
                    "ph": "i",
                    "name": "ChannelWrites",
                    "cat": "Rich",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "pass_index": pass_index,
                        "entity": writes.first().map(|w| w.entity_index),
                        "channels": channels,
                    }
                })
            }
        };
        events.push(event);
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}
