// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as little-endian records, each led by a one-byte tag. [`decode`]
//! reads them back as an iterator of [`RecordedEvent`].

use kurbo::Rect;
use veneer_core::style::StyleChannel;
use veneer_core::trace::{
    ChannelWrite, DrawEvent, DrawSkippedEvent, PassBeginEvent, PassEndEvent, SkipReason,
    TraceSink,
};
use veneer_core::visual::EntityId;

const TAG_PASS_BEGIN: u8 = 1;
const TAG_DRAW: u8 = 2;
const TAG_DRAW_SKIPPED: u8 = 3;
const TAG_PASS_END: u8 = 4;
const TAG_CHANNEL_WRITES: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Counts saturate at `u32::MAX`.
    fn write_count(&mut self, n: usize) {
        self.write_u32(u32::try_from(n).unwrap_or(u32::MAX));
    }

    fn write_entity(&mut self, id: EntityId) {
        self.write_u32(id.index());
        self.write_u32(id.generation());
    }
}

impl TraceSink for RecorderSink {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        self.write_u8(TAG_PASS_BEGIN);
        self.write_u64(e.pass_index);
        self.write_count(e.pending);
    }

    fn on_draw(&mut self, e: &DrawEvent) {
        self.write_u8(TAG_DRAW);
        self.write_u64(e.pass_index);
        self.write_entity(e.entity);
        self.write_u32(e.writes);
        self.write_f64(e.rect.x0);
        self.write_f64(e.rect.y0);
        self.write_f64(e.rect.x1);
        self.write_f64(e.rect.y1);
    }

    fn on_draw_skipped(&mut self, e: &DrawSkippedEvent) {
        self.write_u8(TAG_DRAW_SKIPPED);
        self.write_u64(e.pass_index);
        self.write_entity(e.entity);
        self.write_u8(match e.reason {
            SkipReason::Detached => 0,
            SkipReason::Removed => 1,
        });
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        self.write_u8(TAG_PASS_END);
        self.write_u64(e.pass_index);
        self.write_count(e.drawn);
        self.write_count(e.skipped);
    }

    fn on_channel_writes(&mut self, pass_index: u64, writes: &[ChannelWrite]) {
        self.write_u8(TAG_CHANNEL_WRITES);
        self.write_u64(pass_index);
        let writes = &writes[..writes.len().min(u32::MAX as usize)];
        self.write_count(writes.len());
        for w in writes {
            self.write_u32(w.entity_index);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "there are fewer than 256 style channels"
            )]
            self.write_u8(w.channel.index() as u8);
        }
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`PassBeginEvent`].
    PassBegin(PassBeginEvent),
    /// A [`DrawEvent`].
    Draw(DrawEvent),
    /// A [`DrawSkippedEvent`].
    DrawSkipped(DrawSkippedEvent),
    /// A [`PassEndEvent`].
    PassEnd(PassEndEvent),
    /// Channels written for one entity.
    ChannelWrites {
        /// Pass counter.
        pass_index: u64,
        /// The writes, in draw order.
        writes: Vec<ChannelWrite>,
    },
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated record or unknown tag.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.take().map(f64::from_le_bytes)
    }

    fn read_count(&mut self) -> Option<usize> {
        usize::try_from(self.read_u32()?).ok()
    }

    fn read_entity(&mut self) -> Option<EntityId> {
        Some(EntityId::from_raw(self.read_u32()?, self.read_u32()?))
    }

    fn decode_pass_begin(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PassBegin(PassBeginEvent {
            pass_index: self.read_u64()?,
            pending: self.read_count()?,
        }))
    }

    fn decode_draw(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Draw(DrawEvent {
            pass_index: self.read_u64()?,
            entity: self.read_entity()?,
            writes: self.read_u32()?,
            rect: Rect::new(
                self.read_f64()?,
                self.read_f64()?,
                self.read_f64()?,
                self.read_f64()?,
            ),
        }))
    }

    fn decode_draw_skipped(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::DrawSkipped(DrawSkippedEvent {
            pass_index: self.read_u64()?,
            entity: self.read_entity()?,
            reason: match self.read_u8()? {
                0 => SkipReason::Detached,
                _ => SkipReason::Removed,
            },
        }))
    }

    fn decode_pass_end(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PassEnd(PassEndEvent {
            pass_index: self.read_u64()?,
            drawn: self.read_count()?,
            skipped: self.read_count()?,
        }))
    }

    fn decode_channel_writes(&mut self) -> Option<RecordedEvent> {
        let pass_index = self.read_u64()?;
        let count = self.read_count()?;
        let mut writes = Vec::with_capacity(count.min(StyleChannel::COUNT));
        for _ in 0..count {
            let entity_index = self.read_u32()?;
            let channel = *StyleChannel::ALL.get(usize::from(self.read_u8()?))?;
            writes.push(ChannelWrite {
                entity_index,
                channel,
            });
        }
        Some(RecordedEvent::ChannelWrites { pass_index, writes })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_u8()? {
            TAG_PASS_BEGIN => self.decode_pass_begin(),
            TAG_DRAW => self.decode_draw(),
            TAG_DRAW_SKIPPED => self.decode_draw_skipped(),
            TAG_PASS_END => self.decode_pass_end(),
            TAG_CHANNEL_WRITES => self.decode_channel_writes(),
            _ => None, // unknown tag
        }
    }
}

#[cfg(test)]
mod tests {
    use veneer_core::draw::NoopListener;
    use veneer_core::node::MemoryNode;
    use veneer_core::platform::Support;
    use veneer_core::stage::Stage;
    use veneer_core::trace::Tracer;

    use super::*;

    fn record_passes() -> RecorderSink {
        let mut stage = Stage::new(Support::new(true, ""));
        let a = stage.spawn(MemoryNode::new());
        let b = stage.spawn(MemoryNode::detached());
        stage.set_position(a, 4.0, 8.0);
        stage.set_size(a, 2.0, 2.0);
        stage.set_visible(b, false);

        let mut rec = RecorderSink::new();
        stage.render_pass(&mut NoopListener, &mut Tracer::new(&mut rec));
        rec
    }

    #[test]
    fn records_a_full_pass() {
        let rec = record_passes();
        let events: Vec<_> = decode(rec.as_bytes()).collect();

        match &events[..] {
            [
                RecordedEvent::PassBegin(begin),
                RecordedEvent::Draw(draw),
                RecordedEvent::ChannelWrites { writes, .. },
                RecordedEvent::DrawSkipped(skipped),
                RecordedEvent::PassEnd(end),
            ] => {
                assert_eq!(begin.pending, 2);
                assert_eq!(draw.entity.index(), 0);
                assert_eq!(draw.rect, Rect::new(4.0, 8.0, 6.0, 10.0));
                assert_eq!(writes.len(), draw.writes as usize);
                assert!(
                    writes.iter().any(|w| w.channel == StyleChannel::Transform),
                    "transform written on first draw"
                );
                assert_eq!(skipped.entity.index(), 1);
                assert_eq!(skipped.reason, SkipReason::Detached);
                assert_eq!((end.drawn, end.skipped), (1, 1));
            }
            other => panic!("unexpected event sequence: {other:?}"),
        }
    }

    #[test]
    fn truncated_recording_stops_cleanly() {
        let rec = record_passes();
        let bytes = rec.as_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 3]).collect();
        assert_eq!(events.len(), 4, "last record dropped");
    }

    #[test]
    fn unknown_tag_stops_iteration() {
        assert_eq!(decode(&[0xFF, 1, 2, 3]).count(), 0);
    }
}
