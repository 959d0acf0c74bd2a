//! Transmit-side timing model: the edges a remote produces on the receiver pin.

use super::{CODE_BITS, Edge, Ticks, us_to_ticks};

const HEADER_MARK: Ticks = us_to_ticks(9_000);
const HEADER_SPACE: Ticks = us_to_ticks(4_500);
const REPEAT_SPACE: Ticks = us_to_ticks(2_250);
const BIT_MARK: Ticks = us_to_ticks(560);
const ZERO_SPACE: Ticks = us_to_ticks(560);
const ONE_SPACE: Ticks = us_to_ticks(1_690);

/// Elapsed time reported for the first edge after an idle line.
const IDLE: Ticks = Ticks::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Word(u32),
    Repeat,
}

/// Iterator over the edges of one remote frame.
///
/// ```ignore
/// for edge in NecFrame::word(0x00FF_1AE5) {
///     decoder.feed(edge);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NecFrame {
    kind: FrameKind,
    index: u8,
}

impl NecFrame {
    /// Full frame carrying `word`, sent MSB first.
    pub const fn word(word: u32) -> Self {
        Self {
            kind: FrameKind::Word(word),
            index: 0,
        }
    }

    /// Repeat marker sent while a button is held.
    pub const fn repeat() -> Self {
        Self {
            kind: FrameKind::Repeat,
            index: 0,
        }
    }

    const fn len(&self) -> u8 {
        match self.kind {
            // idle->header mark, header space, bits (mark + space), stop mark
            FrameKind::Word(_) => 3 + 2 * CODE_BITS + 1,
            FrameKind::Repeat => 4,
        }
    }

    fn edge_at(&self, index: u8) -> Edge {
        match (self.kind, index) {
            (_, 0) => Edge::falling(IDLE),
            (_, 1) => Edge::rising(HEADER_MARK),
            (FrameKind::Repeat, 2) => Edge::falling(REPEAT_SPACE),
            (FrameKind::Repeat, _) => Edge::rising(BIT_MARK),
            (FrameKind::Word(_), 2) => Edge::falling(HEADER_SPACE),
            (FrameKind::Word(word), index) => {
                let offset = index - 3;
                if offset % 2 == 0 {
                    // mark before a bit, or the stop mark
                    Edge::rising(BIT_MARK)
                } else {
                    let bit = offset / 2;
                    let set = word & (1 << (CODE_BITS - 1 - bit)) != 0;
                    Edge::falling(if set { ONE_SPACE } else { ZERO_SPACE })
                }
            }
        }
    }
}

impl Iterator for NecFrame {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        if self.index >= self.len() {
            return None;
        }
        let edge = self.edge_at(self.index);
        self.index += 1;
        Some(edge)
    }
}
