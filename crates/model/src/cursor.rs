/// Offset-based pagination cursor for streaming a table in fixed pages.
///
/// Offset paging assumes the source table is a stable snapshot for the
/// duration of the run: concurrent inserts or deletes on the source can
/// make pages skip or repeat rows. That is accepted for a one-shot offline
/// migration; a mutable source would need a monotonic-key cursor instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetCursor {
    pub offset: usize,
    pub batch_size: usize,
}

impl OffsetCursor {
    pub fn new(batch_size: usize) -> Self {
        Self {
            offset: 0,
            batch_size,
        }
    }

    /// Cursor for the page after this one.
    pub fn advance(self) -> Self {
        Self {
            offset: self.offset + self.batch_size,
            batch_size: self.batch_size,
        }
    }
}
