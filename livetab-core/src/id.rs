//! Node identity allocation

use livetab_types::NodeId;
use parking_lot::Mutex;

/// Issues strictly increasing node identifiers.
///
/// One allocator is owned by the [`Ui`](crate::Ui) context; widget
/// constructors may run on any thread before a session exists, so the
/// counter sits behind a mutex.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: Mutex<u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier. The first call returns `1`.
    pub fn next(&self) -> NodeId {
        let mut last = self.last.lock();
        *last += 1;
        NodeId(*last)
    }
}
