/// Monotonic id allocator. Ids start at zero and are never handed out twice,
/// even after the entity they named has been deleted.
#[derive(Debug, Default)]
pub(crate) struct IdCounter {
    next: u64,
}

impl IdCounter {
    /// Returns the next id and advances the counter.
    pub(crate) fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub(crate) fn peek(&self) -> u64 {
        self.next
    }
}
