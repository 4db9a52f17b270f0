/// Identifies one scheduled commit. Only the most recent ticket fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DebounceTicket(u64);

/// Bounded-delay coalescer for rapid input.
///
/// Holds the latest value and a generation counter; the timer itself lives
/// with the caller (a `setTimeout` in the browser). Each `push` supersedes
/// the previous ticket, so a timer that fires late for an old ticket is a
/// no-op.
#[derive(Clone, Debug)]
pub(crate) struct Debouncer<T> {
    delay_ms: i32,
    generation: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> i32 {
        self.delay_ms
    }

    /// Replace the pending value and restart the quiet period.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some((self.generation, value));
        DebounceTicket(self.generation)
    }

    /// Timer callback: yields the value only for the latest ticket.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        match &self.pending {
            Some((generation, _)) if *generation == ticket.0 => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Drop the pending value; outstanding tickets become no-ops.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
