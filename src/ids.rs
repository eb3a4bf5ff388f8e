use time::OffsetDateTime;

/// Hands out message ids based on the wall clock in milliseconds.
///
/// Ids are strictly increasing: when two messages land in the same millisecond, or the
/// clock steps backwards, the next id is `last + 1`.
#[derive(Debug, Default, Clone)]
pub struct MessageIdGenerator {
    last: u64,
}

impl MessageIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start after `last`, typically the largest id found in a restored snapshot.
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> u64 {
        self.next_from_clock(now_millis())
    }

    fn next_from_clock(&mut self, clock_ms: u64) -> u64 {
        let id = if clock_ms > self.last {
            clock_ms
        } else if let Some(next) = self.last.checked_add(1) {
            next
        } else {
            // Id space exhausted by a restored snapshot; fall back to the clock.
            tracing::warn!(last = self.last, "message ids exhausted, restarting from clock");
            clock_ms
        };
        self.last = id;
        id
    }
}

fn now_millis() -> u64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    u64::try_from(millis).unwrap_or_default()
}
