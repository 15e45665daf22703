/// Issues record ids as decimal epoch-millisecond strings.
///
/// Ids stay sortable as integers (newest-first views rely on that) but never
/// repeat: when the clock has not moved past the last issued value, the next
/// id is `last + 1`.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(chrono::Utc::now().timestamp_millis()).to_string()
    }

    fn next_at(&mut self, now_ms: i64) -> i64 {
        let next = if now_ms > self.last { now_ms } else { self.last + 1 };
        self.last = next;
        next
    }

    /// Moves the floor past an id already in storage. Non-numeric ids are ignored.
    pub fn observe(&mut self, id: &str) {
        if let Ok(value) = id.parse::<i64>() {
            self.last = self.last.max(value);
        }
    }
}
