/// Generates `<prefix>-<millis>` ids that never repeat within a session,
/// even when two items are created in the same millisecond.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    last: i64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        IdGenerator { prefix, last: 0 }
    }

    /// Next id for the given wall-clock milliseconds
    pub fn next_id(&mut self, now_millis: i64) -> String {
        let stamp = if now_millis > self.last {
            now_millis
        } else {
            self.last + 1
        };
        self.last = stamp;
        format!("{}-{}", self.prefix, stamp)
    }
}
