use std::{fmt::Display, time::Duration};

/// A snapshot of the progress of a crack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    /// The last candidate tested.
    pub last: String,
    /// The number of candidates tested so far, including the skipped ones when resuming.
    pub tried: u64,
    /// The number of candidates left to test.
    pub remaining: u64,
    /// The time elapsed since the start of the crack.
    pub elapsed: Duration,
}

impl Progress {
    /// The ratio of the search space already covered, between 0 and 1.
    pub fn ratio(&self) -> f64 {
        let total = self.tried + self.remaining;
        if total == 0 {
            return 1.;
        }

        self.tried as f64 / total as f64
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "last={} tried={} remains={} elapsed={}",
            self.last,
            self.tried,
            self.remaining,
            self.elapsed.as_secs()
        )
    }
}

/// An event to track a crack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The crack started. `start` is the first state tested.
    Started { total: u64, start: u64 },
    /// Emitted every time the progress interval is crossed.
    Progress(Progress),
}
