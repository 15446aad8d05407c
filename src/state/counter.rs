//! Stepped count-up animation for statistic counters.
//!
//! The counter advances by a fixed increment per tick so the animation ends
//! after roughly `duration / tick` steps regardless of the target size. The
//! displayed value is the floor of the running total, and the final frame
//! always shows the exact target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// One rendered frame of a counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    /// Intermediate value; keep ticking.
    Running(i64),
    /// Exact target; stop the timer.
    Finished(i64),
}

impl CounterFrame {
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Running(v) | Self::Finished(v) => v,
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = (f64::from(duration_ms) / f64::from(tick_ms.max(1))).max(1.0);
        Self { target, increment: target as f64 / steps, current: 0.0, finished: false }
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> i64 {
        self.target
    }

    #[cfg(test)]
    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick. Ticking a finished animation keeps returning the
    /// target.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn tick(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Finished(self.target);
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            return CounterFrame::Finished(self.target);
        }
        CounterFrame::Running(self.current.floor() as i64)
    }
}

/// Parse a `data-target` attribute the way the page authors write it:
/// leading whitespace, an optional sign, then digits. Trailing decoration
/// such as `"500+"` is ignored. Returns `None` when no digits lead.
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let Ok(magnitude) = rest[..digits_len].parse::<i64>() else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}
