use serde::{Deserialize, Serialize};

/// How the zero point of the time axis is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetMode {
    /// One anchor for the whole run: the first timestamp of the first
    /// non-empty file. Later files are shifted by the same amount.
    #[default]
    Shared,
    /// Every file is anchored to its own first row.
    PerSource,
}

/// Zero offset threaded through consecutive loads.
#[derive(Debug, Clone, Default)]
pub struct ZeroOffset {
    mode: OffsetMode,
    anchor: Option<i64>,
}

impl ZeroOffset {
    pub fn new(mode: OffsetMode) -> Self {
        Self { mode, anchor: None }
    }

    pub fn anchor(&self) -> Option<i64> {
        self.anchor
    }

    /// Called before the first row of each file.
    pub fn begin_source(&mut self) {
        if self.mode == OffsetMode::PerSource {
            self.anchor = None;
        }
    }

    /// Shift a raw timestamp, anchoring on it if no anchor is set yet.
    /// `None` when the shifted value does not fit in an `i64`.
    pub fn apply(&mut self, raw: i64) -> Option<i64> {
        let anchor = match self.anchor {
            Some(a) => a,
            None => {
                tracing::debug!("zero offset anchored at {raw} ns");
                self.anchor = Some(raw);
                raw
            }
        };
        raw.checked_sub(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_timestamp_becomes_zero() {
        let mut off = ZeroOffset::new(OffsetMode::Shared);
        off.begin_source();
        assert_eq!(off.apply(1_500), Some(0));
        assert_eq!(off.apply(2_000), Some(500));
        assert_eq!(off.anchor(), Some(1_500));
    }

    #[test]
    fn shared_anchor_survives_new_source() {
        let mut off = ZeroOffset::new(OffsetMode::Shared);
        off.begin_source();
        off.apply(100);
        off.begin_source();
        assert_eq!(off.apply(400), Some(300));
    }

    #[test]
    fn per_source_anchor_resets() {
        let mut off = ZeroOffset::new(OffsetMode::PerSource);
        off.begin_source();
        off.apply(100);
        off.begin_source();
        assert_eq!(off.anchor(), None);
        assert_eq!(off.apply(400), Some(0));
    }

    #[test]
    fn earlier_timestamp_goes_negative() {
        let mut off = ZeroOffset::new(OffsetMode::Shared);
        off.apply(1_000);
        assert_eq!(off.apply(400), Some(-600));
    }

    #[test]
    fn opposite_extremes_do_not_overflow() {
        let mut off = ZeroOffset::new(OffsetMode::Shared);
        assert_eq!(off.apply(-5_000_000_000_000_000_000), Some(0));
        assert_eq!(off.apply(5_000_000_000_000_000_000), None);
        assert_eq!(off.anchor(), Some(-5_000_000_000_000_000_000));
    }

    #[test]
    fn default_mode_is_shared() {
        assert_eq!(OffsetMode::default(), OffsetMode::Shared);
    }
}
