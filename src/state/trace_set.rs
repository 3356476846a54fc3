use crate::config::TraceConfig;
use crate::data::loader;
use crate::data::offset::ZeroOffset;
use crate::data::series::Series;
use crate::error::LoadError;
use crate::processing::statistics::SeriesSummary;

pub const TARGET_LABEL: &str = "Reference";
pub const ACTUAL_LABEL: &str = "Actual pose";
pub const KP_LABEL: &str = "Kp";
pub const KD_LABEL: &str = "Kd";

/// Everything read from disk for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSet {
    pub target: Series,
    pub actual: Series,
    pub kp: Series,
    pub kd: Series,
}

impl TraceSet {
    /// Load the position trace, then Kp, then Kd. The zero offset is shared
    /// across the three files unless the config asks for per-file anchors.
    pub fn load(config: &TraceConfig) -> Result<Self, LoadError> {
        let mut offset = ZeroOffset::new(config.offset_mode);

        let pos = &config.position;
        let mut position = loader::load_columns(
            &pos.path,
            &[pos.target_column, pos.actual_column],
            &mut offset,
        )?
        .into_iter();
        let mut target = position.next().unwrap_or_default();
        let mut actual = position.next().unwrap_or_default();

        let mut kp = loader::load(&config.kp.path, config.kp.column, &mut offset)?;
        let mut kd = loader::load(&config.kd.path, config.kd.column, &mut offset)?;

        target.label = TARGET_LABEL.to_string();
        actual.label = ACTUAL_LABEL.to_string();
        kp.label = KP_LABEL.to_string();
        kd.label = KD_LABEL.to_string();

        let traces = Self { target, actual, kp, kd };
        traces.log_summary(config.time_divisor);
        Ok(traces)
    }

    pub fn all(&self) -> [&Series; 4] {
        [&self.target, &self.actual, &self.kp, &self.kd]
    }

    fn log_summary(&self, time_divisor: f64) {
        for s in self.all() {
            match SeriesSummary::compute(s) {
                Some(sum) => tracing::info!(
                    "{}: {} samples over {:.3} s, range [{:.4}, {:.4}], mean {:.4}",
                    s.label,
                    sum.count,
                    sum.duration(time_divisor),
                    sum.min,
                    sum.max,
                    sum.mean
                ),
                None => tracing::info!("{}: no samples", s.label),
            }
        }
    }
}
