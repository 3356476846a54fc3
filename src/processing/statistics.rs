use crate::data::series::Series;

/// Short description of a loaded series, logged after each load.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub start: i64,
    pub end: i64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SeriesSummary {
    /// Returns `None` for an empty series. NaN values are skipped for the
    /// value statistics but still counted.
    pub fn compute(series: &Series) -> Option<Self> {
        let (start, end) = series.time_span()?;

        let finite: Vec<f64> = series.values().filter(|v| v.is_finite()).collect();
        let (min, max, mean) = if finite.is_empty() {
            (f64::NAN, f64::NAN, f64::NAN)
        } else {
            let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
            let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (min, max, finite.iter().sum::<f64>() / finite.len() as f64)
        };

        Some(SeriesSummary {
            count: series.len(),
            start,
            end,
            min,
            max,
            mean,
        })
    }

    /// Time covered by the series in display units.
    pub fn duration(&self, time_divisor: f64) -> f64 {
        (self.end - self.start) as f64 / time_divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_summary() {
        assert_eq!(SeriesSummary::compute(&Series::new("Kd")), None);
    }

    #[test]
    fn summary_of_gain_log() {
        let mut s = Series::new("Kp");
        s.push(0, 1.0);
        s.push(500_000_000, 3.0);
        s.push(2_000_000_000, 2.0);

        let sum = SeriesSummary::compute(&s).unwrap();
        assert_eq!(sum.count, 3);
        assert_eq!(sum.min, 1.0);
        assert_eq!(sum.max, 3.0);
        assert_eq!(sum.mean, 2.0);
        assert_eq!(sum.duration(1e9), 2.0);
    }

    #[test]
    fn nan_values_skip_statistics() {
        let mut s = Series::new("Kp");
        s.push(0, f64::NAN);
        s.push(1, 4.0);
        let sum = SeriesSummary::compute(&s).unwrap();
        assert_eq!(sum.count, 2);
        assert_eq!(sum.min, 4.0);
        assert_eq!(sum.max, 4.0);
    }
}
