//! Mapping of dates and temperatures onto plot-area pixels.

use crate::config::ChartConfig;
use crate::record::WeatherRecord;
use crate::ticks::{day_ticks, linear_ticks};
use chrono::{Datelike, Days, NaiveDate};

/// Smallest domain span a linear scale accepts before padding.
const MIN_SPAN: f64 = 1e-9;

/// Inner drawing area: the SVG size minus the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Derive the drawing area from the measured container width and the
    /// configured outer height. Never negative.
    pub fn from_outer(outer_width: f64, config: &ChartConfig) -> Self {
        let m = &config.margin;
        Self {
            width: (outer_width - m.left - m.right).max(0.0),
            height: (config.height - m.top - m.bottom).max(0.0),
        }
    }
}

/// Continuous linear map from `domain` onto `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// A zero-width domain is widened by half a unit either side so the
    /// mapping never divides by zero.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, d1) = domain;
        let domain = if (d1 - d0).abs() < MIN_SPAN {
            (d0 - 0.5, d1 + 0.5)
        } else {
            domain
        };
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Calendar-day scale. Dates are mapped by their day number, so the
/// mapping is linear in elapsed days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    /// When `start == end` the domain is padded by one day either side so a
    /// lone record lands in the middle of the range.
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> Self {
        let (start, end) = if start == end {
            (
                start.checked_sub_days(Days::new(1)).unwrap_or(start),
                end.checked_add_days(Days::new(1)).unwrap_or(end),
            )
        } else {
            (start, end)
        };
        Self {
            start,
            end,
            linear: LinearScale::new((day_number(start), day_number(end)), range),
        }
    }

    #[inline]
    pub fn map(&self, date: NaiveDate) -> f64 {
        self.linear.map(day_number(date))
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn ticks(&self, max_ticks: usize) -> Vec<NaiveDate> {
        day_ticks(self.start, self.end, max_ticks)
    }
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// The pair of scales for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: LinearScale,
}

impl Scales {
    /// Compute both scales from the extrema of `records`.
    ///
    /// Returns `None` for an empty sequence: there is nothing to scale and
    /// nothing to draw.
    pub fn compute(records: &[WeatherRecord], area: PlotArea, padding: i32) -> Option<Self> {
        let first = records.first()?;
        let (mut min_date, mut max_date) = (first.date, first.date);
        let (mut min_t, mut max_t) = (first.temperature, first.temperature);
        for r in &records[1..] {
            min_date = min_date.min(r.date);
            max_date = max_date.max(r.date);
            min_t = min_t.min(r.temperature);
            max_t = max_t.max(r.temperature);
        }

        let x = TimeScale::new(min_date, max_date, (0.0, area.width));
        let y = LinearScale::new(
            (
                f64::from(min_t) - f64::from(padding),
                f64::from(max_t) + f64::from(padding),
            ),
            (area.height, 0.0),
        );
        Some(Self { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Condition;

    fn record(day: u32, temperature: i32) -> WeatherRecord {
        WeatherRecord::new(
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            temperature,
            65,
            Condition::Sunny,
        )
    }

    const AREA: PlotArea = PlotArea {
        width: 600.0,
        height: 300.0,
    };

    #[test]
    fn test_plot_area_subtracts_margins() {
        let area = PlotArea::from_outer(800.0, &ChartConfig::default());
        assert_eq!(area, PlotArea { width: 660.0, height: 300.0 });
        let narrow = PlotArea::from_outer(100.0, &ChartConfig::default());
        assert_eq!(narrow.width, 0.0);
    }

    #[test]
    fn test_empty_sequence_has_no_scales() {
        assert!(Scales::compute(&[], AREA, 5).is_none());
    }

    #[test]
    fn test_domains_follow_extrema() {
        let records = [record(10, 62), record(12, 53), record(16, 65)];
        let scales = Scales::compute(&records, AREA, 5).unwrap();
        assert_eq!(scales.y.domain(), (48.0, 70.0));
        assert_eq!(scales.x.map(records[0].date), 0.0);
        assert_eq!(scales.x.map(records[2].date), 600.0);
        assert!((scales.x.map(records[1].date) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_scale_is_inverted() {
        let records = [record(10, 50), record(11, 60)];
        let scales = Scales::compute(&records, AREA, 5).unwrap();
        assert_eq!(scales.y.map(45.0), 300.0);
        assert_eq!(scales.y.map(65.0), 0.0);
        assert!(scales.y.map(60.0) < scales.y.map(50.0));
    }

    #[test]
    fn test_single_record_pads_both_domains() {
        let records = [record(10, 62)];
        let scales = Scales::compute(&records, AREA, 5).unwrap();
        assert_eq!(scales.y.domain(), (57.0, 67.0));
        assert_eq!(scales.x.map(records[0].date), 300.0);
        let (start, end) = scales.x.domain();
        assert!(start < end);
        assert!(scales.y.map(62.0).is_finite());
    }

    #[test]
    fn test_zero_padding_flat_temperatures_do_not_divide_by_zero() {
        let records = [record(10, 60), record(11, 60)];
        let scales = Scales::compute(&records, AREA, 0).unwrap();
        assert_eq!(scales.y.map(60.0), 150.0);
    }

    #[test]
    fn test_time_mapping_is_monotonic() {
        let records: Vec<_> = (1..=28).map(|d| record(d, 50 + d as i32 % 7)).collect();
        let scales = Scales::compute(&records, AREA, 5).unwrap();
        for pair in records.windows(2) {
            assert!(scales.x.map(pair[0].date) <= scales.x.map(pair[1].date));
        }
    }

    #[test]
    fn test_out_of_order_sequence_uses_true_extrema() {
        let records = [record(14, 55), record(10, 62), record(12, 58)];
        let scales = Scales::compute(&records, AREA, 5).unwrap();
        assert_eq!(scales.x.map(records[1].date), 0.0);
        assert_eq!(scales.x.map(records[0].date), 600.0);
    }
}
