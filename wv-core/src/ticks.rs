//! Axis tick generation.

use chrono::{Days, NaiveDate};

/// Day steps tried in order when spacing date ticks.
const DAY_STEPS: [u64; 6] = [1, 2, 3, 7, 14, 28];

/// Step between "nice" ticks (1, 2 or 5 times a power of ten) covering
/// `[start, stop]` with roughly `count` intervals.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let mut step = 10f64.powf(raw.log10().floor());
    let error = raw / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    step
}

/// Evenly spaced, human-friendly tick values inside `[start, stop]`.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let step = tick_step(lo, hi, count);
    if step <= 0.0 {
        return if lo.is_finite() { vec![lo] } else { Vec::new() };
    }
    // Sub-unit steps divide by the inverse step so values such as 57.3 come
    // out exact instead of 57.300000000000004.
    if step < 1.0 {
        let inverse = (1.0 / step).round();
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        return (first..=last).map(|i| i as f64 / inverse).collect();
    }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Whole-day ticks from `start` through `end`, thinned so there are at most
/// `max_ticks` of them.
pub fn day_ticks(start: NaiveDate, end: NaiveDate, max_ticks: usize) -> Vec<NaiveDate> {
    if end < start {
        return Vec::new();
    }
    let span = (end - start).num_days().unsigned_abs();
    let max_ticks = max_ticks.max(1) as u64;
    let step = DAY_STEPS
        .into_iter()
        .find(|step| span / step + 1 <= max_ticks)
        .unwrap_or_else(|| (span / max_ticks + 1).div_ceil(28) * 28);

    let mut ticks = Vec::new();
    let mut current = Some(start);
    while let Some(date) = current.filter(|d| *d <= end) {
        ticks.push(date);
        current = date.checked_add_days(Days::new(step));
    }
    ticks
}
