const TARGET_INTERVALS: f64 = 5.0;
const MAX_DECIMALS: usize = 10;

/// Rounds a raw step up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions inside `[min, max]` (either order) and their common step.
pub fn ticks(min: f64, max: f64) -> (Vec<f64>, f64) {
    let (lo, hi) = (min.min(max), min.max(max));
    if !(lo.is_finite() && hi.is_finite()) {
        return (Vec::new(), 1.0);
    }
    if lo == hi {
        return (vec![lo], 1.0);
    }

    let step = nice_step((hi - lo) / TARGET_INTERVALS);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;

    let values = (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            if v == 0.0 {
                0.0
            } else {
                v
            }
        })
        .collect();
    (values, step)
}

/// Formats a tick with just enough decimals to tell steps apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..=MAX_DECIMALS)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(MAX_DECIMALS);

    let value = if value.abs() < step.abs() * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}
