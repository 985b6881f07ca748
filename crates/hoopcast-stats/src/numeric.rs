/// Limits `value` to the closed range `[min, max]`.
///
/// # Examples
///
/// ```
/// # use hoopcast_stats::numeric::clamp;
/// assert_eq!(clamp(55.0, 10.0, 48.0), 48.0);
/// assert_eq!(clamp(4.0, 10.0, 48.0), 10.0);
/// assert_eq!(clamp(31.5, 10.0, 48.0), 31.5);
/// ```
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Ratio of what a team allows in a category to the league average.
///
/// Values above 1.0 mean the team allows more than average, values below 1.0
/// mean it allows less. A zero league average yields exactly 1.0 (neutral).
///
/// # Examples
///
/// ```
/// # use hoopcast_stats::numeric::defensive_rating;
/// assert_eq!(defensive_rating(120.0, 0.0), 1.0);
/// assert_eq!(defensive_rating(23.0, 46.0), 0.5);
/// ```
#[must_use]
pub fn defensive_rating(allowed: f64, league_average: f64) -> f64 {
    if league_average == 0.0 {
        return 1.0;
    }
    allowed / league_average
}
