use crate::types::activity::SessionSummary;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The five session statistics as labeled plain-text lines.
pub fn render(summary: &SessionSummary) -> String {
    format!(
        "Start time: {}\nEnd time: {}\nTotal distance: {} km\nTotal elapsed time: {} minutes\nSport: {}\n",
        summary.start.format(TIME_FORMAT),
        summary.end.format(TIME_FORMAT),
        summary.distance_km,
        summary.elapsed_minutes,
        summary.sport,
    )
}
