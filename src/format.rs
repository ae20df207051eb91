/// Time formatting for the readouts and the CLI.
use crate::types::Seconds;

/// Formats a number of seconds as `HH:MM:SS`.
///
/// Hours are not wrapped at 24, so a day and an hour renders as `25:00:00`.
pub fn format_time(total_seconds: Seconds) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_time(0), "00:00:00");
    }

    #[test]
    fn formats_each_field() {
        assert_eq!(format_time(3661), "01:01:01");
        assert_eq!(format_time(59), "00:00:59");
        assert_eq!(format_time(60), "00:01:00");
    }

    #[test]
    fn last_second_of_a_day() {
        assert_eq!(format_time(86399), "23:59:59");
    }

    #[test]
    fn hours_are_not_wrapped_at_a_day() {
        assert_eq!(format_time(86400), "24:00:00");
        assert_eq!(format_time(90000), "25:00:00");
        assert_eq!(format_time(100 * 3600), "100:00:00");
    }
}
