#[cfg(test)]
mod tests {
    use hrdesk::libs::formatter::{calc_lateness, calc_work_duration, format_minutes};

    #[test]
    fn test_work_duration_full_day() {
        assert_eq!(calc_work_duration(Some("08:05"), Some("17:10")), "9h 5m");
        assert_eq!(calc_work_duration(Some("09:00"), Some("09:59")), "0h 59m");
        assert_eq!(calc_work_duration(Some("00:00"), Some("23:59")), "23h 59m");
    }

    #[test]
    fn test_work_duration_single_scan() {
        assert_eq!(calc_work_duration(Some("09:30"), Some("09:30")), "0h 0m");
    }

    #[test]
    fn test_work_duration_matches_minute_arithmetic() {
        for (start, end) in [("07:45", "16:20"), ("08:00", "08:01"), ("10:10", "22:09")] {
            let to_min = |t: &str| {
                let (h, m) = t.split_once(':').unwrap();
                h.parse::<i64>().unwrap() * 60 + m.parse::<i64>().unwrap()
            };
            let diff = to_min(end) - to_min(start);
            assert_eq!(
                calc_work_duration(Some(start), Some(end)),
                format!("{}h {}m", diff / 60, diff % 60)
            );
        }
    }

    #[test]
    fn test_work_duration_reversed_is_negative() {
        assert_eq!(calc_work_duration(Some("17:00"), Some("15:30")), "-1h 30m");
        assert_eq!(format_minutes(-5), "-0h 5m");
    }

    #[test]
    fn test_work_duration_missing_input() {
        assert_eq!(calc_work_duration(None, Some("17:00")), "");
        assert_eq!(calc_work_duration(Some("08:00"), None), "");
        assert_eq!(calc_work_duration(Some("late"), Some("17:00")), "");
    }

    #[test]
    fn test_lateness_under_an_hour() {
        assert_eq!(calc_lateness(Some("09:15"), Some("09:30")), Some("Late (15min)".to_string()));
    }

    #[test]
    fn test_lateness_over_an_hour() {
        assert_eq!(calc_lateness(Some("09:15"), Some("10:20")), Some("Late (1h 5min)".to_string()));
        assert_eq!(calc_lateness(Some("09:15"), Some("11:15")), Some("Late (2h 0min)".to_string()));
    }

    #[test]
    fn test_lateness_on_threshold() {
        assert_eq!(calc_lateness(Some("09:15"), Some("09:15")), Some("Late (0min)".to_string()));
    }

    #[test]
    fn test_no_lateness_when_early() {
        assert_eq!(calc_lateness(Some("09:15"), Some("08:05")), None);
        assert_eq!(calc_lateness(Some("09:15"), Some("09:14")), None);
    }

    #[test]
    fn test_lateness_missing_input() {
        assert_eq!(calc_lateness(None, Some("10:00")), None);
        assert_eq!(calc_lateness(Some("09:15"), None), None);
        assert_eq!(calc_lateness(Some("09:15"), Some("Invalid date")), None);
    }
}
