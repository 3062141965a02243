#[cfg(test)]
mod tests {
    use studylog::libs::duration::{format, parse, to_hours_float, StudyDuration};

    #[test]
    fn test_format_variants() {
        assert_eq!(format(1, 30), "1 jam 30 menit");
        assert_eq!(format(2, 0), "2 jam");
        assert_eq!(format(0, 45), "45 menit");
        assert_eq!(format(0, 0), "0 menit");
    }

    #[test]
    fn test_parse_round_trip_over_valid_range() {
        for hours in 0..=12 {
            for minutes in 0..=59 {
                if hours == 0 && minutes == 0 {
                    continue;
                }
                assert_eq!(parse(&format(hours, minutes)), StudyDuration::new(hours, minutes), "{}h {}m", hours, minutes);
            }
        }
    }

    #[test]
    fn test_to_hours_float() {
        assert_eq!(to_hours_float("1 jam 30 menit"), 1.5);
        assert_eq!(to_hours_float("45 menit"), 0.75);
        assert_eq!(to_hours_float("3 jam"), 3.0);
    }

    #[test]
    fn test_empty_and_unrelated_text() {
        assert_eq!(parse(""), StudyDuration::new(0, 0));
        assert_eq!(to_hours_float(""), 0.0);
        assert_eq!(parse("1.5"), StudyDuration::new(0, 0));
        assert_eq!(parse("jam menit"), StudyDuration::new(0, 0));
    }

    #[test]
    fn test_zero_fallback_parses_back_to_zero() {
        assert!(parse(&format(0, 0)).is_zero());
    }

    #[test]
    fn test_display_uses_sheet_format() {
        assert_eq!(StudyDuration::new(4, 5).to_string(), "4 jam 5 menit");
    }
}
