use lessonist::utils::duration::*;

#[test]
fn test_hours_between_ninety_minutes() {
    assert_eq!(hours_between("14:00", "15:30").unwrap(), 1.5);
}

#[test]
fn test_hours_between_same_time() {
    assert_eq!(hours_between("09:00", "09:00").unwrap(), 0.0);
}

#[test]
fn test_hours_between_quarter_hour() {
    assert_eq!(hours_between("10:00", "10:15").unwrap(), 0.25);
}

#[test]
fn test_hours_between_finish_before_start_is_negative() {
    // No cross-midnight wraparound; an earlier finish yields a negative value
    assert_eq!(hours_between("15:30", "14:00").unwrap(), -1.5);
}

#[test]
fn test_hours_between_rejects_malformed_input() {
    assert!(hours_between("14h00", "15:30").is_err());
    assert!(hours_between("14:00", "late").is_err());
}

#[test]
fn test_parse_hm() {
    assert_eq!(parse_hm("14:05").unwrap(), (14, 5));
    assert!(parse_hm("25:99").is_err());
}

#[test]
fn test_duration_options_bounds() {
    let options = duration_options();
    assert_eq!(options.len(), 19);
    assert_eq!(options.first().unwrap().label, "30 min");
    assert_eq!(options.first().unwrap().total_minutes(), 30);
    assert_eq!(options.last().unwrap().label, "5 hr");
    assert_eq!(options.last().unwrap().total_minutes(), 300);
}

#[test]
fn test_duration_options_ascending_order() {
    let options = duration_options();
    for pair in options.windows(2) {
        assert!(pair[0].total_minutes() < pair[1].total_minutes());
    }
}

#[test]
fn test_duration_options_quarter_hour_steps_after_first_hour() {
    let options = duration_options();
    for option in options.iter().filter(|o| o.total_minutes() >= 60) {
        assert_eq!(option.total_minutes() % 15, 0);
    }
    // 1 hr through 5 hr in 15-minute steps
    let from_one_hour = options.iter().filter(|o| o.total_minutes() >= 60).count();
    assert_eq!(from_one_hour, 17);
}

#[test]
fn test_finish_time_subtracts_boundary_minute() {
    assert_eq!(finish_time("14:00", 1, 0).unwrap(), "14:59");
    assert_eq!(finish_time("09:00", 0, 30).unwrap(), "09:29");
    assert_eq!(finish_time("10:00", 1, 30).unwrap(), "11:29");
}

#[test]
fn test_finish_time_rejects_malformed_start() {
    assert!(finish_time("start", 1, 0).is_err());
}
