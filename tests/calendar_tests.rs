use wfotracker::core::calendar::MonthGrid;
use wfotracker::models::day_state::DayState;
use wfotracker::models::preference::WfoPreference;

fn all_home() -> WfoPreference {
    // no preferred office day: weekdays become H, weekends BH
    WfoPreference::default()
}

#[test]
fn cell_cycle_is_a_three_state_ring() {
    let mut grid = MonthGrid::for_month("2024-02").unwrap();
    grid.apply_preferences(&all_home());

    // Feb 6 2024 is a Tuesday, seeded H by the apply above
    grid.set_state(6, DayState::Office).unwrap();

    assert_eq!(grid.cycle(6).unwrap(), Some(DayState::Home));
    assert_eq!(grid.cycle(6).unwrap(), Some(DayState::Leave));
    assert_eq!(grid.cycle(6).unwrap(), Some(DayState::Office));
}

#[test]
fn cycling_an_unset_cell_is_a_no_op() {
    let mut grid = MonthGrid::for_month("2024-02").unwrap();

    assert_eq!(grid.cycle(6).unwrap(), None);
    assert_eq!(grid.state(6).unwrap(), None);
    assert_eq!((grid.to, grid.th, grid.tl), (0, 0, 0));
}

#[test]
fn weekend_cells_never_change_state() {
    let mut grid = MonthGrid::for_month("2024-02").unwrap();
    grid.apply_preferences(&all_home());

    // Feb 3 2024 is a Saturday
    assert_eq!(grid.state(3).unwrap(), Some(DayState::Weekend));
    assert!(grid.cycle(3).is_err());
    assert!(grid.set_state(3, DayState::Office).is_err());
    assert_eq!(grid.state(3).unwrap(), Some(DayState::Weekend));
}

#[test]
fn weekend_state_cannot_be_assigned_by_hand() {
    let mut grid = MonthGrid::for_month("2024-02").unwrap();
    assert!(grid.set_state(6, DayState::Weekend).is_err());
}

#[test]
fn apply_preference_overwrites_prior_manual_edits() {
    let mut grid = MonthGrid::for_month("2024-02").unwrap();
    grid.apply_preferences(&all_home());
    grid.set_state(6, DayState::Leave).unwrap();

    grid.apply_preferences(&all_home());
    assert_eq!(grid.state(6).unwrap(), Some(DayState::Home));
    assert_eq!(grid.tl, 0);
}

#[test]
fn apply_preference_is_idempotent() {
    let prefs = WfoPreference::from_day_list("mon,thu").unwrap();

    let mut once = MonthGrid::for_month("2024-05").unwrap();
    once.apply_preferences(&prefs);

    let mut twice = once.clone();
    twice.apply_preferences(&prefs);

    assert_eq!(once, twice);
}

#[test]
fn counter_invariant_covers_the_whole_month() {
    let prefs = WfoPreference::from_day_list("tue,fri").unwrap();
    let mut grid = MonthGrid::for_month("2024-02").unwrap();
    grid.apply_preferences(&prefs);
    grid.cycle(6).unwrap();
    grid.cycle(6).unwrap(); // Tuesday: O -> H -> L

    let counted = grid.to + grid.th + grid.tl + grid.weekend_days() as i32;
    assert_eq!(counted, grid.days_in_month() as i32);
    assert_eq!(grid.tl, 1);
}

#[test]
fn leap_february_monday_preference_scenario() {
    // 2024-02: 29 days, Mondays are 5, 12, 19, 26
    let prefs = WfoPreference::from_day_list("mon").unwrap();
    let mut grid = MonthGrid::for_month("2024-02").unwrap();
    grid.apply_preferences(&prefs);

    assert_eq!(grid.days_in_month(), 29);

    for day in [5, 12, 19, 26] {
        assert_eq!(grid.state(day).unwrap(), Some(DayState::Office));
    }
    for day in [3, 4, 10, 11, 17, 18, 24, 25] {
        assert_eq!(grid.state(day).unwrap(), Some(DayState::Weekend));
    }
    // every remaining weekday is Home
    assert_eq!(grid.to, 4);
    assert_eq!(grid.th, 17);
    assert_eq!(grid.tl, 0);
}

#[test]
fn invalid_month_selectors_are_rejected() {
    assert!(MonthGrid::for_month("2024-13").is_err());
    assert!(MonthGrid::for_month("February").is_err());
    assert!(MonthGrid::for_month("").is_err());
}

#[test]
fn out_of_range_day_is_rejected() {
    let mut grid = MonthGrid::for_month("2023-02").unwrap();
    assert!(grid.cycle(29).is_err());
    assert!(grid.set_state(0, DayState::Office).is_err());
}

#[test]
fn preference_parsing_accepts_names_and_rejects_weekends() {
    let prefs = WfoPreference::from_day_list("Mon, wednesday,FRI").unwrap();
    assert!(prefs.mon && prefs.wed && prefs.fri);
    assert!(!prefs.tue && !prefs.thu);

    assert!(WfoPreference::from_day_list("sat").is_err());
    assert!(WfoPreference::from_day_list("mon,funday").is_err());

    // empty list means no office preference at all
    assert_eq!(WfoPreference::from_day_list("").unwrap(), WfoPreference::default());
}
