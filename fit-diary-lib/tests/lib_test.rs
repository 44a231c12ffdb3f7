use anyhow::Result;
use chrono::{Local, TimeZone};
use fit_diary_lib::{
    chart_series, AppService, Config, DiaryState, EditSession, FormField, Intent, Metric,
    Outcome, Record, RecordFields, RecordForm, RecordStore, SortMode, StoreError, Summary,
    ValidationError,
};

// Helper function to create a service without touching the real config dir
fn create_test_service() -> AppService {
    AppService::with_config(Config::default(), "test_config.toml".into())
}

fn record(id: u64, water: f64) -> Record {
    Record {
        id,
        fields: RecordFields::new(water, 10.0, 100.0),
        date: None,
    }
}

fn ids(records: &[Record]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

fn fill_form(state: &mut DiaryState, water: &str, exercise: &str, calories: &str) {
    state.form = RecordForm::new(water, exercise, calories);
}

#[test]
fn test_service_starts_with_sample_records() {
    let service = create_test_service();
    assert_eq!(service.state.store.len(), 3);
    assert_eq!(service.state.sort_mode, SortMode::Recent);
    assert_eq!(service.state.edit, EditSession::Idle);
    assert_eq!(ids(&service.displayed_records()), vec![3, 2, 1]);
}

#[test]
fn test_service_without_seed() {
    let config = Config {
        seed_sample_records: false,
        default_sort: SortMode::MostWater,
        ..Default::default()
    };
    let service = AppService::with_config(config, "test_config.toml".into());
    assert!(service.state.store.is_empty());
    assert_eq!(service.state.sort_mode, SortMode::MostWater);
}

#[test]
fn test_ordered_views_of_the_sample_scenario() {
    let store = RecordStore::with_records(vec![record(1, 2.0), record(2, 1.5), record(3, 3.0)]);

    let by_water = store.ordered_view(SortMode::MostWater);
    assert_eq!(ids(&by_water), vec![3, 1, 2]);
    assert_eq!(by_water[0].water_liters(), 3.0);

    let recent = store.ordered_view(SortMode::Recent);
    assert_eq!(ids(&recent), vec![3, 2, 1]);

    // The canonical collection keeps insertion order
    assert_eq!(ids(&store.iter().cloned().collect::<Vec<_>>()), vec![1, 2, 3]);
}

#[test]
fn test_most_water_ties_keep_insertion_order() {
    let store = RecordStore::with_records(vec![
        record(5, 1.0),
        record(2, 2.0),
        record(9, 1.0),
        record(1, 2.0),
    ]);
    assert_eq!(ids(&store.ordered_view(SortMode::MostWater)), vec![2, 1, 5, 9]);
}

#[test]
fn test_ordered_views_are_permutations() {
    let mut store = RecordStore::with_records(vec![record(1, 2.0), record(2, 1.5)]);
    store.create(RecordFields::new(0.5, 20.0, 300.0));
    store.create(RecordFields::new(4.0, 20.0, 300.0));

    let mut original = ids(&store.iter().cloned().collect::<Vec<_>>());
    original.sort_unstable();
    for mode in [SortMode::Recent, SortMode::MostWater] {
        let view = store.ordered_view(mode);
        let mut sorted = ids(&view);
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    let recent = store.ordered_view(SortMode::Recent);
    assert!(recent.windows(2).all(|w| w[0].id > w[1].id));
    let by_water = store.ordered_view(SortMode::MostWater);
    assert!(by_water
        .windows(2)
        .all(|w| w[0].water_liters() >= w[1].water_liters()));
}

#[test]
fn test_create_appends_with_new_id_and_date() {
    let mut store = RecordStore::with_records(vec![record(1, 2.0)]);
    let now = Local.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();

    let created = store.create_at(RecordFields::new(2.5, 40.0, 700.0), now);

    assert_eq!(store.len(), 2);
    assert_eq!(created.id, u64::try_from(now.timestamp_millis()).unwrap());
    assert_eq!(created.date, Some(now.date_naive()));
    assert_eq!(created.date_display("%d/%m/%Y"), "15/03/2024");
    for mode in [SortMode::Recent, SortMode::MostWater] {
        assert!(store.ordered_view(mode).contains(&created));
    }
    // Newest record comes first in the recent view
    assert_eq!(store.ordered_view(SortMode::Recent)[0].id, created.id);
}

#[test]
fn test_rapid_creates_get_distinct_increasing_ids() {
    let mut store = RecordStore::new();
    let now = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let fields = RecordFields::new(1.0, 1.0, 1.0);

    let a = store.create_at(fields, now);
    let b = store.create_at(fields, now);
    let c = store.create(fields);

    assert!(a.id < b.id);
    assert!(b.id < c.id);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_update_preserves_id_and_date() -> Result<()> {
    let mut store = RecordStore::new();
    let now = Local.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
    let created = store.create_at(RecordFields::new(1.0, 10.0, 100.0), now);

    let new_fields = RecordFields::new(2.25, 35.5, 820.0);
    let updated = store.update(created.id, new_fields)?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.fields, new_fields);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(created.id), Some(&updated));
    Ok(())
}

#[test]
fn test_update_missing_id_is_not_found() {
    let mut store = RecordStore::with_records(vec![record(1, 2.0)]);
    let result = store.update(42, RecordFields::new(9.0, 9.0, 9.0));
    assert_eq!(result, Err(StoreError::NotFound(42)));
    assert_eq!(store.get(1), Some(&record(1, 2.0)));
}

#[test]
fn test_delete_present_and_absent() {
    let mut store = RecordStore::with_records(vec![record(1, 2.0), record(2, 1.5)]);

    assert!(store.delete(1));
    assert_eq!(store.len(), 1);
    for mode in [SortMode::Recent, SortMode::MostWater] {
        assert!(!ids(&store.ordered_view(mode)).contains(&1));
    }

    assert!(!store.delete(1));
    assert!(!store.delete(77));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_form_rejects_non_numbers() {
    let form = RecordForm::new("abc", "10", "10");
    assert_eq!(
        form.validate(),
        Err(ValidationError::InvalidNumber(FormField::Water))
    );

    let form = RecordForm::new("2", "", "10");
    assert_eq!(
        form.validate(),
        Err(ValidationError::InvalidNumber(FormField::Exercise))
    );

    // Garbage wins over a negative value elsewhere in the form
    let form = RecordForm::new("-1", "10", "lots");
    assert_eq!(
        form.validate(),
        Err(ValidationError::InvalidNumber(FormField::Calories))
    );

    // A numeric prefix is not enough
    assert_eq!(fit_diary_lib::parse_number("10abc"), None);
    assert_eq!(fit_diary_lib::parse_number(" 1,5 "), Some(1.5));
}

#[test]
fn test_form_rejects_non_positive_values() {
    let form = RecordForm::new("-1", "10", "10");
    assert_eq!(
        form.validate(),
        Err(ValidationError::NonPositiveValue(FormField::Water))
    );

    let form = RecordForm::new("1", "10", "0");
    let err = form.validate().unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveValue(FormField::Calories));
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn test_form_accepts_fractional_values() -> Result<()> {
    let form = RecordForm::new("1,5", " 30.5 ", "450");
    let fields = form.validate()?;
    assert_eq!(fields, RecordFields::new(1.5, 30.5, 450.0));
    Ok(())
}

#[test]
fn test_invalid_submit_does_not_mutate() {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);
    let before = state.displayed();

    fill_form(&mut state, "abc", "10", "10");
    assert!(matches!(
        state.submit_form(),
        Err(ValidationError::InvalidNumber(_))
    ));
    fill_form(&mut state, "-1", "10", "10");
    assert!(matches!(
        state.submit_form(),
        Err(ValidationError::NonPositiveValue(_))
    ));

    assert_eq!(state.displayed(), before);
    // Rejected input stays in the form so the user can fix it
    assert_eq!(state.form, RecordForm::new("-1", "10", "10"));
}

#[test]
fn test_submit_in_idle_creates_and_clears_form() -> Result<()> {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);
    fill_form(&mut state, "2.5", "40", "700");

    let outcome = state.submit_form()?;

    let created = match outcome {
        Outcome::Created(record) => record,
        other => panic!("expected Created, got {other:?}"),
    };
    assert_eq!(state.store.len(), 4);
    assert_eq!(created.fields, RecordFields::new(2.5, 40.0, 700.0));
    assert!(created.id > 3);
    assert!(state.form.is_empty());
    assert_eq!(state.edit, EditSession::Idle);
    assert_eq!(state.displayed()[0].id, created.id);
    Ok(())
}

#[test]
fn test_begin_edit_populates_form() {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);

    let outcome = state.dispatch(Intent::BeginEdit(2));

    assert!(matches!(outcome, Outcome::EditStarted(ref r) if r.id == 2));
    assert!(state.edit.is_editing());
    assert_eq!(state.form, RecordForm::new("1.5", "45", "600"));
}

#[test]
fn test_begin_edit_then_cancel_leaves_collection_unchanged() {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);
    let before = state.displayed();

    state.dispatch(Intent::BeginEdit(2));
    let outcome = state.dispatch(Intent::CancelEdit);

    assert_eq!(outcome, Outcome::EditCancelled);
    assert_eq!(state.edit, EditSession::Idle);
    assert!(state.form.is_empty());
    assert_eq!(state.displayed(), before);
}

#[test]
fn test_begin_edit_while_editing_switches_record() -> Result<()> {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);
    let first_before = state.store.get(1).cloned();

    state.dispatch(Intent::BeginEdit(1));
    let outcome = state.dispatch(Intent::BeginEdit(3));

    assert!(matches!(outcome, Outcome::EditStarted(ref r) if r.id == 3));
    assert_eq!(state.edit.record().map(|r| r.id), Some(3));
    assert_eq!(state.form, RecordForm::new("3", "25", "450"));

    state.form.calories = "999".to_string();
    let saved = state.submit_form()?;

    assert!(matches!(saved, Outcome::Updated(ref r) if r.id == 3));
    assert_eq!(
        state.store.get(3).map(|r| r.fields),
        Some(RecordFields::new(3.0, 25.0, 999.0))
    );
    assert_eq!(state.store.get(1).cloned(), first_before);
    assert_eq!(state.store.len(), 3);
    Ok(())
}

#[test]
fn test_cancel_while_idle_clears_form() {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);
    fill_form(&mut state, "2", "30", "abc");

    let outcome = state.dispatch(Intent::CancelEdit);

    assert_eq!(outcome, Outcome::EditCancelled);
    assert_eq!(state.edit, EditSession::Idle);
    assert!(state.form.is_empty());
    assert_eq!(state.store.len(), 3);
}

#[test]
fn test_submit_while_editing_updates_in_place() -> Result<()> {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);
    state.dispatch(Intent::BeginEdit(2));
    state.form.water = "4".to_string();

    let outcome = state.submit_form()?;

    assert!(matches!(outcome, Outcome::Updated(ref r) if r.id == 2));
    assert_eq!(outcome.message(), Some("Record updated!"));
    assert_eq!(state.store.len(), 3);
    let edited = state.store.get(2).cloned().unwrap();
    assert_eq!(edited.fields, RecordFields::new(4.0, 45.0, 600.0));
    assert_eq!(state.edit, EditSession::Idle);
    assert!(state.form.is_empty());

    state.dispatch(Intent::SetSortMode(SortMode::MostWater));
    assert_eq!(ids(&state.displayed()), vec![2, 3, 1]);
    Ok(())
}

#[test]
fn test_begin_edit_missing_id_is_benign() {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);
    assert_eq!(state.dispatch(Intent::BeginEdit(99)), Outcome::NotFound(99));
    assert_eq!(state.edit, EditSession::Idle);
    assert!(state.form.is_empty());
}

#[test]
fn test_deleting_edited_record_ends_edit_session() {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);
    state.dispatch(Intent::BeginEdit(1));

    // Deleting another record keeps the session
    assert_eq!(state.dispatch(Intent::Delete(3)), Outcome::Deleted(3));
    assert!(state.edit.is_editing());

    assert_eq!(state.dispatch(Intent::Delete(1)), Outcome::Deleted(1));
    assert_eq!(state.edit, EditSession::Idle);
    assert!(state.form.is_empty());
    assert_eq!(ids(&state.displayed()), vec![2]);
}

#[test]
fn test_reducer_intents() {
    let mut state = DiaryState::new(fit_diary_lib::sample_records(), SortMode::Recent);

    let created = state.dispatch(Intent::Create(RecordFields::new(0.5, 5.0, 50.0)));
    assert_eq!(created.message(), Some("Record saved!"));
    assert_eq!(state.store.len(), 4);

    let missing = state.dispatch(Intent::Update(12345, RecordFields::new(1.0, 1.0, 1.0)));
    assert_eq!(missing, Outcome::NotFound(12345));
    assert_eq!(missing.message(), None);

    assert_eq!(state.dispatch(Intent::Delete(12345)), Outcome::NotFound(12345));
    assert_eq!(state.store.len(), 4);

    let deleted = state.dispatch(Intent::Delete(2));
    assert_eq!(deleted.message(), Some("The record was deleted."));
    assert_eq!(state.store.len(), 3);

    assert_eq!(
        state.dispatch(Intent::SetSortMode(SortMode::MostWater)),
        Outcome::SortChanged(SortMode::MostWater)
    );
    assert_eq!(state.sort_mode, SortMode::MostWater);
    assert_eq!(state.displayed()[0].id, 3);
}

#[test]
fn test_chart_series_and_summary() {
    let records = vec![record(3, 3.0), record(1, 2.0), record(2, 1.5)];

    let series = chart_series(&records, Metric::Water, "%d/%m/%Y");
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["#1", "#2", "#3"]);
    assert_eq!(series[0].record_id, 3);
    assert_eq!(series[2].value, 1.5);

    let summary = Summary::from_records(&records);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.water.total, 6.5);
    assert_eq!(summary.water.max, Some(3.0));
    assert_eq!(summary.calories.average, Some(100.0));

    let empty = Summary::from_records(&[]);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.exercise.average, None);
}

#[test]
fn test_chart_labels_stay_distinct_for_same_day_records() {
    let mut store = RecordStore::with_records(fit_diary_lib::sample_records());
    let morning = Local.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();
    let evening = Local.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();
    let next_day = Local.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
    store.create_at(RecordFields::new(1.0, 10.0, 100.0), morning);
    store.create_at(RecordFields::new(2.0, 20.0, 200.0), evening);
    store.create_at(RecordFields::new(3.0, 30.0, 300.0), next_day);

    let series = chart_series(&store.ordered_view(SortMode::Recent), Metric::Water, "%d/%m/%Y");
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();

    assert_eq!(labels, vec!["19/10/2026", "#2", "#3", "#4", "#5", "#6"]);
}

#[test]
fn test_unrenderable_date_format_does_not_panic() {
    let mut store = RecordStore::new();
    let now = Local.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
    let created = store.create_at(RecordFields::new(1.0, 1.0, 1.0), now);

    // A bare date has no hour to print, so the ISO form is used instead
    assert_eq!(created.date_display("%H:%M"), "2024-03-15");
    let series = chart_series(&store.ordered_view(SortMode::Recent), Metric::Water, "%Q");
    assert_eq!(series[0].label, "2024-03-15");
}

#[test]
fn test_validate_date_format() {
    assert!(fit_diary_lib::validate_date_format("%d/%m/%Y").is_ok());
    assert!(fit_diary_lib::validate_date_format("%A %e %B").is_ok());
    assert!(fit_diary_lib::validate_date_format("%Q").is_err());
    assert!(fit_diary_lib::validate_date_format("%H:%M").is_err());
}

#[test]
fn test_config_round_trip_and_defaults() -> Result<()> {
    let config = Config {
        default_sort: SortMode::MostWater,
        chart_metric: Metric::Calories,
        ..Default::default()
    };
    let text = toml::to_string_pretty(&config)?;
    assert!(text.contains("default_sort = \"most_water\""));
    let parsed: Config = toml::from_str(&text)?;
    assert_eq!(parsed, config);

    // Missing keys fall back to defaults
    let partial: Config = toml::from_str("seed_sample_records = false\n")?;
    assert!(!partial.seed_sample_records);
    assert_eq!(partial.default_sort, SortMode::Recent);
    assert_eq!(partial.date_format, "%d/%m/%Y");
    Ok(())
}

#[test]
fn test_config_file_is_created_and_saved() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("fit-diary-test-{}", std::process::id()));
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let loaded = fit_diary_lib::load_config_util(&path)?;
    assert_eq!(loaded, Config::default());
    assert!(path.exists());

    let mut service = AppService::with_config(loaded, path.clone());
    service.set_default_sort(SortMode::MostWater)?;
    service.set_header_color("dArKbLuE")?;
    assert!(service.set_header_color("chartreuse").is_err());
    assert!(service.set_date_format("%Y-%m-%d").is_ok());

    let reloaded = fit_diary_lib::load_config_util(&path)?;
    assert_eq!(reloaded.default_sort, SortMode::MostWater);
    assert_eq!(reloaded.theme.header_color, "DarkBlue");
    assert_eq!(reloaded.date_format, "%Y-%m-%d");

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_invalid_date_format_in_config_file_falls_back_to_default() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("fit-diary-bad-fmt-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("config.toml");
    std::fs::write(&path, "date_format = \"%Q\"\nseed_sample_records = false\n")?;

    let loaded = fit_diary_lib::load_config_util(&path)?;
    assert_eq!(loaded.date_format, Config::default().date_format);
    assert!(!loaded.seed_sample_records);

    let mut service = AppService::with_config(loaded, path.clone());
    let outcome = service.dispatch(Intent::Create(RecordFields::new(1.0, 2.0, 3.0)));
    assert!(matches!(outcome, Outcome::Created(_)));
    let chart = service.chart(Metric::Water);
    assert_eq!(chart.len(), 1);
    assert_eq!(chart[0].label.len(), "dd/mm/yyyy".len());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
