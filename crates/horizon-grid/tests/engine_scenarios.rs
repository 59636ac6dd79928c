//! Integration tests driving the table engine end to end.

use horizon_grid::prelude::*;
use horizon_grid::{ColumnDescriptor, Error, FilterList};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_grid=trace")
        .with_test_writer()
        .try_init();
}

fn dataset() -> Vec<Vec<CellValue>> {
    serde_json::from_str(
        r#"[
            ["Joe James", "Test Corp", "Yonkers", "NY"],
            ["John Walsh", "Test Corp", "Hartford", "CT"],
            ["Bob Herm", "Test Corp", "Tampa", "FL"],
            ["James Houston", "Test Corp", "Dallas", "TX"]
        ]"#,
    )
    .unwrap()
}

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Name"),
        ColumnSpec::new("Company"),
        ColumnSpec::new("City"),
        ColumnSpec::new("State"),
    ]
}

fn engine() -> TableEngine {
    init_tracing();
    TableEngine::new(dataset(), columns(), TableOptions::default()).unwrap()
}

fn names(snapshot: &ModelSnapshot) -> Vec<String> {
    snapshot
        .display_rows()
        .iter()
        .map(|row| row.cells()[0].display.clone())
        .collect()
}

fn data_names(snapshot: &ModelSnapshot) -> Vec<String> {
    snapshot.data().iter().map(|row| row.cell(0).to_string()).collect()
}

#[test]
fn test_columns_have_defaults() {
    let snapshot = engine().snapshot();
    assert_eq!(snapshot.columns().len(), 4);
    assert!(snapshot.columns().iter().all(|c: &ColumnDescriptor| {
        c.display && c.sort && c.filter && c.sort_direction.is_none()
    }));
    assert_eq!(snapshot.filter_list(), &FilterList::empty(4));
}

#[test]
fn test_first_sort_click_is_ascending() {
    let engine = engine();
    let snapshot = engine.toggle_sort(0).unwrap();
    assert_eq!(
        names(&snapshot),
        vec!["Bob Herm", "James Houston", "Joe James", "John Walsh"]
    );
    assert_eq!(snapshot.columns()[0].sort_direction, Some(SortDirection::Ascending));
    assert_eq!(
        snapshot.announce_text(),
        Some("Table now sorted by Name : ascending")
    );
}

#[test]
fn test_sort_is_a_permutation() {
    let engine = engine();
    let mut before = data_names(&engine.snapshot());
    let mut after = data_names(&engine.toggle_sort(2).unwrap());
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_sort_remaps_selection() {
    init_tracing();
    let data: Vec<Vec<CellValue>> = vec![
        vec!["A".into(), 2.into()],
        vec!["B".into(), 3.into()],
        vec!["C".into(), 1.into()],
        vec!["D".into(), 4.into()],
    ];
    let engine = TableEngine::new(
        data,
        vec![ColumnSpec::new("Letter"), ColumnSpec::new("Rank")],
        TableOptions::default(),
    )
    .unwrap();

    engine.select_rows(SelectScope::Single { index: 0 }).unwrap();
    let snapshot = engine.toggle_sort(1).unwrap();

    assert_eq!(data_names(&snapshot), vec!["C", "A", "B", "D"]);
    assert_eq!(snapshot.selection().as_slice(), &[1]);
}

#[test]
fn test_search_joe() {
    let engine = engine();
    let snapshot = engine.set_search_text(Some("Joe")).unwrap();
    assert_eq!(names(&snapshot), vec!["Joe James"]);
    assert_eq!(
        snapshot.effects(),
        &[Effect::SearchChange {
            text: Some("Joe".into())
        }]
    );

    let snapshot = engine.set_search_text(Some("")).unwrap();
    assert_eq!(snapshot.search_text(), None);
    assert_eq!(snapshot.display_rows().len(), 4);
}

#[test]
fn test_checkbox_filter_twice_restores_state() {
    let engine = engine();
    let snapshot = engine.toggle_filter(0, "Joe James", FilterType::Checkbox).unwrap();
    assert_eq!(snapshot.filter_list().column(0), &[CellValue::from("Joe James")]);
    assert_eq!(names(&snapshot), vec!["Joe James"]);

    let snapshot = engine.toggle_filter(0, "Joe James", FilterType::Checkbox).unwrap();
    assert_eq!(snapshot.filter_list(), &FilterList::empty(4));
    assert_eq!(snapshot.display_rows().len(), 4);
}

#[test]
fn test_dropdown_filter_twice_clears() {
    let engine = engine();
    engine.toggle_filter(0, "Joe James", FilterType::Dropdown).unwrap();
    let snapshot = engine.toggle_filter(0, "Joe James", FilterType::Dropdown).unwrap();
    assert!(!snapshot.filter_list().is_active());
}

#[test]
fn test_reset_filters() {
    let engine = engine();
    engine.toggle_filter(0, "Joe James", FilterType::Checkbox).unwrap();
    let snapshot = engine.reset_filters().unwrap();
    assert!(!snapshot.filter_list().is_active());
    assert!(matches!(
        snapshot.effects(),
        [Effect::FilterChange {
            column: None,
            changed: None,
            ..
        }]
    ));
}

#[test]
fn test_filter_then_delete_selected_keeps_filters() {
    let engine = engine();
    engine.toggle_filter(0, "Joe James", FilterType::Checkbox).unwrap();
    engine.select_rows(SelectScope::Single { index: 0 }).unwrap();

    let snapshot = engine.delete_selected().unwrap();
    assert_eq!(data_names(&snapshot), vec!["John Walsh", "Bob Herm", "James Houston"]);
    assert_eq!(snapshot.filter_list().column(0), &[CellValue::from("Joe James")]);
    assert!(snapshot.display_rows().is_empty());
    assert!(snapshot.page().is_empty());
    assert!(snapshot.selection().is_empty());
    assert_eq!(snapshot.effects(), &[Effect::RowsDelete { deleted: vec![0] }]);
}

#[test]
fn test_delete_under_filter_targets_dataset_rows() {
    let engine = engine();
    engine.toggle_filter(3, "TX", FilterType::Checkbox).unwrap();
    let snapshot = engine.toggle_row(0).unwrap();
    assert_eq!(snapshot.selection().as_slice(), &[3]);

    let snapshot = engine.delete_selected().unwrap();
    assert_eq!(data_names(&snapshot), vec!["Joe James", "John Walsh", "Bob Herm"]);
}

#[test]
fn test_delete_all_rows() {
    let engine = engine();
    engine.select_rows(SelectScope::All { checked: true }).unwrap();
    let snapshot = engine.delete_selected().unwrap();
    assert!(snapshot.data().is_empty());
    assert!(snapshot.page().is_empty());
    assert_eq!(snapshot.pagination().label, "0-0 of 0");
}

#[test]
fn test_duplicate_rows_resolve_by_token() {
    init_tracing();
    let data = vec![
        vec!["Same".into(), "Row".into()],
        vec!["Other".into(), "Row".into()],
        vec!["Same".into(), "Row".into()],
    ];
    let engine = TableEngine::new(
        data,
        vec![ColumnSpec::new("A"), ColumnSpec::new("B")],
        TableOptions::default(),
    )
    .unwrap();
    engine.toggle_filter(0, "Same", FilterType::Checkbox).unwrap();

    // Second displayed row is dataset row 2, even though row 0 has equal content.
    let snapshot = engine.toggle_row(1).unwrap();
    assert_eq!(snapshot.selection().as_slice(), &[2]);

    let snapshot = engine.delete_selected().unwrap();
    assert_eq!(snapshot.data().len(), 2);
    assert_eq!(snapshot.display_rows().len(), 1);
    assert_eq!(snapshot.display_rows()[0].data_index(), 0);
}

#[test]
fn test_pagination_errors() {
    init_tracing();
    let data: Vec<Vec<CellValue>> = (0..25).map(|i| vec![CellValue::from(i)]).collect();
    let options = TableOptions::default().with_rows_per_page(10);
    let engine = TableEngine::new(data, vec![ColumnSpec::new("N")], options).unwrap();

    let snapshot = engine.set_page(2).unwrap();
    assert_eq!(snapshot.page().rows().len(), 5);
    assert_eq!(snapshot.pagination().label, "21-25 of 25");

    let err = engine.set_page(3).unwrap_err();
    assert_eq!(
        err,
        Error::PaginationRange {
            page: 3,
            total_pages: 2
        }
    );
    assert_eq!(engine.snapshot().page_window().page, 2);

    // At 20 rows per page there is one whole page, so page 2 is out of range.
    assert!(engine.set_rows_per_page(20).unwrap_err().is_pagination_range());
}

#[test]
fn test_page_zero_on_empty_display() {
    init_tracing();
    let engine = TableEngine::new(vec![], columns(), TableOptions::default()).unwrap();
    let snapshot = engine.set_page(0).unwrap();
    assert!(snapshot.page().is_empty());
    assert_eq!(snapshot.header_check_state(), HeaderCheckState::Unchecked);
}

#[test]
fn test_initial_page_is_one_based_and_validated() {
    init_tracing();
    let data: Vec<Vec<CellValue>> = (0..30).map(|i| vec![CellValue::from(i)]).collect();

    let options = TableOptions::default().with_page(2);
    let engine = TableEngine::new(data.clone(), vec![ColumnSpec::new("N")], options).unwrap();
    assert_eq!(engine.snapshot().page_window().page, 1);

    let options = TableOptions::default().with_page(5);
    let err = TableEngine::new(data, vec![ColumnSpec::new("N")], options).unwrap_err();
    assert!(err.is_pagination_range());
}

#[test]
fn test_filter_list_length_mismatch() {
    init_tracing();
    let options = TableOptions::default().with_filter_list(vec![vec![], vec![]]);
    let err = TableEngine::new(dataset(), columns(), options).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_initial_filter_list_applies() {
    init_tracing();
    let options = TableOptions::from_json_str(r#"{ "filterList": [[], [], [], ["CT", "FL"]] }"#).unwrap();
    let engine = TableEngine::new(dataset(), columns(), options).unwrap();
    assert_eq!(names(&engine.snapshot()), vec!["John Walsh", "Bob Herm"]);
}

#[test]
fn test_ragged_rows_rejected() {
    init_tracing();
    let data = vec![vec!["a".into(), "b".into()], vec!["c".into()]];
    let err = TableEngine::new(data, vec![ColumnSpec::new("A"), ColumnSpec::new("B")], TableOptions::default())
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_header_check_state() {
    let engine = engine();
    engine.select_rows(SelectScope::Single { index: 1 }).unwrap();
    assert_eq!(engine.snapshot().header_check_state(), HeaderCheckState::Indeterminate);
    let snapshot = engine.select_rows(SelectScope::All { checked: true }).unwrap();
    assert_eq!(snapshot.header_check_state(), HeaderCheckState::Checked);
}

#[test]
fn test_rows_per_page_effect() {
    let engine = engine();
    let snapshot = engine.set_rows_per_page(2).unwrap();
    assert_eq!(snapshot.page().rows().len(), 2);
    assert_eq!(snapshot.effects(), &[Effect::ChangeRowsPerPage { rows_per_page: 2 }]);

    let snapshot = engine.set_page(1).unwrap();
    assert_eq!(names(&snapshot).len(), 4);
    let visible: Vec<_> = snapshot
        .page()
        .rows()
        .iter()
        .map(|row| row.cells()[0].display.clone())
        .collect();
    assert_eq!(visible, vec!["Bob Herm", "James Houston"]);
    assert_eq!(snapshot.effects(), &[Effect::ChangePage { page: 1 }]);
}

#[test]
fn test_sort_prices_with_placeholders() {
    init_tracing();
    let data: Vec<Vec<CellValue>> = (0..48)
        .map(|i| match i % 6 {
            0 => vec![CellValue::from("N/A")],
            1 => vec![CellValue::Null],
            2 => vec![CellValue::from(f64::NAN)],
            _ => vec![CellValue::from((i * 13 % 17) as i64)],
        })
        .collect();
    let engine = TableEngine::new(data, vec![ColumnSpec::new("Price")], TableOptions::default())
        .unwrap();
    engine.select_rows(SelectScope::Single { index: 0 }).unwrap();

    let ascending = engine.toggle_sort(0).unwrap();
    assert_eq!(ascending.columns()[0].sort_direction, Some(SortDirection::Ascending));
    let cells = data_names(&ascending);
    assert_eq!(cells[0], "");
    assert!(cells[40..].iter().all(|cell| cell == "N/A"));
    assert!(cells[32..40].iter().all(|cell| cell == "NaN"));
    assert_eq!(
        ascending.data()[ascending.selection().as_slice()[0]].cell(0),
        &CellValue::from("N/A")
    );

    let descending = engine.toggle_sort(0).unwrap();
    let cells = data_names(&descending);
    assert!(cells[..8].iter().all(|cell| cell == "N/A"));
    assert_eq!(cells[47], "");
    assert_eq!(descending.selection().len(), 1);
}
