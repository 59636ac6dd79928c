//! Integration tests for columns with cell renderers.

use horizon_grid::prelude::*;

/// Renders "First Last" as "Last, First".
fn render_name(_row: usize, raw: &CellValue) -> RenderedCell {
    let name = raw.display_text();
    let mut parts = name.split(' ');
    let first = parts.next().unwrap_or_default();
    let last = parts.next().unwrap_or_default();
    RenderedCell::text(format!("{last}, {first}"))
}

/// A city picker: shows a decorated label but exposes the city as its value.
fn render_city(row: usize, raw: &CellValue) -> RenderedCell {
    RenderedCell::with_value(format!("[{row}] {raw}"), raw.clone())
}

fn engine() -> TableEngine {
    let data: Vec<Vec<CellValue>> = serde_json::from_str(
        r#"[
            ["Joe James", "Test Corp", "Yonkers", "NY"],
            ["John Walsh", "Test Corp", "Hartford", "CT"],
            ["Bob Herm", "Test Corp", "Tampa", "FL"],
            ["James Houston", "Test Corp", "Dallas", "TX"]
        ]"#,
    )
    .unwrap();
    let columns = vec![
        ColumnSpec::new("Name").with_renderer(render_name),
        ColumnSpec::new("Company"),
        ColumnSpec::new("City").with_renderer(render_city),
        ColumnSpec::new("State"),
    ];
    TableEngine::new(data, columns, TableOptions::default()).unwrap()
}

fn display(snapshot: &ModelSnapshot) -> Vec<Vec<String>> {
    snapshot
        .display_rows()
        .iter()
        .map(|row| row.texts().into_iter().map(str::to_owned).collect())
        .collect()
}

#[test]
fn test_filter_universe_uses_rendered_values() {
    let snapshot = engine().snapshot();
    let universe: Vec<Vec<String>> = snapshot
        .filter_universe()
        .as_slice()
        .iter()
        .map(|values| values.iter().map(|v| v.to_string()).collect())
        .collect();
    assert_eq!(
        universe,
        vec![
            vec!["Herm, Bob", "Houston, James", "James, Joe", "Walsh, John"],
            vec!["Test Corp"],
            vec!["Dallas", "Hartford", "Tampa", "Yonkers"],
            vec!["CT", "FL", "NY", "TX"],
        ]
    );
}

#[test]
fn test_display_rows_are_rendered() {
    let snapshot = engine().snapshot();
    assert_eq!(
        display(&snapshot)[0],
        vec!["James, Joe", "Test Corp", "[0] Yonkers", "NY"]
    );
    assert_eq!(snapshot.data()[0].cell(0), &CellValue::from("Joe James"));
}

#[test]
fn test_search_matches_effective_values() {
    let engine = engine();
    let snapshot = engine.set_search_text(Some("Joe")).unwrap();
    assert_eq!(
        display(&snapshot),
        vec![vec!["James, Joe", "Test Corp", "[0] Yonkers", "NY"]]
    );

    // The "[n]" decoration is display-only and is not searched.
    let snapshot = engine.set_search_text(Some("[2]")).unwrap();
    assert!(snapshot.display_rows().is_empty());
}

#[test]
fn test_sort_uses_raw_values_and_rerenders() {
    let engine = engine();
    let snapshot = engine.toggle_sort(0).unwrap();
    assert_eq!(
        display(&snapshot),
        vec![
            vec!["Herm, Bob", "Test Corp", "[0] Tampa", "FL"],
            vec!["Houston, James", "Test Corp", "[1] Dallas", "TX"],
            vec!["James, Joe", "Test Corp", "[2] Yonkers", "NY"],
            vec!["Walsh, John", "Test Corp", "[3] Hartford", "CT"],
        ]
    );
}

#[test]
fn test_filter_on_rendered_value() {
    let engine = engine();
    let snapshot = engine
        .toggle_filter(0, "Walsh, John", FilterType::Checkbox)
        .unwrap();
    assert_eq!(display(&snapshot).len(), 1);
    assert_eq!(snapshot.display_rows()[0].data_index(), 1);

    // Raw names no longer match once a renderer rewrites them.
    let snapshot = engine
        .toggle_filter(0, "John Walsh", FilterType::Dropdown)
        .unwrap();
    assert!(snapshot.display_rows().is_empty());
}

#[test]
fn test_edit_cell_through_renderer() {
    let engine = engine();
    let snapshot = engine.edit_cell(2, 2, "Albany".into()).unwrap();
    assert_eq!(
        snapshot.filter_universe().values(2),
        &[
            CellValue::from("Albany"),
            CellValue::from("Dallas"),
            CellValue::from("Hartford"),
            CellValue::from("Yonkers"),
        ]
    );
    assert_eq!(display(&snapshot)[2][2], "[2] Albany");
}
