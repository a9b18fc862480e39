use dataviz_studio::api::{ChartEngineConfig, ChartFrame, ChartKind, Studio};
use dataviz_studio::error::StudioError;
use dataviz_studio::store::{AuthSession, MemoryStore, NewDataPoint, UserId};

fn signed_in_studio() -> Studio<MemoryStore> {
    let session = AuthSession::authenticated(UserId::new(), "user@example.com");
    Studio::new(MemoryStore::new(), session, ChartEngineConfig::default()).expect("studio init")
}

#[test]
fn unauthenticated_sessions_cannot_touch_datasets() {
    let mut studio = Studio::new(
        MemoryStore::new(),
        AuthSession::Unauthenticated,
        ChartEngineConfig::default(),
    )
    .expect("studio init");

    assert!(matches!(
        studio.create_dataset("sales", ""),
        Err(StudioError::NotAuthenticated)
    ));
    assert!(matches!(
        studio.list_datasets(),
        Err(StudioError::NotAuthenticated)
    ));
}

#[test]
fn adding_a_point_requires_a_selected_dataset() {
    let mut studio = signed_in_studio();
    let result = studio.add_point(NewDataPoint::new("Jan", 10.0));
    assert!(matches!(result, Err(StudioError::NoDatasetSelected)));
}

#[test]
fn add_point_validates_label_and_value() {
    let mut studio = signed_in_studio();
    let dataset = studio.create_dataset("sales", "").expect("create");
    studio.select_dataset(dataset.id).expect("select");

    assert!(matches!(
        studio.add_point(NewDataPoint::new("  ", 1.0)),
        Err(StudioError::InvalidData(_))
    ));
    assert!(matches!(
        studio.add_point(NewDataPoint::new("Jan", f64::NAN)),
        Err(StudioError::InvalidData(_))
    ));
    assert!(studio.points().is_empty());
}

#[test]
fn mutations_reload_the_engine_snapshot() {
    let mut studio = signed_in_studio();
    let dataset = studio.create_dataset("sales", "monthly").expect("create");
    studio.select_dataset(dataset.id).expect("select");
    assert_eq!(
        studio.chart(ChartKind::Bar).expect("frame"),
        ChartFrame::Empty
    );

    studio.add_point(NewDataPoint::new("Jan", 10.0)).expect("add");
    let feb = studio.add_point(NewDataPoint::new("Feb", 20.0)).expect("add");
    assert_eq!(studio.points().len(), 2);

    let ChartFrame::Bars(bars) = studio.chart(ChartKind::Bar).expect("frame") else {
        panic!("expected bar frame");
    };
    assert_eq!(bars.len(), 2);

    studio.delete_point(feb.id).expect("delete");
    assert_eq!(studio.points().len(), 1);
    assert_eq!(studio.points()[0].label, "Jan");
}

#[test]
fn csv_import_inserts_in_row_order_and_reloads() {
    let mut studio = signed_in_studio();
    let dataset = studio.create_dataset("sales", "").expect("create");
    studio.select_dataset(dataset.id).expect("select");

    let inserted = studio
        .import_csv("label,value,category\nJan,10,q1\nFeb,20,q1\nMar,30,q1\n")
        .expect("import");
    assert_eq!(inserted, 3);

    let labels: Vec<&str> = studio.points().iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan", "Feb", "Mar"]);

    let ChartFrame::Line(line) = studio.chart(ChartKind::Line).expect("frame") else {
        panic!("expected line frame");
    };
    assert_eq!(line.vertices.len(), 3);
}

#[test]
fn csv_import_with_no_parsable_rows_inserts_nothing() {
    let mut studio = signed_in_studio();
    let dataset = studio.create_dataset("sales", "").expect("create");
    studio.select_dataset(dataset.id).expect("select");

    let inserted = studio
        .import_csv("label,value\n,1\nX,not-a-number\n")
        .expect("import");
    assert_eq!(inserted, 0);
    assert!(studio.points().is_empty());
}

#[test]
fn deleting_the_selected_dataset_clears_the_selection() {
    let mut studio = signed_in_studio();
    let dataset = studio.create_dataset("sales", "").expect("create");
    studio.select_dataset(dataset.id).expect("select");
    studio.add_point(NewDataPoint::new("Jan", 10.0)).expect("add");

    studio.delete_dataset(dataset.id).expect("delete");

    assert_eq!(studio.selected_dataset(), None);
    assert!(studio.points().is_empty());
    assert_eq!(
        studio.chart(ChartKind::Pie).expect("frame"),
        ChartFrame::Empty
    );
}

#[test]
fn deleting_an_unselected_dataset_keeps_the_current_selection() {
    let mut studio = signed_in_studio();
    let keep = studio.create_dataset("keep", "").expect("create");
    let drop = studio.create_dataset("drop", "").expect("create");

    studio.select_dataset(keep.id).expect("select");
    studio.add_point(NewDataPoint::new("Jan", 10.0)).expect("add");

    studio.delete_dataset(drop.id).expect("delete");

    assert_eq!(studio.selected_dataset(), Some(keep.id));
    assert_eq!(studio.points().len(), 1);
}
