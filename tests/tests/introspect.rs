use converge::schema::{Column, ColumnType};
use converge::Introspector;
use tests::MemoryConnection;

#[tokio::test]
async fn reports_table_existence_exactly() {
    tests::init_tracing();
    let mut conn = MemoryConnection::new();
    let mut introspector = Introspector::new(&mut conn);

    assert!(!introspector.table_exists("job_run").await.unwrap());

    introspector.create_table("job_run", "job_run_id").await.unwrap();

    assert!(introspector.table_exists("job_run").await.unwrap());
    // `_` is a literal here, not a single-character wildcard.
    assert!(!introspector.table_exists("job_ru_").await.unwrap());
}

#[tokio::test]
async fn renames_a_table_in_place() {
    let mut conn = MemoryConnection::new();
    let mut introspector = Introspector::new(&mut conn);

    introspector.create_table("legacy", "legacy_id").await.unwrap();
    introspector.rename_table("legacy", "modern").await.unwrap();

    assert!(!introspector.table_exists("legacy").await.unwrap());
    assert!(introspector.table_exists("modern").await.unwrap());
}

#[tokio::test]
async fn reads_back_column_details() {
    let mut conn = MemoryConnection::new();
    let mut introspector = Introspector::new(&mut conn);

    introspector.create_table("job_run", "job_run_id").await.unwrap();

    let mut column = Column::new("state", ColumnType::String);
    column.length = Some(32);
    column.allow_null = false;
    column.default = Some("queued".into());
    introspector
        .create_column("job_run", &column, Some("job_run_id"))
        .await
        .unwrap();

    let details = introspector
        .column_details("job_run", "state")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(details.ty, "varchar(32)");
    assert!(!details.nullable);
    assert_eq!(details.default.as_deref(), Some("queued"));
    assert_eq!(details.extra, "");

    assert!(introspector
        .column_details("job_run", "missing")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn position_checks_require_both_columns() {
    let mut conn = MemoryConnection::new();
    let mut introspector = Introspector::new(&mut conn);

    introspector.create_table("job_run", "job_run_id").await.unwrap();

    let err = introspector
        .column_is_after("job_run", "missing", "job_run_id")
        .await
        .unwrap_err();

    assert!(err.is_missing_column());
    assert_eq!(err.to_string(), "column `missing` not found on table `job_run`");
}
