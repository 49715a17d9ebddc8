use std::sync::Arc;

use securedb::drivers::{InMemoryResponseBuilder, InMemoryTestDriver, StatementKind};
use securedb::error::SecureDbError;
use securedb::traits::DatabaseDriver;
use securedb::types::{Fetched, SqlValue};
use securedb::{QueryOptions, SecureDbClient};

fn users_both_rows() -> securedb::RawQueryResult {
    InMemoryResponseBuilder::new()
        .columns(&["id", "name"])
        .row(&["1", "Ann"])
        .row(&["2", "Bo"])
        .build()
}

fn client_with(driver: &Arc<InMemoryTestDriver>) -> SecureDbClient {
    SecureDbClient::with_driver(Arc::clone(driver) as Arc<dyn DatabaseDriver>)
}

#[tokio::test]
async fn test_query_get_single_row_collapses_to_mapping() {
    let driver = Arc::new(
        InMemoryTestDriver::new().with_rows(
            InMemoryResponseBuilder::new()
                .columns(&["id", "name"])
                .row(&["1", "Ann"])
                .build(),
        ),
    );
    let executor = client_with(&driver).executor();

    let fetched = executor
        .query_get("SELECT * FROM users WHERE id = $1", &[1.into()])
        .await
        .unwrap();

    // Parameters are bound as text regardless of their origin type.
    driver.assert_last_query(
        "SELECT * FROM users WHERE id = $1",
        &[SqlValue::Text("1".to_string())],
    );

    match fetched {
        Fetched::One(row) => {
            assert_eq!(row.get("id").unwrap(), "1");
            assert_eq!(row.get("name").unwrap(), "Ann");
        }
        other => panic!("expected One, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_get_zero_rows_is_empty() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let executor = client_with(&driver).executor();

    let fetched = executor
        .query_get("SELECT * FROM users WHERE id = $1", &["999".into()])
        .await
        .unwrap();

    assert_eq!(fetched, Fetched::Empty);
}

#[tokio::test]
async fn test_query_get_many_rows_keeps_order() {
    let driver = Arc::new(InMemoryTestDriver::new().with_rows(users_both_rows()));
    let executor = client_with(&driver).executor();

    let fetched = executor.query_get("SELECT * FROM users", &[]).await.unwrap();

    let rows = match fetched {
        Fetched::Many(rows) => rows,
        other => panic!("expected Many, got {other:?}"),
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("name").unwrap(), "Ann");
    assert_eq!(rows[1].get("name").unwrap(), "Bo");
}

#[tokio::test]
async fn test_query_get_with_options_count() {
    let driver = Arc::new(InMemoryTestDriver::new().with_rows(users_both_rows()));
    let executor = client_with(&driver).executor();

    let fetched = executor
        .query_get_with_options("SELECT * FROM users", &[], QueryOptions::count())
        .await
        .unwrap();

    assert_eq!(fetched, Fetched::Count(2));
}

#[tokio::test]
async fn test_count_wins_over_list() {
    let driver = Arc::new(InMemoryTestDriver::new().with_rows(users_both_rows()));
    let executor = client_with(&driver).executor();

    let fetched = executor
        .query_get_with_options(
            "SELECT * FROM users",
            &[],
            QueryOptions {
                count: true,
                list: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(fetched, Fetched::Count(2));
}

#[tokio::test]
async fn test_list_option_never_collapses_single_row() {
    let driver = Arc::new(
        InMemoryTestDriver::new().with_rows(
            InMemoryResponseBuilder::new()
                .columns(&["id", "name"])
                .row(&["1", "Ann"])
                .build(),
        ),
    );
    let executor = client_with(&driver).executor();

    let fetched = executor
        .query_get_with_options(
            "SELECT * FROM users WHERE id = $1",
            &["1".into()],
            QueryOptions::list(),
        )
        .await
        .unwrap();

    let rows = match fetched {
        Fetched::Many(rows) => rows,
        other => panic!("expected Many, got {other:?}"),
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("name").unwrap(), "Ann");
}

#[tokio::test]
async fn test_default_option_mode_returns_record_for_single_row() {
    let driver = Arc::new(
        InMemoryTestDriver::new().with_rows(
            InMemoryResponseBuilder::new()
                .columns(&["id", "name"])
                .row(&["1", "Ann"])
                .build(),
        ),
    );
    let executor = client_with(&driver).executor();

    let fetched = executor
        .query_get_with_options(
            "SELECT * FROM users WHERE id = $1",
            &["1".into()],
            QueryOptions::default(),
        )
        .await
        .unwrap();

    // The record view is a distinct shape from query_get's plain mapping.
    match fetched {
        Fetched::Record(record) => {
            assert_eq!(record.field("name").unwrap(), "Ann");
            let fields: Vec<_> = record.fields().collect();
            assert_eq!(fields, vec![("id", "1"), ("name", "Ann")]);
        }
        other => panic!("expected Record, got {other:?}"),
    }
}

#[tokio::test]
async fn test_default_option_mode_many_rows() {
    let driver = Arc::new(InMemoryTestDriver::new().with_rows(users_both_rows()));
    let executor = client_with(&driver).executor();

    let fetched = executor
        .query_get_with_options("SELECT * FROM users", &[], QueryOptions::default())
        .await
        .unwrap();

    assert!(matches!(fetched, Fetched::Many(ref rows) if rows.len() == 2));
}

#[tokio::test]
async fn test_query_set_true_when_rows_affected() {
    let driver = Arc::new(InMemoryTestDriver::new().with_affected(1));
    let executor = client_with(&driver).executor();

    let changed = executor
        .query_set(
            "UPDATE users SET name = $1 WHERE id = $2",
            &["Anna".into(), 1.into()],
        )
        .await
        .unwrap();

    assert!(changed);
    let last = driver.last_query().unwrap();
    assert_eq!(last.kind, StatementKind::Execute);
    assert_eq!(
        last.params,
        vec![
            SqlValue::Text("Anna".to_string()),
            SqlValue::Text("1".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_query_set_false_when_nothing_affected() {
    let driver = Arc::new(InMemoryTestDriver::new().with_affected(0));
    let executor = client_with(&driver).executor();

    let changed = executor
        .query_set("DELETE FROM users WHERE id = $1", &["999".into()])
        .await
        .unwrap();

    assert!(!changed);
}

#[tokio::test]
async fn test_prepare_failure_is_an_explicit_error() {
    let driver = Arc::new(
        InMemoryTestDriver::new()
            .with_prepare_failure("syntax error at or near \"SELEC\"")
            .with_prepare_failure("syntax error at or near \"SELEC\"")
            .with_prepare_failure("syntax error at or near \"UPDAT\""),
    );
    let executor = client_with(&driver).executor();

    let err = executor.query_get("SELEC *", &[]).await.unwrap_err();
    assert!(matches!(err, SecureDbError::PrepareFailed(_)));

    let err = executor
        .query_get_with_options("SELEC *", &[], QueryOptions::count())
        .await
        .unwrap_err();
    assert!(matches!(err, SecureDbError::PrepareFailed(_)));

    let err = executor.query_set("UPDAT users", &[]).await.unwrap_err();
    assert!(matches!(err, SecureDbError::PrepareFailed(_)));
}

#[tokio::test]
async fn test_executors_share_one_driver() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let client = client_with(&driver);

    // Two executors from the same client hit the same underlying session:
    // the recorded statement log is shared.
    let first = client.executor();
    let second = client.executor();

    first.query_get("SELECT 1", &[]).await.unwrap();
    second.query_get("SELECT 2", &[]).await.unwrap();

    driver.assert_query_count(2);
    let recorded = driver.recorded_queries();
    assert_eq!(recorded[0].sql, "SELECT 1");
    assert_eq!(recorded[1].sql, "SELECT 2");
}
