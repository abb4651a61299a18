/// Integration tests for transaction boundaries and concurrent writers
mod common;

use applog_store::config::DatabaseConfig;
use applog_store::{CrudRepository, Database, StoreError};
use common::{sample_log, setup_db};
use sqlx::SqliteConnection;

async fn insert_raw_log(conn: &mut SqliteConnection, uuid: &str) -> applog_store::Result<()> {
    sqlx::query(
        "INSERT INTO app_logs (uuid, timestamp, severity, application_id, log_source, message)
         VALUES (?, '2025-08-11 11:09:22', 'INFO', 'app', 'test', 'raw insert')",
    )
    .bind(uuid)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn insert_two_logs(conn: &mut SqliteConnection) -> applog_store::Result<usize> {
    insert_raw_log(conn, "UUID1").await?;
    insert_raw_log(conn, "UUID2").await?;
    Ok(2)
}

async fn insert_then_fail(conn: &mut SqliteConnection) -> applog_store::Result<()> {
    insert_raw_log(conn, "UUID1").await?;
    Err(StoreError::validation("unit_of_work", "forced failure"))
}

async fn insert_with_collision(conn: &mut SqliteConnection) -> applog_store::Result<()> {
    insert_raw_log(conn, "UUID3").await?;
    insert_raw_log(conn, "UUID3").await
}

#[tokio::test]
async fn test_commit_makes_all_statements_visible() {
    let db = setup_db().await;

    let inserted = db
        .transactions()
        .execute(|conn| Box::pin(async move { insert_two_logs(conn).await }))
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let logs = db.logs();
    assert!(logs.exists_by_id("UUID1").await.unwrap());
    assert!(logs.exists_by_id("UUID2").await.unwrap());
}

#[tokio::test]
async fn test_business_error_rolls_back() {
    let db = setup_db().await;

    let result = db
        .transactions()
        .execute(|conn| Box::pin(async move { insert_then_fail(conn).await }))
        .await;

    // The unit of work's own error reaches the caller
    assert!(matches!(
        result,
        Err(StoreError::Validation { field: "unit_of_work", .. })
    ));
    assert!(!db.logs().exists_by_id("UUID1").await.unwrap());
}

#[tokio::test]
async fn test_store_error_rolls_back() {
    let db = setup_db().await;

    let result = db
        .transactions()
        .execute(|conn| Box::pin(async move { insert_with_collision(conn).await }))
        .await;

    assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));
    assert!(db.logs().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_connection_released_after_failure() {
    // Single-connection pool: a leaked transaction would block every later call
    let db = setup_db().await;
    let logs = db.logs();

    for _ in 0..3 {
        let _ = db
            .transactions()
            .execute(|conn| Box::pin(async move { insert_then_fail(conn).await }))
            .await;
    }

    logs.save(&sample_log("UUID1")).await.unwrap();
    assert_eq!(logs.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_saves_with_same_id() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite:{}", dir.path().join("race.db").display()),
        max_connections: 4,
        ..DatabaseConfig::default()
    };
    let db = Database::connect(&config).await.unwrap();
    let logs = db.logs();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let logs = logs.clone();
            tokio::spawn(async move {
                let mut log = sample_log("UUID1");
                log.message = format!("writer {i}");
                logs.save(&log).await
            })
        })
        .collect();

    let mut saved = 0;
    let mut violations = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => saved += 1,
            Err(StoreError::ConstraintViolation(_)) => violations += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(saved, 1);
    assert_eq!(violations, 7);
    assert_eq!(logs.find_all().await.unwrap().len(), 1);

    db.close().await;
}
