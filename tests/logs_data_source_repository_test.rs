/// Integration tests for the logs_data_sources repository
mod common;

use applog_store::datetime::parse_utc;
use applog_store::{new_uuid, CrudRepository, SourceType, StoreError};
use common::{sample_data_source, setup_db, APP_ID};

#[tokio::test]
async fn test_save_and_find_by_id() {
    let db = setup_db().await;
    let repository = db.data_sources();

    let mut source = sample_data_source(&new_uuid());
    source.log_file_path = Some("/var/log/frontend.log".to_string());
    repository.save(&source).await.unwrap();

    let persisted = repository.find_by_id(&source.uuid).await.unwrap();
    assert_eq!(persisted, Some(source));
}

#[tokio::test]
async fn test_optional_file_path_round_trips_as_none() {
    let db = setup_db().await;
    let repository = db.data_sources();
    let source = sample_data_source(&new_uuid());

    repository.save(&source).await.unwrap();

    let persisted = repository.find_by_id(&source.uuid).await.unwrap().unwrap();
    assert!(persisted.log_file_path.is_none());
}

#[tokio::test]
async fn test_save_rejects_non_canonical_uuid() {
    let db = setup_db().await;
    let repository = db.data_sources();

    let result = repository.save(&sample_data_source("UUID1")).await;
    match result {
        Err(StoreError::Validation { field, message }) => {
            assert_eq!(field, "uuid");
            assert_eq!(message, "Invalid log id format");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(repository.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_rejects_blank_name() {
    let db = setup_db().await;
    let repository = db.data_sources();

    let mut source = sample_data_source(&new_uuid());
    source.name = String::new();
    let result = repository.save(&source).await;
    assert!(matches!(result, Err(StoreError::Validation { field: "name", .. })));
}

#[tokio::test]
async fn test_find_by_application_id() {
    let db = setup_db().await;
    let repository = db.data_sources();

    let local = sample_data_source(&new_uuid());
    let mut form = sample_data_source(&new_uuid());
    form.source_type = SourceType::Form.to_string();
    form.application_id = "other-app".to_string();
    repository.save(&local).await.unwrap();
    repository.save(&form).await.unwrap();

    assert_eq!(repository.find_all().await.unwrap().len(), 2);
    assert_eq!(
        repository.find_by_application_id(APP_ID).await.unwrap(),
        vec![local]
    );
    assert_eq!(
        repository.find_by_application_id("other-app").await.unwrap(),
        vec![form]
    );
}

#[tokio::test]
async fn test_update_and_delete() {
    let db = setup_db().await;
    let repository = db.data_sources();
    let source = sample_data_source(&new_uuid());
    repository.save(&source).await.unwrap();

    let mut updated = source.clone();
    updated.name = "batch importer".to_string();
    updated.source_type = SourceType::Local.to_string();
    updated.created_at = parse_utc("2025-08-12 09:30:00 UTC").unwrap();
    updated.log_file_path = Some("/srv/import.log".to_string());
    repository.update_by_id(&source.uuid, &updated).await.unwrap();

    let persisted = repository.find_by_id(&source.uuid).await.unwrap().unwrap();
    assert_eq!(persisted, updated);

    repository.delete_by_id(&source.uuid).await.unwrap();
    assert!(!repository.exists_by_id(&source.uuid).await.unwrap());
    repository.delete_by_id(&source.uuid).await.unwrap();
}

#[tokio::test]
async fn test_update_missing_id_reports_not_found() {
    let db = setup_db().await;
    let repository = db.data_sources();
    let source = sample_data_source(&new_uuid());

    let result = repository.update_by_id(&source.uuid, &source).await;
    assert!(matches!(
        result,
        Err(StoreError::NotFound { entity: "LogsDataSource", .. })
    ));
}

#[tokio::test]
async fn test_save_duplicate_id_is_constraint_violation() {
    let db = setup_db().await;
    let repository = db.data_sources();
    let source = sample_data_source(&new_uuid());
    repository.save(&source).await.unwrap();

    let result = repository.save(&source).await;
    assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));

    repository.delete_all().await.unwrap();
    assert!(repository.find_all().await.unwrap().is_empty());
}
