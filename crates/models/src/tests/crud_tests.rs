use crate::customer::{self, CustomerPayload};
use super::{connect, db_tests_disabled};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_customer_crud() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    // Create
    let created = customer::insert(&db, CustomerPayload::new("John Doe", "john@example.com", "1234567890", "ABC Corp")).await?;
    assert!(created.id > 0);
    assert_eq!(created.name.as_deref(), Some("John Doe"));

    // Read
    let found = customer::find_by_id(&db, created.id).await?;
    assert_eq!(found.as_ref(), Some(&created));
    let all = customer::find_all(&db).await?;
    assert!(all.iter().any(|c| c.id == created.id));

    // Update
    let updated = customer::overwrite(&db, created.id, CustomerPayload::new("Jane", "jane@example.com", "555", "XYZ")).await?;
    let updated = updated.expect("row exists");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.company.as_deref(), Some("XYZ"));

    // Delete
    assert_eq!(customer::delete_by_id(&db, created.id).await?, 1);
    assert!(customer::find_by_id(&db, created.id).await?.is_none());
    assert_eq!(customer::delete_by_id(&db, created.id).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_overwrite_missing_row_returns_none() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }

    let db = setup_test_db().await?;
    let res = customer::overwrite(&db, i64::MAX, CustomerPayload::new("a", "b", "c", "d")).await?;
    assert!(res.is_none());
    assert!(customer::find_by_id(&db, i64::MAX).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_insert_ignores_client_id() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }

    let db = setup_test_db().await?;
    let created = customer::insert(&db, CustomerPayload::new("x", "y", "z", "w").with_id(Some(i64::MAX - 1))).await?;
    assert_ne!(created.id, i64::MAX - 1);
    customer::delete_by_id(&db, created.id).await?;
    Ok(())
}
