use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::customer::{self, CustomerPayload};

use crate::errors::ServiceError;

/// Storage access for the `customers` table.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Every stored row, ordered by id.
    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError>;
    /// Insert when `payload.id` is `None` (the store assigns the id), otherwise
    /// overwrite the row with that id. Overwriting a missing row is `NotFound`.
    async fn save(&self, payload: CustomerPayload) -> Result<customer::Model, ServiceError>;
    /// Silent when the row does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
        Ok(customer::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::find_by_id(&self.db, id).await?)
    }

    async fn save(&self, payload: CustomerPayload) -> Result<customer::Model, ServiceError> {
        match payload.id {
            None => Ok(customer::insert(&self.db, payload).await?),
            Some(id) => customer::overwrite(&self.db, id, payload)
                .await?
                .ok_or_else(|| ServiceError::not_found("customer")),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        customer::delete_by_id(&self.db, id).await?;
        Ok(())
    }
}

/// In-memory repository used by tests and by the `memory` storage backend.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    struct Table {
        rows: BTreeMap<i64, customer::Model>,
        next_id: i64,
    }

    pub struct InMemoryCustomerRepository {
        table: RwLock<Table>,
    }

    impl Default for InMemoryCustomerRepository {
        fn default() -> Self {
            Self { table: RwLock::new(Table { rows: BTreeMap::new(), next_id: 1 }) }
        }
    }

    impl InMemoryCustomerRepository {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize {
            self.table.read().await.rows.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }
    }

    #[async_trait]
    impl CustomerRepository for InMemoryCustomerRepository {
        async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
            let table = self.table.read().await;
            Ok(table.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError> {
            let table = self.table.read().await;
            Ok(table.rows.get(&id).cloned())
        }

        async fn save(&self, payload: CustomerPayload) -> Result<customer::Model, ServiceError> {
            let mut table = self.table.write().await;
            match payload.id {
                None => {
                    let id = table.next_id;
                    table.next_id += 1;
                    let row = payload.into_model(id);
                    table.rows.insert(id, row.clone());
                    Ok(row)
                }
                Some(id) => {
                    let slot = table.rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("customer"))?;
                    *slot = payload.into_model(id);
                    Ok(slot.clone())
                }
            }
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            let mut table = self.table.write().await;
            table.rows.remove(&id);
            Ok(())
        }
    }
}
