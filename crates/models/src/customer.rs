use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A row of the `customers` table. Serialized as-is in API responses.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Customer as it arrives on the wire.
///
/// Every field is optional; absent fields deserialize to `None` and are stored as NULL.
/// `id` is only meaningful to storage: `None` inserts, `Some` overwrites.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl CustomerPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            company: Some(company.into()),
        }
    }

    pub fn with_id(mut self, id: Option<i64>) -> Self {
        self.id = id;
        self
    }

    /// Map to a storage row. The primary key is left unset when `id` is `None`
    /// so the identity column assigns it.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map(Set).unwrap_or(NotSet),
            name: Set(self.name),
            email: Set(self.email),
            phone: Set(self.phone),
            company: Set(self.company),
        }
    }

    /// Overwrite the four mutable fields of `existing`, keeping its id.
    pub fn apply_to(self, existing: Model) -> Model {
        Model {
            id: existing.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
        }
    }

    /// Build the row this payload would become once stored under `id`.
    pub fn into_model(self, id: i64) -> Model {
        Model { id, name: self.name, email: self.email, phone: self.phone, company: self.company }
    }
}

impl From<Model> for CustomerPayload {
    fn from(m: Model) -> Self {
        Self { id: Some(m.id), name: m.name, email: m.email, phone: m.phone, company: m.company }
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn insert(db: &DatabaseConnection, payload: CustomerPayload) -> Result<Model, errors::ModelError> {
    let am = payload.with_id(None).into_active_model();
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite the row with `id`. Returns `None` when no such row exists.
pub async fn overwrite(
    db: &DatabaseConnection,
    id: i64,
    payload: CustomerPayload,
) -> Result<Option<Model>, errors::ModelError> {
    let am = payload.with_id(Some(id)).into_active_model();
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(errors::ModelError::Db(e.to_string())),
    }
}

/// Delete by id; returns the number of rows removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
