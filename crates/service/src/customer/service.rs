use std::sync::Arc;

use tracing::{info, instrument};

use models::customer::{self, CustomerPayload};

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Application service encapsulating customer business rules.
/// Only `update_customer` checks existence; everything else passes straight through.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

/// Service over a type-erased repository, as held by the HTTP layer.
pub type DynCustomerService = CustomerService<dyn CustomerRepository>;

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all_customers(&self) -> Result<Vec<customer::Model>, ServiceError> {
        self.repo.find_all().await
    }

    /// Create a customer. Any client-supplied id is discarded so storage assigns a fresh one.
    #[instrument(skip(self, payload))]
    pub async fn add_customer(&self, payload: CustomerPayload) -> Result<customer::Model, ServiceError> {
        let created = self.repo.save(payload.with_id(None)).await?;
        info!(id = created.id, "customer_created");
        Ok(created)
    }

    /// Overwrite name, email, phone and company of an existing customer.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::customer::CustomerPayload;
    /// use service::customer::{CustomerService, InMemoryCustomerRepository};
    /// use service::errors::ServiceError;
    ///
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::new()));
    /// let err = tokio_test::block_on(svc.update_customer(999, CustomerPayload::default())).unwrap_err();
    /// assert!(matches!(err, ServiceError::NotFound(_)));
    /// ```
    #[instrument(skip(self, payload))]
    pub async fn update_customer(&self, id: i64, payload: CustomerPayload) -> Result<customer::Model, ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        let merged = payload.apply_to(existing);
        let updated = self.repo.save(CustomerPayload::from(merged)).await?;
        info!(id = updated.id, "customer_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "customer_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::repository::memory::InMemoryCustomerRepository;

    fn john() -> CustomerPayload {
        CustomerPayload::new("John Doe", "john@example.com", "1234567890", "ABC Corp")
    }

    fn service() -> (Arc<InMemoryCustomerRepository>, CustomerService<InMemoryCustomerRepository>) {
        let repo = Arc::new(InMemoryCustomerRepository::new());
        (Arc::clone(&repo), CustomerService::new(repo))
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let (_, svc) = service();
        assert!(svc.get_all_customers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_assigns_id_and_is_listed() {
        let (_, svc) = service();
        let created = svc.add_customer(john()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name.as_deref(), Some("John Doe"));
        assert_eq!(created.company.as_deref(), Some("ABC Corp"));

        let all = svc.get_all_customers().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn add_ignores_client_supplied_id() {
        let (repo, svc) = service();
        let created = svc.add_customer(john().with_id(Some(50))).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let (_, svc) = service();
        let created = svc.add_customer(john()).await.unwrap();

        let body = CustomerPayload::new("Jane Roe", "jane@example.com", "555", "XYZ Ltd").with_id(Some(77));
        let updated = svc.update_customer(created.id, body).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name.as_deref(), Some("Jane Roe"));
        assert_eq!(updated.email.as_deref(), Some("jane@example.com"));
        assert_eq!(updated.phone.as_deref(), Some("555"));
        assert_eq!(updated.company.as_deref(), Some("XYZ Ltd"));

        let all = svc.get_all_customers().await.unwrap();
        assert_eq!(all, vec![updated]);
    }

    #[tokio::test]
    async fn update_with_missing_fields_clears_them() {
        let (_, svc) = service();
        let created = svc.add_customer(john()).await.unwrap();
        let body = CustomerPayload { name: Some("Only".into()), ..Default::default() };
        let updated = svc.update_customer(created.id, body).await.unwrap();
        assert_eq!(updated.name.as_deref(), Some("Only"));
        assert!(updated.email.is_none());
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_creates_nothing() {
        let (repo, svc) = service();
        let err = svc.update_customer(2, john()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn delete_removes_and_tolerates_missing() {
        let (_, svc) = service();
        let created = svc.add_customer(john()).await.unwrap();
        svc.delete_customer(created.id).await.unwrap();
        assert!(svc.get_all_customers().await.unwrap().is_empty());
        svc.delete_customer(created.id).await.unwrap();
        svc.delete_customer(12345).await.unwrap();
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let repo: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());
        let svc: DynCustomerService = CustomerService::new(repo);
        let created = svc.add_customer(john()).await.unwrap();
        assert_eq!(svc.get_all_customers().await.unwrap().len(), 1);
        svc.delete_customer(created.id).await.unwrap();
    }
}
