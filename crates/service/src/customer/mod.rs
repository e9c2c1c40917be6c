//! Customer module: storage access behind a repository trait, business rules in the service.

pub mod repository;
pub mod service;

pub use repository::{memory::InMemoryCustomerRepository, CustomerRepository, SeaOrmCustomerRepository};
pub use service::{CustomerService, DynCustomerService};
