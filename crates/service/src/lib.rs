//! Service layer providing the customer business operations on top of `models`.
//! - Storage access sits behind `CustomerRepository` (SeaORM or in-memory).
//! - `CustomerService` adds the update-existence rule.

pub mod errors;
pub mod customer;
#[cfg(test)]
pub mod test_support;
