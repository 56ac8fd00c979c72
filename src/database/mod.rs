pub mod manager;
pub mod memory;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use pagination::{Direction, Page, PageRequest, SortField};
pub use repository::{EmployeeRepository, Storage, UserRepository};
