pub mod employee;
pub mod user;

pub use employee::{Employee, EmployeeField, NewEmployee};
pub use user::{NewUser, User, DEFAULT_ROLE};
