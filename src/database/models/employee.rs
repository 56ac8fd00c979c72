use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::cmp::Ordering;

use crate::database::pagination::SortField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Column values for an insert or a full update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewEmployee {
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// Employee properties a page may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Id,
    FirstName,
    LastName,
    Email,
}

impl SortField for EmployeeField {
    type Record = Employee;

    fn from_property(property: &str) -> Option<Self> {
        match property {
            "id" => Some(EmployeeField::Id),
            "firstName" | "first_name" => Some(EmployeeField::FirstName),
            "lastName" | "last_name" => Some(EmployeeField::LastName),
            "email" => Some(EmployeeField::Email),
            _ => None,
        }
    }

    fn property(&self) -> &'static str {
        match self {
            EmployeeField::Id => "id",
            EmployeeField::FirstName => "firstName",
            EmployeeField::LastName => "lastName",
            EmployeeField::Email => "email",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            EmployeeField::Id => "id",
            EmployeeField::FirstName => "first_name",
            EmployeeField::LastName => "last_name",
            EmployeeField::Email => "email",
        }
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            EmployeeField::Id => a.id.cmp(&b.id),
            EmployeeField::FirstName => a.first_name.cmp(&b.first_name),
            EmployeeField::LastName => a.last_name.cmp(&b.last_name),
            EmployeeField::Email => a.email.cmp(&b.email),
        }
    }
}
