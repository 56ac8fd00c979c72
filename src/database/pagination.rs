use std::cmp::Ordering;

use crate::config::PaginationConfig;
use crate::validation::ValidationErrors;

/// A record property that pages can be ordered by.
///
/// `property` is the name clients use in `?sort=`, `column` the SQL column it maps to.
pub trait SortField: Copy + Send + Sync + 'static {
    type Record;

    fn from_property(property: &str) -> Option<Self>;
    fn property(&self) -> &'static str;
    fn column(&self) -> &'static str;
    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    pub field: F,
    pub direction: Direction,
}

/// Zero-based page request parsed from `?page=&size=&sort=`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<F> {
    pub page: u32,
    pub size: u32,
    pub sort: Vec<SortOrder<F>>,
}

impl<F: SortField> PageRequest<F> {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size: size.max(1), sort: Vec::new() }
    }

    pub fn with_sort(mut self, field: F, direction: Direction) -> Self {
        self.sort.push(SortOrder { field, direction });
        self
    }

    /// Parse query pairs. `sort` may repeat and takes the form
    /// `prop[,prop...][,asc|desc]`, the direction applying to every listed property.
    pub fn from_query(pairs: &[(String, String)], config: &PaginationConfig) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut page = 0u32;
        let mut size = config.default_page_size;
        let mut sort = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => match value.trim().parse::<u32>() {
                    Ok(p) => page = p,
                    Err(_) => errors.add("page", "must be a non-negative integer"),
                },
                "size" => match value.trim().parse::<u32>() {
                    Ok(0) | Err(_) => errors.add("size", "must be a positive integer"),
                    Ok(s) => size = s.min(config.max_page_size),
                },
                "sort" => {
                    let mut tokens: Vec<&str> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .collect();
                    let direction = match tokens.last().and_then(|t| Direction::parse(t)) {
                        Some(d) => {
                            tokens.pop();
                            d
                        }
                        None => Direction::Asc,
                    };
                    for token in tokens {
                        match F::from_property(token) {
                            Some(field) => sort.push(SortOrder { field, direction }),
                            None => errors.add("sort", format!("unknown sort property '{}'", token)),
                        }
                    }
                }
                _ => {}
            }
        }

        errors.into_result()?;
        Ok(Self { page, size, sort })
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// Ordering in client terms, e.g. `lastName,desc;email,asc`. Empty means unsorted.
    pub fn sort_description(&self) -> String {
        self.sort
            .iter()
            .map(|o| format!("{},{}", o.field.property(), o.direction.as_query()))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// `ORDER BY` body built only from whitelisted columns, `id` appended as tiebreaker
    pub fn order_by_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .sort
            .iter()
            .map(|o| format!("{} {}", o.field.column(), o.direction.as_sql()))
            .collect();
        if !self.sort.iter().any(|o| o.field.column() == "id") {
            parts.push("id ASC".to_string());
        }
        parts.join(", ")
    }

    /// Compare two records under this request's ordering. `tiebreak` compares ids.
    pub fn compare(&self, a: &F::Record, b: &F::Record, tiebreak: impl Fn(&F::Record, &F::Record) -> Ordering) -> Ordering {
        for order in &self.sort {
            let ord = order.field.compare(a, b);
            let ord = match order.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        tiebreak(a, b)
    }
}

/// One page of results plus the totals needed to navigate the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_no: u32,
    pub page_size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new<F: SortField>(content: Vec<T>, request: &PageRequest<F>, total_elements: i64) -> Self {
        let size = i64::from(request.size.max(1));
        let total_pages = (total_elements + size - 1) / size;
        Self {
            content,
            page_no: request.page,
            page_size: request.size,
            total_elements,
            total_pages,
            last: i64::from(request.page) + 1 >= total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_no: self.page_no,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::EmployeeField;

    fn config() -> PaginationConfig {
        PaginationConfig { default_page_size: 20, max_page_size: 50 }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_when_query_is_empty() {
        let req = PageRequest::<EmployeeField>::from_query(&[], &config()).unwrap();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, 20);
        assert!(req.sort.is_empty());
        assert_eq!(req.order_by_sql(), "id ASC");
    }

    #[test]
    fn parses_sort_with_shared_direction() {
        let req = PageRequest::<EmployeeField>::from_query(
            &pairs(&[("page", "2"), ("size", "5"), ("sort", "lastName,firstName,desc"), ("sort", "email")]),
            &config(),
        )
        .unwrap();
        assert_eq!(req.offset(), 10);
        assert_eq!(req.limit(), 5);
        assert_eq!(req.order_by_sql(), "last_name DESC, first_name DESC, email ASC, id ASC");
    }

    #[test]
    fn sort_description_uses_client_property_names() {
        let req = PageRequest::<EmployeeField>::from_query(
            &pairs(&[("sort", "lastName,desc"), ("sort", "email")]),
            &config(),
        )
        .unwrap();
        assert_eq!(req.sort_description(), "lastName,desc;email,asc");
        assert_eq!(PageRequest::<EmployeeField>::new(0, 10).sort_description(), "");
    }

    #[test]
    fn clamps_size_to_configured_maximum() {
        let req = PageRequest::<EmployeeField>::from_query(&pairs(&[("size", "1000")]), &config()).unwrap();
        assert_eq!(req.size, 50);
    }

    #[test]
    fn rejects_unknown_sort_property_and_bad_numbers() {
        let err = PageRequest::<EmployeeField>::from_query(
            &pairs(&[("sort", "password,asc"), ("page", "-1"), ("size", "0")]),
            &config(),
        )
        .unwrap_err();
        let fields: Vec<&str> = err.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"sort"));
        assert!(fields.contains(&"page"));
        assert!(fields.contains(&"size"));
    }

    #[test]
    fn page_totals_and_last_flag() {
        let req = PageRequest::<EmployeeField>::new(1, 10);
        let page = Page::new(vec![1, 2, 3], &req, 23);
        assert_eq!(page.total_pages, 3);
        assert!(!page.last);

        let req = PageRequest::<EmployeeField>::new(2, 10);
        assert!(Page::new(vec![1], &req, 21).last);

        let req = PageRequest::<EmployeeField>::new(0, 10);
        let empty: Page<i32> = Page::new(vec![], &req, 0);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.last);
    }
}
