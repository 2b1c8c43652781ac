use quarry_core::domain::{
    common::pagination::{DEFAULT_PAGE_SIZE, PageRequest},
    member::value_objects::MemberSort,
};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Builds a 1-indexed page request, defaulting to the first page.
pub fn page_request(page: Option<u64>, size: Option<u64>) -> Result<PageRequest, ApiError> {
    PageRequest::new(page.unwrap_or(1), size.unwrap_or(DEFAULT_PAGE_SIZE)).map_err(ApiError::from)
}

/// Parses a sort string like `-age,username`. Absent means the default order.
pub fn member_sort(sort: Option<&str>) -> Result<MemberSort, ApiError> {
    match sort {
        Some(sort) => MemberSort::parse(sort).map_err(ApiError::from),
        None => Ok(MemberSort::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_defaults() {
        let request = page_request(None, None).unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_request_rejects_page_zero() {
        assert!(matches!(
            page_request(Some(0), Some(10)),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_member_sort() {
        assert!(member_sort(None).unwrap().specs().is_empty());
        assert_eq!(member_sort(Some("-age,username")).unwrap().specs().len(), 2);
        assert!(matches!(
            member_sort(Some("salary")),
            Err(ApiError::BadRequest(_))
        ));
    }
}
