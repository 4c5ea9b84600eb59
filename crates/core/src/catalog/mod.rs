//! Catalog records served by the API.
//!
//! All records are immutable once seeded. Field names on the wire are
//! camelCase and absent optionals serialize as `null`.

pub mod campaign;
pub mod category;
pub mod product;
pub mod store;

pub use campaign::Campaign;
pub use category::Category;
pub use product::Product;
pub use store::Store;

/// Case-insensitive substring test shared by the store filters.
///
/// The empty needle matches every haystack.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case_handles_swedish_letters() {
        assert!(contains_ignore_case("Göteborg", "GÖTEBORG"));
        assert!(contains_ignore_case("Västerås", "västerÅs"));
        assert!(contains_ignore_case("Malmö", "alm"));
    }

    #[test]
    fn test_contains_ignore_case_empty_needle() {
        assert!(contains_ignore_case("Sundsvall", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn test_contains_ignore_case_miss() {
        assert!(!contains_ignore_case("Uppsala", "Umeå"));
    }
}
