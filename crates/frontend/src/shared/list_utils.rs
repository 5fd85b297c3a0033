/// Generic helpers for client-side list filtering and sorting
use std::cmp::Ordering;

/// Trait for row types that support text search
pub trait Searchable {
    /// Whether the row matches the search term
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for row types that support column sorting
pub trait Sortable {
    /// Compare two rows by the named field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the named field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by a search term. An empty or whitespace-only term
/// keeps everything; otherwise matching is delegated to the row type.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let term = filter.trim();
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        price: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "price" => self
                    .price
                    .partial_cmp(&other.price)
                    .unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Blue Jeans".into(), price: 50.0 },
            Row { name: "Casual Shirt".into(), price: 60.0 },
            Row { name: "Classic Sneakers".into(), price: 80.0 },
        ]
    }

    #[test]
    fn test_filter_case_insensitive() {
        let filtered = filter_list(&rows(), "blue");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Blue Jeans");
    }

    #[test]
    fn test_empty_filter_keeps_all() {
        assert_eq!(filter_list(&rows(), "").len(), 3);
        assert_eq!(filter_list(&rows(), "   ").len(), 3);
    }

    #[test]
    fn test_sort_descending() {
        let mut items = rows();
        sort_list(&mut items, "price", false);
        assert_eq!(items[0].name, "Classic Sneakers");
        assert_eq!(items[2].name, "Blue Jeans");
    }

    #[test]
    fn test_sort_unknown_field_is_stable() {
        let mut items = rows();
        sort_list(&mut items, "nope", true);
        assert_eq!(items, rows());
    }
}
