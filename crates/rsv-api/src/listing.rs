//! Client-side listing helpers.
//!
//! The services return whole collections; search, pagination, and stat
//! aggregation happen over the in-memory rows, mirroring how the admin
//! screens always worked. All functions are pure.

use std::collections::BTreeMap;

use serde_json::Value;

/// Bucket used by [`count_by`] for records missing the field.
pub const MISSING_FIELD_BUCKET: &str = "(sin valor)";

/// Case-insensitive substring search across every top-level scalar field.
///
/// An empty (or whitespace) query returns all rows unchanged.
#[must_use]
pub fn search(rows: &[Value], query: &str) -> Vec<Value> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row_matches(row, &needle))
        .cloned()
        .collect()
}

/// 1-based page slicing. An out-of-range page yields no rows.
#[must_use]
pub fn paginate(rows: &[Value], page: usize, per_page: usize) -> Vec<Value> {
    if per_page == 0 {
        return Vec::new();
    }
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    rows.iter().skip(start).take(per_page).cloned().collect()
}

/// Occurrence count per distinct value of `field`, sorted by value.
///
/// Records without the field (or with a non-scalar value there) count
/// under [`MISSING_FIELD_BUCKET`].
#[must_use]
pub fn count_by(rows: &[Value], field: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        let bucket = row
            .get(field)
            .and_then(scalar_text)
            .unwrap_or_else(|| MISSING_FIELD_BUCKET.to_string());
        *counts.entry(bucket).or_insert(0) += 1;
    }
    counts
}

fn row_matches(row: &Value, needle: &str) -> bool {
    match row {
        Value::Object(map) => map
            .values()
            .any(|field| scalar_text(field).is_some_and(|text| text.to_lowercase().contains(needle))),
        other => scalar_text(other).is_some_and(|text| text.to_lowercase().contains(needle)),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample_rows() -> Vec<Value> {
        vec![
            json!({"id": 1, "nombre": "Hotel Playa Azul", "ciudad": "Valencia", "activo": true}),
            json!({"id": 2, "nombre": "Casa Rural El Pinar", "ciudad": "Teruel", "activo": false}),
            json!({"id": 3, "nombre": "Hostal Centro", "ciudad": "Valencia"}),
        ]
    }

    #[test]
    fn search_matches_case_insensitively() {
        let hits = search(&sample_rows(), "valencia");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn search_matches_numbers_rendered_as_text() {
        let hits = search(&sample_rows(), "2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["nombre"], "Casa Rural El Pinar");
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(search(&sample_rows(), "  ").len(), 3);
    }

    #[test]
    fn search_without_hits_is_empty() {
        assert_eq!(search(&sample_rows(), "madrid"), Vec::<Value>::new());
    }

    #[test]
    fn paginate_slices_one_based_pages() {
        let rows = sample_rows();
        assert_eq!(paginate(&rows, 1, 2).len(), 2);
        assert_eq!(paginate(&rows, 2, 2).len(), 1);
        assert_eq!(paginate(&rows, 3, 2), Vec::<Value>::new());
    }

    #[test]
    fn paginate_treats_page_zero_as_first() {
        let rows = sample_rows();
        assert_eq!(paginate(&rows, 0, 2), paginate(&rows, 1, 2));
    }

    #[test]
    fn paginate_with_zero_per_page_is_empty() {
        assert_eq!(paginate(&sample_rows(), 1, 0), Vec::<Value>::new());
    }

    #[test]
    fn count_by_aggregates_and_buckets_missing() {
        let counts = count_by(&sample_rows(), "activo");
        assert_eq!(counts.get("true"), Some(&1));
        assert_eq!(counts.get("false"), Some(&1));
        assert_eq!(counts.get(MISSING_FIELD_BUCKET), Some(&1));
    }

    #[test]
    fn count_by_city() {
        let counts = count_by(&sample_rows(), "ciudad");
        assert_eq!(counts.get("Valencia"), Some(&2));
        assert_eq!(counts.get("Teruel"), Some(&1));
    }
}
