use chrono::NaiveDate;

/// A flat record whose named fields can be searched and filtered.
pub trait Record {
    /// Display value of the named field, `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<&str>;

    /// Calendar date used by the date predicate. Records without one never
    /// pass an active date filter.
    fn date(&self) -> Option<NaiveDate> {
        None
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }

    fn date(&self) -> Option<NaiveDate> {
        (**self).date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Contains,
    Equals,
}

impl MatchMode {
    pub fn matches(&self, cell_value: &str, filter_value: &str) -> bool {
        let cell_lower = cell_value.to_lowercase();
        let filter_lower = filter_value.to_lowercase();

        match self {
            MatchMode::Contains => cell_lower.contains(&filter_lower),
            MatchMode::Equals => cell_lower == filter_lower,
        }
    }
}

/// Exact, case-insensitive equality on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPredicate {
    pub field: &'static str,
    pub value: String,
}

impl CategoryPredicate {
    pub fn matches_record<R: Record>(&self, record: &R) -> bool {
        record
            .field(self.field)
            .map(|cell| MatchMode::Equals.matches(cell, &self.value))
            .unwrap_or(false)
    }
}

/// True when any of `fields` contains `query`, ignoring case. An empty query matches everything.
pub fn matches_query<R: Record>(record: &R, fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    fields
        .iter()
        .filter_map(|name| record.field(name))
        .any(|cell| MatchMode::Contains.matches(cell, query))
}

/// Records with a searchable field containing `query`, in their original order.
pub fn filter_records<'a, R: Record>(records: &'a [R], fields: &[&str], query: &str) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| matches_query(*record, fields, query))
        .collect()
}

/// An ordered record collection plus the query, date and category predicates
/// currently applied to it. The visible subset is recomputed on every change.
pub struct TableFilterView<R> {
    records: Vec<R>,
    searchable: &'static [&'static str],
    query: String,
    date: Option<NaiveDate>,
    categories: Vec<CategoryPredicate>,
    visible: Vec<usize>,
}

impl<R: Record> TableFilterView<R> {
    pub fn new(records: Vec<R>, searchable: &'static [&'static str]) -> Self {
        let visible = (0..records.len()).collect();
        Self {
            records,
            searchable,
            query: String::new(),
            date: None,
            categories: Vec::new(),
            visible,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
        self.recompute();
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Replaces the predicate on `field`; `None` removes it.
    pub fn set_category(&mut self, field: &'static str, value: Option<String>) {
        self.categories.retain(|predicate| predicate.field != field);
        if let Some(value) = value {
            self.categories.push(CategoryPredicate { field, value });
        }
        self.recompute();
    }

    pub fn category(&self, field: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|predicate| predicate.field == field)
            .map(|predicate| predicate.value.as_str())
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn visible(&self) -> Vec<&R> {
        self.visible.iter().map(|&idx| &self.records[idx]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// Counts over the whole collection, independent of the active predicates.
    pub fn count_where(&self, predicate: impl Fn(&R) -> bool) -> usize {
        self.records.iter().filter(|record| predicate(*record)).count()
    }

    /// Distinct values of `field` in first-seen order.
    pub fn distinct_values(&self, field: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for value in self.records.iter().filter_map(|record| record.field(field)) {
            if !values.iter().any(|seen| seen == value) {
                values.push(value.to_string());
            }
        }
        values
    }

    fn passes(&self, record: &R) -> bool {
        if !matches_query(record, self.searchable, &self.query) {
            return false;
        }

        if let Some(selected) = self.date {
            if record.date() != Some(selected) {
                return false;
            }
        }

        self.categories
            .iter()
            .all(|predicate| predicate.matches_record(record))
    }

    fn recompute(&mut self) {
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.passes(record))
            .map(|(idx, _)| idx)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use crate::models::{Camera, SecurityEvent};

    const CAMERA_FIELDS: &[&str] = &["name", "location"];
    const EVENT_FIELDS: &[&str] = &["camera", "event_type", "description"];

    fn names(cameras: &[&Camera]) -> Vec<String> {
        cameras.iter().map(|camera| camera.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let cameras = fixtures::cameras();
        let result = filter_records(&cameras, CAMERA_FIELDS, "");

        assert_eq!(result.len(), 5, "Empty query should keep every camera");
        let expected: Vec<&Camera> = cameras.iter().collect();
        assert_eq!(result, expected, "Empty query should preserve original order");
    }

    #[test]
    fn test_front_matches_only_front_entrance() {
        let cameras = fixtures::cameras();
        let result = filter_records(&cameras, CAMERA_FIELDS, "front");

        assert_eq!(names(&result), vec!["Front Entrance"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let cameras = fixtures::cameras();

        assert_eq!(names(&filter_records(&cameras, CAMERA_FIELDS, "LOBBY")), vec!["Lobby Area"]);
        assert_eq!(names(&filter_records(&cameras, CAMERA_FIELDS, "pArKiNg")), vec!["Parking Lot"]);
    }

    #[test]
    fn test_query_matches_any_searchable_field() {
        let cameras = fixtures::cameras();
        // "building a" only appears in the location of Front Entrance
        let result = filter_records(&cameras, CAMERA_FIELDS, "building a");
        assert_eq!(names(&result), vec!["Front Entrance"]);

        // "outdoor" is a tag, which is not searchable
        assert!(filter_records(&cameras, CAMERA_FIELDS, "outdoor").is_empty());
    }

    #[test]
    fn test_included_and_excluded_records_partition_collection() {
        let cameras = fixtures::cameras();
        for query in ["a", "floor", "exit", "zzz", "1"] {
            let result = filter_records(&cameras, CAMERA_FIELDS, query);
            for camera in &cameras {
                let included = result.contains(&camera);
                let has_match = CAMERA_FIELDS.iter().any(|field| {
                    camera
                        .field(field)
                        .map(|value| value.to_lowercase().contains(&query.to_lowercase()))
                        .unwrap_or(false)
                });
                assert_eq!(included, has_match, "camera {} with query {:?}", camera.name, query);
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let events = fixtures::events();
        for query in ["", "door", "detected", "lot", "nothing matches"] {
            let once = filter_records(&events, EVENT_FIELDS, query);
            let twice = filter_records(&once, EVENT_FIELDS, query);
            let once_ids: Vec<u32> = once.iter().map(|event| event.id).collect();
            let twice_ids: Vec<u32> = twice.iter().map(|event| event.id).collect();
            assert_eq!(once_ids, twice_ids, "Filtering twice with {:?} should not change the result", query);
        }
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        let mut view = TableFilterView::new(fixtures::cameras(), CAMERA_FIELDS);
        view.set_query("warehouse");

        assert!(view.is_empty_result());
        assert_eq!(view.visible_count(), 0);
        assert_eq!(view.total_count(), 5, "Total count is independent of the query");
    }

    #[test]
    fn test_view_recomputes_on_each_query_change() {
        let mut view = TableFilterView::new(fixtures::cameras(), CAMERA_FIELDS);
        assert_eq!(view.visible_count(), 5);

        view.set_query("f");
        let after_f = view.visible_count();
        view.set_query("fr");
        assert_eq!(names(&view.visible()), vec!["Front Entrance"]);
        assert!(after_f >= view.visible_count(), "Longer query should never widen the result");

        view.set_query("");
        assert_eq!(view.visible_count(), 5, "Clearing the query should restore all cameras");
    }

    #[test]
    fn test_date_predicate() {
        let mut view = TableFilterView::new(fixtures::events(), EVENT_FIELDS);

        view.set_date(NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(view.visible_count(), 5, "All seeded events happened on 2024-01-15");

        view.set_date(NaiveDate::from_ymd_opt(2024, 1, 16));
        assert!(view.is_empty_result());

        view.set_date(None);
        assert_eq!(view.visible_count(), 5);
    }

    #[test]
    fn test_records_without_date_fail_active_date_filter() {
        let mut event: SecurityEvent = fixtures::events().remove(0);
        event.timestamp = "yesterday".to_string();
        let mut view = TableFilterView::new(vec![event], EVENT_FIELDS);

        view.set_date(NaiveDate::from_ymd_opt(2024, 1, 15));
        assert!(view.is_empty_result());
    }

    #[test]
    fn test_category_predicates_combine_with_query() {
        let mut view = TableFilterView::new(fixtures::events(), EVENT_FIELDS);

        view.set_category("severity", Some("High".to_string()));
        let ids: Vec<u32> = view.visible().iter().map(|event| event.id).collect();
        assert_eq!(ids, vec![2, 4]);

        view.set_query("door");
        let ids: Vec<u32> = view.visible().iter().map(|event| event.id).collect();
        assert_eq!(ids, vec![4], "Query and category should both apply");

        view.set_category("severity", Some("low".to_string()));
        assert!(view.is_empty_result(), "Replacing the category predicate should re-filter");

        view.set_category("severity", None);
        assert_eq!(view.category("severity"), None);
        assert_eq!(view.visible_count(), 1);
    }

    #[test]
    fn test_count_where_ignores_active_predicates() {
        let mut view = TableFilterView::new(fixtures::cameras(), CAMERA_FIELDS);
        view.set_query("front");

        let outdoor = view.count_where(|camera| camera.tag == "Outdoor");
        assert_eq!(outdoor, 3);
    }

    #[test]
    fn test_distinct_values_keep_first_seen_order() {
        let view = TableFilterView::new(fixtures::cameras(), CAMERA_FIELDS);

        assert_eq!(view.distinct_values("tag"), vec!["Outdoor", "Indoor"]);
        assert_eq!(
            view.distinct_values("status"),
            vec!["online", "offline", "recording", "maintenance"]
        );
        assert!(view.distinct_values("no_such_field").is_empty());
    }

    #[test]
    fn test_match_mode() {
        assert!(MatchMode::Contains.matches("Front Entrance", "ENTR"));
        assert!(!MatchMode::Equals.matches("Front Entrance", "front"));
        assert!(MatchMode::Equals.matches("Outdoor", "outdoor"));
    }
}
