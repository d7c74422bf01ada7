use std::cmp::Ordering;

use dioxus_logger::tracing;

use crate::{
    error::FetchError,
    model::course::{Course, CourseId},
    store::observer::{Observer, SubscriptionId, Subscribers},
};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    Loading,
    Loaded { count: usize },
    Failed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep catalog order
    #[default]
    None,
    Name,
    Location,
    Price,
    Stock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Search and sort options for listing the catalog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogQuery {
    pub search: String,
    pub sort_key: SortKey,
    pub order: SortOrder,
}

/// Ordered course records together with the state of the last load.
#[derive(Debug, Default)]
pub struct CatalogStore {
    courses: Vec<Course>,
    loading: bool,
    error: Option<String>,
    subscribers: Subscribers<CatalogEvent>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses,
            ..Self::default()
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed load, cleared by the next successful one
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.subscribers.emit(&CatalogEvent::Loading);
    }

    /// Applies the outcome of a load.
    ///
    /// On success the records are replaced in place with exactly the fetched ones. On failure
    /// the existing records are kept and the error message is recorded.
    pub fn finish_load(&mut self, result: Result<Vec<Course>, FetchError>) {
        self.loading = false;

        match result {
            Ok(courses) => {
                self.courses.clear();
                self.courses.extend(courses);
                self.error = None;

                tracing::info!(count = self.courses.len(), "Loaded course catalog");
                self.subscribers.emit(&CatalogEvent::Loaded {
                    count: self.courses.len(),
                });
            }
            Err(err) => {
                let message = err.to_string();
                tracing::error!("Error fetching courses: {}", message);

                self.error = Some(message.clone());
                self.subscribers.emit(&CatalogEvent::Failed { message });
            }
        }
    }

    /// Lists the courses matching the query's search text, sorted by its key.
    ///
    /// Sorting is stable so ties keep catalog order.
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Course> {
        let needle = query.search.trim().to_lowercase();

        let mut matches: Vec<&Course> = self
            .courses
            .iter()
            .filter(|course| needle.is_empty() || matches_search(course, &needle))
            .collect();

        if query.sort_key != SortKey::None {
            matches.sort_by(|a, b| {
                let ordering = compare_by(a, b, query.sort_key);
                match query.order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        matches
    }

    pub fn subscribe(&mut self, observer: impl Observer<CatalogEvent> + 'static) -> SubscriptionId {
        self.subscribers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

fn matches_search(course: &Course, needle: &str) -> bool {
    course.display_name().to_lowercase().contains(needle)
        || course.location.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
}

fn compare_by(a: &Course, b: &Course, key: SortKey) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Name => a
            .display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase()),
        SortKey::Location => a.location.to_lowercase().cmp(&b.location.to_lowercase()),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Stock => a.stock.cmp(&b.stock),
    }
}
