use dioxus_logger::tracing;

use crate::{
    error::{CartError, FetchError},
    model::course::{Course, CourseId},
    source::CatalogSource,
    store::{cart::CartStore, catalog::CatalogStore},
};

/// Application state shared by every view.
///
/// Cart operations go through here so an item can only be added for a course that exists in
/// the catalog, and a catalog refresh prunes items whose course disappeared.
#[derive(Debug, Default)]
pub struct Storefront {
    pub catalog: CatalogStore,
    pub cart: CartStore,
    sheet_open: bool,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn add_to_cart(&mut self, id: CourseId) -> Result<u32, CartError> {
        let course = find_course(&self.catalog, id)?;
        self.cart.add(course)
    }

    pub fn remove_from_cart(&mut self, id: CourseId) -> Result<u32, CartError> {
        self.cart.remove_one(id)
    }

    pub fn set_cart_count(&mut self, id: CourseId, count: u32) -> Result<(), CartError> {
        let course = find_course(&self.catalog, id)?;
        self.cart.set_count(course, count)
    }

    /// Places of a course still available once the cart is accounted for
    pub fn available(&self, id: CourseId) -> u32 {
        self.catalog
            .get(id)
            .map(|course| course.stock.saturating_sub(self.cart.count_of(id)))
            .unwrap_or(0)
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total_price(&self.catalog)
    }

    /// Applies a load result to the catalog and prunes the cart on success
    pub fn apply_catalog(&mut self, result: Result<Vec<Course>, FetchError>) {
        let succeeded = result.is_ok();
        self.catalog.finish_load(result);

        if succeeded {
            self.cart.retain_known(&self.catalog);
        }
    }

    /// Loads the catalog from `source` once, awaiting the result before applying it
    pub async fn load_from<S: CatalogSource>(&mut self, source: &S) {
        self.catalog.begin_load();
        let result = source.fetch().await;
        self.apply_catalog(result);
    }

    pub fn is_sheet_open(&self) -> bool {
        self.sheet_open
    }

    pub fn toggle_sheet(&mut self) {
        self.sheet_open = !self.sheet_open;
        tracing::debug!(open = self.sheet_open, "Toggled cart sheet");
    }

    pub fn close_sheet(&mut self) {
        self.sheet_open = false;
    }
}

fn find_course(catalog: &CatalogStore, id: CourseId) -> Result<&Course, CartError> {
    catalog.get(id).ok_or(CartError::UnknownCourse(id))
}
