use dioxus_logger::tracing;

use crate::{
    error::CartError,
    model::{
        cart::CartItem,
        course::{Course, CourseId},
    },
    store::{
        catalog::CatalogStore,
        observer::{Observer, SubscriptionId, Subscribers},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Added { id: CourseId },
    Updated { id: CourseId, count: u32 },
    Removed { id: CourseId },
    Cleared,
}

/// Ordered cart items.
///
/// Items are kept in the order they were first added. An item never holds a count of zero,
/// dropping to zero removes it.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    subscribers: Subscribers<CartEvent>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count of a course in the cart, 0 if absent
    pub fn count_of(&self, id: CourseId) -> u32 {
        self.position(id).map(|i| self.items[i].count).unwrap_or(0)
    }

    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.count)).sum()
    }

    /// Sum of price times count, items whose course is missing from the catalog count as free
    pub fn total_price(&self, catalog: &CatalogStore) -> f64 {
        self.items
            .iter()
            .filter_map(|item| catalog.get(item.id).map(|c| c.price * item.count as f64))
            .sum()
    }

    /// Adds one place of a course, returning its new count
    pub fn add(&mut self, course: &Course) -> Result<u32, CartError> {
        match self.position(course.id) {
            Some(i) => {
                let count = self.items[i]
                    .count
                    .checked_add(1)
                    .filter(|count| *count <= course.stock)
                    .ok_or(CartError::OutOfStock {
                        id: course.id,
                        stock: course.stock,
                    })?;

                self.items[i].count = count;
                self.subscribers.emit(&CartEvent::Updated {
                    id: course.id,
                    count,
                });

                Ok(count)
            }
            None => {
                if course.stock == 0 {
                    return Err(CartError::OutOfStock {
                        id: course.id,
                        stock: 0,
                    });
                }

                self.items.push(CartItem::new(course.id));
                self.subscribers.emit(&CartEvent::Added { id: course.id });

                Ok(1)
            }
        }
    }

    /// Removes one place of a course, returning the remaining count
    pub fn remove_one(&mut self, id: CourseId) -> Result<u32, CartError> {
        let i = self.position(id).ok_or(CartError::NotInCart(id))?;

        let count = self.items[i].count - 1;
        if count == 0 {
            self.items.remove(i);
            self.subscribers.emit(&CartEvent::Removed { id });
        } else {
            self.items[i].count = count;
            self.subscribers.emit(&CartEvent::Updated { id, count });
        }

        Ok(count)
    }

    /// Sets the count of a course outright, a count of 0 removes it
    pub fn set_count(&mut self, course: &Course, count: u32) -> Result<(), CartError> {
        if count == 0 {
            self.remove(course.id);
            return Ok(());
        }

        if count > course.stock {
            return Err(CartError::OutOfStock {
                id: course.id,
                stock: course.stock,
            });
        }

        match self.position(course.id) {
            Some(i) => {
                self.items[i].count = count;
                self.subscribers.emit(&CartEvent::Updated {
                    id: course.id,
                    count,
                });
            }
            None => {
                self.items.push(CartItem {
                    id: course.id,
                    count,
                });
                self.subscribers.emit(&CartEvent::Added { id: course.id });
                if count > 1 {
                    self.subscribers.emit(&CartEvent::Updated {
                        id: course.id,
                        count,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn remove(&mut self, id: CourseId) -> Option<CartItem> {
        let i = self.position(id)?;
        let item = self.items.remove(i);
        self.subscribers.emit(&CartEvent::Removed { id });

        Some(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.subscribers.emit(&CartEvent::Cleared);
    }

    /// Drops items whose course left the catalog and clamps counts to the current stock.
    ///
    /// Returns how many items were dropped.
    pub fn retain_known(&mut self, catalog: &CatalogStore) -> usize {
        let mut dropped = Vec::new();
        let mut clamped = Vec::new();

        self.items.retain_mut(|item| match catalog.get(item.id) {
            Some(course) if course.stock > 0 => {
                if item.count > course.stock {
                    item.count = course.stock;
                    clamped.push(*item);
                }
                true
            }
            _ => {
                dropped.push(item.id);
                false
            }
        });

        if !dropped.is_empty() {
            tracing::warn!(
                ?dropped,
                "Removed cart items no longer available in the catalog"
            );
        }

        for id in &dropped {
            self.subscribers.emit(&CartEvent::Removed { id: *id });
        }
        for item in clamped {
            self.subscribers.emit(&CartEvent::Updated {
                id: item.id,
                count: item.count,
            });
        }

        dropped.len()
    }

    pub fn subscribe(&mut self, observer: impl Observer<CartEvent> + 'static) -> SubscriptionId {
        self.subscribers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn position(&self, id: CourseId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
