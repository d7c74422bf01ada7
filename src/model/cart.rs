use serde::{Deserialize, Serialize};

use crate::model::course::CourseId;

/// A course in the cart and how many places of it were selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CourseId,
    pub count: u32,
}

impl CartItem {
    pub fn new(id: CourseId) -> Self {
        Self { id, count: 1 }
    }
}
