use thiserror::Error;

use crate::model::course::CourseId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Course {0} does not exist in the catalog")]
    UnknownCourse(CourseId),
    #[error("Course {id} only has {stock} places available")]
    OutOfStock { id: CourseId, stock: u32 },
    #[error("Course {0} is not in the cart")]
    NotInCart(CourseId),
}
