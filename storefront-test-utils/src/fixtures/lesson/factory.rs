use serde_json::{json, Value};

/// Create a mock lesson record as served by the lessons API.
///
/// The image URL is relative, matching what the API returns before the image host is applied.
///
/// # Arguments
/// - `id` - The lesson ID
/// - `stock` - Remaining places
/// - `price` - Price per place
///
/// # Returns
/// - `Value` - A JSON object with test data
pub fn mock_lesson(id: u32, stock: u32, price: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Lesson {}", id),
        "price": price,
        "imageUrl": format!("/images/lesson-{}.png", id),
        "stock": stock,
        "location": "Hendon",
        "description": "A lesson used in tests",
    })
}

/// Create a mock lesson using the older `spaces` field and no name or description
pub fn mock_legacy_lesson(id: u32, spaces: u32, price: f64) -> Value {
    json!({
        "id": id,
        "price": price,
        "imageUrl": format!("/images/lesson-{}.png", id),
        "spaces": spaces,
        "location": "Online",
    })
}

/// Create the error body the lessons API returns on failure
pub fn mock_error_body(message: &str) -> Value {
    json!({ "error": message })
}
