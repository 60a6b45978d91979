/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the gateway layer and the UI layer. Field renames follow the
/// backend's wire format (`_id`, `isAvailable`, `createdAt`).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sizes offered by the product form. Stored as a set: unordered, no
/// duplicates.
pub const SIZE_OPTIONS: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Enumerated color palette offered as checkboxes. Anything outside this
/// list lives in the free-text "other colors" buffer of the form.
pub const COLOR_PALETTE: [&str; 9] = [
    "Black", "White", "Gray", "Navy", "Red", "Blue", "Green", "Brown", "Beige",
];

/// A product as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned identifier, present only after creation.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Currency-like value, non-negative.
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Ordered data-URI strings. The first entry is the cover image and
    /// the ordering is stable across edit sessions.
    #[serde(default)]
    pub images: Vec<String>,
    /// Storefront visibility flag.
    #[serde(rename = "isAvailable", default)]
    pub is_available: bool,
}

impl Product {
    /// Data URI of the cover image, if the product has any images.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Payload for creating or updating a product. Same shape as [`Product`]
/// without the backend-owned id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub images: Vec<String>,
    pub is_available: bool,
}

/// A blog post as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// At most one inline-encoded image.
    #[serde(default)]
    pub image: Option<String>,
    /// Server-assigned, read-only from this client's perspective.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a blog post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "_id": "65f0",
            "name": "Gloaming Tee",
            "price": 24.5,
            "stock": 3,
            "category": "T-shirt",
            "sizes": ["M", "L"],
            "colors": ["Black"],
            "images": ["data:image/png;base64,AAAA"],
            "isAvailable": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "65f0");
        assert!(product.is_available);
        assert_eq!(product.cover_image(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_new_product_uses_camel_case() {
        let payload = NewProduct {
            name: "Tee".to_string(),
            description: String::new(),
            price: 10.0,
            stock: 1,
            category: "Shirt".to_string(),
            sizes: vec![],
            colors: vec![],
            images: vec![],
            is_available: false,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["isAvailable"], serde_json::json!(false));
        assert!(json.get("is_available").is_none());
    }
}
