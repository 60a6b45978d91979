/// Product endpoints of the Gloam backend.
use super::{Gateway, GatewayError};
use crate::state::data::{NewProduct, Product};

impl Gateway {
    /// Fetch every product, available or not (admin view).
    pub async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.get_json("/products").await
    }

    /// Fetch only products flagged as available (storefront view). The
    /// filtering happens server-side.
    pub async fn list_available_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.get_json("/products/available").await
    }

    /// Fetch a single product by id.
    pub async fn get_product(&self, id: &str) -> Result<Product, GatewayError> {
        self.get_json(&format!("/products/{}", id)).await
    }

    /// Create a product. Images travel inline as data URIs in the JSON
    /// body; the backend assigns the id.
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), GatewayError> {
        self.post_json("/products", product).await
    }

    /// Replace every field of an existing product.
    pub async fn update_product(&self, id: &str, product: &NewProduct) -> Result<(), GatewayError> {
        self.put_json(&format!("/products/{}", id), product).await
    }

    /// Delete a product by id.
    pub async fn delete_product(&self, id: &str) -> Result<(), GatewayError> {
        self.delete(&format!("/products/{}", id)).await
    }
}
