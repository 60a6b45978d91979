/// Blog endpoints of the Gloam backend.
use super::{Gateway, GatewayError};
use crate::state::data::{Blog, NewBlog};

impl Gateway {
    /// Fetch every blog post.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, GatewayError> {
        self.get_json("/blogs").await
    }

    /// Fetch a single blog post by id.
    pub async fn get_blog(&self, id: &str) -> Result<Blog, GatewayError> {
        self.get_json(&format!("/blogs/{}", id)).await
    }

    /// Create a blog post. `createdAt` is assigned by the backend.
    pub async fn create_blog(&self, blog: &NewBlog) -> Result<(), GatewayError> {
        self.post_json("/blogs", blog).await
    }

    /// Replace the title, content and image of an existing blog post.
    pub async fn update_blog(&self, id: &str, blog: &NewBlog) -> Result<(), GatewayError> {
        self.put_json(&format!("/blogs/{}", id), blog).await
    }

    /// Delete a blog post by id.
    pub async fn delete_blog(&self, id: &str) -> Result<(), GatewayError> {
        self.delete(&format!("/blogs/{}", id)).await
    }
}
