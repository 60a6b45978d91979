/// Draft state for the admin create/edit forms
///
/// A form owns a transient copy of one entity's fields while it is open.
/// Opening in edit mode pre-populates every field from the selected
/// entity; submitting validates and assembles the full payload; cancel
/// discards the draft unconditionally. Drafts are never shared; the
/// admin screen keeps at most one form open at a time.
use iced::widget::text_editor;

use crate::ingest::IngestedImage;
use crate::state::data::{Blog, NewBlog, NewProduct, Product, COLOR_PALETTE};

/// Client-side validation failures. These block submission before any
/// network call and are reported inline in the form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("title is required")]
    MissingTitle,
    #[error("category is required")]
    MissingCategory,
    #[error("price must be a non-negative number")]
    InvalidPrice,
    #[error("stock must be a non-negative whole number")]
    InvalidStock,
}

/// Merge the enumerated palette selections with the free-text buffer.
///
/// The buffer is split on commas, trimmed, blank-filtered and appended;
/// duplicates collapse case-insensitively with the first casing winning.
pub fn merge_colors(selected: &[String], other: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    let candidates = selected
        .iter()
        .map(|c| c.trim())
        .chain(other.split(',').map(str::trim))
        .filter(|c| !c.is_empty());

    for color in candidates {
        let duplicate = merged.iter().any(|m| m.eq_ignore_ascii_case(color));
        if !duplicate {
            merged.push(color.to_string());
        }
    }

    merged
}

/// Split an entity's stored colors back into palette selections and the
/// free-text complement, comma-joined. The inverse of [`merge_colors`]
/// for edit pre-population.
pub fn split_colors(colors: &[String]) -> (Vec<String>, String) {
    let mut palette_selection = Vec::new();
    let mut other = Vec::new();

    for color in colors {
        match COLOR_PALETTE
            .iter()
            .find(|p| p.eq_ignore_ascii_case(color))
        {
            // Normalize to the palette casing so the checkbox matches.
            Some(palette) => palette_selection.push(palette.to_string()),
            None => other.push(color.clone()),
        }
    }

    (palette_selection, other.join(", "))
}

/// Extract an editor's text without the trailing newline the editor
/// appends to its last line.
fn multiline_text(content: &text_editor::Content) -> String {
    let text = content.text();
    text.strip_suffix('\n').unwrap_or(&text).to_string()
}

/// Draft fields for the product form.
#[derive(Default)]
pub struct ProductForm {
    /// Id of the product being edited; `None` means create mode.
    pub editing: Option<String>,
    pub name: String,
    pub description: text_editor::Content,
    /// Raw text buffers; numeric coercion happens at submit time.
    pub price: String,
    pub stock: String,
    pub category: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub other_color: String,
    pub is_available: bool,
    /// Ordered image sequence; index 0 renders as the cover preview.
    pub images: Vec<IngestedImage>,
    /// Submission in flight; the submit action is disabled meanwhile.
    pub submitting: bool,
    /// Retained validation or mutation error, shown inline.
    pub error: Option<String>,
}

impl ProductForm {
    /// Empty draft in create mode.
    pub fn new() -> Self {
        Self {
            is_available: true,
            ..Self::default()
        }
    }

    /// Draft pre-populated from an existing product, including the
    /// palette/free-text color split and rebuilt image previews tagged
    /// with synthetic positional names.
    pub fn edit(product: &Product) -> Self {
        let (colors, other_color) = split_colors(&product.colors);

        let images = product
            .images
            .iter()
            .enumerate()
            .map(|(idx, uri)| IngestedImage::from_data_uri(uri, format!("Image {}", idx + 1)))
            .collect();

        Self {
            editing: Some(product.id.clone()),
            name: product.name.clone(),
            description: text_editor::Content::with_text(&product.description),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category: product.category.clone(),
            sizes: product.sizes.clone(),
            colors,
            other_color,
            is_available: product.is_available,
            images,
            submitting: false,
            error: None,
        }
    }

    /// Toggle a size checkbox. Sizes behave as a set.
    pub fn toggle_size(&mut self, size: &str) {
        if let Some(pos) = self.sizes.iter().position(|s| s == size) {
            self.sizes.remove(pos);
        } else {
            self.sizes.push(size.to_string());
        }
    }

    /// Toggle a palette color checkbox.
    pub fn toggle_color(&mut self, color: &str) {
        if let Some(pos) = self.colors.iter().position(|c| c == color) {
            self.colors.remove(pos);
        } else {
            self.colors.push(color.to_string());
        }
    }

    /// Append a batch of ingested images, preserving both the existing
    /// order and the batch order.
    pub fn append_images(&mut self, batch: Vec<IngestedImage>) {
        self.images.extend(batch);
    }

    /// Remove the image at `index`, shifting later entries down without
    /// disturbing their relative order.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Validate the draft and assemble the full submission payload.
    ///
    /// Colors are merged from the palette selection and the free-text
    /// buffer; price and stock are coerced from their text buffers. Any
    /// failure here means the gateway is never called.
    pub fn payload(&self) -> Result<NewProduct, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }

        // u32 parsing rejects negatives and fractions outright.
        let stock: u32 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidStock)?;

        Ok(NewProduct {
            name: self.name.trim().to_string(),
            description: multiline_text(&self.description),
            price,
            stock,
            category: self.category.clone(),
            sizes: self.sizes.clone(),
            colors: merge_colors(&self.colors, &self.other_color),
            images: self.images.iter().map(|i| i.data_uri.clone()).collect(),
            is_available: self.is_available,
        })
    }
}

/// Draft fields for the blog form.
#[derive(Default)]
pub struct BlogForm {
    /// Id of the blog being edited; `None` means create mode.
    pub editing: Option<String>,
    pub title: String,
    pub content: text_editor::Content,
    /// At most one image; a new ingestion replaces the previous one.
    pub image: Option<IngestedImage>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl BlogForm {
    /// Empty draft in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-populated from an existing blog post.
    pub fn edit(blog: &Blog) -> Self {
        Self {
            editing: Some(blog.id.clone()),
            title: blog.title.clone(),
            content: text_editor::Content::with_text(&blog.content),
            image: blog
                .image
                .as_deref()
                .map(|uri| IngestedImage::from_data_uri(uri, "Cover image".to_string())),
            submitting: false,
            error: None,
        }
    }

    /// Replace-semantics ingestion: the last image of the batch wins and
    /// any previous image is discarded.
    pub fn set_image(&mut self, batch: Vec<IngestedImage>) {
        if let Some(image) = batch.into_iter().last() {
            self.image = Some(image);
        }
    }

    /// Drop the current image.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Validate the draft and assemble the submission payload.
    pub fn payload(&self) -> Result<NewBlog, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        Ok(NewBlog {
            title: self.title.trim().to_string(),
            content: multiline_text(&self.content),
            image: self.image.as_ref().map(|i| i.data_uri.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(tag: &str) -> String {
        // Valid data URIs with distinguishable payloads.
        format!("data:image/png;base64,{}", match tag {
            "a" => "QUFBQQ==",
            "b" => "QkJCQg==",
            _ => "Q0NDQw==",
        })
    }

    fn ingested(tag: &str) -> IngestedImage {
        IngestedImage::from_data_uri(&uri(tag), format!("{}.png", tag))
    }

    fn sample_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Gloaming Jacket".to_string(),
            description: "Heavyweight".to_string(),
            price: 79.9,
            stock: 4,
            category: "Jacket".to_string(),
            sizes: vec!["M".to_string(), "L".to_string()],
            colors: vec!["Black".to_string(), "Neon Pink".to_string()],
            images: vec![uri("a"), uri("b")],
            is_available: true,
        }
    }

    #[test]
    fn test_merge_colors_collapses_duplicates() {
        let selected = vec!["Black".to_string(), "Red".to_string()];
        let merged = merge_colors(&selected, "Red, Green, Green");

        assert_eq!(merged.len(), 3);
        for expected in ["Black", "Red", "Green"] {
            assert!(merged.iter().any(|c| c == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_merge_colors_filters_blanks() {
        let merged = merge_colors(&[], " , Mauve ,, ");
        assert_eq!(merged, vec!["Mauve".to_string()]);
    }

    #[test]
    fn test_merge_colors_is_case_insensitive() {
        let selected = vec!["Black".to_string()];
        let merged = merge_colors(&selected, "black, BLACK");
        assert_eq!(merged, vec!["Black".to_string()]);
    }

    #[test]
    fn test_append_preserves_order_and_remove_shifts() {
        let mut form = ProductForm::new();
        form.append_images(vec![ingested("a")]);
        form.append_images(vec![ingested("b")]);

        assert_eq!(form.images.len(), 2);
        assert_eq!(form.images[0].filename, "a.png");
        assert_eq!(form.images[1].filename, "b.png");

        form.remove_image(0);
        assert_eq!(form.images.len(), 1);
        assert_eq!(form.images[0].filename, "b.png");
    }

    #[test]
    fn test_blog_image_replaces_instead_of_appending() {
        let mut form = BlogForm::new();
        form.set_image(vec![ingested("a")]);
        form.set_image(vec![ingested("b")]);

        assert_eq!(form.image.as_ref().unwrap().filename, "b.png");
    }

    #[test]
    fn test_blog_empty_batch_keeps_current_image() {
        let mut form = BlogForm::new();
        form.set_image(vec![ingested("a")]);
        form.set_image(vec![]);

        assert_eq!(form.image.as_ref().unwrap().filename, "a.png");
    }

    #[test]
    fn test_edit_prepopulation_splits_palette_colors() {
        let form = ProductForm::edit(&sample_product());

        assert_eq!(form.editing.as_deref(), Some("p1"));
        assert_eq!(form.colors, vec!["Black".to_string()]);
        assert_eq!(form.other_color, "Neon Pink");
        assert_eq!(form.price, "79.9");
        assert_eq!(form.stock, "4");

        // Previews rebuilt with synthetic positional names, order kept.
        assert_eq!(form.images.len(), 2);
        assert_eq!(form.images[0].filename, "Image 1");
        assert_eq!(form.images[0].data_uri, uri("a"));
    }

    #[test]
    fn test_edit_round_trips_through_payload() {
        let product = sample_product();
        let payload = ProductForm::edit(&product).payload().unwrap();

        assert_eq!(payload.name, product.name);
        assert_eq!(payload.images, product.images);
        for color in &product.colors {
            assert!(payload.colors.iter().any(|c| c == color));
        }
    }

    #[test]
    fn test_payload_rejects_garbage_price() {
        let mut form = ProductForm::edit(&sample_product());
        form.price = "abc".to_string();

        assert_eq!(form.payload(), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_payload_rejects_negative_values() {
        let mut form = ProductForm::edit(&sample_product());
        form.price = "-1".to_string();
        assert_eq!(form.payload(), Err(ValidationError::InvalidPrice));

        form.price = "1".to_string();
        form.stock = "-3".to_string();
        assert_eq!(form.payload(), Err(ValidationError::InvalidStock));
    }

    #[test]
    fn test_payload_requires_name() {
        let mut form = ProductForm::edit(&sample_product());
        form.name = "   ".to_string();
        assert_eq!(form.payload(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_blog_payload_requires_title() {
        let form = BlogForm::new();
        assert_eq!(form.payload(), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn test_toggle_size_behaves_as_set() {
        let mut form = ProductForm::new();
        form.toggle_size("M");
        form.toggle_size("M");
        assert!(form.sizes.is_empty());

        form.toggle_size("XL");
        assert_eq!(form.sizes, vec!["XL".to_string()]);
    }
}
