/// Public catalog: every available product as a card grid.
use iced::widget::{button, column, container, image, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length, Task};
use iced_aw::Wrap;

use crate::api::Gateway;
use crate::ingest;
use crate::state::data::Product;

pub struct Catalog {
    cards: Vec<Card>,
    loading: bool,
    error: Option<String>,
}

/// A product plus its decoded cover, so `view` never re-decodes.
struct Card {
    product: Product,
    cover: Option<image::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Product>, String>),
}

impl Catalog {
    pub fn open(gateway: &Gateway) -> (Self, Task<Message>) {
        let catalog = Self {
            cards: Vec::new(),
            loading: true,
            error: None,
        };

        let gateway = gateway.clone();
        let fetch = Task::perform(
            async move {
                gateway
                    .list_available_products()
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::Loaded,
        );

        (catalog, fetch)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(products)) => {
                self.loading = false;
                self.error = None;
                self.cards = products
                    .into_iter()
                    .map(|product| {
                        let cover = product
                            .cover_image()
                            .and_then(ingest::decode_data_uri)
                            .map(image::Handle::from_bytes);
                        Card { product, cover }
                    })
                    .collect();
            }
            Message::Loaded(Err(e)) => {
                tracing::error!("failed to load catalog: {}", e);
                self.loading = false;
                self.error = Some("Failed to load products. Please try again later.".to_string());
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        if self.loading {
            return centered_notice("Loading…");
        }
        if let Some(error) = &self.error {
            return centered_notice(error);
        }
        if self.cards.is_empty() {
            return centered_notice("No products available at the moment.");
        }

        let mut grid = Wrap::new().spacing(16.0).line_spacing(16.0);
        for card in &self.cards {
            grid = grid.push(card.view());
        }

        scrollable(container(grid).padding(24).width(Length::Fill)).into()
    }
}

impl Card {
    fn view(&self) -> Element<'_, Message> {
        let product = &self.product;

        let cover: Element<'_, Message> = match &self.cover {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(190.0))
                .content_fit(ContentFit::Cover)
                .into(),
            None => super::image_placeholder(190.0),
        };

        let mut traits = column![].spacing(2);
        if !product.sizes.is_empty() {
            traits = traits.push(text(format!("Size: {}", clip_list(&product.sizes, 3))).size(12));
        }
        if !product.colors.is_empty() {
            traits = traits.push(text(format!("Color: {}", clip_list(&product.colors, 2))).size(12));
        }
        traits = traits.push(text(format!("Stock: {}", product.stock)).size(12));

        container(
            column![
                cover,
                text(product.name.as_str()).size(18),
                text(product.category.as_str()).size(12),
                traits,
                text(format!("${:.2}", product.price))
                    .size(16)
                    .style(text::danger),
                // Checkout is outside this client; the affordance is inert.
                button(text("Add to cart").size(14)).width(Length::Fill),
            ]
            .spacing(8)
            .align_x(Alignment::Start),
        )
        .padding(12)
        .width(Length::Fixed(240.0))
        .style(container::rounded_box)
        .into()
    }
}

/// Join up to `limit` entries, trailing an ellipsis when clipped.
fn clip_list(values: &[String], limit: usize) -> String {
    let mut joined = values
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > limit {
        joined.push('…');
    }
    joined
}

fn centered_notice<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(18))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_list_adds_ellipsis() {
        let sizes: Vec<String> = ["XS", "S", "M", "L"].iter().map(|s| s.to_string()).collect();
        assert_eq!(clip_list(&sizes, 3), "XS, S, M…");
        assert_eq!(clip_list(&sizes[..2], 3), "XS, S");
    }
}
