/// Home screen: brand hero over a timed image carousel, latest products,
/// journal teaser and contact footer.
///
/// The screen stays on the brand loading view until the readiness gate
/// reports every named load source settled; sources settle on fetch
/// completion whether it succeeded or failed.
use iced::widget::{button, column, container, image, row, stack, text};
use iced::{Alignment, Color, ContentFit, Element, Length, Task};

use crate::api::Gateway;
use crate::ingest;
use crate::state::data::{Blog, Product};
use crate::state::readiness::Readiness;

/// Seconds between automatic carousel advances.
pub const SLIDE_INTERVAL_SECS: u64 = 5;

/// How many cover images feed the hero carousel.
const MAX_SLIDES: usize = 5;

const LOAD_SOURCES: [&str; 2] = ["products", "blogs"];

pub struct Home {
    readiness: Readiness,
    products: Vec<Product>,
    blogs: Vec<Blog>,
    slides: Vec<image::Handle>,
    current_slide: usize,
    load_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ProductsLoaded(Result<Vec<Product>, String>),
    BlogsLoaded(Result<Vec<Blog>, String>),
    SlideTick,
    GoToSlide(usize),
}

impl Home {
    /// Open the screen and kick off both fetches concurrently.
    pub fn open(gateway: &Gateway) -> (Self, Task<Message>) {
        let home = Self {
            readiness: Readiness::new(&LOAD_SOURCES),
            products: Vec::new(),
            blogs: Vec::new(),
            slides: Vec::new(),
            current_slide: 0,
            load_error: None,
        };

        let products = {
            let gateway = gateway.clone();
            Task::perform(
                async move {
                    gateway
                        .list_available_products()
                        .await
                        .map_err(|e| e.to_string())
                },
                Message::ProductsLoaded,
            )
        };
        let blogs = {
            let gateway = gateway.clone();
            Task::perform(
                async move { gateway.list_blogs().await.map_err(|e| e.to_string()) },
                Message::BlogsLoaded,
            )
        };

        (home, Task::batch(vec![products, blogs]))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProductsLoaded(result) => {
                self.readiness.settle("products");
                match result {
                    Ok(products) => {
                        self.slides = products
                            .iter()
                            .filter_map(|p| p.cover_image())
                            .filter_map(ingest::decode_data_uri)
                            .take(MAX_SLIDES)
                            .map(image::Handle::from_bytes)
                            .collect();
                        self.products = products;
                    }
                    Err(e) => {
                        tracing::error!("failed to load products for home: {}", e);
                        self.load_error = Some("Failed to load the latest products".to_string());
                    }
                }
                Task::none()
            }
            Message::BlogsLoaded(result) => {
                self.readiness.settle("blogs");
                match result {
                    Ok(blogs) => self.blogs = blogs,
                    Err(e) => {
                        // The journal teaser is optional on this screen.
                        tracing::error!("failed to load blogs for home: {}", e);
                    }
                }
                Task::none()
            }
            Message::SlideTick => {
                if !self.slides.is_empty() {
                    self.current_slide = (self.current_slide + 1) % self.slides.len();
                }
                Task::none()
            }
            Message::GoToSlide(index) => {
                if index < self.slides.len() {
                    self.current_slide = index;
                }
                Task::none()
            }
        }
    }

    /// Whether the carousel timer subscription should run.
    pub fn slideshow_running(&self) -> bool {
        self.readiness.is_ready() && self.slides.len() > 1
    }

    pub fn view(&self) -> Element<'_, Message> {
        if !self.readiness.is_ready() {
            return loading_view();
        }

        let mut content = column![self.hero()].spacing(40);

        if let Some(error) = &self.load_error {
            content = content.push(
                container(text(error.as_str()).style(text::danger))
                    .padding(10)
                    .center_x(Length::Fill),
            );
        }

        content = content
            .push(self.latest_products())
            .push(self.journal())
            .push(footer());

        iced::widget::scrollable(content).into()
    }

    /// Full-bleed carousel with the brand wordmark on top.
    fn hero(&self) -> Element<'_, Message> {
        let backdrop: Element<'_, Message> = match self.slides.get(self.current_slide) {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(420.0))
                .content_fit(ContentFit::Cover)
                .into(),
            None => container(text(""))
                .width(Length::Fill)
                .height(Length::Fixed(420.0))
                .style(|_theme: &iced::Theme| container::Style {
                    background: Some(Color::from_rgb8(0x16, 0x16, 0x16).into()),
                    ..container::Style::default()
                })
                .into(),
        };

        let mut dots = row![].spacing(8);
        for index in 0..self.slides.len() {
            let marker = if index == self.current_slide {
                "●"
            } else {
                "○"
            };
            dots = dots.push(
                button(text(marker).size(12))
                    .style(button::text)
                    .on_press(Message::GoToSlide(index)),
            );
        }

        let overlay = column![
            text("GLOAMING MISTAKE").size(56),
            text("Embrace the Imperfect Hour").size(18),
            dots,
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        stack![
            backdrop,
            container(overlay)
                .center_x(Length::Fill)
                .center_y(Length::Fixed(420.0)),
        ]
        .into()
    }

    fn latest_products(&self) -> Element<'_, Message> {
        let mut strip = row![].spacing(16);
        for product in self.products.iter().take(4) {
            let cover: Element<'_, Message> = match product
                .cover_image()
                .and_then(ingest::decode_data_uri)
            {
                Some(bytes) => image(image::Handle::from_bytes(bytes))
                    .width(Length::Fixed(180.0))
                    .height(Length::Fixed(140.0))
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => super::image_placeholder(140.0),
            };

            strip = strip.push(
                container(
                    column![
                        cover,
                        text(product.name.as_str()).size(16),
                        text(format!("${:.2}", product.price)).size(14),
                    ]
                    .spacing(6),
                )
                .padding(10)
                .width(Length::Fixed(200.0))
                .style(container::rounded_box),
            );
        }

        let body: Element<'_, Message> = if self.products.is_empty() {
            text("No products available at the moment.").size(16).into()
        } else {
            strip.into()
        };

        column![text("Our latest products").size(28), body]
            .spacing(20)
            .padding(20)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    }

    fn journal(&self) -> Element<'_, Message> {
        let mut entries = column![].spacing(8);
        for blog in self.blogs.iter().take(3) {
            let date = blog
                .created_at
                .map(|d| d.format("%B %e, %Y").to_string())
                .unwrap_or_default();
            entries = entries.push(
                row![
                    text(blog.title.as_str()).size(16).width(Length::Fill),
                    text(date).size(14),
                ]
                .spacing(20),
            );
        }

        if self.blogs.is_empty() {
            return column![].into();
        }

        column![text("From the journal").size(28), entries]
            .spacing(20)
            .padding(20)
            .width(Length::Fill)
            .into()
    }
}

/// Brand loading view shown until every readiness source settles.
fn loading_view<'a>() -> Element<'a, Message> {
    container(
        column![
            text("GLOAM").size(64),
            text("Loading…").size(16),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn footer<'a>() -> Element<'a, Message> {
    container(
        row![
            column![
                text("Nomor Whatsapp GLOAM").size(12),
                text("+62 812-3217-9590").size(18),
                text("Copyright gloamingmistake 2025").size(12),
            ]
            .spacing(4),
            iced::widget::horizontal_space(),
            column![
                text("Email").size(12),
                text("gloamingmistake@gmail.com").size(18),
                text("Instagram").size(12),
                text("@gloamingmistake").size(18),
            ]
            .spacing(4),
        ]
        .spacing(40),
    )
    .padding(30)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn gateway() -> Gateway {
        Gateway::new("http://localhost:9", Duration::from_secs(1)).unwrap()
    }

    fn product(id: &str, image: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: "Tee".to_string(),
            description: String::new(),
            price: 10.0,
            stock: 1,
            category: "Shirt".to_string(),
            sizes: vec![],
            colors: vec![],
            images: image.map(|i| vec![i.to_string()]).unwrap_or_default(),
            is_available: true,
        }
    }

    #[test]
    fn test_loading_until_both_sources_settle() {
        let (mut home, _task) = Home::open(&gateway());
        assert!(!home.readiness.is_ready());

        let _ = home.update(Message::ProductsLoaded(Ok(vec![])));
        assert!(!home.readiness.is_ready());

        let _ = home.update(Message::BlogsLoaded(Err("boom".to_string())));
        assert!(home.readiness.is_ready());
    }

    #[test]
    fn test_slides_built_from_cover_images_only() {
        let (mut home, _task) = Home::open(&gateway());
        let _ = home.update(Message::ProductsLoaded(Ok(vec![
            product("a", Some("data:image/png;base64,QUFBQQ==")),
            product("b", None),
            product("c", Some("data:image/png;base64,QkJCQg==")),
        ])));

        assert_eq!(home.slides.len(), 2);
    }

    #[test]
    fn test_slide_tick_wraps_around() {
        let (mut home, _task) = Home::open(&gateway());
        let _ = home.update(Message::ProductsLoaded(Ok(vec![
            product("a", Some("data:image/png;base64,QUFBQQ==")),
            product("b", Some("data:image/png;base64,QkJCQg==")),
        ])));

        let _ = home.update(Message::SlideTick);
        assert_eq!(home.current_slide, 1);
        let _ = home.update(Message::SlideTick);
        assert_eq!(home.current_slide, 0);
    }
}
