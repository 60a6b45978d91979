/// Public journal: list of posts with a full-page detail view.
use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length, Task};

use crate::api::Gateway;
use crate::ingest;
use crate::state::data::Blog;

pub struct Journal {
    posts: Vec<Post>,
    loading: bool,
    error: Option<String>,
    /// Index into `posts` when a detail view is open.
    selected: Option<usize>,
}

struct Post {
    blog: Blog,
    cover: Option<image::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Blog>, String>),
    Open(usize),
    Back,
}

impl Journal {
    pub fn open(gateway: &Gateway) -> (Self, Task<Message>) {
        let journal = Self {
            posts: Vec::new(),
            loading: true,
            error: None,
            selected: None,
        };

        let gateway = gateway.clone();
        let fetch = Task::perform(
            async move { gateway.list_blogs().await.map_err(|e| e.to_string()) },
            Message::Loaded,
        );

        (journal, fetch)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(blogs)) => {
                self.loading = false;
                self.error = None;
                self.posts = blogs
                    .into_iter()
                    .map(|blog| {
                        let cover = blog
                            .image
                            .as_deref()
                            .and_then(ingest::decode_data_uri)
                            .map(image::Handle::from_bytes);
                        Post { blog, cover }
                    })
                    .collect();
            }
            Message::Loaded(Err(e)) => {
                tracing::error!("failed to load blogs: {}", e);
                self.loading = false;
                self.error = Some("Failed to load the journal. Please try again later.".to_string());
            }
            Message::Open(index) => {
                if index < self.posts.len() {
                    self.selected = Some(index);
                }
            }
            Message::Back => self.selected = None,
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

        match self.selected.and_then(|i| self.posts.get(i)) {
            Some(post) => post.detail(),
            None => self.list(),
        }
    }

    fn list(&self) -> Element<'_, Message> {
        if self.posts.is_empty() {
            return centered_notice("No posts yet.");
        }

        let mut entries = column![].spacing(14);
        for (index, post) in self.posts.iter().enumerate() {
            let blog = &post.blog;
            let excerpt: String = blog.content.chars().take(140).collect();

            entries = entries.push(
                container(
                    column![
                        row![
                            text(blog.title.as_str()).size(20).width(Length::Fill),
                            text(format_date(blog)).size(13),
                        ]
                        .spacing(20),
                        text(excerpt).size(14),
                        button(text("Read more").size(14))
                            .style(button::text)
                            .on_press(Message::Open(index)),
                    ]
                    .spacing(8),
                )
                .padding(16)
                .width(Length::Fill)
                .style(container::rounded_box),
            );
        }

        scrollable(
            container(column![text("Journal").size(36), entries].spacing(24))
                .padding(24)
                .width(Length::Fill),
        )
        .into()
    }
}

impl Post {
    fn detail(&self) -> Element<'_, Message> {
        let blog = &self.blog;

        let mut page = column![
            button(text("← Back").size(14))
                .style(button::text)
                .on_press(Message::Back),
        ]
        .spacing(16)
        .align_x(Alignment::Start);

        if let Some(handle) = &self.cover {
            page = page.push(
                image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(360.0))
                    .content_fit(ContentFit::Cover),
            );
        }

        page = page
            .push(text(blog.title.as_str()).size(34))
            .push(text(format_date(blog)).size(13))
            .push(text(blog.content.as_str()).size(15));

        scrollable(container(page).padding(24).width(Length::Fill)).into()
    }
}

fn format_date(blog: &Blog) -> String {
    blog.created_at
        .map(|d| d.format("%B %e, %Y").to_string())
        .unwrap_or_default()
}

fn centered_notice<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(18))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
