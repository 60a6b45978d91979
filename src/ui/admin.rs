/// Admin panel: product inventory and journal management.
///
/// This screen owns the authoritative in-memory lists. They are only ever
/// replaced wholesale from a completed fetch: after any successful
/// create, update or delete, the affected entity's list is re-fetched
/// rather than patched locally, so the view is always re-derived from the
/// backend's source of truth.
///
/// At most one form (product or blog) is open at a time; opening either
/// replaces whatever was open. Deletion is guarded by a confirmation
/// dialog and a per-row in-flight flag keyed by id, so unrelated rows
/// stay interactive while one delete is pending.
use std::collections::HashSet;

use iced::widget::{
    button, checkbox, column, container, image, pick_list, row, scrollable, text, text_editor,
    text_input,
};
use iced::{Alignment, ContentFit, Element, Length, Task};
use iced_aw::Wrap;
use rfd::FileDialog;

use crate::api::Gateway;
use crate::ingest::{self, IngestedImage};
use crate::state::data::{Blog, Product, COLOR_PALETTE, SIZE_OPTIONS};
use crate::state::form::{BlogForm, ProductForm};
use crate::ui::Notice;

pub struct Admin {
    products: Vec<Product>,
    blogs: Vec<Blog>,
    products_loading: bool,
    blogs_loading: bool,
    /// Ids with a DELETE request in flight. Each entry only ever touches
    /// its own key, so concurrent deletes need no further coordination.
    deleting_products: HashSet<String>,
    deleting_blogs: HashSet<String>,
    form: Option<OpenForm>,
    pending_delete: Option<DeleteTarget>,
    notice: Option<Notice>,
    /// Category list offered by the product form (configuration input).
    categories: Vec<String>,
}

enum OpenForm {
    Product(ProductForm),
    Blog(BlogForm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Product,
    Blog,
}

impl EntityKind {
    fn noun(self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Blog => "blog post",
        }
    }
}

/// Row awaiting the destructive-action confirmation.
#[derive(Debug, Clone)]
struct DeleteTarget {
    kind: EntityKind,
    id: String,
    label: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    ProductsLoaded(Result<Vec<Product>, String>),
    BlogsLoaded(Result<Vec<Blog>, String>),

    OpenCreateProduct,
    OpenEditProduct(String),
    OpenCreateBlog,
    OpenEditBlog(String),
    CancelForm,

    NameChanged(String),
    DescriptionEdited(text_editor::Action),
    PriceChanged(String),
    StockChanged(String),
    CategoryPicked(String),
    SizeToggled(&'static str),
    ColorToggled(&'static str),
    OtherColorChanged(String),
    AvailabilityToggled(bool),

    TitleChanged(String),
    ContentEdited(text_editor::Action),

    PickImages,
    ImagesIngested(Vec<IngestedImage>),
    RemoveImage(usize),
    RemoveBlogImage,

    Submit,
    Submitted(EntityKind, Result<(), String>),

    RequestDelete(EntityKind, String, String),
    ConfirmDelete,
    CancelDelete,
    Deleted(EntityKind, String, Result<(), String>),

    DismissNotice,
}

impl Admin {
    /// Open the panel and fetch both lists concurrently.
    pub fn open(gateway: &Gateway, categories: Vec<String>) -> (Self, Task<Message>) {
        let admin = Self {
            products: Vec::new(),
            blogs: Vec::new(),
            products_loading: true,
            blogs_loading: true,
            deleting_products: HashSet::new(),
            deleting_blogs: HashSet::new(),
            form: None,
            pending_delete: None,
            notice: None,
            categories,
        };

        let tasks = Task::batch(vec![fetch_products(gateway), fetch_blogs(gateway)]);
        (admin, tasks)
    }

    pub fn update(&mut self, gateway: &Gateway, message: Message) -> Task<Message> {
        match message {
            Message::ProductsLoaded(result) => {
                self.products_loading = false;
                match result {
                    Ok(products) => self.products = products,
                    Err(e) => {
                        tracing::error!("failed to load products: {}", e);
                        self.notice = Some(Notice::Error("Failed to load products".to_string()));
                    }
                }
                Task::none()
            }
            Message::BlogsLoaded(result) => {
                self.blogs_loading = false;
                match result {
                    Ok(blogs) => self.blogs = blogs,
                    Err(e) => {
                        tracing::error!("failed to load blog posts: {}", e);
                        self.notice = Some(Notice::Error("Failed to load blog posts".to_string()));
                    }
                }
                Task::none()
            }

            Message::OpenCreateProduct => {
                self.form = Some(OpenForm::Product(ProductForm::new()));
                Task::none()
            }
            Message::OpenEditProduct(id) => {
                if let Some(product) = self.products.iter().find(|p| p.id == id) {
                    self.form = Some(OpenForm::Product(ProductForm::edit(product)));
                }
                Task::none()
            }
            Message::OpenCreateBlog => {
                self.form = Some(OpenForm::Blog(BlogForm::new()));
                Task::none()
            }
            Message::OpenEditBlog(id) => {
                if let Some(blog) = self.blogs.iter().find(|b| b.id == id) {
                    self.form = Some(OpenForm::Blog(BlogForm::edit(blog)));
                }
                Task::none()
            }
            Message::CancelForm => {
                // Discards the draft unconditionally, ingested images
                // included.
                self.form = None;
                Task::none()
            }

            Message::NameChanged(value) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.name = value;
                }
                Task::none()
            }
            Message::DescriptionEdited(action) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.description.perform(action);
                }
                Task::none()
            }
            Message::PriceChanged(value) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.price = value;
                }
                Task::none()
            }
            Message::StockChanged(value) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.stock = value;
                }
                Task::none()
            }
            Message::CategoryPicked(value) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.category = value;
                }
                Task::none()
            }
            Message::SizeToggled(size) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.toggle_size(size);
                }
                Task::none()
            }
            Message::ColorToggled(color) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.toggle_color(color);
                }
                Task::none()
            }
            Message::OtherColorChanged(value) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.other_color = value;
                }
                Task::none()
            }
            Message::AvailabilityToggled(value) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.is_available = value;
                }
                Task::none()
            }

            Message::TitleChanged(value) => {
                if let Some(OpenForm::Blog(form)) = &mut self.form {
                    form.title = value;
                }
                Task::none()
            }
            Message::ContentEdited(action) => {
                if let Some(OpenForm::Blog(form)) = &mut self.form {
                    form.content.perform(action);
                }
                Task::none()
            }

            Message::PickImages => {
                if self.form.is_none() {
                    return Task::none();
                }
                let multiple = matches!(self.form, Some(OpenForm::Product(_)));

                // Native picker, same pattern as any other modal dialog.
                let dialog = FileDialog::new()
                    .set_title("Select images")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"]);
                let paths = if multiple {
                    dialog.pick_files()
                } else {
                    dialog.pick_file().map(|path| vec![path])
                };

                match paths {
                    Some(paths) => {
                        Task::perform(ingest::ingest_files(paths), Message::ImagesIngested)
                    }
                    None => Task::none(),
                }
            }
            Message::ImagesIngested(batch) => {
                match &mut self.form {
                    Some(OpenForm::Product(form)) => form.append_images(batch),
                    Some(OpenForm::Blog(form)) => form.set_image(batch),
                    None => {}
                }
                Task::none()
            }
            Message::RemoveImage(index) => {
                if let Some(OpenForm::Product(form)) = &mut self.form {
                    form.remove_image(index);
                }
                Task::none()
            }
            Message::RemoveBlogImage => {
                if let Some(OpenForm::Blog(form)) = &mut self.form {
                    form.clear_image();
                }
                Task::none()
            }

            Message::Submit => self.submit(gateway),
            Message::Submitted(kind, Ok(())) => {
                self.form = None;
                self.notice = Some(Notice::Success(format!("✅ {} saved", capitalize(kind.noun()))));
                self.refresh(gateway, kind)
            }
            Message::Submitted(kind, Err(e)) => {
                tracing::error!("failed to save {}: {}", kind.noun(), e);
                match &mut self.form {
                    Some(OpenForm::Product(form)) => {
                        form.submitting = false;
                        form.error = Some(format!("Failed to save {}", kind.noun()));
                    }
                    Some(OpenForm::Blog(form)) => {
                        form.submitting = false;
                        form.error = Some(format!("Failed to save {}", kind.noun()));
                    }
                    None => {}
                }
                Task::none()
            }

            Message::RequestDelete(kind, id, label) => {
                // A row with a delete already in flight is not offered a
                // second one.
                if !self.deleting(kind).contains(&id) {
                    self.pending_delete = Some(DeleteTarget { kind, id, label });
                }
                Task::none()
            }
            Message::CancelDelete => {
                self.pending_delete = None;
                Task::none()
            }
            Message::ConfirmDelete => {
                let Some(target) = self.pending_delete.take() else {
                    return Task::none();
                };
                if !self.begin_delete(target.kind, &target.id) {
                    return Task::none();
                }

                let gateway = gateway.clone();
                let kind = target.kind;
                let id = target.id;
                Task::perform(
                    {
                        let id = id.clone();
                        async move {
                            match kind {
                                EntityKind::Product => gateway.delete_product(&id).await,
                                EntityKind::Blog => gateway.delete_blog(&id).await,
                            }
                            .map_err(|e| e.to_string())
                        }
                    },
                    move |result| Message::Deleted(kind, id.clone(), result),
                )
            }
            Message::Deleted(kind, id, result) => {
                // The flag clears whether the delete succeeded or not.
                self.deleting_mut(kind).remove(&id);
                match result {
                    Ok(()) => {
                        self.notice =
                            Some(Notice::Success(format!("✅ {} deleted", capitalize(kind.noun()))));
                        self.refresh(gateway, kind)
                    }
                    Err(e) => {
                        tracing::error!("failed to delete {} {}: {}", kind.noun(), id, e);
                        self.notice =
                            Some(Notice::Error(format!("Failed to delete {}", kind.noun())));
                        Task::none()
                    }
                }
            }

            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    /// Validate the open form and dispatch the create or update call.
    /// Validation failures stay inline and never reach the gateway.
    fn submit(&mut self, gateway: &Gateway) -> Task<Message> {
        match &mut self.form {
            Some(OpenForm::Product(form)) => {
                if form.submitting {
                    return Task::none();
                }
                let payload = match form.payload() {
                    Ok(payload) => payload,
                    Err(e) => {
                        form.error = Some(e.to_string());
                        return Task::none();
                    }
                };
                form.submitting = true;
                form.error = None;

                let gateway = gateway.clone();
                let editing = form.editing.clone();
                Task::perform(
                    async move {
                        match editing {
                            Some(id) => gateway.update_product(&id, &payload).await,
                            None => gateway.create_product(&payload).await,
                        }
                        .map_err(|e| e.to_string())
                    },
                    |result| Message::Submitted(EntityKind::Product, result),
                )
            }
            Some(OpenForm::Blog(form)) => {
                if form.submitting {
                    return Task::none();
                }
                let payload = match form.payload() {
                    Ok(payload) => payload,
                    Err(e) => {
                        form.error = Some(e.to_string());
                        return Task::none();
                    }
                };
                form.submitting = true;
                form.error = None;

                let gateway = gateway.clone();
                let editing = form.editing.clone();
                Task::perform(
                    async move {
                        match editing {
                            Some(id) => gateway.update_blog(&id, &payload).await,
                            None => gateway.create_blog(&payload).await,
                        }
                        .map_err(|e| e.to_string())
                    },
                    |result| Message::Submitted(EntityKind::Blog, result),
                )
            }
            None => Task::none(),
        }
    }

    /// Re-fetch only the mutated entity's list.
    fn refresh(&mut self, gateway: &Gateway, kind: EntityKind) -> Task<Message> {
        match kind {
            EntityKind::Product => {
                self.products_loading = true;
                fetch_products(gateway)
            }
            EntityKind::Blog => {
                self.blogs_loading = true;
                fetch_blogs(gateway)
            }
        }
    }

    /// Claim the per-row delete flag. Returns `false` when a delete for
    /// this id is already in flight.
    fn begin_delete(&mut self, kind: EntityKind, id: &str) -> bool {
        self.deleting_mut(kind).insert(id.to_string())
    }

    fn deleting(&self, kind: EntityKind) -> &HashSet<String> {
        match kind {
            EntityKind::Product => &self.deleting_products,
            EntityKind::Blog => &self.deleting_blogs,
        }
    }

    fn deleting_mut(&mut self, kind: EntityKind) -> &mut HashSet<String> {
        match kind {
            EntityKind::Product => &mut self.deleting_products,
            EntityKind::Blog => &mut self.deleting_blogs,
        }
    }

    // ---- view ----

    pub fn view(&self) -> Element<'_, Message> {
        let mut body = column![self.header()].spacing(20).padding(24);

        if let Some(notice) = &self.notice {
            body = body.push(super::notice_banner(notice, Message::DismissNotice));
        }

        body = body.push(self.product_table()).push(self.blog_table());

        let base: Element<'_, Message> = scrollable(body).into();

        if let Some(form) = &self.form {
            let content = match form {
                OpenForm::Product(form) => self.product_form(form),
                OpenForm::Blog(form) => self.blog_form(form),
            };
            return super::modal(base, content, Message::CancelForm);
        }

        if let Some(target) = &self.pending_delete {
            return super::modal(base, confirm_delete(target), Message::CancelDelete);
        }

        base
    }

    fn header(&self) -> Element<'_, Message> {
        row![
            text("Gloam Admin").size(30).width(Length::Fill),
            button(text("+ Add Product").size(14))
                .padding(10)
                .on_press(Message::OpenCreateProduct),
            button(text("+ Add Blog").size(14))
                .padding(10)
                .on_press(Message::OpenCreateBlog),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }

    fn product_table(&self) -> Element<'_, Message> {
        let count = self.products.len();
        let heading = row![
            text("Product Inventory").size(22).width(Length::Fill),
            text(format!("{} {}", count, if count == 1 { "item" } else { "items" })).size(13),
        ]
        .align_y(Alignment::Center);

        let mut table = column![heading].spacing(10);

        if self.products_loading {
            table = table.push(text("Loading…").size(14));
            return framed(table);
        }
        if self.products.is_empty() {
            table = table.push(text("No products found. Create your first one!").size(14));
            return framed(table);
        }

        table = table.push(
            row![
                text("Name").size(12).width(Length::FillPortion(3)),
                text("Category").size(12).width(Length::FillPortion(2)),
                text("Price").size(12).width(Length::FillPortion(1)),
                text("Stock").size(12).width(Length::FillPortion(1)),
                text("Status").size(12).width(Length::FillPortion(2)),
                text("Actions").size(12).width(Length::FillPortion(2)),
            ]
            .spacing(8),
        );

        for product in &self.products {
            let status: Element<'_, Message> = if product.is_available {
                text("Available").size(13).style(text::success).into()
            } else {
                text("Unavailable").size(13).style(text::danger).into()
            };

            table = table.push(
                row![
                    text(product.name.as_str()).size(14).width(Length::FillPortion(3)),
                    text(product.category.as_str()).size(14).width(Length::FillPortion(2)),
                    text(format!("${:.2}", product.price)).size(14).width(Length::FillPortion(1)),
                    text(product.stock.to_string()).size(14).width(Length::FillPortion(1)),
                    container(status).width(Length::FillPortion(2)),
                    container(self.row_actions(
                        EntityKind::Product,
                        &product.id,
                        &product.name,
                    ))
                    .width(Length::FillPortion(2)),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            );
        }

        framed(table)
    }

    fn blog_table(&self) -> Element<'_, Message> {
        let mut table = column![text("Journal Posts").size(22)].spacing(10);

        if self.blogs_loading {
            table = table.push(text("Loading…").size(14));
            return framed(table);
        }
        if self.blogs.is_empty() {
            table = table.push(text("No posts yet.").size(14));
            return framed(table);
        }

        for blog in &self.blogs {
            let date = blog
                .created_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();

            table = table.push(
                row![
                    text(blog.title.as_str()).size(14).width(Length::FillPortion(4)),
                    text(date).size(14).width(Length::FillPortion(1)),
                    container(self.row_actions(EntityKind::Blog, &blog.id, &blog.title))
                        .width(Length::FillPortion(2)),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            );
        }

        framed(table)
    }

    fn row_actions(&self, kind: EntityKind, id: &str, label: &str) -> Element<'_, Message> {
        let edit_message = match kind {
            EntityKind::Product => Message::OpenEditProduct(id.to_string()),
            EntityKind::Blog => Message::OpenEditBlog(id.to_string()),
        };

        let delete: Element<'_, Message> = if self.deleting(kind).contains(id) {
            // In flight: the second click has nowhere to go.
            button(text("Deleting…").size(13)).style(button::text).into()
        } else {
            button(text("Delete").size(13).style(text::danger))
                .style(button::text)
                .on_press(Message::RequestDelete(
                    kind,
                    id.to_string(),
                    label.to_string(),
                ))
                .into()
        };

        row![
            button(text("Edit").size(13))
                .style(button::text)
                .on_press(edit_message),
            delete,
        ]
        .spacing(4)
        .into()
    }

    fn product_form(&self, form: &ProductForm) -> Element<'_, Message> {
        let title = if form.editing.is_some() {
            "Edit Product"
        } else {
            "Create New Product"
        };

        let mut sizes = row![].spacing(14);
        for size in SIZE_OPTIONS {
            sizes = sizes.push(
                checkbox(size, form.sizes.iter().any(|s| s == size))
                    .on_toggle(move |_| Message::SizeToggled(size)),
            );
        }

        let mut palette = Wrap::new().spacing(14.0).line_spacing(8.0);
        for color in COLOR_PALETTE {
            palette = palette.push(
                checkbox(color, form.colors.iter().any(|c| c == color))
                    .on_toggle(move |_| Message::ColorToggled(color)),
            );
        }

        let mut fields = column![
            text(title).size(24),
            row![
                text_input("Product name *", &form.name)
                    .on_input(Message::NameChanged)
                    .padding(10),
                pick_list(
                    self.categories.clone(),
                    (!form.category.is_empty()).then(|| form.category.clone()),
                    Message::CategoryPicked,
                )
                .placeholder("Select category *")
                .padding(10)
                .width(Length::Fill),
            ]
            .spacing(12),
            row![
                text_input("Price", &form.price)
                    .on_input(Message::PriceChanged)
                    .padding(10),
                text_input("Stock", &form.stock)
                    .on_input(Message::StockChanged)
                    .padding(10),
            ]
            .spacing(12),
            column![text("Sizes").size(14), sizes].spacing(6),
            column![
                text("Colors").size(14),
                palette,
                text_input("Other colors (optional)", &form.other_color)
                    .on_input(Message::OtherColorChanged)
                    .padding(10),
            ]
            .spacing(6),
            column![
                text("Description").size(14),
                text_editor(&form.description)
                    .placeholder("Description")
                    .on_action(Message::DescriptionEdited)
                    .height(Length::Fixed(110.0)),
            ]
            .spacing(6),
            checkbox("Product is available", form.is_available)
                .on_toggle(Message::AvailabilityToggled),
            self.image_section(form),
        ]
        .spacing(16);

        if let Some(error) = &form.error {
            fields = fields.push(text(error.as_str()).size(14).style(text::danger));
        }

        let submit_label = match (form.editing.is_some(), form.submitting) {
            (_, true) => "Saving…",
            (true, false) => "Update Product",
            (false, false) => "Create Product",
        };
        let mut submit = button(text(submit_label).size(14)).padding(10);
        if !form.submitting {
            submit = submit.on_press(Message::Submit);
        }

        fields = fields.push(
            row![
                iced::widget::horizontal_space(),
                button(text("Cancel").size(14))
                    .style(button::secondary)
                    .padding(10)
                    .on_press(Message::CancelForm),
                submit,
            ]
            .spacing(12),
        );

        form_frame(fields)
    }

    /// Ordered preview list: the first image renders as the cover, the
    /// rest as removable thumbnails.
    fn image_section(&self, form: &ProductForm) -> Element<'_, Message> {
        let mut section = column![
            text("Product Images").size(14),
            button(text("Add images…").size(14))
                .style(button::secondary)
                .padding(8)
                .on_press(Message::PickImages),
        ]
        .spacing(8);

        if let Some(cover) = form.images.first() {
            section = section.push(
                image(cover.handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(220.0))
                    .content_fit(ContentFit::Contain),
            );
        }

        if !form.images.is_empty() {
            let mut thumbs = Wrap::new().spacing(8.0).line_spacing(8.0);
            for (index, entry) in form.images.iter().enumerate() {
                thumbs = thumbs.push(
                    container(
                        column![
                            image(entry.handle.clone())
                                .width(Length::Fixed(72.0))
                                .height(Length::Fixed(72.0))
                                .content_fit(ContentFit::Cover),
                            button(text("✕").size(11))
                                .style(button::text)
                                .on_press(Message::RemoveImage(index)),
                        ]
                        .spacing(2)
                        .align_x(Alignment::Center),
                    )
                    .padding(4),
                );
            }
            section = section.push(thumbs);
        }

        section.into()
    }

    fn blog_form(&self, form: &BlogForm) -> Element<'_, Message> {
        let title = if form.editing.is_some() {
            "Edit Blog Post"
        } else {
            "Generate Blog"
        };

        let mut image_section = column![
            text("Cover Image").size(14),
            button(text("Choose image…").size(14))
                .style(button::secondary)
                .padding(8)
                .on_press(Message::PickImages),
        ]
        .spacing(8);

        if let Some(entry) = &form.image {
            image_section = image_section
                .push(
                    image(entry.handle.clone())
                        .width(Length::Fill)
                        .height(Length::Fixed(180.0))
                        .content_fit(ContentFit::Contain),
                )
                .push(
                    button(text("Remove image").size(13))
                        .style(button::text)
                        .on_press(Message::RemoveBlogImage),
                );
        }

        let mut fields = column![
            text(title).size(24),
            text_input("Title *", &form.title)
                .on_input(Message::TitleChanged)
                .padding(10),
            column![
                text("Content").size(14),
                text_editor(&form.content)
                    .placeholder("Write the post…")
                    .on_action(Message::ContentEdited)
                    .height(Length::Fixed(220.0)),
            ]
            .spacing(6),
            image_section,
        ]
        .spacing(16);

        if let Some(error) = &form.error {
            fields = fields.push(text(error.as_str()).size(14).style(text::danger));
        }

        let submit_label = match (form.editing.is_some(), form.submitting) {
            (_, true) => "Saving…",
            (true, false) => "Update Post",
            (false, false) => "Publish Post",
        };
        let mut submit = button(text(submit_label).size(14)).padding(10);
        if !form.submitting {
            submit = submit.on_press(Message::Submit);
        }

        fields = fields.push(
            row![
                iced::widget::horizontal_space(),
                button(text("Cancel").size(14))
                    .style(button::secondary)
                    .padding(10)
                    .on_press(Message::CancelForm),
                submit,
            ]
            .spacing(12),
        );

        form_frame(fields)
    }
}

fn fetch_products(gateway: &Gateway) -> Task<Message> {
    let gateway = gateway.clone();
    Task::perform(
        async move { gateway.list_products().await.map_err(|e| e.to_string()) },
        Message::ProductsLoaded,
    )
}

fn fetch_blogs(gateway: &Gateway) -> Task<Message> {
    let gateway = gateway.clone();
    Task::perform(
        async move { gateway.list_blogs().await.map_err(|e| e.to_string()) },
        Message::BlogsLoaded,
    )
}

fn framed<'a>(content: iced::widget::Column<'a, Message>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn form_frame<'a>(fields: iced::widget::Column<'a, Message>) -> Element<'a, Message> {
    container(scrollable(fields).height(Length::Fixed(620.0)))
        .padding(24)
        .width(Length::Fixed(700.0))
        .style(container::rounded_box)
        .into()
}

fn confirm_delete<'a>(target: &'a DeleteTarget) -> Element<'a, Message> {
    container(
        column![
            text(format!("Delete this {}?", target.kind.noun())).size(20),
            text(target.label.as_str()).size(14),
            text("This cannot be undone.").size(13),
            row![
                iced::widget::horizontal_space(),
                button(text("Cancel").size(14))
                    .style(button::secondary)
                    .padding(10)
                    .on_press(Message::CancelDelete),
                button(text("Delete").size(14))
                    .style(button::danger)
                    .padding(10)
                    .on_press(Message::ConfirmDelete),
            ]
            .spacing(12),
        ]
        .spacing(14),
    )
    .padding(24)
    .width(Length::Fixed(420.0))
    .style(container::rounded_box)
    .into()
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn gateway() -> Gateway {
        Gateway::new("http://localhost:9", Duration::from_secs(1)).unwrap()
    }

    fn categories() -> Vec<String> {
        vec!["Shirt".to_string(), "Jacket".to_string()]
    }

    fn ingested(tag: &str) -> IngestedImage {
        IngestedImage::from_data_uri(
            "data:image/png;base64,QUFBQQ==",
            format!("{}.png", tag),
        )
    }

    fn open_admin() -> (Admin, Gateway) {
        let gateway = gateway();
        let (admin, _task) = Admin::open(&gateway, categories());
        (admin, gateway)
    }

    fn open_product_form(admin: &mut Admin, gateway: &Gateway) {
        let _ = admin.update(gateway, Message::OpenCreateProduct);
        let _ = admin.update(gateway, Message::NameChanged("Tee".to_string()));
        let _ = admin.update(gateway, Message::CategoryPicked("Shirt".to_string()));
        let _ = admin.update(gateway, Message::PriceChanged("10".to_string()));
        let _ = admin.update(gateway, Message::StockChanged("2".to_string()));
    }

    fn product_form(admin: &Admin) -> &ProductForm {
        match &admin.form {
            Some(OpenForm::Product(form)) => form,
            _ => panic!("expected an open product form"),
        }
    }

    #[test]
    fn test_garbage_price_blocks_submission() {
        let (mut admin, gateway) = open_admin();
        open_product_form(&mut admin, &gateway);
        let _ = admin.update(&gateway, Message::PriceChanged("abc".to_string()));

        let _ = admin.update(&gateway, Message::Submit);

        // Still open, never went in flight, and the error is inline.
        let form = product_form(&admin);
        assert!(!form.submitting);
        assert!(form.error.is_some());
    }

    #[test]
    fn test_valid_submit_goes_in_flight_once() {
        let (mut admin, gateway) = open_admin();
        open_product_form(&mut admin, &gateway);

        let _ = admin.update(&gateway, Message::Submit);
        assert!(product_form(&admin).submitting);

        // A second submit while in flight is a no-op.
        let _ = admin.update(&gateway, Message::Submit);
        assert!(product_form(&admin).submitting);
        assert!(product_form(&admin).error.is_none());
    }

    #[test]
    fn test_successful_submit_closes_form_and_refreshes() {
        let (mut admin, gateway) = open_admin();
        open_product_form(&mut admin, &gateway);
        let _ = admin.update(&gateway, Message::Submit);

        admin.products_loading = false;
        let _ = admin.update(&gateway, Message::Submitted(EntityKind::Product, Ok(())));

        assert!(admin.form.is_none());
        assert!(admin.products_loading, "the product list must be re-fetched");
        assert!(!admin.blogs_loading, "the blog list must not be re-fetched");
        assert!(matches!(admin.notice, Some(Notice::Success(_))));
    }

    #[test]
    fn test_failed_submit_preserves_the_draft() {
        let (mut admin, gateway) = open_admin();
        open_product_form(&mut admin, &gateway);
        let _ = admin.update(&gateway, Message::Submit);

        let _ = admin.update(
            &gateway,
            Message::Submitted(EntityKind::Product, Err("timeout".to_string())),
        );

        let form = product_form(&admin);
        assert!(!form.submitting);
        assert_eq!(form.name, "Tee");
        assert!(form.error.is_some());
    }

    #[test]
    fn test_cancel_discards_draft_including_images() {
        let (mut admin, gateway) = open_admin();
        open_product_form(&mut admin, &gateway);
        let _ = admin.update(
            &gateway,
            Message::ImagesIngested(vec![ingested("a"), ingested("b")]),
        );
        assert_eq!(product_form(&admin).images.len(), 2);

        let _ = admin.update(&gateway, Message::CancelForm);
        assert!(admin.form.is_none());

        let _ = admin.update(&gateway, Message::OpenCreateProduct);
        let form = product_form(&admin);
        assert!(form.images.is_empty());
        assert!(form.name.is_empty());
        assert!(form.price.is_empty());
    }

    #[test]
    fn test_opening_one_form_replaces_the_other() {
        let (mut admin, gateway) = open_admin();
        open_product_form(&mut admin, &gateway);

        let _ = admin.update(&gateway, Message::OpenCreateBlog);
        assert!(matches!(admin.form, Some(OpenForm::Blog(_))));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (mut admin, gateway) = open_admin();

        let _ = admin.update(
            &gateway,
            Message::RequestDelete(EntityKind::Product, "x".to_string(), "Tee".to_string()),
        );
        assert!(admin.pending_delete.is_some());
        assert!(admin.deleting_products.is_empty(), "no request before confirmation");

        let _ = admin.update(&gateway, Message::ConfirmDelete);
        assert!(admin.pending_delete.is_none());
        assert!(admin.deleting_products.contains("x"));
    }

    #[test]
    fn test_same_row_double_delete_is_suppressed() {
        let (mut admin, gateway) = open_admin();
        let _ = admin.update(
            &gateway,
            Message::RequestDelete(EntityKind::Product, "x".to_string(), "Tee".to_string()),
        );
        let _ = admin.update(&gateway, Message::ConfirmDelete);

        // The row's flag is set: a second request is ignored outright,
        // and claiming the flag again fails.
        let _ = admin.update(
            &gateway,
            Message::RequestDelete(EntityKind::Product, "x".to_string(), "Tee".to_string()),
        );
        assert!(admin.pending_delete.is_none());
        assert!(!admin.begin_delete(EntityKind::Product, "x"));
    }

    #[test]
    fn test_concurrent_deletes_on_distinct_rows() {
        let (mut admin, gateway) = open_admin();
        for id in ["x", "y"] {
            let _ = admin.update(
                &gateway,
                Message::RequestDelete(EntityKind::Product, id.to_string(), id.to_string()),
            );
            let _ = admin.update(&gateway, Message::ConfirmDelete);
        }

        assert!(admin.deleting_products.contains("x"));
        assert!(admin.deleting_products.contains("y"));
    }

    #[test]
    fn test_delete_failure_clears_flag_and_keeps_row() {
        let (mut admin, gateway) = open_admin();
        admin.products = vec![Product {
            id: "x".to_string(),
            name: "Tee".to_string(),
            description: String::new(),
            price: 10.0,
            stock: 1,
            category: "Shirt".to_string(),
            sizes: vec![],
            colors: vec![],
            images: vec![],
            is_available: true,
        }];
        admin.products_loading = false;

        let _ = admin.update(
            &gateway,
            Message::RequestDelete(EntityKind::Product, "x".to_string(), "Tee".to_string()),
        );
        let _ = admin.update(&gateway, Message::ConfirmDelete);
        let _ = admin.update(
            &gateway,
            Message::Deleted(EntityKind::Product, "x".to_string(), Err("timeout".to_string())),
        );

        assert!(admin.deleting_products.is_empty());
        assert_eq!(admin.products.len(), 1, "the row stays until a re-fetch says otherwise");
        assert!(!admin.products_loading, "a failed delete does not trigger a re-fetch");
        assert!(matches!(admin.notice, Some(Notice::Error(_))));
    }

    #[test]
    fn test_delete_success_refreshes_only_that_list() {
        let (mut admin, gateway) = open_admin();
        admin.products_loading = false;
        admin.blogs_loading = false;

        let _ = admin.update(
            &gateway,
            Message::RequestDelete(EntityKind::Blog, "b1".to_string(), "Post".to_string()),
        );
        let _ = admin.update(&gateway, Message::ConfirmDelete);
        let _ = admin.update(
            &gateway,
            Message::Deleted(EntityKind::Blog, "b1".to_string(), Ok(())),
        );

        assert!(admin.blogs_loading);
        assert!(!admin.products_loading);
        assert!(admin.deleting_blogs.is_empty());
    }

    #[test]
    fn test_blog_image_replace_via_ingestion() {
        let (mut admin, gateway) = open_admin();
        let _ = admin.update(&gateway, Message::OpenCreateBlog);
        let _ = admin.update(&gateway, Message::ImagesIngested(vec![ingested("a")]));
        let _ = admin.update(&gateway, Message::ImagesIngested(vec![ingested("b")]));

        match &admin.form {
            Some(OpenForm::Blog(form)) => {
                assert_eq!(form.image.as_ref().unwrap().filename, "b.png");
            }
            _ => panic!("expected an open blog form"),
        }
    }
}
