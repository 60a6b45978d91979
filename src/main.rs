use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::time::Duration;

mod api;
mod config;
mod ingest;
mod state;
mod ui;

use api::Gateway;
use config::AppConfig;
use state::session::Session;
use ui::{admin, blog, catalog, contact, home, login};

/// Main application state
struct Gloam {
    config: AppConfig,
    gateway: Gateway,
    session: Session,
    screen: Screen,
}

/// The screen currently on display. Each screen owns its own state; a
/// navigation rebuilds the target screen and kicks off its fetches.
enum Screen {
    Home(home::Home),
    Catalog(catalog::Catalog),
    Blog(blog::Journal),
    Contact,
    Login(login::Login),
    Admin(admin::Admin),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Home,
    Catalog,
    Blog,
    Contact,
    Login,
    Admin,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Navigate(Route),
    SignOut,
    Home(home::Message),
    Catalog(catalog::Message),
    Blog(blog::Message),
    Login(login::Message),
    Admin(admin::Message),
}

impl Gloam {
    /// Create a new instance of the application, landing on Home.
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot reach the
        // backend without an HTTP client.
        let gateway = Gateway::new(&config.api_url, config.request_timeout)
            .expect("Failed to construct the HTTP client");

        let (home, task) = home::Home::open(&gateway);

        (
            Gloam {
                config,
                gateway,
                session: Session::new(),
                screen: Screen::Home(home),
            },
            task.map(Message::Home),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::SignOut => {
                self.session.sign_out();
                self.navigate(Route::Home)
            }

            // Screen messages that arrive after navigating away are
            // dropped along with their screen.
            Message::Home(message) => {
                if let Screen::Home(home) = &mut self.screen {
                    home.update(message).map(Message::Home)
                } else {
                    Task::none()
                }
            }
            Message::Catalog(message) => {
                if let Screen::Catalog(catalog) = &mut self.screen {
                    catalog.update(message).map(Message::Catalog)
                } else {
                    Task::none()
                }
            }
            Message::Blog(message) => {
                if let Screen::Blog(journal) = &mut self.screen {
                    journal.update(message).map(Message::Blog)
                } else {
                    Task::none()
                }
            }
            Message::Login(message) => {
                if let Screen::Login(login) = &mut self.screen {
                    match login.update(&mut self.session, &self.config.credentials, message) {
                        login::Event::LoggedIn => self.navigate(Route::Admin),
                        login::Event::None => Task::none(),
                    }
                } else {
                    Task::none()
                }
            }
            Message::Admin(message) => {
                if let Screen::Admin(admin) = &mut self.screen {
                    admin.update(&self.gateway, message).map(Message::Admin)
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Switch screens, routing Admin through the session gate.
    fn navigate(&mut self, route: Route) -> Task<Message> {
        match route {
            Route::Home => {
                let (home, task) = home::Home::open(&self.gateway);
                self.screen = Screen::Home(home);
                task.map(Message::Home)
            }
            Route::Catalog => {
                let (catalog, task) = catalog::Catalog::open(&self.gateway);
                self.screen = Screen::Catalog(catalog);
                task.map(Message::Catalog)
            }
            Route::Blog => {
                let (journal, task) = blog::Journal::open(&self.gateway);
                self.screen = Screen::Blog(journal);
                task.map(Message::Blog)
            }
            Route::Contact => {
                self.screen = Screen::Contact;
                Task::none()
            }
            Route::Login => {
                self.screen = Screen::Login(login::Login::new());
                Task::none()
            }
            Route::Admin => {
                if !self.session.is_authenticated() {
                    self.screen = Screen::Login(login::Login::new());
                    return Task::none();
                }
                let (admin, task) =
                    admin::Admin::open(&self.gateway, self.config.categories.clone());
                self.screen = Screen::Admin(admin);
                task.map(Message::Admin)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match &self.screen {
            Screen::Home(home) => home.view().map(Message::Home),
            Screen::Catalog(catalog) => catalog.view().map(Message::Catalog),
            Screen::Blog(journal) => journal.view().map(Message::Blog),
            Screen::Contact => contact::view(),
            Screen::Login(login) => login.view().map(Message::Login),
            Screen::Admin(admin) => admin.view().map(Message::Admin),
        };

        // The navigation chrome is hidden on the login and admin
        // screens, which carry their own minimal bars.
        let bar = match &self.screen {
            Screen::Login(_) => self.back_bar(),
            Screen::Admin(_) => self.admin_bar(),
            _ => self.navbar(),
        };

        column![bar, body].into()
    }

    fn navbar(&self) -> Element<'_, Message> {
        let link = |label, route| {
            button(text(label).size(14))
                .style(button::text)
                .on_press(Message::Navigate(route))
        };

        container(
            row![
                text("GLOAM").size(20),
                link("Home", Route::Home),
                link("Catalog", Route::Catalog),
                link("Blog", Route::Blog),
                link("Contact", Route::Contact),
                horizontal_space(),
                button(text(if self.session.is_authenticated() { "Admin" } else { "Login" }).size(14))
                    .style(button::secondary)
                    .on_press(Message::Navigate(Route::Admin)),
            ]
            .spacing(18)
            .align_y(Alignment::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
    }

    fn back_bar(&self) -> Element<'_, Message> {
        container(
            button(text("← Back").size(14))
                .style(button::text)
                .on_press(Message::Navigate(Route::Home)),
        )
        .padding(12)
        .width(Length::Fill)
        .into()
    }

    fn admin_bar(&self) -> Element<'_, Message> {
        container(
            row![
                text("gloamingmistake").size(14),
                horizontal_space(),
                button(text("Sign out").size(14))
                    .style(button::secondary)
                    .on_press(Message::SignOut),
            ]
            .align_y(Alignment::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
    }

    /// Timed carousel advance, only while the home slideshow is visible.
    fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Home(home) if home.slideshow_running() => {
                iced::time::every(Duration::from_secs(home::SLIDE_INTERVAL_SECS))
                    .map(|_| Message::Home(home::Message::SlideTick))
            }
            _ => Subscription::none(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Gloam against {}", config.api_url);

    iced::application("Gloam", Gloam::update, Gloam::view)
        .theme(Gloam::theme)
        .subscription(Gloam::subscription)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || Gloam::new(config))
}
