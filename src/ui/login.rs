/// Admin login form feeding the session gate.
use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};

use crate::state::session::{Credentials, Session};

#[derive(Default)]
pub struct Login {
    username: String,
    password: String,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
}

/// What the shell should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Credentials matched; the session is now authenticated.
    LoggedIn,
}

impl Login {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        session: &mut Session,
        credentials: &Credentials,
        message: Message,
    ) -> Event {
        match message {
            Message::UsernameChanged(value) => {
                self.username = value;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Event::None
            }
            Message::Submit => {
                if session.login(credentials, &self.username, &self.password) {
                    Event::LoggedIn
                } else {
                    self.error = Some("Invalid username or password".to_string());
                    Event::None
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut form = column![text("Login").size(32)].spacing(20).max_width(360);

        if let Some(error) = &self.error {
            form = form.push(text(error.as_str()).size(14).style(text::danger));
        }

        form = form
            .push(
                text_input("Username", &self.username)
                    .on_input(Message::UsernameChanged)
                    .padding(12),
            )
            .push(
                text_input("Password", &self.password)
                    .secure(true)
                    .on_input(Message::PasswordChanged)
                    .on_submit(Message::Submit)
                    .padding(12),
            )
            .push(
                button(text("Sign in").size(16))
                    .width(Length::Fill)
                    .padding(12)
                    .on_press(Message::Submit),
            );

        container(form)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_submit_with_good_credentials_logs_in() {
        let mut login = Login::new();
        let mut session = Session::new();

        let _ = login.update(&mut session, &credentials(), Message::UsernameChanged("admin".to_string()));
        let _ = login.update(&mut session, &credentials(), Message::PasswordChanged("secret".to_string()));
        let event = login.update(&mut session, &credentials(), Message::Submit);

        assert_eq!(event, Event::LoggedIn);
        assert!(session.is_authenticated());
        assert!(login.error.is_none());
    }

    #[test]
    fn test_submit_with_bad_credentials_shows_error() {
        let mut login = Login::new();
        let mut session = Session::new();

        let event = login.update(&mut session, &credentials(), Message::Submit);

        assert_eq!(event, Event::None);
        assert!(!session.is_authenticated());
        assert_eq!(login.error.as_deref(), Some("Invalid username or password"));
    }
}
