/// Admin session gate
///
/// A local credential equality check with no token or expiry model. It
/// only controls navigation to the admin screen inside this client.
/// Server-issued sessions are a deliberate non-goal.

/// Credentials accepted by the gate, loaded from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Whether the current user has passed the login gate.
#[derive(Debug, Clone, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt a login. Returns `true` and marks the session
    /// authenticated when both fields match exactly.
    pub fn login(&mut self, credentials: &Credentials, username: &str, password: &str) -> bool {
        if credentials.username == username && credentials.password == password {
            self.authenticated = true;
        }
        self.authenticated
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Drop back to the unauthenticated state.
    pub fn sign_out(&mut self) {
        self.authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".to_string(),
            password: "gloamingmistake".to_string(),
        }
    }

    #[test]
    fn test_correct_credentials_authenticate() {
        let mut session = Session::new();
        assert!(session.login(&credentials(), "admin", "gloamingmistake"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let mut session = Session::new();
        assert!(!session.login(&credentials(), "admin", "wrong"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_sign_out_clears_the_gate() {
        let mut session = Session::new();
        session.login(&credentials(), "admin", "gloamingmistake");
        session.sign_out();
        assert!(!session.is_authenticated());
    }
}
