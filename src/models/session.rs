/// Logged-in/logged-out state plus the active username.
///
/// The password is collected by `login` but never validated, checked or
/// persisted; it only lives here until logout clears it. A session
/// restored at bootstrap therefore always has an empty password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub password: String,
    pub is_logged_in: bool,
}

impl Session {
    /// Session restored from the stored identity (bootstrap path).
    pub fn restored(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: String::new(),
            is_logged_in: true,
        }
    }

    /// Reset to logged-out, clearing every field.
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.is_logged_in = false;
    }
}
