use crate::core::state::AppState;
use crate::db::kv::{KEY_CURRENT_USER, kv_delete, kv_get, kv_set};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Outcome of a login, used only for user-facing messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The supplied username matched the stored identity.
    Returning,
    /// The supplied username replaced (or created) the stored identity.
    Registered,
}

pub struct SessionLogic;

impl SessionLogic {
    /// Log in with any username. Never fails: a username equal to the
    /// stored identity is a returning user, anything else overwrites the
    /// stored identity and counts as a first-time registration.
    ///
    /// The password is accepted and kept in memory until logout but has no
    /// effect on the outcome and is never written to the store.
    pub fn login(
        pool: &DbPool,
        state: &mut AppState,
        username: &str,
        password: &str,
    ) -> AppResult<LoginOutcome> {
        let stored = kv_get(pool, KEY_CURRENT_USER)?;

        let outcome = if stored.as_deref() == Some(username) {
            LoginOutcome::Returning
        } else {
            kv_set(pool, KEY_CURRENT_USER, username)?;
            LoginOutcome::Registered
        };

        state.session.username = username.to_string();
        state.session.password = password.to_string();
        state.session.is_logged_in = true;

        Ok(outcome)
    }

    /// Log out: reset every in-memory session field and delete the stored
    /// identity. The next login on this store behaves as a first-time
    /// registration again.
    pub fn logout(pool: &DbPool, state: &mut AppState) -> AppResult<()> {
        state.session.clear();
        kv_delete(pool, KEY_CURRENT_USER)?;
        Ok(())
    }
}
