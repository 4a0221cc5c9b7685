//! Classification of server function failures.
//!
//! Views act on the category, not the raw error: quota exhaustion redirects
//! to the upgrade page, a missing session redirects to login, and everything
//! else surfaces a message.

use dioxus::prelude::ServerFnError;

/// What went wrong with a server call, as far as the UI cares.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// The request never produced a usable response (network, server down).
    Transport,
    /// The call itself was malformed or the payload unreadable.
    Protocol,
    /// The server wants a logged-in session.
    Unauthorized,
    /// The free-tier AI quota is used up.
    QuotaExceeded,
    /// The server rejected the request with a message worth showing.
    Server(String),
}

impl Failure {
    pub fn classify(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::Request(_) | ServerFnError::Response(_) => Failure::Transport,
            ServerFnError::Registration(_)
            | ServerFnError::Serialization(_)
            | ServerFnError::Deserialization(_)
            | ServerFnError::Args(_)
            | ServerFnError::MissingArg(_) => Failure::Protocol,
            ServerFnError::ServerError(msg) => {
                if msg.contains(api::QUOTA_ERROR_MESSAGE) {
                    Failure::QuotaExceeded
                } else if msg.contains(api::NOT_AUTHENTICATED) {
                    Failure::Unauthorized
                } else {
                    Failure::Server(msg.clone())
                }
            }
            other => Failure::Server(other.to_string()),
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Failure::Transport => "Could not reach the server. Please try again.".to_string(),
            Failure::Protocol => "Something went wrong with the request.".to_string(),
            Failure::Unauthorized => "Please log in to continue.".to_string(),
            Failure::QuotaExceeded => {
                "You have used all your free AI generations. Upgrade to premium for unlimited posts."
                    .to_string()
            }
            Failure::Server(msg) => msg.clone(),
        }
    }

    /// Log the failure and alert the user.
    pub fn report(&self) {
        let msg = self.user_message();
        tracing::error!("{msg}");
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_message_classifies_as_quota() {
        let err = ServerFnError::new(format!(
            "{}. Please upgrade to premium for unlimited AI posts.",
            api::QUOTA_ERROR_MESSAGE
        ));
        assert_eq!(Failure::classify(&err), Failure::QuotaExceeded);
    }

    #[test]
    fn test_missing_session_classifies_as_unauthorized() {
        let err = ServerFnError::new(api::NOT_AUTHENTICATED);
        assert_eq!(Failure::classify(&err), Failure::Unauthorized);
    }

    #[test]
    fn test_request_error_is_transport() {
        let err: ServerFnError = ServerFnError::Request("connection refused".to_string());
        assert_eq!(Failure::classify(&err), Failure::Transport);
    }

    #[test]
    fn test_other_server_errors_keep_their_message() {
        let err = ServerFnError::new("Post not found");
        assert_eq!(
            Failure::classify(&err),
            Failure::Server("Post not found".to_string())
        );
    }
}
