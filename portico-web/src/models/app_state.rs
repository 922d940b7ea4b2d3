use shared::models::Session;
use yewdux::Store;

/// App-level state: the session mirror plus the principal's email.
///
/// The session store in the client crate is the writer of record; this
/// mirror exists so components re-render when it changes. The email is
/// looked up from the auth provider after sign-in or reload.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Session,
    pub email: Option<String>,
}
