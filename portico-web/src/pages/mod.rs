mod dashboard;
mod error;
pub mod login;
mod menus;
mod profile;
mod roles;
mod settings;
mod users;

pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
pub use menus::MenusPage;
pub use profile::ProfilePage;
pub use roles::RolesPage;
pub use settings::SettingsPage;
pub use users::UsersPage;
