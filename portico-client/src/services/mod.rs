//! Entity services.
//!
//! One service per remote table, each a thin pass-through: a paginated
//! list (data window + exact count), create, update and delete. The
//! services never refresh their own feed after a mutation — by calling
//! convention the owning page re-lists its current window, which both
//! refreshes the view and republishes the feed.

mod menus;
mod roles;
mod users;

pub use menus::MenuService;
pub use roles::RoleService;
pub use users::UserService;
