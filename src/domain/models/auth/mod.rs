pub mod authenticated_user;
pub mod admin_user;

pub use authenticated_user::AuthenticatedUser;
pub use admin_user::AdminUser;
