//! Account actions: the flows behind the login, register, and logout
//! controls.
//!
//! Each action validates its input, talks to the service through an
//! [`AccountGateway`](crate::AccountGateway), and updates the
//! [`SessionStore`](crate::SessionStore) it was given. Validation here is
//! advisory; the service applies its own rules and its answer wins.

pub mod login;
pub mod logout;
pub mod register;

pub use login::LoginAction;
pub use logout::LogoutAction;
pub use register::RegisterAction;
