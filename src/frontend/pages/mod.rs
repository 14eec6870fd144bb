//! Page destinations for the route table.

pub mod list_friends;
pub mod login;
pub mod not_found;
pub mod select_server;
pub mod upload;

pub use list_friends::ListFriends;
pub use login::Login;
pub use not_found::NotFound;
pub use select_server::SelectServer;
pub use upload::Upload;
