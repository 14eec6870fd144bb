//! Backend of the application: navigation authorization, session
//! persistence, and the local data services behind the pages.

pub mod friends;
pub mod guard;
pub mod paths;
pub mod servers;
pub mod session;
pub mod uploads;
