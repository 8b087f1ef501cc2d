pub mod about;
pub mod edit_session;
pub mod projection;
pub mod projects;
