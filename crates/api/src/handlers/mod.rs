pub mod auth;
pub mod company;
pub mod creator;
pub mod post;
pub mod video;
