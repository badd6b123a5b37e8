pub mod anilist;
pub mod format;
pub mod html;
mod routes;

pub use routes::get_router;
