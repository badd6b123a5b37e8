pub mod list;

mod router;
pub use router::get_router;
