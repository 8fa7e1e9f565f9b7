pub mod restaurant;

mod router;
pub use router::get_router;
