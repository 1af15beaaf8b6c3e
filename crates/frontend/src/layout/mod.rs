pub mod explore_page;
pub mod global_context;

pub use explore_page::ExplorePage;
