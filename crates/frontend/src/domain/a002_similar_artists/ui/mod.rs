pub mod list;

pub use list::SimilarArtistsList;
