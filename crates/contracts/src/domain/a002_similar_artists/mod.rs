pub mod dto;

pub use dto::{SimilarArtist, SimilarArtistsResponse};
