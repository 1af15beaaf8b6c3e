pub mod aggregate;
pub mod dto;

pub use aggregate::{Artist, ArtistId};
pub use dto::{ArtistCandidate, ArtistSearchResponse};
