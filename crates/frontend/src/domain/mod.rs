pub mod a001_artist;
pub mod a002_similar_artists;
