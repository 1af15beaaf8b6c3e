pub mod chip_container;
pub mod genre_chips;
pub mod search_bar;

pub use chip_container::ChipContainer;
pub use genre_chips::GenreChips;
pub use search_bar::SearchBar;
