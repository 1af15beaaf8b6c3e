pub mod api_utils;
pub mod config;
pub mod debounce;
pub mod highlight;
pub mod icons;
pub mod scroll;
