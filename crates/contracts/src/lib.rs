//! Shared data contracts between the artist explorer frontend and its API.

pub mod domain;
