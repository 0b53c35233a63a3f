pub mod cache;
pub mod config;
pub mod coverart;
pub mod error;
pub mod handlers;
pub mod models;
pub mod music;
pub mod musicbrainz;
pub mod state;
