#![warn(clippy::all, rust_2018_idioms)]
//! egui front end of the GrowthYari client.
//!
//! Widgets only read states from the [`growthyari_states::StateCtx`] and queue commands;
//! all business rules live in `growthyari-business`.

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::GrowthYariApp;
