//! Query modules for the PokéTrade client.
//!
//! Each module provides a query struct that borrows a [`Backend`](crate::backend::Backend)
//! and exposes methods returning typed models.

pub mod cards;

pub use cards::CardQuery;
