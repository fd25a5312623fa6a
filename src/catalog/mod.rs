//! Item catalog.
//!
//! The catalog is the immutable input of a run: an ordered list of
//! `(price, weight)` pairs. Item `i` of the catalog corresponds to bit `i`
//! of every candidate.
//!
//! # Key Types
//!
//! - [`Item`]: A single `(price, weight)` pair
//! - [`Catalog`]: Ordered, immutable list of items
//!
//! # Text Format
//!
//! [`load_items`] and [`parse_items`] read one item per line as
//! `price,weight`; [`write_items`] and [`to_text`] produce the same format.

mod io;
mod item;

pub use io::{load_items, parse_items, save_items, to_text, write_items};
pub use item::{Catalog, Item};
