//! Frecency-ranked directory history.
//!
//! A [`DirectoryStore`] remembers up to a fixed number of directories with a
//! visit count (`rank`) and the time of the last visit. [`resolve`] turns a
//! user's jump target into a destination by fuzzy-matching the target against
//! every remembered path and blending the match score with rank and recency.
//!
//! The store is persisted as a small little-endian binary file; see [`codec`].

pub mod codec;
mod directory;
mod error;
mod frecency;
mod jump;
mod persist;
mod store;

pub use directory::{Directory, bytes_from_path, path_from_bytes};
pub use error::{Result, StoreError};
pub use frecency::{JUMP_SLAB, MatchScratch, Ranked, combined_score, recency_multiplier};
pub use jump::{JumpRequest, Resolution, resolve};
pub use store::{Added, DEFAULT_CAPACITY, DirectoryStore};
