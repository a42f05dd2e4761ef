#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrapper types and traits for secret management which help ensure secrets aren't accidentally
//! copied, logged, or otherwise exposed.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

mod strategy;

pub use strategy::{Strategy, WithType};
mod abs;
pub use abs::{ExposeInterface, PeekInterface};

mod secret;
pub use secret::Secret;

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "serde")]
pub use crate::serde::{ErasedMaskSerialize, SerializableSecret};

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, PeekInterface};
}

pub mod maskable;

pub use maskable::*;
