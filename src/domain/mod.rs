//! Domain types for secret sharing
//!
//! This module contains validated newtypes and value types:
//! - [`Threshold`] - Minimum shares required for recovery (>= 1)
//! - [`ShareCount`] - Number of shares to distribute (1..=255)
//! - [`ShareIndex`] - Share x-coordinate (>= 1)
//! - [`GenerationRequest`] - Validated threshold and share count pair
//! - [`ShareRecord`] - One share: index and value
//! - [`Secret`] - The shared value, rendered in base 62

mod request;
mod share;
mod share_count;
mod share_index;
mod threshold;

pub use request::GenerationRequest;
pub use share::{Secret, ShareRecord};
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
