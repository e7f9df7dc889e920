//! The transform stages of the sharing pipeline.
//!
//! Distribute runs truncate -> permute -> form_shadows -> hide_shadow;
//! recover runs retrieve_shadow -> reveal_secret -> unpermute. Every stage
//! operates on in-memory bitmaps and is exactly invertible by its partner.

pub mod permute;
pub mod shadow;
pub mod stego;

pub use permute::{permute, unpermute, Lcg};
pub use shadow::{closest_pair, form_shadows, reveal_secret, truncate_grayscale};
pub use stego::{hide_shadow, retrieve_shadow};
