//! Bmpshare - (k, n) visual secret sharing for grayscale bitmaps
//!
//! Splits an 8-bit grayscale BMP into n shadow images so that any k of them
//! reconstruct the secret and fewer reveal nothing, then hides the shadows
//! in the least significant bits of carrier bitmaps. The construction is
//! Thien-Lin sharing over GF(251).
//!
//! ## Distribute
//!
//! ```text
//! secret.bmp → Truncate → Permute(seed) → FormShadows(k, n) → Hide in carriers
//! ```
//!
//! - **Truncate**: clamp pixels to [0, 250] so every value is a field element
//! - **Permute**: seeded positional scramble of the pixel array
//! - **FormShadows**: each k-byte section becomes a polynomial, shadow x
//!   stores its evaluation at x
//! - **Hide**: one shadow byte per eight carrier-pixel low bits; seed and
//!   shadow index ride in the carriers' reserved header fields
//!
//! ## Recover
//!
//! ```text
//! k shadow files → Retrieve → RevealSecret → Unpermute → secret.bmp
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use bmpshare::cli::{distribute, DistributeOptions};
//!
//! distribute(&DistributeOptions {
//!     secret: "secret.bmp".into(),
//!     dir: "carriers".into(),
//!     k: 2,
//!     n: Some(3),
//!     seed: 691,
//!     permute: true,
//! }).unwrap();
//! ```

pub mod bitmap;
pub mod carriers;
pub mod cli;
pub mod error;
pub mod field;
pub mod matrix;
pub mod pipeline;

pub use bitmap::{read_bitmap, write_bitmap, Bitmap};
pub use error::{Result, ShareError};
