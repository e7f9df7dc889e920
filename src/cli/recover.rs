use std::path::PathBuf;

use crate::bitmap::{read_bitmap, write_bitmap};
use crate::carriers::shadow_files;
use crate::error::{Result, ShareError};
use crate::pipeline::{retrieve_shadow, reveal_secret, unpermute};

/// Options for the recover command
#[derive(Debug, Clone)]
pub struct RecoverOptions {
    /// Destination path for the rebuilt secret.
    pub secret: PathBuf,
    /// Directory holding the shadow bitmaps.
    pub dir: PathBuf,
    pub k: u16,
    /// Dimensions of the original secret.
    pub width: u32,
    pub height: i32,
}

/// Gathers k shadows from the directory, rebuilds the secret and writes it
/// to the destination path.
pub fn recover(options: &RecoverOptions) -> Result<()> {
    if options.k < 2 {
        return Err(ShareError::InvalidArguments(format!(
            "k must be at least 2; got {}",
            options.k
        )));
    }
    if options.width == 0 || options.height == 0 {
        return Err(ShareError::InvalidArguments(
            "width and height of the recovered image must be nonzero".into(),
        ));
    }

    let secret_size = options
        .width
        .checked_mul(options.height.unsigned_abs())
        .ok_or_else(|| {
            ShareError::InvalidArguments(format!(
                "a {} x {} secret does not fit in 32 bits",
                options.width, options.height
            ))
        })?;
    let paths = shadow_files(&options.dir, options.k, secret_size)?;

    let mut shadows = Vec::with_capacity(paths.len());
    for path in &paths {
        let carrier = read_bitmap(path)?;
        shadows.push(retrieve_shadow(
            &carrier,
            options.width,
            options.height,
            options.k,
        )?);
    }

    let mut secret = reveal_secret(&shadows, options.width, options.height, options.k)?;
    let seed = secret.seed();
    if seed != 0 {
        unpermute(&mut secret.pixels, seed);
    }
    write_bitmap(&secret, &options.secret)?;

    Ok(())
}
