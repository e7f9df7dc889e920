use std::path::{Path, PathBuf};

use crate::bitmap::{read_bitmap, write_bitmap};
use crate::carriers::{carrier_files, count_regular_files};
use crate::error::{Result, ShareError};
use crate::pipeline::{form_shadows, hide_shadow, permute, truncate_grayscale};

/// Options for the distribute command
#[derive(Debug, Clone)]
pub struct DistributeOptions {
    /// Secret bitmap to split.
    pub secret: PathBuf,
    /// Directory holding the carrier bitmaps.
    pub dir: PathBuf,
    pub k: u16,
    /// Total shadows; defaults to the number of files in `dir`.
    pub n: Option<u16>,
    pub seed: u16,
    /// Scramble the secret's pixels before sharing.
    pub permute: bool,
}

/// Splits the secret into n shadows and hides each in a carrier, writing
/// `shadow<index>.bmp` files into the carrier directory. Returns n.
pub fn distribute(options: &DistributeOptions) -> Result<u16> {
    let n = match options.n {
        Some(n) => n,
        None => {
            let files = count_regular_files(&options.dir)?;
            u16::try_from(files).map_err(|_| {
                ShareError::InvalidArguments(format!("{} carrier files is too many", files))
            })?
        }
    };
    if options.k < 2 || n < 2 || options.k > n {
        return Err(ShareError::InvalidArguments(format!(
            "k and n must satisfy 2 <= k <= n; got k = {}, n = {}",
            options.k, n
        )));
    }
    // seed 0 is reserved to mark unscrambled shadows; a real permutation
    // tagged 0 would silently skip unpermuting on recovery
    if options.permute && options.seed == 0 {
        return Err(ShareError::InvalidArguments(
            "seed 0 is reserved for unscrambled shadows; pass --no-permute instead".into(),
        ));
    }

    let mut secret = read_bitmap(&options.secret)?;
    let carriers = carrier_files(&options.dir, options.k, n)?;

    // seed 0 marks an unscrambled distribution for recovery
    let seed = if options.permute { options.seed } else { 0 };
    truncate_grayscale(&mut secret.pixels);
    if options.permute {
        permute(&mut secret.pixels, seed);
    }
    let shadows = form_shadows(&secret, options.k, n, seed)?;

    for (carrier_path, shadow) in carriers.iter().zip(&shadows) {
        let mut carrier = read_bitmap(carrier_path)?;
        hide_shadow(&mut carrier, shadow)?;
        write_bitmap(&carrier, &shadow_path(&options.dir, shadow.shadow_index()))?;
    }

    Ok(n)
}

fn shadow_path(dir: &Path, index: u16) -> PathBuf {
    dir.join(format!("shadow{}.bmp", index))
}
