//! Shadow generation and secret recovery.
//!
//! The secret's pixel array is cut into sections of k consecutive bytes;
//! each section is the coefficient vector of a degree k-1 polynomial over
//! GF(251). Shadow x stores the evaluations at point x, so any k shadows
//! pin down every section polynomial and fewer reveal nothing about it.

use crate::bitmap::{pixel_array_size, Bitmap};
use crate::error::{Result, ShareError};
use crate::field;
use crate::matrix;

/// Clamps every pixel into the field domain [0, 250]. Applied once to the
/// secret before sharing; the loss is at most 5 gray levels.
pub fn truncate_grayscale(pixels: &mut [u8]) {
    for p in pixels.iter_mut() {
        if *p > 250 {
            *p = 250;
        }
    }
}

/// Picks shadow dimensions for `x` pixel bytes, as square as possible:
/// the largest divisor of `x` that is at most `sqrt(x)` (and at least 3)
/// becomes the width. Falls back to a single `x`-wide row.
pub fn closest_pair(x: u32) -> (u32, i32) {
    let mut y = (x as f64).sqrt().floor() as u32;

    while y > 2 {
        if x % y == 0 {
            return (y, (x / y) as i32);
        }
        y -= 1;
    }

    (x, 1)
}

/// Forms the n shadow bitmaps of a (k, n) scheme from the secret's pixels.
///
/// The secret must already be truncated (and permuted, when scrambling is
/// on); its pixel count must divide evenly into k-byte sections.
pub fn form_shadows(secret: &Bitmap, k: u16, n: u16, seed: u16) -> Result<Vec<Bitmap>> {
    let pixels = secret.pixels.len() as u32;
    if k == 0 || pixels % k as u32 != 0 {
        return Err(ShareError::InvalidSecretSize { pixels, k });
    }

    let (width, height) = closest_pair(pixels / k as u32);
    let mut shadows: Vec<Bitmap> = (1..=n)
        .map(|index| Bitmap::new_shadow(width, height, seed, index))
        .collect();

    for (j, section) in secret.pixels.chunks_exact(k as usize).enumerate() {
        for shadow in shadows.iter_mut() {
            shadow.pixels[j] = field::eval_section(section, shadow.shadow_index());
        }
    }

    Ok(shadows)
}

/// Rebuilds the secret from any k shadows.
///
/// For every pixel position one Vandermonde system is assembled from the
/// shadow indices and solved over GF(251); the k coefficients scatter back
/// into consecutive secret bytes. `width`/`height` are the dimensions of the
/// original secret. The result still carries the permutation; callers
/// unscramble it afterwards.
pub fn reveal_secret(shadows: &[Bitmap], width: u32, height: i32, k: u16) -> Result<Bitmap> {
    if shadows.len() != k as usize || k == 0 {
        return Err(ShareError::InsufficientShadows(format!(
            "have {} shadows, need {}",
            shadows.len(),
            k
        )));
    }

    let pixels = pixel_array_size(width, height);
    if pixels % k as u32 != 0 {
        return Err(ShareError::InvalidSecretSize { pixels, k });
    }
    let shadow_len = (pixels / k as u32) as usize;

    for shadow in shadows {
        if shadow.pixels.len() < shadow_len {
            return Err(ShareError::InsufficientShadows(format!(
                "shadow {} holds {} pixel bytes, need {}",
                shadow.shadow_index(),
                shadow.pixels.len(),
                shadow_len
            )));
        }
    }

    let mut secret = Bitmap::new(width, height, shadows[0].seed());

    for p in 0..shadow_len {
        let mut mat: Vec<Vec<u8>> = shadows
            .iter()
            .map(|shadow| matrix::vandermonde_row(shadow.shadow_index(), k, shadow.pixels[p]))
            .collect();
        let coefficients = matrix::solve(&mut mat)?;

        secret.pixels[p * k as usize..(p + 1) * k as usize].copy_from_slice(&coefficients);
    }

    Ok(secret)
}
