//! LSB steganography: one shadow byte spread over the low bits of eight
//! consecutive carrier pixels, most significant bit first. The shadow's
//! seed and index ride in the carrier's reserved header fields, so a
//! stego'd carrier is self-describing apart from the secret's dimensions.

use crate::bitmap::{pixel_array_size, Bitmap};
use crate::error::{Result, ShareError};
use crate::pipeline::shadow::closest_pair;

/// Embeds a shadow into the carrier's pixel LSBs and tags the carrier
/// header with the shadow's seed and index.
pub fn hide_shadow(carrier: &mut Bitmap, shadow: &Bitmap) -> Result<()> {
    let needed = (shadow.pixels.len() as u32).saturating_mul(8);
    let capacity = carrier.pixels.len() as u32;
    if capacity < needed {
        return Err(ShareError::InsufficientCapacity { capacity, needed });
    }

    carrier.bmp_header.seed = shadow.seed();
    carrier.bmp_header.shadow_index = shadow.shadow_index();

    for (i, &byte) in shadow.pixels.iter().enumerate() {
        for t in 0..8 {
            let pixel = &mut carrier.pixels[i * 8 + t];
            if byte >> (7 - t) & 1 == 1 {
                *pixel |= 0x01;
            } else {
                *pixel &= 0xFE;
            }
        }
    }

    Ok(())
}

/// Extracts the shadow hidden in a carrier's pixel LSBs.
///
/// `width` and `height` are the dimensions of the original secret (the
/// carrier may be larger than the embedded shadow needs); the shadow's own
/// shape is recomputed from them exactly as it was when formed.
pub fn retrieve_shadow(carrier: &Bitmap, width: u32, height: i32, k: u16) -> Result<Bitmap> {
    let secret_pixels = pixel_array_size(width, height);
    if k == 0 || secret_pixels % k as u32 != 0 {
        return Err(ShareError::InvalidSecretSize {
            pixels: secret_pixels,
            k,
        });
    }

    let shadow_len = secret_pixels / k as u32;
    let needed = shadow_len.saturating_mul(8);
    let capacity = carrier.pixels.len() as u32;
    if capacity < needed {
        return Err(ShareError::InsufficientCapacity { capacity, needed });
    }

    let (shadow_width, shadow_height) = closest_pair(shadow_len);
    let mut shadow = Bitmap::new_shadow(
        shadow_width,
        shadow_height,
        carrier.seed(),
        carrier.shadow_index(),
    );

    for j in 0..shadow_len as usize {
        let mut byte = 0u8;
        for t in 0..8 {
            byte |= (carrier.pixels[j * 8 + t] & 0x01) << (7 - t);
        }
        shadow.pixels[j] = byte;
    }

    Ok(shadow)
}
