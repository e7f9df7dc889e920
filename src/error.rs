use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: not a BMP file (bad magic number)", .path.display())]
    InvalidBmp { path: PathBuf },

    #[error(
        "{}: unsupported BMP (DIB header {} bytes, {} bpp; need a 40-byte BITMAPINFOHEADER at 8 bpp)",
        .path.display(), .dib_size, .depth
    )]
    UnsupportedBmp {
        path: PathBuf,
        dib_size: u32,
        depth: u16,
    },

    #[error("secret pixel array of {pixels} bytes is not divisible by k = {k}")]
    InvalidSecretSize { pixels: u32, k: u16 },

    #[error(
        "found {} valid carriers in {}, need {} for a ({},{}) scheme",
        .found, .dir.display(), .needed, .k, .n
    )]
    InsufficientCarriers {
        dir: PathBuf,
        found: usize,
        needed: usize,
        k: u16,
        n: u16,
    },

    #[error("insufficient shadows: {0}")]
    InsufficientShadows(String),

    #[error("carrier holds {capacity} pixel bytes but hiding the shadow needs {needed}")]
    InsufficientCapacity { capacity: u32, needed: u32 },

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, ShareError>;
