pub mod distribute;
pub mod info;
pub mod recover;

pub use distribute::*;
pub use info::*;
pub use recover::*;
