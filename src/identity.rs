//! Identity-domain records delivered across the trust boundary by the session source.

pub mod id;
pub mod profile;
pub mod record;

pub use id::*;
pub use profile::*;
pub use record::*;
