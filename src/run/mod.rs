pub mod record;
pub mod snapshot;

pub use record::*;
pub use snapshot::*;
