pub mod adjacency;
pub mod conversion;
pub mod definition;

pub use adjacency::*;
pub use conversion::*;
pub use definition::*;
