pub mod detection;
pub mod error;

pub use detection::{BoundingBox, Detection, GridPosition};
pub use error::{PlateError, PlateResult};
