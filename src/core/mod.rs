pub mod input;
pub mod normalize;
pub mod primitives;
pub mod record;
pub mod types;

pub use input::{FieldValue, Frame, Row, SeriesInput};
pub use normalize::normalize;
pub use record::{DataFamily, OhlcRecord, SeriesData, ValueRecord};
pub use types::{UnixSeconds, Viewport};
