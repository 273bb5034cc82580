pub mod dates;
pub mod enums;
pub mod record;

pub use dates::*;
pub use enums::*;
pub use record::*;
