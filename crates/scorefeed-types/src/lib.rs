pub mod platform;
pub mod record;

pub use platform::{Platform, PlatformName};
pub use record::{Era, Mode, ParsedRecord, RawRow};
