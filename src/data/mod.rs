mod prepare;
mod record;

pub use prepare::{prepare, Prepared};
pub use record::{CleanRecord, RawRecord};
