//! Domain models for the clinic records service.

mod test_record;

pub use test_record::*;
