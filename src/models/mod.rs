pub mod match_record;

pub use match_record::*;
