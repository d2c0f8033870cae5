//! Core data types for genomic sequence retrieval.
//!
//! - [`Region`]: a (chromosome, start, end) genomic interval

pub mod region;

pub use region::Region;
