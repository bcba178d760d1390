pub mod bwt;
pub mod sa;
pub mod tables;
