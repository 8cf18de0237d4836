pub mod line;
pub mod puzzle;
