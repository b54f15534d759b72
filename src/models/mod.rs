pub mod frame;
pub mod indicators;
