pub mod downsampling;
pub mod log_axis;
pub mod statistics;
