pub mod borders;
pub mod monitor;
