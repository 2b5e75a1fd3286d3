pub mod dataset;
pub mod visits;
