pub mod baseline;
pub mod continent;
pub mod dataset_kind;
pub mod frames;
pub mod outputs;
pub mod season;
pub mod temperature_kind;
