pub mod develop;
pub mod status;
