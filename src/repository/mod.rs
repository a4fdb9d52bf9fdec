pub mod errors;
pub mod team;
