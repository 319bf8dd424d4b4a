pub mod constants;
pub mod functions;
pub mod lawson;
pub mod tables;
