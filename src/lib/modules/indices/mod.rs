pub mod constants;
pub mod functions;
