pub mod dc;
pub mod dmc;
pub mod ffmc;
pub mod functions;
pub mod indices;
