pub mod check;
mod command_result;
pub mod extract;

pub use command_result::*;
