pub mod executor;
pub mod parser;


pub use executor::*;
pub use parser::*;
