pub mod company;
pub mod intelligence;

pub use company::*;
pub use intelligence::*;
