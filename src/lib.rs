pub mod binomial;
pub mod clt;
pub mod console;
pub mod errors;
pub mod histogram;
pub mod interactive;
pub mod render;
pub mod stats;
