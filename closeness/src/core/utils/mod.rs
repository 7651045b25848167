pub mod interrupt;
pub mod progress;
