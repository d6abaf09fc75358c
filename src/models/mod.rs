pub mod pool;
pub mod token;
