pub mod base58;
pub mod bytes;
pub mod price;
pub mod usd;
