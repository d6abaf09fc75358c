pub mod orca;
pub mod raydium;
