pub mod instructions;
pub mod navigator;
pub mod search;
