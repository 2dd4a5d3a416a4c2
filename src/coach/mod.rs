pub mod context;
pub mod proxy;
