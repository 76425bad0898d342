pub mod bootstrap;
pub mod log;
pub mod session;
pub mod state;
pub mod store;
