pub mod backend;
pub mod console;
pub mod identifier;
pub mod session;
pub mod transport;
