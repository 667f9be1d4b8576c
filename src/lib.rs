pub mod consts;
pub mod error;
pub mod model;
pub mod server;
