mod connection;
mod entities;
mod words;

pub use connection::*;
pub use entities::*;
pub use words::*;
