pub mod bootstrap;

pub use bootstrap::ClientConfig;
