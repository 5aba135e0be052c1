pub mod analyzers;
pub mod config;
pub mod filter;
pub mod loader;
pub mod model;
pub mod output;
pub mod paginate;
pub mod prompt;
pub mod selection;
pub mod session;
