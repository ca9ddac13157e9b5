pub mod environment;
pub mod events;
pub mod paths;
pub mod payload;
pub mod recorder;
pub mod sanitize;
pub mod shared;
