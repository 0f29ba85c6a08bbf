pub mod errors;

pub use errors::{ConfigError, GeosphereError, MeshError};

pub type Result<T> = std::result::Result<T, GeosphereError>;
