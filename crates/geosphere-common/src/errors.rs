use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised by the sphere mesh engine.
///
/// Every operation that returns one of these leaves the mesh exactly as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("invalid radius: {0} (must be finite and > 0)")]
    InvalidRadius(f32),

    #[error("invalid weld precision: {0} (must be finite and > 0)")]
    InvalidPrecision(f32),

    #[error("degenerate direction: {context} has zero length")]
    DegenerateDirection { context: String },

    #[error("normals are missing or stale; call generate_normals first")]
    MissingNormals,
}

#[derive(Debug, thiserror::Error)]
pub enum GeosphereError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("sphere.radius = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sphere.radius = 0 is out of range"
        );
    }

    #[test]
    fn mesh_error_display() {
        let err = MeshError::InvalidRadius(-1.0);
        assert_eq!(err.to_string(), "invalid radius: -1 (must be finite and > 0)");

        let err = MeshError::InvalidPrecision(0.0);
        assert_eq!(
            err.to_string(),
            "invalid weld precision: 0 (must be finite and > 0)"
        );

        let err = MeshError::DegenerateDirection {
            context: "impact point".into(),
        };
        assert_eq!(
            err.to_string(),
            "degenerate direction: impact point has zero length"
        );

        let err = MeshError::MissingNormals;
        assert!(err.to_string().contains("generate_normals"));
    }

    #[test]
    fn geosphere_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GeosphereError = config_err.into();
        assert!(matches!(err, GeosphereError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn geosphere_error_from_mesh() {
        let mesh_err = MeshError::InvalidRadius(0.0);
        let err: GeosphereError = mesh_err.clone().into();
        assert!(matches!(err, GeosphereError::Mesh(_)));
        assert_eq!(err.to_string(), mesh_err.to_string());
    }

    #[test]
    fn geosphere_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GeosphereError = io_err.into();
        assert!(matches!(err, GeosphereError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn geosphere_error_other_variant() {
        let err = GeosphereError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
