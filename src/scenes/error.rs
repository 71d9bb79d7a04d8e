/// Precondition violation while building a primitive or compound object
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("invalid {kind} geometry: {reason}")]
    InvalidGeometry { kind: &'static str, reason: String },

    #[error("invalid material: {reason}")]
    InvalidMaterial { reason: String },

    #[error("invalid descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },
}

impl BuildError {
    pub(crate) fn geometry(kind: &'static str, reason: impl Into<String>) -> Self {
        BuildError::InvalidGeometry {
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn descriptor(name: impl Into<String>, reason: impl Into<String>) -> Self {
        BuildError::InvalidDescriptor {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
