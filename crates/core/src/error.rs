use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Duplicate parameter name or alias in catalog: {name}")]
    DuplicateDefinition { name: String },

    #[error("Parameter {name} lists itself as incompatible or required")]
    SelfReferentialDefinition { name: String },

    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CoreError::DuplicateDefinition {
            name: "section".to_string(),
        };
        assert!(error.to_string().contains("section"));
    }
}
