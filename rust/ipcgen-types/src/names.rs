use crate::error::SchemaError;

/// Names generated parse and send routines use for their own locals.
pub const RESERVED_PARAMETER_NAMES: &[&str] = &["cursor", "handler", "message"];

/// Names must be plain ASCII identifiers so every target can use them verbatim.
pub(crate) fn check_identifier(name: &str) -> Result<(), SchemaError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifiers() {
        for name in ["a", "_", "ClientConnect", "get_value2", "_x"] {
            assert!(check_identifier(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_non_identifiers() {
        for name in ["", "1a", "a-b", "a b", "né"] {
            assert!(check_identifier(name).is_err(), "{name}");
        }
    }
}
