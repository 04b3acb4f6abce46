//! Tests for error messages and conversions

#[cfg(test)]
mod tests {
    use crossfill::PuzzleError;
    use crossfill::io::error::{WithPath, invalid_parameter, invalid_structure};
    use std::error::Error;
    use std::io::{self, ErrorKind};
    use std::path::Path;

    // Tests file system errors keep the path and operation
    // Verified by dropping the path from the message
    #[test]
    fn test_with_path() {
        let failed: io::Result<()> = Err(io::Error::new(ErrorKind::NotFound, "gone"));
        let err = failed
            .with_path(Path::new("grid.txt"), "read structure")
            .expect_err("error preserved");

        assert_eq!(
            err.to_string(),
            "File system error during read structure on 'grid.txt': gone"
        );
        assert!(err.source().is_some());
    }

    // Tests validation errors format their fields and have no source
    // Verified by swapping the value and reason in the message
    #[test]
    fn test_validation_messages() {
        let err = invalid_parameter("cell_size", &3, &"too small");
        assert_eq!(err.to_string(), "Invalid parameter 'cell_size' = '3': too small");
        assert!(err.source().is_none());

        let err = invalid_structure(&"no open cells");
        assert_eq!(err.to_string(), "Invalid structure: no open cells");
        assert!(err.source().is_none());
    }

    // Tests bare I/O errors convert without a known path
    // Verified by mapping I/O errors to invalid structures
    #[test]
    fn test_from_io_error() {
        let err = PuzzleError::from(io::Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(
            err,
            PuzzleError::FileSystem {
                operation: "unknown",
                ..
            }
        ));
    }
}
