//! Tests for error classification, source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tumorlens::io::error::{inference_error, invalid_parameter, invalid_target};
    use tumorlens::{AnalysisError, ErrorKind};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AnalysisError::FileSystem {
            path: "/tmp/case_seg.npy".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert_eq!(error.kind(), ErrorKind::Io);
    }

    // Tests label errors carry value, position and range
    // Verified by omitting the position from the message
    #[test]
    fn test_label_out_of_range_message() {
        let error = AnalysisError::LabelOutOfRange {
            value: "7".to_string(),
            position: vec![1, 2, 3],
            max_label: 3,
        };

        let message = error.to_string();
        assert!(message.contains('7'));
        assert!(message.contains("[1, 2, 3]"));
        assert!(message.contains("[0, 3]"));
        assert_eq!(error.kind(), ErrorKind::Data);
    }

    // Tests dimension mismatch formatting
    // Verified by swapping base and label sizes in the message
    #[test]
    fn test_dimension_mismatch_message() {
        let error = AnalysisError::DimensionMismatch {
            base: (10, 20),
            labels: (30, 40),
        };

        let message = error.to_string();
        assert!(message.contains("10x20"));
        assert!(message.contains("30x40"));
        assert_eq!(error.kind(), ErrorKind::Data);
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("alpha", &"1.5", &"must lie in [0, 1]");

        let message = error.to_string();
        assert!(message.contains("alpha"));
        assert!(message.contains("1.5"));
        assert!(message.contains("must lie in [0, 1]"));
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }

    // Tests unusable targets are I/O errors that name the path
    // Verified by reporting targets as invalid parameters
    #[test]
    fn test_invalid_target_error() {
        let error = invalid_target(Path::new("scans/missing"), &"not a directory");

        let message = error.to_string();
        assert!(message.contains("scans/missing"));
        assert!(message.contains("not a directory"));
        assert_eq!(error.kind(), ErrorKind::Io);
    }

    // Tests inference failures are classified separately
    // Verified by mapping inference errors to data errors
    #[test]
    fn test_inference_error() {
        let error = inference_error(&"BraTS_001", &"model unavailable");

        assert!(error.to_string().contains("BraTS_001"));
        assert!(error.to_string().contains("model unavailable"));
        assert_eq!(error.kind(), ErrorKind::Inference);
    }

    // Tests kind of every remaining variant
    // Verified by classifying missing spacing as data
    #[test]
    fn test_remaining_kinds() {
        assert_eq!(AnalysisError::MissingSpacing.kind(), ErrorKind::Configuration);
        assert_eq!(
            AnalysisError::UnsupportedShape { shape: vec![1] }.kind(),
            ErrorKind::Data
        );
        assert_eq!(
            AnalysisError::SliceOutOfBounds {
                axis: 0,
                index: 9,
                len: 3
            }
            .kind(),
            ErrorKind::Data
        );

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = AnalysisError::ImageLoad {
            path: PathBuf::from("scan.png"),
            source: image_error,
        };
        assert!(error.to_string().contains("scan.png"));
        assert_eq!(error.kind(), ErrorKind::Io);
    }

    // Tests serde errors convert into the crate error
    // Verified by removing the From conversion
    #[test]
    fn test_serialization_conversion() {
        let json_error = serde_json::from_str::<u8>("not json").err();
        let error = json_error.map(AnalysisError::from);

        assert!(error.is_some_and(|e| e.kind() == ErrorKind::Io));
    }
}
