use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PascalError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        PascalError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert!(
        PascalError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn raster_size_mismatch_reports_both_counts() {
    let msg = PascalError::raster_size_mismatch(16, 12).to_string();
    assert!(msg.contains("expected 16"));
    assert!(msg.contains("got 12"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PascalError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn image_errors_map_to_encoding() {
    let base = image::ImageError::IoError(std::io::Error::other("disk full"));
    let err = PascalError::from(base);
    assert!(matches!(err, PascalError::Encoding(_)));
    assert!(err.to_string().contains("disk full"));
}
