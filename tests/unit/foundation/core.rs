use super::*;

#[test]
fn dims_reject_zero_axes() {
    assert!(Dims::new(0, 10).is_err());
    assert!(Dims::new(10, 0).is_err());
    let d = Dims::new(3, 7).unwrap();
    assert_eq!(d.cells(), 21);
}

#[test]
fn dims_error_names_the_field() {
    let err = Dims {
        width: 0,
        height: 4,
    }
    .validate("output")
    .unwrap_err();
    assert!(matches!(err, PascalError::InvalidArgument(_)));
    assert!(err.to_string().contains("output must be positive"));
}

#[test]
fn interpolation_maps_to_filters() {
    assert_eq!(Interpolation::from_smooth(false), Interpolation::Nearest);
    assert_eq!(Interpolation::from_smooth(true), Interpolation::Smooth);
    assert_eq!(
        Interpolation::Smooth.filter(),
        image::imageops::FilterType::Lanczos3
    );
    assert_eq!(
        Interpolation::default().filter(),
        image::imageops::FilterType::Nearest
    );
}

#[test]
fn interpolation_serde_is_snake_case() {
    let s = serde_json::to_string(&Interpolation::Smooth).unwrap();
    assert_eq!(s, "\"smooth\"");
    let back: Interpolation = serde_json::from_str("\"nearest\"").unwrap();
    assert_eq!(back, Interpolation::Nearest);
}
