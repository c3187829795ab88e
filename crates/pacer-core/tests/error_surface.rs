use pacer_core::errors::{check_positive, PacerError};

#[test]
fn non_finite_is_rejected() {
    let err = check_positive("distance", f64::NAN).unwrap_err();
    assert!(matches!(err, PacerError::NonFinite { field: "distance", .. }));

    let err = check_positive("time", f64::INFINITY).unwrap_err();
    assert_eq!(err.to_string(), "time must be finite, got inf");
}

#[test]
fn non_positive_is_rejected() {
    let err = check_positive("cadence", 0.0).unwrap_err();
    assert_eq!(err.to_string(), "cadence must be positive, got 0");

    let err = check_positive("height", -170.0).unwrap_err();
    assert!(matches!(err, PacerError::NonPositive { field: "height", .. }));
}

#[test]
fn positive_values_pass_through() {
    assert_eq!(check_positive("weight", 65000.0).unwrap(), 65000.0);
}
