use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WavyteError::invalid_resource("x")
            .to_string()
            .contains("invalid resource:")
    );
    assert!(
        WavyteError::invalid_parameter("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(WavyteError::config("x").to_string().contains("config error:"));
    let missing = WavyteError::ResourceNotFound {
        path: PathBuf::from("res/fonts/regular.ttf"),
    };
    assert_eq!(
        missing.to_string(),
        "resource not found: res/fonts/regular.ttf"
    );
}

#[test]
fn from_io_maps_not_found() {
    let err = WavyteError::from_io(
        Path::new("missing.png"),
        std::io::Error::from(std::io::ErrorKind::NotFound),
    );
    assert!(err.is_not_found());
    let WavyteError::ResourceNotFound { path } = err else {
        panic!("expected ResourceNotFound");
    };
    assert_eq!(path, PathBuf::from("missing.png"));
}

#[test]
fn from_io_keeps_other_kinds_with_context() {
    let err = WavyteError::from_io(
        Path::new("locked.png"),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(!err.is_not_found());
    assert!(matches!(err, WavyteError::Other(_)));
    assert!(err.to_string().contains("locked.png"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WavyteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
