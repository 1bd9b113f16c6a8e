use std::io;

use subtheme::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::Io(_) => (),
        _ => panic!("Expected Io variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::Fetch("download failed".to_string());
    assert_eq!(err.to_string(), "Fetch error: download failed.");

    let err = Error::Extract("bad archive".to_string());
    assert_eq!(err.to_string(), "Extract error: bad archive.");

    let err = Error::Mirror("copy failed".to_string());
    assert_eq!(err.to_string(), "Mirror error: copy failed.");
}
