pub mod atom;
pub mod element;
pub mod error;
pub mod filter;
pub mod formats;
pub mod geometry;
pub mod query;

use std::fs;
use std::path::Path;

use error::GeomError;
use geometry::Geometry;

/// Read an `.xyz` file and parse it into a [`Geometry`].
///
/// This is the only fallible entry point: I/O can fail, parsing cannot.
/// Text the parser cannot make sense of comes back as
/// [`Geometry::Unparsed`], not as an error.
///
/// # Errors
///
/// Returns an error if the extension is not `.xyz` or the file cannot be
/// read.
pub fn load_geometry(path: &Path) -> Result<Geometry, GeomError> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    if !ext.eq_ignore_ascii_case("xyz") {
        return Err(GeomError::UnsupportedFileFormat(ext.to_string()));
    }
    let text = fs::read_to_string(path)?;
    Ok(formats::xyz::parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".xyz")
            .tempfile()
            .unwrap();
        write!(file, "2\nwater fragment\nO 0 0 0\nH 0.96 0 0\n").unwrap();

        let geometry = load_geometry(file.path()).unwrap();
        assert!(geometry.had_header());
        assert_eq!(geometry.count(), 2);
        assert_eq!(geometry[1].symbol, "H");
    }

    #[test]
    fn rejects_other_extensions() {
        let err = load_geometry(Path::new("conformer.pdb")).unwrap_err();
        assert!(matches!(err, GeomError::UnsupportedFileFormat(ext) if ext == "pdb"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_geometry(Path::new("does-not-exist.xyz")).unwrap_err();
        assert!(matches!(err, GeomError::IoError(_)));
    }
}
