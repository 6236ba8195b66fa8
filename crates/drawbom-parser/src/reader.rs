//! Readers turning diagram files into [`Document`]s.
//!
//! Each supported file format has a [`DocumentReader`]. [`InputFormat`]
//! picks the reader for a path; today only plain (uncompressed) `.drawio`
//! files are understood.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{
    document::Document,
    error::{Diagnostic, ErrorCode, ReadError},
};

/// Reads a diagram file into a [`Document`].
pub trait DocumentReader {
    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] if the file cannot be read and
    /// [`ReadError::Parse`] if its content is not a supported document.
    fn read(&self, path: &Path) -> Result<Document, ReadError>;
}

/// Diagram file formats recognized by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Uncompressed draw.io XML (`*.drawio`).
    PlainDrawio,
}

impl InputFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("drawio") {
            Some(Self::PlainDrawio)
        } else {
            None
        }
    }

    /// Returns the reader for this format.
    pub fn reader(self) -> Box<dyn DocumentReader> {
        match self {
            Self::PlainDrawio => Box::new(PlainDrawioReader),
        }
    }
}

/// Returns the reader able to handle `path`.
///
/// # Errors
///
/// Returns an [`ErrorCode::E001`] diagnostic if no reader supports the
/// file name.
pub fn reader_for_path(path: &Path) -> Result<Box<dyn DocumentReader>, ReadError> {
    match InputFormat::from_path(path) {
        Some(format) => {
            debug!(format:?; "Detected input format");
            Ok(format.reader())
        }
        None => Err(ReadError::new_parse_error(
            Diagnostic::error(
                ErrorCode::E001,
                format!(
                    "unsupported input file `{}`: only plain .drawio files are supported",
                    path.display()
                ),
            )
            .with_help("export the diagram from draw.io as an uncompressed `.drawio` file"),
            String::new(),
        )),
    }
}

/// Reader for uncompressed draw.io XML files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDrawioReader;

impl PlainDrawioReader {
    /// Parse draw.io XML that has already been loaded into memory.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorCode::E002`] diagnostic for malformed XML and an
    /// [`ErrorCode::E001`] diagnostic if the document is compressed.
    pub fn read_source(&self, source: String) -> Result<Document, ReadError> {
        let document = Document::from_source(source)?;

        if document.is_compressed() {
            let span = document.root().span();
            return Err(ReadError::new_parse_error(
                Diagnostic::error(ErrorCode::E001, "cannot parse compressed diagrams")
                    .with_label(span, "document is marked as compressed")
                    .with_help(
                        "in draw.io, uncheck File > Properties > Compressed and save again",
                    ),
                document.source(),
            ));
        }

        Ok(document)
    }
}

impl DocumentReader for PlainDrawioReader {
    fn read(&self, path: &Path) -> Result<Document, ReadError> {
        info!(path = path.display().to_string(); "Reading diagram");
        let source = fs::read_to_string(path)?;
        self.read_source(source)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            InputFormat::from_path(Path::new("board.drawio")),
            Some(InputFormat::PlainDrawio)
        );
        assert_eq!(
            InputFormat::from_path(Path::new("dir/Board.DRAWIO")),
            Some(InputFormat::PlainDrawio)
        );
        assert_eq!(InputFormat::from_path(Path::new("board.drawio.svg")), None);
        assert_eq!(InputFormat::from_path(Path::new("board.xml")), None);
        assert_eq!(InputFormat::from_path(Path::new("drawio")), None);
    }

    #[test]
    fn test_reader_for_unsupported_path() {
        let err = reader_for_path(&PathBuf::from("board.drawio.png"))
            .err()
            .expect("png should be refused");

        match err {
            ReadError::Parse { err, src } => {
                assert!(err.has_code(ErrorCode::E001));
                assert!(src.is_empty());
            }
            ReadError::Io(_) => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_read_source_plain() {
        let doc = PlainDrawioReader
            .read_source(r#"<mxfile><diagram/></mxfile>"#.to_string())
            .expect("plain document should be accepted");

        assert_eq!(doc.root().tag(), "mxfile");
    }

    #[test]
    fn test_read_source_compressed() {
        let source = r#"<mxfile compressed="true"><diagram>7VlRb</diagram></mxfile>"#;
        let err = PlainDrawioReader
            .read_source(source.to_string())
            .expect_err("compressed document should be refused");

        match err {
            ReadError::Parse { err, src } => {
                assert!(err.has_code(ErrorCode::E001));
                assert_eq!(src, source);
            }
            ReadError::Io(_) => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let err = PlainDrawioReader
            .read(&dir.path().join("missing.drawio"))
            .expect_err("missing file should fail");

        assert!(matches!(err, ReadError::Io(_)));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("board.drawio");
        fs::write(&path, r#"<mxfile><diagram/></mxfile>"#).expect("write sample");

        let doc = InputFormat::PlainDrawio
            .reader()
            .read(&path)
            .expect("should read");

        assert_eq!(doc.root().descendants().count(), 2);
    }
}
