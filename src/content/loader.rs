//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerDef;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub kind: ContentLoadErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLoadErrorKind {
    /// The file could not be read (usually missing).
    Io,
    /// The file was read but is not valid RON for the expected type.
    Parse,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a controller definition from RON text.
pub fn parse_controller_def(file: &str, contents: &str) -> Result<ControllerDef, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            kind: ContentLoadErrorKind::Parse,
            message: format!("Parse error: {}", e),
        })
}

/// Load a controller definition from a RON file.
pub fn load_controller_def(path: &Path) -> Result<ControllerDef, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        kind: ContentLoadErrorKind::Io,
        message: format!("IO error: {}", e),
    })?;

    parse_controller_def(&file_name, &contents)
}
