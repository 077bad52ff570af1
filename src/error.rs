use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the icon font tools
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// IO error on a known file or directory
    File { path: PathBuf, source: io::Error },
    /// Invalid file or directory path
    InvalidPath(PathBuf),
    /// A required input file does not exist
    MissingFile(PathBuf),
    /// A file the font compiler should have produced does not exist
    MissingCompiledFile(PathBuf),
    /// The icons directory has no font subdirectories
    NoFontDirectories(PathBuf),
    /// An icons subdirectory whose name cannot be used as a font name
    UnusableFontDirectory(String),
    /// Requested font is not one of the icon subdirectories
    UnknownFont { name: String, candidates: Vec<String> },
    /// Font directory without any `.svg` file
    NoIcons(PathBuf),
    /// Font name does not match `^[a-zA-Z][a-zA-Z0-9]*$`
    InvalidFontName(String),
    /// License text rejected
    InvalidLicense(String),
    /// Malformed icon rule in the CSS input
    Css { line: usize, message: String },
    /// Two CSS icon names that map to the same constant
    DuplicateIcon {
        symbol: String,
        first: String,
        second: String,
    },
    /// Parsed icon count differs from the manifest
    IconCountMismatch { found: usize, expected: usize },
    /// Not every manifest marker line was found
    MarkersNotPatched {
        path: PathBuf,
        num_icons: bool,
        font_name: bool,
        license: bool,
    },
    /// Font manifest could not be read back
    Manifest(String),
    /// Compiled font could not be parsed or lacks glyphs
    Font(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::File { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::File { path, source } => write!(f, "{}: {}", path.display(), source),
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::MissingFile(path) => write!(f, "[{}] does not exist.", path.display()),
            Error::MissingCompiledFile(path) => write!(
                f,
                "[{}] does not exist. Make sure you already generated it (with `rake`).",
                path.display()
            ),
            Error::NoFontDirectories(path) => {
                write!(f, "There are no subdirectories under {}", path.display())
            }
            Error::UnusableFontDirectory(dir) => write!(
                f,
                "The directory icons/{} cannot be used.\n\n\
                 Icon font names must consist of only upper or lower case letters and digits,\n\
                 and start with an upper or lower case letter. Rename the directory.",
                dir
            ),
            Error::UnknownFont { name, candidates } => write!(
                f,
                "Unknown font '{}' (choose from: {})",
                name,
                candidates.join(", ")
            ),
            Error::NoIcons(path) => {
                write!(f, "There are no .svg icons in the directory {}", path.display())
            }
            Error::InvalidFontName(name) => write!(
                f,
                "Invalid font name '{}': must start with a letter and contain only letters and digits",
                name
            ),
            Error::InvalidLicense(msg) => write!(f, "Invalid license: {}", msg),
            Error::Css { line, message } => write!(f, "CSS line {}: {}", line, message),
            Error::DuplicateIcon {
                symbol,
                first,
                second,
            } => write!(
                f,
                "Icons '{}' and '{}' both define {}",
                first, second, symbol
            ),
            Error::IconCountMismatch { found, expected } => {
                write!(f, "Found [{}] icons, expected [{}]", found, expected)
            }
            Error::MarkersNotPatched {
                path,
                num_icons,
                font_name,
                license,
            } => write!(
                f,
                "There was an issue modifying {}.\n\n\
                 One or more of the three lines that need to be modified were not patched:\n\n\
                 - EXPECTED_NUM_ICONS patched? {}\n\
                 - FONT_NAME patched?          {}\n\
                 - FONT_LICENSE patched?       {}",
                path.display(),
                num_icons,
                font_name,
                license
            ),
            Error::Manifest(msg) => write!(f, "Manifest error: {}", msg),
            Error::Font(msg) => write!(f, "Font error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Manifest(err.to_string())
    }
}

/// Result type alias for icon font operations
pub type Result<T> = std::result::Result<T, Error>;
