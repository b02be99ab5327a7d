use crate::ast::Document;
use crate::ast::Schema;
use crate::parser::Parser;
use crate::FileSet;
use crate::ParseError;
use crate::ParserOptions;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Errors produced while loading or parsing the sources of a [`SourceSet`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A named source text held by a [`SourceSet`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

/// A collection of GraphQL sources parsed together into one [`FileSet`].
///
/// Sources come from files on disk (directories are searched recursively
/// for files with a matching extension) or from in-memory strings. The set
/// owns every source text, so the trees it produces borrow from it.
///
/// ```rust
/// use libgraphql_frontend::FileSet;
/// use libgraphql_frontend::SourceSet;
///
/// let mut sources = SourceSet::new();
/// sources.add_source("query.graphqls", "type Query { me: User }");
/// sources.add_source("user.graphqls", "type User { id: ID! }");
///
/// let mut files = FileSet::new();
/// let schemas = sources.parse_schemas(&mut files).unwrap();
/// assert_eq!(schemas.len(), 2);
/// assert_eq!(files.files().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct SourceSet {
    extensions: Vec<String>,
    options: ParserOptions,
    sources: Vec<Source>,
}

impl SourceSet {
    /// Extensions matched when searching directories, unless overridden
    /// with [`with_extensions()`](Self::with_extensions).
    pub const DEFAULT_EXTENSIONS: [&str; 2] = ["graphql", "graphqls"];

    pub fn new() -> Self {
        Self {
            extensions: Self::DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            options: ParserOptions::default(),
            sources: vec![],
        }
    }

    /// Replaces the set of extensions matched when searching directories.
    /// A leading `.` on an extension is ignored.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Creates a set from files and directories on disk.
    pub fn from_paths<I, P>(paths: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut set = Self::new();
        for path in paths {
            set.add_path(path)?;
        }
        Ok(set)
    }

    /// Adds an in-memory source.
    pub fn add_source(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.sources.push(Source {
            name: name.into(),
            text: text.into(),
        });
    }

    /// Adds the file at `path`, or every matching file at or under it if it
    /// is a directory. Symlinks are followed and directory entries are
    /// visited in file-name order.
    ///
    /// A path naming a single file is loaded even if its extension does not
    /// match, on the presumption that the caller wants that file.
    pub fn add_path(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        log::debug!("Scanning {path:?} for GraphQL sources...");

        if path.is_file() {
            if !self.matches_extension(path) {
                log::warn!(
                    "Loading {path:?} even though it doesn't match any of the configured \
                    extensions ({}).",
                    self.extensions_display(),
                );
            }
            return self.load_file(path);
        }

        let walker = WalkDir::new(path)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:?}.");
                continue;
            }
            if self.matches_extension(entry_path) {
                log::trace!("Found file at {entry_path:?}.");
                self.load_file(entry_path)?;
            } else {
                log::trace!("Skipping non-GraphQL file: {entry_path:?}.");
            }
        }
        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_source(path.display().to_string(), text);
        Ok(())
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }

    fn extensions_display(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!("`.{ext}`"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Parses every source as a schema document, in the order added.
    ///
    /// Each source is registered in `files` before it is parsed, so positions
    /// from all of them share one position space. Stops at the first source
    /// that fails to parse.
    pub fn parse_schemas(&self, files: &mut FileSet) -> Result<Vec<Schema<'_>>, LoadError> {
        log::debug!("Parsing {} schema sources.", self.sources.len());
        self.sources
            .iter()
            .map(|src| {
                Parser::with_options(&src.text, Some(&src.name), files, self.options)
                    .parse_schema()
                    .map_err(LoadError::from)
            })
            .collect()
    }

    /// Parses every source as an executable document, in the order added.
    pub fn parse_documents(&self, files: &mut FileSet) -> Result<Vec<Document<'_>>, LoadError> {
        log::debug!("Parsing {} document sources.", self.sources.len());
        self.sources
            .iter()
            .map(|src| {
                Parser::with_options(&src.text, Some(&src.name), files, self.options)
                    .parse_document()
                    .map_err(LoadError::from)
            })
            .collect()
    }
}

impl Default for SourceSet {
    fn default() -> Self {
        Self::new()
    }
}
