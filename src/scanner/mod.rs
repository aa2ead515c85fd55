//! Source tree scanning and include-directive extraction.
//!
//! The scanner walks a directory tree, filters files by extension and
//! exclusion patterns, and collects the targets of `#include` directives
//! into an [`IncludeMap`] keyed by file base name. The map is the sole
//! input to graph assembly in `crate::graph`.
use crate::errors::ScanError;
use regex::Regex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// C standard library headers suppressed when system-include filtering is on.
/// The list is closed; matching is by exact target name.
pub const LIBC_HEADERS: &[&str] = &[
    "assert.h",
    "complex.h",
    "ctype.h",
    "errno.h",
    "fenv.h",
    "float.h",
    "inttypes.h",
    "iso646.h",
    "limits.h",
    "locale.h",
    "math.h",
    "setjmp.h",
    "signal.h",
    "stdalign.h",
    "stdarg.h",
    "stdatomic.h",
    "stdbool.h",
    "stddef.h",
    "stdint.h",
    "stdio.h",
    "stdlib.h",
    "stdnoreturn.h",
    "string.h",
    "tgmath.h",
    "threads.h",
    "time.h",
    "uchar.h",
    "wchar.h",
    "wctype.h",
];

#[must_use]
pub fn is_system_header(name: &str) -> bool {
    LIBC_HEADERS.contains(&name)
}

/// Mapping from file base name to the ordered list of its include targets.
///
/// An entry is materialized when a file is opened for scanning, so a file
/// with no includes at all still carries an (empty) list. Two files with the
/// same base name in different directories share one entry; their include
/// lists are concatenated in traversal order. This ambiguity is accepted by
/// the design.
#[derive(Debug, Clone, Default)]
pub struct IncludeMap {
    pub entries: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File name extensions eligible for scanning (without the dot).
    pub extensions: Vec<String>,
    /// Compiled exclusion patterns, matched anywhere in the full path.
    pub excludes: Vec<Regex>,
    /// Drop include targets that name a C standard library header.
    pub suppress_system: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["h".to_string(), "c".to_string()],
            excludes: Vec::new(),
            suppress_system: false,
        }
    }
}

/// Recognizes include directives in single raw lines.
#[derive(Debug)]
pub struct IncludeParser {
    directive: regex::bytes::Regex,
}

impl IncludeParser {
    #[must_use]
    pub fn new() -> Self {
        // Anchored at line start: optional indentation, `#include`, spacing,
        // then a quoted or angle-bracketed target. A directive preceded by
        // any other token on the line is not recognized. Unicode mode is off
        // so the negated classes match raw non-UTF8 bytes.
        let directive = regex::bytes::Regex::new(
            r#"(?-u)^[ \t]*#include[ \t]+(?:"([^"\r\n]*)"|<([^>\r\n]*)>)"#,
        )
        .unwrap();
        Self { directive }
    }

    /// Extract the include target from one raw line, if the line is an
    /// include directive. Operates on bytes so binary or non-UTF8 content
    /// never fails to decode; captured targets are widened byte-for-byte.
    #[must_use]
    pub fn extract_target(&self, line: &[u8]) -> Option<String> {
        let caps = self.directive.captures(line)?;
        let m = caps.get(1).or_else(|| caps.get(2))?;
        Some(latin1_to_string(m.as_bytes()))
    }
}

impl Default for IncludeParser {
    fn default() -> Self {
        Self::new()
    }
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[derive(Debug, Default)]
pub struct Scanner {
    parser: IncludeParser,
    options: ScanOptions,
}

impl Scanner {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self { parser: IncludeParser::new(), options }
    }

    /// Walk every directory reachable from `root` and collect include
    /// targets for each file matching the configured extensions.
    ///
    /// Traversal uses an explicit work queue rather than recursion, and a
    /// visited set of canonicalized directory paths so symlink cycles
    /// terminate. Traversal order across directories is
    /// filesystem-dependent.
    ///
    /// # Errors
    /// Returns `ScanError` if a directory listing or a qualifying file
    /// cannot be read. The first failure aborts the walk.
    pub fn walk(&self, root: &Path) -> Result<IncludeMap, ScanError> {
        let mut map = IncludeMap::default();
        let mut queue: VecDeque<PathBuf> = VecDeque::new();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        queue.push_back(root.to_path_buf());

        while let Some(dir) = queue.pop_front() {
            let real = std::fs::canonicalize(&dir).unwrap_or_else(|_| dir.clone());
            if !visited.insert(real) {
                continue;
            }
            debug!("entering directory {}", dir.display());
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                // path-based checks resolve symlinks, so linked directories
                // are queued and guarded by the visited set
                if path.is_dir() {
                    queue.push_back(path);
                } else if path.is_file() && self.matches_extension(&path) {
                    self.process_file(&path, &mut map)?;
                }
            }
        }
        Ok(map)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|s| s.to_string_lossy()) else {
            return false;
        };
        // Substring after the last dot; a dotless name is its own extension,
        // matching the behavior of splitting on '.' and taking the tail.
        let ext = name.rsplit('.').next().unwrap_or(&name);
        self.options.extensions.iter().any(|e| e == ext)
    }

    /// Scan one file and append its include targets to `map`.
    ///
    /// A path matching any exclusion pattern is skipped without being
    /// opened. Otherwise the map entry for the file's base name is created
    /// before any line is read, so even an include-free file becomes a node.
    ///
    /// # Errors
    /// Returns `ScanError::Read` if the file cannot be opened or a line
    /// cannot be read.
    pub fn process_file(&self, path: &Path, map: &mut IncludeMap) -> Result<(), ScanError> {
        let path_str = path.to_string_lossy();
        if self.options.excludes.iter().any(|re| re.is_match(&path_str)) {
            debug!("excluded {path_str}");
            return Ok(());
        }
        debug!("processing file {path_str}");

        let file = File::open(path)
            .map_err(|source| ScanError::Read { file: path.to_path_buf(), source })?;
        let reader = BufReader::new(file);

        let name = path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let includes = map.entries.entry(name).or_default();

        for line in reader.split(b'\n') {
            let line =
                line.map_err(|source| ScanError::Read { file: path.to_path_buf(), source })?;
            if let Some(target) = self.parser.extract_target(&line) {
                if self.options.suppress_system && is_system_header(&target) {
                    continue;
                }
                includes.push(target);
            }
        }
        Ok(())
    }
}
