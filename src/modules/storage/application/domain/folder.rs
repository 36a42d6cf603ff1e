use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Listing page bounds. The browser issues exactly one listing call per
/// request; anything past the cap is reported as truncated, never paged.
pub const MIN_LIST_LIMIT: usize = 100;
pub const MAX_LIST_LIMIT: usize = 1000;

/// Zero-byte object written so an empty virtual folder stays listable.
pub const PLACEHOLDER_OBJECT: &str = ".keep";

/// Key prefixes the browser is allowed to touch. Everything else in the
/// bucket is invisible to the admin API.
pub const ALLOWED_ROOTS: [&str; 4] = ["profile-images", "gallery", "documents", "rootdocs"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Path must not be empty")]
    Empty,

    #[error("Path segment '{0}' is not allowed")]
    BadSegment(String),

    #[error("Path must start with one of the managed roots")]
    OutsideRoots,
}

fn segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Letters, digits, then inner dots/underscores/spaces/hyphens. Blocks
    // "", ".", "..", and anything starting with a dot.
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ._-]*$").unwrap())
}

fn check_segment(segment: &str) -> Result<(), PathError> {
    if segment_pattern().is_match(segment) {
        Ok(())
    } else {
        Err(PathError::BadSegment(segment.to_string()))
    }
}

/// A validated virtual folder path such as `rootdocs/reports/2026`.
///
/// Stored without leading or trailing slash; `prefix()` appends one for
/// listing calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPath {
    segments: Vec<String>,
}

impl FolderPath {
    pub fn parse(raw: &str) -> Result<FolderPath, PathError> {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<String> = trimmed.split('/').map(|s| s.to_string()).collect();
        for segment in &segments {
            check_segment(segment)?;
        }

        if !ALLOWED_ROOTS.contains(&segments[0].as_str()) {
            return Err(PathError::OutsideRoots);
        }

        Ok(FolderPath { segments })
    }

    pub fn as_str(&self) -> String {
        self.segments.join("/")
    }

    /// Listing prefix: the path with a trailing slash.
    pub fn prefix(&self) -> String {
        format!("{}/", self.as_str())
    }

    /// Key of an object directly inside this folder.
    pub fn child_key(&self, file_name: &str) -> Result<String, PathError> {
        check_segment(file_name)?;
        Ok(format!("{}{}", self.prefix(), file_name))
    }
}

/// A validated object key such as `documents/cv/resume.pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn parse(raw: &str) -> Result<ObjectKey, PathError> {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        // A bare root is a folder, never an object.
        if segments.len() < 2 {
            return Err(PathError::OutsideRoots);
        }

        for segment in &segments {
            // The placeholder is dot-prefixed, so it is deliberately
            // unreachable through this API.
            check_segment(segment)?;
        }

        if !ALLOWED_ROOTS.contains(&segments[0]) {
            return Err(PathError::OutsideRoots);
        }

        Ok(ObjectKey(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Listing synthesis
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderRef {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    pub name: String,
    pub key: String,
    pub size: i64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderListing {
    pub path: String,
    pub folders: Vec<FolderRef>,
    pub files: Vec<FileRef>,
    /// True when the single listing page could not cover the folder.
    pub truncated: bool,
}

/// Turns a delimited listing (object keys + synthesized prefixes) into
/// folder/file entries relative to `path`. Placeholder objects are hidden;
/// keys outside the prefix are ignored rather than trusted.
pub fn synthesize_listing(
    path: &FolderPath,
    object_keys_and_sizes: &[(String, i64)],
    prefixes: &[String],
    truncated: bool,
    public_base_url: &str,
) -> FolderListing {
    let prefix = path.prefix();

    let mut folders: Vec<FolderRef> = prefixes
        .iter()
        .filter_map(|p| {
            let rel = p.strip_prefix(&prefix)?.trim_end_matches('/');
            if rel.is_empty() {
                return None;
            }
            Some(FolderRef {
                name: rel.to_string(),
                path: format!("{}{}", prefix, rel),
            })
        })
        .collect();
    folders.sort_by(|a, b| a.name.cmp(&b.name));

    let mut files: Vec<FileRef> = object_keys_and_sizes
        .iter()
        .filter_map(|(key, size)| {
            let name = key.strip_prefix(&prefix)?;
            // Nested keys belong to subfolders; the delimiter normally keeps
            // them out, but do not rely on it.
            if name.is_empty() || name.contains('/') || name == PLACEHOLDER_OBJECT {
                return None;
            }
            Some(FileRef {
                name: name.to_string(),
                key: key.clone(),
                size: *size,
                url: super::location::public_url(key, public_base_url),
            })
        })
        .collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));

    FolderListing {
        path: path.as_str(),
        folders,
        files,
        truncated,
    }
}

/// Clamp a requested page size into the supported window.
pub fn clamp_limit(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(MAX_LIST_LIMIT)
        .clamp(MIN_LIST_LIMIT, MAX_LIST_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    //
    // FolderPath
    //

    #[test]
    fn parses_nested_path_under_root() {
        let path = FolderPath::parse("rootdocs/reports/2026").unwrap();
        assert_eq!(path.as_str(), "rootdocs/reports/2026");
        assert_eq!(path.prefix(), "rootdocs/reports/2026/");
    }

    #[test]
    fn strips_slashes_and_whitespace() {
        let path = FolderPath::parse("  /gallery/travel/ ").unwrap();
        assert_eq!(path.as_str(), "gallery/travel");
    }

    #[test]
    fn rejects_unknown_root() {
        assert_eq!(
            FolderPath::parse("secrets/keys"),
            Err(PathError::OutsideRoots)
        );
    }

    #[test]
    fn rejects_traversal_segments() {
        assert!(matches!(
            FolderPath::parse("documents/../users"),
            Err(PathError::BadSegment(_))
        ));
        assert!(matches!(
            FolderPath::parse("documents/./x"),
            Err(PathError::BadSegment(_))
        ));
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(FolderPath::parse(""), Err(PathError::Empty));
        assert_eq!(FolderPath::parse("   "), Err(PathError::Empty));
        assert_eq!(FolderPath::parse("///"), Err(PathError::Empty));
    }

    #[test]
    fn rejects_empty_inner_segment() {
        assert!(matches!(
            FolderPath::parse("documents//cv"),
            Err(PathError::BadSegment(_))
        ));
    }

    #[test]
    fn child_key_validates_file_name() {
        let path = FolderPath::parse("documents/cv").unwrap();
        assert_eq!(
            path.child_key("resume.pdf").unwrap(),
            "documents/cv/resume.pdf"
        );
        assert!(path.child_key("../evil").is_err());
        assert!(path.child_key(".hidden").is_err());
    }

    //
    // ObjectKey
    //

    #[test]
    fn parses_object_key() {
        let key = ObjectKey::parse("gallery/travel/rome.webp").unwrap();
        assert_eq!(key.as_str(), "gallery/travel/rome.webp");
    }

    #[test]
    fn bare_root_is_not_an_object() {
        assert_eq!(ObjectKey::parse("gallery"), Err(PathError::OutsideRoots));
    }

    #[test]
    fn placeholder_is_unreachable_as_object() {
        assert!(matches!(
            ObjectKey::parse("gallery/travel/.keep"),
            Err(PathError::BadSegment(_))
        ));
    }

    //
    // synthesize_listing
    //

    fn listing_input() -> (Vec<(String, i64)>, Vec<String>) {
        let objects = vec![
            ("documents/cv/resume.pdf".to_string(), 1024),
            ("documents/cv/.keep".to_string(), 0),
            ("documents/cv/cover-letter.pdf".to_string(), 2048),
            // Should never appear: outside the prefix.
            ("gallery/rogue.png".to_string(), 7),
        ];
        let prefixes = vec![
            "documents/cv/archive/".to_string(),
            "documents/cv/drafts/".to_string(),
        ];
        (objects, prefixes)
    }

    #[test]
    fn synthesizes_folders_and_files() {
        let path = FolderPath::parse("documents/cv").unwrap();
        let (objects, prefixes) = listing_input();

        let listing =
            synthesize_listing(&path, &objects, &prefixes, false, "https://cdn.example.com");

        assert_eq!(listing.path, "documents/cv");
        assert!(!listing.truncated);

        let folder_names: Vec<&str> = listing.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(folder_names, vec!["archive", "drafts"]);
        assert_eq!(listing.folders[0].path, "documents/cv/archive");

        let file_names: Vec<&str> = listing.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(file_names, vec!["cover-letter.pdf", "resume.pdf"]);
        assert_eq!(
            listing.files[1].url,
            "https://cdn.example.com/documents/cv/resume.pdf"
        );
        assert_eq!(listing.files[1].size, 1024);
    }

    #[test]
    fn placeholder_and_foreign_keys_are_hidden() {
        let path = FolderPath::parse("documents/cv").unwrap();
        let (objects, prefixes) = listing_input();

        let listing = synthesize_listing(&path, &objects, &prefixes, false, "https://cdn.x");

        assert!(listing.files.iter().all(|f| f.name != PLACEHOLDER_OBJECT));
        assert!(listing.files.iter().all(|f| f.key.starts_with("documents/")));
    }

    #[test]
    fn truncation_flag_passes_through() {
        let path = FolderPath::parse("documents/cv").unwrap();
        let listing = synthesize_listing(&path, &[], &[], true, "https://cdn.x");
        assert!(listing.truncated);
        assert!(listing.folders.is_empty());
        assert!(listing.files.is_empty());
    }

    //
    // clamp_limit
    //

    #[test]
    fn limit_defaults_to_max() {
        assert_eq!(clamp_limit(None), MAX_LIST_LIMIT);
    }

    #[test]
    fn limit_clamps_both_ends() {
        assert_eq!(clamp_limit(Some(5)), MIN_LIST_LIMIT);
        assert_eq!(clamp_limit(Some(250)), 250);
        assert_eq!(clamp_limit(Some(50_000)), MAX_LIST_LIMIT);
    }
}
