use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use compio::fs;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::{
    filesystem::MockFs,
    path::{NormalizedPath, normalize},
    tree::{Entries, EntriesError, Node},
};

const FIXTURE_FILE_NAME: &str = "mockfs.yaml";
const ENTRIES_KEY: &str = "entries";

/// File content as described by a fixture: the scalar's text, or `None` for `null`.
pub type FixtureContent = Option<String>;

fn get_fixture_file_path(root: &Path) -> PathBuf {
    root.join(FIXTURE_FILE_NAME)
}

/// A mock tree described in YAML.
///
/// ```yaml
/// entries:
///   /etc/hosts: "127.0.0.1 localhost"
///   /home:
///     alice:
///       notes.txt: hello
///       empty: ~
/// ```
///
/// Keys under `entries` are paths. Mapping values are directories keyed by child name, scalars
/// are files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    entries: Entries<FixtureContent>,
}

impl Fixture {
    /// Reads `mockfs.yaml` from `root`.
    pub async fn read(root: &Path) -> Result<Self, FixtureError> {
        Self::from_path(get_fixture_file_path(root)).await
    }

    /// Must run inside a compio runtime.
    pub async fn from_path(path: PathBuf) -> Result<Self, FixtureError> {
        debug!("Reading fixture file: {}", path.display());
        let bytes = fs::read(&path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read fixture file: {} bytes", contents.len());

        contents.as_str().try_into()
    }

    pub fn entries(&self) -> &Entries<FixtureContent> {
        &self.entries
    }

    pub fn into_entries(self) -> Entries<FixtureContent> {
        self.entries
    }

    pub fn into_mock_fs(self) -> Result<MockFs<FixtureContent>, FixtureError> {
        MockFs::new(self.entries).context(InvalidEntriesSnafu)
    }

    fn parse_entries(value: &Yaml) -> Result<Entries<FixtureContent>, FixtureError> {
        let entries = value
            .as_mapping()
            .context(EntriesNotMapSnafu)?
            .iter()
            .map(|(key, value)| {
                let path = parse_name(key)?;
                let node = parse_node(value, &normalize(&path))?;
                Ok((path, node))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        debug!("Parsed {} fixture entries", entries.len());
        Ok(Entries::flat_nodes(entries))
    }
}

impl From<Fixture> for Entries<FixtureContent> {
    fn from(fixture: Fixture) -> Self {
        fixture.into_entries()
    }
}

impl TryFrom<&str> for Fixture {
    type Error = FixtureError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedFixtureSnafu)?;

        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let entries = match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(ENTRIES_KEY))))
        {
            Some(value) => Self::parse_entries(value)?,
            None => Entries::default(),
        };

        Ok(Fixture { entries })
    }
}

fn parse_name(key: &Yaml) -> Result<String, FixtureError> {
    match key {
        Yaml::Value(Scalar::String(name)) => Ok(name.to_string()),
        Yaml::Value(Scalar::Integer(number)) => Ok(number.to_string()),
        Yaml::Value(Scalar::Boolean(flag)) => Ok(flag.to_string()),
        _ => InvalidKeySnafu {
            key: format!("{key:?}"),
        }
        .fail(),
    }
}

fn parse_node(value: &Yaml, path: &NormalizedPath) -> Result<Node<FixtureContent>, FixtureError> {
    let content = match value {
        Yaml::Mapping(children) => {
            return children
                .iter()
                .map(|(key, child)| {
                    let name = parse_name(key)?;
                    let node = parse_node(child, &path.join(&name))?;
                    Ok((name, node))
                })
                .collect::<Result<Vec<_>, FixtureError>>()
                .map(Node::directory);
        }
        Yaml::Value(Scalar::Null) => None,
        Yaml::Value(Scalar::String(text)) => Some(text.to_string()),
        Yaml::Value(Scalar::Integer(number)) => Some(number.to_string()),
        Yaml::Value(Scalar::Boolean(flag)) => Some(flag.to_string()),
        Yaml::Value(Scalar::FloatingPoint(number)) => Some(number.to_string()),
        _ => return UnsupportedValueSnafu { path: path.clone() }.fail(),
    };

    Ok(Node::file(content))
}

#[derive(Debug, Snafu)]
pub enum FixtureError {
    #[snafu(display("Failed to read the fixture file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The fixture file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the fixture"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted fixture"))]
    MalformedFixture,
    #[snafu(display("Top level of fixture should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Entries section should be a map"))]
    EntriesNotMap,
    #[snafu(display("Entry key {} is not a name", key))]
    InvalidKeyError { key: String },
    #[snafu(display("Unsupported value for entry '{}'", path))]
    UnsupportedValueError { path: NormalizedPath },
    #[snafu(display("Fixture describes an invalid tree"))]
    InvalidEntriesError { source: EntriesError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::init_tracing;
    use rstest::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const SAMPLE: &str = r#"
entries:
  /etc/hosts: "127.0.0.1 localhost"
  /var/log: {}
  /home:
    alice:
      notes.txt: hello
      empty: ~
  /numbers/1: 42
"#;

    #[test]
    fn fixture_builds_flat_and_nested_entries() {
        init_tracing();
        let fixture: Fixture = SAMPLE.try_into().expect("Failed to parse fixture");
        let fs = fixture.into_mock_fs().expect("Failed to build mock filesystem");

        assert!(fs.is_dir("/etc"));
        assert!(fs.is_file("/etc/hosts"));
        assert!(fs.is_dir("/var/log"));
        assert!(fs.list_dir("/var/log").is_empty());
        assert!(fs.is_dir("/home/alice"));
        assert_eq!(
            fs.list_dir("/home/alice"),
            vec!["empty".to_string(), "notes.txt".to_string()]
        );
        assert_eq!(
            fs.resolve("/home/alice/notes.txt").and_then(Node::content),
            Some(&Some("hello".to_string()))
        );
        assert_eq!(
            fs.resolve("/home/alice/empty").and_then(Node::content),
            Some(&None)
        );
        assert_eq!(
            fs.resolve("/numbers/1").and_then(Node::content),
            Some(&Some("42".to_string()))
        );
    }

    #[test]
    fn fixture_keeps_document_order_for_walk() {
        let fixture: Fixture = "entries:\n  /z: 1\n  /a: 2\n  /m: {}\n"
            .try_into()
            .expect("Failed to parse fixture");
        let fs = fixture.into_mock_fs().expect("Failed to build mock filesystem");

        let root = fs.walk("/").next().expect("Walk should yield the root");
        assert_eq!(root.dirs, vec!["m".to_string()]);
        assert_eq!(root.files, vec!["z".to_string(), "a".to_string()]);
    }

    #[test]
    fn fixture_entries_convert_into_mock_fs_entries() {
        let fixture: Fixture = "entries:\n  /a: 1\n".try_into().unwrap();
        let mut fs = MockFs::new(Entries::flat([("/b", Some("b".to_string()))])).unwrap();
        fs.add_entries(fixture).unwrap();

        assert!(fs.is_file("/a"));
        assert!(fs.is_file("/b"));
    }

    #[test]
    fn fixture_handles_missing_entries_section() {
        let result: Result<Fixture, _> = "other: value".try_into();
        let fixture = result.expect("Missing entries should be accepted");
        assert!(fixture.entries().is_empty());
    }

    #[test]
    fn fixture_handles_empty_entries_section() {
        let fixture: Fixture = "entries: {}".try_into().unwrap();
        assert!(fixture.entries().is_empty());
        let fs = fixture.into_mock_fs().unwrap();
        assert!(fs.exists("/"));
    }

    #[test]
    fn fixture_returns_error_on_empty_document() {
        let result: Result<Fixture, _> = "".try_into();
        assert!(matches!(result, Err(FixtureError::MalformedFixture)));
    }

    #[rstest]
    #[case("- item1\n- item2")]
    #[case("just a string")]
    fn fixture_returns_error_when_top_level_is_not_map(#[case] contents: &str) {
        let result: Result<Fixture, _> = contents.try_into();
        assert!(matches!(result, Err(FixtureError::TopLevelNotMap)));
    }

    #[rstest]
    #[case("entries:\n  - /a\n  - /b")]
    #[case("entries: 3")]
    #[case("entries: ~")]
    fn fixture_returns_error_when_entries_is_not_map(#[case] contents: &str) {
        let result: Result<Fixture, _> = contents.try_into();
        assert!(matches!(result, Err(FixtureError::EntriesNotMap)));
    }

    #[test]
    fn fixture_returns_error_on_invalid_yaml() {
        let result: Result<Fixture, _> = "invalid: yaml: content: [unclosed".try_into();
        assert!(matches!(result, Err(FixtureError::ParseError { .. })));
    }

    #[test]
    fn fixture_rejects_sequence_values() {
        let result: Result<Fixture, _> = "entries:\n  /dir:\n    list: [1, 2]\n".try_into();
        match result {
            Err(FixtureError::UnsupportedValueError { path }) => assert_eq!(path, "/dir/list"),
            other => panic!("Expected UnsupportedValueError, got {other:?}"),
        }
    }

    #[test]
    fn fixture_rejects_keys_that_are_not_names() {
        let result: Result<Fixture, _> = "entries:\n  1.5: x\n".try_into();
        assert!(matches!(result, Err(FixtureError::InvalidKeyError { .. })));
    }

    #[test]
    fn fixture_reports_conflicting_entries_when_building() {
        let fixture: Fixture = "entries:\n  /a: 1\n  /a/b: 2\n".try_into().unwrap();
        let result = fixture.into_mock_fs();
        assert!(matches!(
            result,
            Err(FixtureError::InvalidEntriesError {
                source: EntriesError::TraverseFileError { .. }
            })
        ));
    }

    #[test]
    fn fixture_reports_conflict_inside_nested_entry() {
        let fixture: Fixture = "entries:\n  /a/b: 1\n  /a:\n    b: {}\n"
            .try_into()
            .unwrap();
        match fixture.into_mock_fs() {
            Err(FixtureError::InvalidEntriesError {
                source: EntriesError::PathConflictError { path },
            }) => assert_eq!(path, "/a/b"),
            other => panic!("Expected PathConflictError, got {other:?}"),
        }
    }

    #[compio::test]
    async fn fixture_reads_from_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", SAMPLE).expect("Failed to write to temp file");

        let fixture = Fixture::from_path(temp_file.path().to_path_buf())
            .await
            .expect("Failed to read fixture");
        let fs = fixture.into_mock_fs().expect("Failed to build mock filesystem");

        assert!(fs.is_file("/etc/hosts"));
    }

    #[compio::test]
    async fn fixture_reads_default_file_name_from_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(temp_dir.path().join(FIXTURE_FILE_NAME), "entries:\n  /x/y: 1\n")
            .expect("Failed to write fixture");

        let fixture = Fixture::read(temp_dir.path())
            .await
            .expect("Failed to read fixture");
        let fs = fixture.into_mock_fs().expect("Failed to build mock filesystem");

        assert!(fs.is_dir("/x"));
        assert!(fs.is_file("/x/y"));
    }

    #[compio::test]
    async fn fixture_returns_error_on_nonexistent_file() {
        let result = Fixture::from_path(PathBuf::from("/this/path/does/not/exist.yaml")).await;
        match result {
            Err(FixtureError::ReadError { file_path, .. }) => {
                assert_eq!(file_path, "/this/path/does/not/exist.yaml");
            }
            other => panic!("Expected ReadError, got {other:?}"),
        }
    }

    #[compio::test]
    async fn fixture_returns_error_on_non_utf8_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(&[0xff, 0xfe, 0xfd])
            .expect("Failed to write to temp file");

        let result = Fixture::from_path(temp_file.path().to_path_buf()).await;
        assert!(matches!(result, Err(FixtureError::EncodingError { .. })));
    }

    #[test]
    fn fixture_error_display() {
        let error = FixtureError::UnsupportedValueError {
            path: normalize("/a/b"),
        };
        assert!(error.to_string().contains("/a/b"));
    }
}
