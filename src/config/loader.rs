//! Config file loading

use super::error::{BoxError, ConfigError, Result};
use super::ConfigTree;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Load a file at `path` through `parse` and return its root mapping.
///
/// The file handle lives only for the duration of this call. A missing file
/// yields [`ConfigError::FileNotFound`]; any other open failure, a parser
/// error, or a document whose root is not a mapping yields
/// [`ConfigError::Parse`].
pub fn load_file<F, E>(path: &Path, parse: F) -> Result<ConfigTree>
where
    F: FnOnce(BufReader<File>) -> std::result::Result<Value, E>,
    E: Into<BoxError>,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound { path: path.to_path_buf() });
        }
        Err(e) => return Err(ConfigError::parse(path, e)),
    };

    let parsed = parse(BufReader::new(file)).map_err(|e| ConfigError::parse(path, e))?;

    match parsed {
        Value::Object(tree) => {
            tracing::debug!("Loaded {} top-level keys from {}", tree.len(), path.display());
            Ok(tree)
        }
        other => Err(ConfigError::parse(
            path,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("expected a mapping at document root, found {}", kind_of(&other)),
            ),
        )),
    }
}

/// Load a YAML document (the base configuration format).
///
/// Merge keys (`<<: *anchor`) are expanded before conversion.
pub fn load_yaml(path: &Path) -> Result<ConfigTree> {
    load_file(path, |reader| {
        let mut doc: serde_yaml::Value = serde_yaml::from_reader(reader)?;
        doc.apply_merge()?;
        serde_yaml::from_value::<Value>(doc)
    })
}

/// Load a JSON document (the secrets format).
pub fn load_json(path: &Path) -> Result<ConfigTree> {
    load_file(path, |reader| serde_json::from_reader::<_, Value>(reader))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml_mapping() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "project_name: Demo\napi_keys:\n  openai:\n    model: gpt-4o\n")
            .expect("write");

        let tree = load_yaml(&path).expect("load");
        assert_eq!(tree["project_name"], "Demo");
        assert_eq!(tree["api_keys"]["openai"]["model"], "gpt-4o");
    }

    #[test]
    fn test_load_yaml_expands_merge_keys() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.yaml");
        fs::write(
            &path,
            "defaults: &defaults\n  api_key: load_from_secrets\n  timeout: 30\n\
             api_keys:\n  openai:\n    <<: *defaults\n    model: gpt-4o\n    timeout: 60\n",
        )
        .expect("write");

        let tree = load_yaml(&path).expect("load");
        let openai = tree["api_keys"]["openai"].as_object().expect("provider mapping");
        assert!(!openai.contains_key("<<"));
        assert_eq!(openai["api_key"], "load_from_secrets");
        assert_eq!(openai["model"], "gpt-4o");
        assert_eq!(openai["timeout"], 60);
    }

    #[test]
    fn test_merged_placeholder_resolves_from_secrets() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.yaml");
        fs::write(
            &path,
            "defaults: &d {api_key: load_from_secrets}\n\
             api_keys:\n  openai: {<<: *d, model: gpt-4o}\n",
        )
        .expect("write");
        let secrets = match serde_json::json!({"openai": {"api_key": "sk-1"}}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let resolved = crate::config::resolve(load_yaml(&path).expect("load"), &secrets);

        assert_eq!(
            resolved.get_path(&["api_keys", "openai", "api_key"]),
            Some(&Value::from("sk-1"))
        );
    }

    #[test]
    fn test_load_json_mapping() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("secrets.json");
        fs::write(&path, r#"{"openai": {"api_key": "sk-test"}}"#).expect("write");

        let tree = load_json(&path).expect("load");
        assert_eq!(tree["openai"]["api_key"], "sk-test");
    }

    #[test]
    fn test_missing_file_carries_path() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("nope.yaml");

        match load_yaml(&path) {
            Err(ConfigError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "api_keys: [unclosed\n  - : :").expect("write");

        let err = load_yaml(&path).expect_err("malformed yaml");
        assert!(matches!(err, ConfigError::Parse { .. }));
        let cause = err.source().expect("cause attached");
        assert!(cause.downcast_ref::<serde_yaml::Error>().is_some());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("secrets.json");
        fs::write(&path, r#"{"openai": {"api_key": "#).expect("write");

        let err = load_json(&path).expect_err("malformed json");
        match &err {
            ConfigError::Parse { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("expected Parse, got {:?}", other),
        }
        let cause = err.source().expect("cause attached");
        assert!(cause.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_parser_failure_is_wrapped() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("any.txt");
        fs::write(&path, "whatever").expect("write");

        let err = load_file(&path, |_reader| {
            Err::<Value, _>(io::Error::new(io::ErrorKind::Other, "parser exploded"))
        })
        .expect_err("parser error");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("parser exploded"));
    }

    #[test]
    fn test_non_mapping_root_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("list.json");
        fs::write(&path, "[1, 2, 3]").expect("write");

        let err = load_json(&path).expect_err("list root");
        assert!(err.to_string().contains("expected a mapping"));
    }
}
