//! Placeholder substitution
//!
//! Every leaf of the base tree equal to [`PLACEHOLDER`] is replaced by the
//! value found at the same key path in the secrets tree. The first segment of
//! the path is not part of the lookup: secrets are keyed relative to the
//! top-level group, so `api_keys.openai.api_key` in the base configuration
//! reads `openai.api_key` from the secrets store. A placeholder directly at
//! the root therefore looks up its own key at the secrets root.
//!
//! Resolution never fails. Anything that cannot be reached in the secrets
//! tree, including a path that runs into a non-mapping value, becomes
//! [`MISSING`].

use super::{ConfigTree, API_KEYS_SECTION, MISSING, PLACEHOLDER};
use serde_json::Value;
use std::iter;

/// A base configuration with all placeholders substituted.
///
/// Every mapping level has exactly the keys of the base tree it was built
/// from; only leaf values differ.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedConfig {
    tree: ConfigTree,
    from_secrets: Vec<Vec<String>>,
    unresolved: Vec<Vec<String>>,
}

/// Resolve `base` against `secrets`.
pub fn resolve(mut base: ConfigTree, secrets: &ConfigTree) -> ResolvedConfig {
    let mut walk =
        Walk { secrets, path: Vec::new(), from_secrets: Vec::new(), unresolved: Vec::new() };
    walk.replace_placeholders(&mut base);

    ResolvedConfig { tree: base, from_secrets: walk.from_secrets, unresolved: walk.unresolved }
}

struct Walk<'s> {
    secrets: &'s ConfigTree,
    path: Vec<String>,
    from_secrets: Vec<Vec<String>>,
    unresolved: Vec<Vec<String>>,
}

impl Walk<'_> {
    fn replace_placeholders(&mut self, section: &mut ConfigTree) {
        for (key, value) in section.iter_mut() {
            match value {
                Value::Object(child) => {
                    self.path.push(key.clone());
                    self.replace_placeholders(child);
                    self.path.pop();
                }
                Value::String(s) if s == PLACEHOLDER => {
                    let segments = self.path.iter().skip(1).chain(iter::once(key));
                    let full_path = || -> Vec<String> {
                        self.path.iter().cloned().chain(iter::once(key.clone())).collect()
                    };

                    *value = match lookup(self.secrets, segments) {
                        Some(secret) => {
                            self.from_secrets.push(full_path());
                            secret.clone()
                        }
                        None => {
                            self.unresolved.push(full_path());
                            Value::String(MISSING.to_string())
                        }
                    };
                }
                _ => {}
            }
        }
    }
}

fn lookup<'s, 'k>(
    secrets: &'s ConfigTree,
    segments: impl IntoIterator<Item = &'k String>,
) -> Option<&'s Value> {
    let mut cursor: Option<&Value> = None;
    for segment in segments {
        let map = match cursor {
            None => secrets,
            Some(Value::Object(map)) => map,
            Some(_) => return None,
        };
        cursor = Some(map.get(segment)?);
    }
    cursor
}

impl ResolvedConfig {
    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tree.get(key)
    }

    /// Follow `segments` from the root; `None` if any step is absent or not a mapping.
    pub fn get_path(&self, segments: &[&str]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        rest.iter().try_fold(self.tree.get(*first)?, |cursor, segment| match cursor {
            Value::Object(map) => map.get(*segment),
            _ => None,
        })
    }

    /// The options subtree for `provider` under `api_keys`.
    pub fn provider(&self, provider: &str) -> Option<&ConfigTree> {
        self.get_path(&[API_KEYS_SECTION, provider]).and_then(Value::as_object)
    }

    pub fn project_name(&self) -> Option<&str> {
        self.get("project_name").and_then(Value::as_str)
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author").and_then(Value::as_str)
    }

    /// Dotted paths of placeholders that were filled from the secrets store.
    pub fn secret_paths(&self) -> Vec<String> {
        self.from_secrets.iter().map(|p| p.join(".")).collect()
    }

    /// Dotted paths of placeholders left as [`MISSING`].
    pub fn unresolved_paths(&self) -> Vec<String> {
        self.unresolved.iter().map(|p| p.join(".")).collect()
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Copy of the tree with every secret-sourced value replaced by `mask`.
    /// Secrets that are null stay null.
    pub fn redacted(&self, mask: &str) -> ConfigTree {
        let mut tree = self.tree.clone();
        for path in &self.from_secrets {
            match slot_mut(&mut tree, path) {
                Some(Value::Null) | None => {}
                Some(slot) => *slot = Value::String(mask.to_string()),
            }
        }
        tree
    }
}

fn slot_mut<'t>(tree: &'t mut ConfigTree, path: &[String]) -> Option<&'t mut Value> {
    let (first, rest) = path.split_first()?;
    rest.iter().try_fold(tree.get_mut(first)?, |cursor, segment| match cursor {
        Value::Object(map) => map.get_mut(segment),
        _ => None,
    })
}
