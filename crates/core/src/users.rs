//! User directory: display names keyed by user id.
//!
//! The directory is an XML document of `<user>` elements, each carrying a
//! `<name>` and an `<avatar>` path whose last segment is the numeric user id:
//!
//! ```xml
//! <intranet>
//!   <users>
//!     <user id="141"><avatar>/api/images/users/141</avatar><name>Adam P.</name></user>
//!   </users>
//! </intranet>
//! ```

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::UserId;

/// One directory entry, as served by the users listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserEntry {
    pub user_id: UserId,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// How the users listing is sorted.
///
/// Name ordering is a plain case-insensitive comparison of Unicode
/// lowercase forms; it does not depend on the process locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserOrdering {
    /// Ascending user id.
    #[default]
    ById,
    /// Case-insensitive name, ties broken by user id.
    ByName,
}

impl UserOrdering {
    pub fn compare(self, a: &UserEntry, b: &UserEntry) -> Ordering {
        match self {
            Self::ById => a.user_id.cmp(&b.user_id),
            Self::ByName => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.user_id.cmp(&b.user_id)),
        }
    }

    pub fn sort(self, users: &mut [UserEntry]) {
        users.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for UserOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::ById),
            "name" => Ok(Self::ByName),
            other => Err(format!("unknown user ordering '{other}' (expected 'id' or 'name')")),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Read the directory at `path` and return its users in `ordering`.
pub fn load_directory(path: &Path, ordering: UserOrdering) -> Result<Vec<UserEntry>, CoreError> {
    let xml = fs::read_to_string(path).map_err(|source| CoreError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    let mut users = parse_directory(&xml)?;
    ordering.sort(&mut users);
    Ok(users)
}

/// Parse directory XML into entries in document order.
///
/// Users without a name or with a non-numeric avatar id are skipped.
/// A repeated id keeps its first occurrence.
pub fn parse_directory(xml: &str) -> Result<Vec<UserEntry>, CoreError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| CoreError::Directory(e.to_string()))?;

    let users = doc
        .descendants()
        .find(|n| n.has_tag_name("users"))
        .ok_or_else(|| CoreError::Directory("missing <users> element".into()))?;

    let mut entries: Vec<UserEntry> = Vec::new();
    for user in users.children().filter(|n| n.has_tag_name("user")) {
        let name = child_text(&user, "name");
        let avatar = child_text(&user, "avatar");

        let (Some(name), Some(user_id)) = (name, avatar.and_then(user_id_from_avatar)) else {
            tracing::warn!(
                ?name,
                ?avatar,
                "Skipping directory user without name or numeric avatar id"
            );
            continue;
        };

        if entries.iter().any(|e| e.user_id == user_id) {
            tracing::debug!(user_id, "Ignoring duplicate directory user");
            continue;
        }
        entries.push(UserEntry {
            user_id,
            name: name.to_string(),
        });
    }

    Ok(entries)
}

/// The numeric id at the end of an avatar path, e.g. `/api/images/users/141`.
pub fn user_id_from_avatar(avatar: &str) -> Option<UserId> {
    avatar
        .trim()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

fn child_text<'a>(node: &roxmltree::Node<'a, '_>, tag: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const DIRECTORY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<intranet>
  <server>
    <host>intranet.example.com</host>
    <port>443</port>
    <protocol>https</protocol>
  </server>
  <users>
    <user id="11">
      <avatar>/api/images/users/11</avatar>
      <name>maciej D.</name>
    </user>
    <user id="10">
      <avatar>/api/images/users/10</avatar>
      <name>Maciej Z.</name>
    </user>
    <user id="12">
      <avatar>/api/images/users/none</avatar>
      <name>Broken A.</name>
    </user>
    <user id="13">
      <avatar>/api/images/users/13</avatar>
    </user>
  </users>
</intranet>"#;

    fn entry(user_id: UserId, name: &str) -> UserEntry {
        UserEntry {
            user_id,
            name: name.to_string(),
        }
    }

    #[test]
    fn parses_users_in_document_order_skipping_invalid() {
        let users = parse_directory(DIRECTORY).unwrap();
        assert_eq!(users, vec![entry(11, "maciej D."), entry(10, "Maciej Z.")]);
    }

    #[test]
    fn orders_by_id() {
        let mut users = parse_directory(DIRECTORY).unwrap();
        UserOrdering::ById.sort(&mut users);
        assert_eq!(users.iter().map(|u| u.user_id).collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn orders_by_name_case_insensitively() {
        let mut users = vec![entry(3, "bob"), entry(1, "Alice"), entry(2, "alice")];
        UserOrdering::ByName.sort(&mut users);
        assert_eq!(users.iter().map(|u| u.user_id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let xml = "<intranet><users>\
            <user><avatar>/u/5</avatar><name>First</name></user>\
            <user><avatar>/u/5</avatar><name>Second</name></user>\
            </users></intranet>";
        assert_eq!(parse_directory(xml).unwrap(), vec![entry(5, "First")]);
    }

    #[test]
    fn user_id_from_avatar_takes_last_segment() {
        assert_eq!(user_id_from_avatar("/api/images/users/141"), Some(141));
        assert_eq!(user_id_from_avatar("/api/images/users/141/"), Some(141));
        assert_eq!(user_id_from_avatar("/api/images/users/abc"), None);
    }

    #[test]
    fn ordering_from_str() {
        assert_eq!("id".parse::<UserOrdering>(), Ok(UserOrdering::ById));
        assert_eq!(" Name ".parse::<UserOrdering>(), Ok(UserOrdering::ByName));
        assert!("locale".parse::<UserOrdering>().is_err());
    }

    #[test]
    fn malformed_xml_is_directory_error() {
        assert_matches!(parse_directory("<intranet><users>"), Err(CoreError::Directory(_)));
        assert_matches!(parse_directory("<intranet/>"), Err(CoreError::Directory(_)));
    }

    #[test]
    fn load_directory_missing_file_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            load_directory(&dir.path().join("users.xml"), UserOrdering::ById),
            Err(CoreError::Source { .. })
        );
    }
}
