// ── Screen routes ──
//
//   /               customer list
//   /create         new customer form
//   /profile/{id}   customer profile with address editing
//   /update/{id}    contact-field edit form

use std::fmt;

use crate::model::CustomerId;

/// A navigable screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Profile(CustomerId),
    Update(CustomerId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_owned(),
            Self::Create => "/create".to_owned(),
            Self::Profile(id) => format!("/profile/{id}"),
            Self::Update(id) => format!("/update/{id}"),
        }
    }

    /// Parse a path. Trailing slashes are ignored; unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        if !trimmed.is_empty() && !trimmed.starts_with('/') {
            return None;
        }
        let mut segments = trimmed.split('/').skip(1);

        match (segments.next(), segments.next(), segments.next()) {
            (None, None, None) => Some(Self::List),
            (Some("create"), None, None) => Some(Self::Create),
            (Some("profile"), Some(id), None) => CustomerId::new(id).map(Self::Profile),
            (Some("update"), Some(id), None) => CustomerId::new(id).map(Self::Update),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
