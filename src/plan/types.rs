use serde::{Deserialize, Serialize};

/// One planned rename: a file's current name and its computed target name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePair {
    pub old_name: String,
    pub new_name: String,
}

impl RenamePair {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}
