use std::process::Command;

pub const UNKNOWN_NAME: &str = "UNKNOWN GITHUB NAME";
pub const UNKNOWN_EMAIL: &str = "UNKNOWN GITHUB EMAIL";

/// A version-control identity, used to default the author question and to
/// patch the seed's metadata manifests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: UNKNOWN_EMAIL.to_string(),
        }
    }

    pub fn name_and_email(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Where identity defaults come from. Lookup is best effort: a missing or
/// unreadable identity degrades to the placeholder values and must never
/// abort the run.
pub trait IdentitySource {
    fn lookup(&self) -> Identity;
}

/// Reads `user.name` / `user.email` from the local git configuration.
pub struct GitIdentity;

impl GitIdentity {
    pub fn new() -> Self {
        Self
    }

    fn git_config(key: &str) -> Option<String> {
        let output = Command::new("git")
            .args(["config", "--get", key])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if value.is_empty() { None } else { Some(value) }
    }
}

impl Default for GitIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentitySource for GitIdentity {
    fn lookup(&self) -> Identity {
        Identity {
            name: Self::git_config("user.name").unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            email: Self::git_config("user.email").unwrap_or_else(|| UNKNOWN_EMAIL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_name_and_email() {
        let id = Identity {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        };
        assert_eq!(id.name_and_email(), "Jane Doe <jane@example.com>");
    }

    #[test]
    fn unknown_identity_uses_placeholders() {
        let id = Identity::unknown();
        assert_eq!(
            id.name_and_email(),
            "UNKNOWN GITHUB NAME <UNKNOWN GITHUB EMAIL>"
        );
    }
}
