use crate::hook::HookName;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    #[error("mount point not found: no element matches `{selector}`")]
    MountNotFound { selector: String },

    #[error("p5.js is not available: {reason}")]
    LibraryUnavailable { reason: String },

    #[error("p5.js instance was not initialized")]
    InstanceNotInitialized,

    #[error("{hook} function is not defined")]
    MissingRequiredHook { hook: HookName },

    #[error("failed to install {hook} handler: {message}")]
    HookInstall { hook: HookName, message: String },

    #[error("unknown hook name `{name}`")]
    UnknownHook { name: String },

    #[error("host error: {message}")]
    Host { message: String },
}

impl SketchError {
    /// The hook this error is about, if any.
    pub fn hook(&self) -> Option<HookName> {
        match self {
            SketchError::MissingRequiredHook { hook } | SketchError::HookInstall { hook, .. } => {
                Some(*hook)
            }
            _ => None,
        }
    }

    pub fn host(message: impl Into<String>) -> Self {
        SketchError::Host { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_hook_message() {
        let err = SketchError::MissingRequiredHook { hook: HookName::Setup };
        insta::assert_snapshot!(err.to_string(), @"setup function is not defined");
    }

    #[test]
    fn test_mount_not_found_message() {
        let err = SketchError::MountNotFound { selector: "#missing".into() };
        insta::assert_snapshot!(err.to_string(), @"mount point not found: no element matches `#missing`");
    }

    #[test]
    fn test_hook_accessor() {
        let err = SketchError::HookInstall { hook: HookName::Draw, message: "frozen".into() };
        assert_eq!(err.hook(), Some(HookName::Draw));
        assert_eq!(SketchError::InstanceNotInitialized.hook(), None);
    }
}
