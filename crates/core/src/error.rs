/// Result alias that carries the custom [`DemoError`] type.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Common error type for the core crate.
///
/// Every variant is fatal at startup: the binary reports it and exits with
/// status 1. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// A platform subsystem (window surface, audio device) could not be
    /// brought up.
    #[error("{subsystem} could not initialise: {message}")]
    Init {
        subsystem: &'static str,
        message: String,
    },
    /// An asset file (font, music) is missing or unreadable.
    #[error("failed to load {subsystem} from `{path}`: {message}")]
    ResourceLoad {
        subsystem: &'static str,
        path: String,
        message: String,
    },
    /// The pre-rendered text image could not be produced.
    #[error("unable to render text image: {0}")]
    Render(String),
    /// The window refused a finished frame.
    #[error("failed to present frame: {0}")]
    Present(String),
}

impl DemoError {
    pub fn init(subsystem: &'static str, message: impl ToString) -> Self {
        Self::Init {
            subsystem,
            message: message.to_string(),
        }
    }

    pub fn resource(subsystem: &'static str, path: impl Into<String>, message: impl ToString) -> Self {
        Self::ResourceLoad {
            subsystem,
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        Self::Render(msg.into())
    }

    /// Name of the subsystem that failed, used for console diagnostics.
    pub fn subsystem(&self) -> &'static str {
        match self {
            Self::Init { subsystem, .. } | Self::ResourceLoad { subsystem, .. } => *subsystem,
            Self::Render(_) => "text renderer",
            Self::Present(_) => "window",
        }
    }

    /// Whether the binary should hold the failure on screen for a while
    /// before exiting. Only missing assets do.
    pub fn lingers(&self) -> bool {
        matches!(self, Self::ResourceLoad { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_resource_failures_linger() {
        assert!(DemoError::resource("font", "font.ttf", "not found").lingers());
        assert!(!DemoError::init("window", "no display").lingers());
        assert!(!DemoError::render("empty text").lingers());
    }

    #[test]
    fn messages_name_the_subsystem_and_cause() {
        let err = DemoError::resource("music", "music.ogg", "No such file or directory");
        let text = err.to_string();
        assert!(text.contains("music"));
        assert!(text.contains("music.ogg"));
        assert!(text.contains("No such file"));
        assert_eq!(err.subsystem(), "music");
    }
}
