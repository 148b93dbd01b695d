use std::fmt;

/// Presentation resource failure. Every variant is fatal and carries the SDL diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    Init(String),
    Window(String),
    Renderer(String),
    Surface(String),
    Texture(String),
    Render(String),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "failed to initialize SDL: {e}"),
            Self::Window(e) => write!(f, "failed to create window: {e}"),
            Self::Renderer(e) => write!(f, "failed to create renderer: {e}"),
            Self::Surface(e) => write!(f, "failed to create surface: {e}"),
            Self::Texture(e) => write!(f, "failed to create texture: {e}"),
            Self::Render(e) => write!(f, "failed to render frame: {e}"),
        }
    }
}

impl std::error::Error for PresentError {}
