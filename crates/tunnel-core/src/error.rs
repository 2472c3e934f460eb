use thiserror::Error;

/// Faults raised while building the scene or acquiring the GPU.
///
/// None of these are recoverable: the front-ends log them and stop
/// initialization. Nothing after startup produces an `InitError`.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("missing DOM object: {0}")]
    MissingDom(&'static str),
    #[error("could not create drawing surface: {0}")]
    Surface(String),
    #[error("no compatible GPU adapter")]
    Adapter,
    #[error("device request failed: {0}")]
    Device(String),
    #[error("shader `{label}` failed to compile:\n{diagnostics}")]
    ShaderCompile {
        label: &'static str,
        diagnostics: String,
    },
    #[error("tunnel path needs at least two control points, got {0}")]
    EmptyPath(usize),
}

impl InitError {
    /// True for the shader class of faults, false for surface/context faults.
    pub fn is_shader_fault(&self) -> bool {
        matches!(self, InitError::ShaderCompile { .. })
    }
}
