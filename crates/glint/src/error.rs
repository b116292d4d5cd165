use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlintError {
    #[error("invalid parameter `{name}`: got {value}, expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("empty frame: {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, GlintError>;
