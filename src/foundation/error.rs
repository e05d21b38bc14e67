pub type ShopResult<T> = Result<T, ShopError>;

#[derive(thiserror::Error, Debug)]
pub enum ShopError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("image decode error: {0}")]
    Decode(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("cart index {index} out of range (len {len})")]
    CartIndexOutOfRange { index: usize, len: usize },

    #[error("cart item #{0} not found")]
    UnknownCartItem(u64),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShopError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
