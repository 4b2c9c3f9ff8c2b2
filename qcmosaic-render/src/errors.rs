use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown colormap: {0}")]
    UnknownColormap(String),

    #[error("Nothing to render: the mosaic has no tracks")]
    EmptyMosaic,

    #[error("Mosaic of {width}x{height} pixels is too large to render")]
    ImageTooLarge { width: usize, height: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Npy(#[from] ndarray_npy::WriteNpyError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
