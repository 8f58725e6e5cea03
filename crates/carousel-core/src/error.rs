use thiserror::Error;

/// Rejected geometry or configuration.
///
/// The engine never fails once constructed; these only surface from
/// [`ScrollEngine::new`](crate::ScrollEngine::new), [`ScrollConfig::validate`](crate::ScrollConfig::validate)
/// and [`ScrollEngine::on_resize`](crate::ScrollEngine::on_resize).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    NoItems,

    #[error("item width must be finite and positive, got {0}")]
    InvalidItemWidth(f64),

    #[error("total width must be finite and at least two items wide, got {total} for item width {item}")]
    InvalidTotalWidth { total: f64, item: f64 },

    #[error("viewport width must be finite and non-negative, got {0}")]
    InvalidViewportWidth(f64),

    #[error("ease must be in (0, 1], got {0}")]
    InvalidEase(f64),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
