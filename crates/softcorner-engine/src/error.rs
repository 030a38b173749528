use thiserror::Error;

/// Violations of the [`BorderSpec`](crate::raster::BorderSpec) invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("shadow radius {shadow} is smaller than corner radius {corner}")]
    ShadowBelowCorner { corner: u32, shadow: u32 },

    #[error("border width {width} exceeds corner radius {corner}")]
    BorderWiderThanCorner { width: u32, corner: u32 },

    #[error("shadow padding {padding} must lie between corner radius {corner} and shadow radius {shadow}")]
    PaddingOutOfRange { padding: u32, corner: u32, shadow: u32 },

    #[error("border radius {radius} exceeds the maximum of {max}")]
    RadiusTooLarge { radius: u64, max: u32 },
}

/// Reasons a single element cannot be decorated.
///
/// These are reported to the host and abandon that element only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorateError {
    #[error("unknown border type {0:?} (expected simple, shadow, fade or glow)")]
    UnknownBorderType(String),

    #[error("unknown edge {0:?} (expected top, right, bottom, left or all)")]
    UnknownEdge(String),

    #[error("invalid value for `{key}`: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error(transparent)]
    Spec(#[from] SpecError),
}
