//! Ordered transform pipelines.
//!
//! A pipeline is a list of [`TransformOp`]s applied one after the other. Ops
//! are plain serde data, so a host can keep them as JSON or receive them from
//! JavaScript, and they parse from a compact text form for the command line:
//!
//! | Text | Op |
//! |------|----|
//! | `resize=WxH` | [`TransformOp::Resize`] |
//! | `crop=X,Y,W,H` | [`TransformOp::Crop`] |
//! | `flip` | [`TransformOp::FlipHorizontal`] |
//! | `rotate=DEG` | [`TransformOp::Rotate`] |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::Image;
use crate::error::ImageError;
use crate::transform::RotationMapping;

/// A single transform step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    /// Nearest-neighbor resize to exact dimensions.
    Resize { width: i32, height: i32 },
    /// Keep the rectangle `[x, x + width) x [y, y + height)`.
    Crop {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// Mirror horizontally.
    FlipHorizontal,
    /// Rotate clockwise about the center.
    Rotate {
        degrees: f64,
        #[serde(default)]
        mapping: RotationMapping,
    },
}

impl TransformOp {
    /// Apply this op to an image. On error the image is unchanged.
    pub fn apply(&self, image: &mut Image) -> Result<(), ImageError> {
        match *self {
            TransformOp::Resize { width, height } => image.resize(width, height),
            TransformOp::Crop {
                x,
                y,
                width,
                height,
            } => image.crop(x, y, width, height),
            TransformOp::FlipHorizontal => {
                image.flip_horizontal();
                Ok(())
            }
            TransformOp::Rotate { degrees, mapping } => image.rotate_with(degrees, mapping),
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOp::Resize { width, height } => write!(f, "resize={width}x{height}"),
            TransformOp::Crop {
                x,
                y,
                width,
                height,
            } => write!(f, "crop={x},{y},{width},{height}"),
            TransformOp::FlipHorizontal => f.write_str("flip"),
            TransformOp::Rotate {
                degrees,
                mapping: RotationMapping::Scatter,
            } => write!(f, "rotate={degrees}"),
            TransformOp::Rotate {
                degrees,
                mapping: RotationMapping::Gather,
            } => write!(f, "rotate-gather={degrees}"),
        }
    }
}

/// Errors from parsing the text form of a [`TransformOp`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineParseError {
    /// The op name is not one of `resize`, `crop`, `flip`, `rotate`.
    #[error("Unknown transform '{0}'")]
    UnknownOp(String),

    /// The op needs an argument (`name=value`) and none was given.
    #[error("Transform '{0}' needs an argument")]
    MissingArgument(String),

    /// The op takes no argument but one was given.
    #[error("Transform '{0}' takes no argument")]
    UnexpectedArgument(String),

    /// The argument could not be parsed.
    #[error("Invalid argument for '{op}': {value}")]
    InvalidArgument { op: String, value: String },
}

impl FromStr for TransformOp {
    type Err = PipelineParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };

        let invalid = |value: &str| PipelineParseError::InvalidArgument {
            op: name.to_string(),
            value: value.to_string(),
        };
        let require = || arg.ok_or_else(|| PipelineParseError::MissingArgument(name.to_string()));

        match name {
            "resize" => {
                let arg = require()?;
                let (w, h) = arg
                    .split_once(['x', 'X'])
                    .ok_or_else(|| invalid(arg))?;
                Ok(TransformOp::Resize {
                    width: w.trim().parse().map_err(|_| invalid(arg))?,
                    height: h.trim().parse().map_err(|_| invalid(arg))?,
                })
            }
            "crop" => {
                let arg = require()?;
                let values = arg
                    .split(',')
                    .map(|v| v.trim().parse::<i32>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| invalid(arg))?;
                match values[..] {
                    [x, y, width, height] => Ok(TransformOp::Crop {
                        x,
                        y,
                        width,
                        height,
                    }),
                    _ => Err(invalid(arg)),
                }
            }
            "flip" => match arg {
                None => Ok(TransformOp::FlipHorizontal),
                Some(_) => Err(PipelineParseError::UnexpectedArgument(name.to_string())),
            },
            "rotate" | "rotate-gather" => {
                let arg = require()?;
                let degrees: f64 = arg.parse().map_err(|_| invalid(arg))?;
                if !degrees.is_finite() {
                    return Err(invalid(arg));
                }
                let mapping = if name == "rotate" {
                    RotationMapping::Scatter
                } else {
                    RotationMapping::Gather
                };
                Ok(TransformOp::Rotate { degrees, mapping })
            }
            _ => Err(PipelineParseError::UnknownOp(name.to_string())),
        }
    }
}

/// Run `ops` in order on a copy of `image`.
///
/// # Returns
///
/// The transformed image. If any op fails, its error is returned and `image`
/// is untouched; the partially transformed copy is dropped.
pub fn apply_pipeline(image: &Image, ops: &[TransformOp]) -> Result<Image, ImageError> {
    let mut working = image.clone();
    for (step, op) in ops.iter().enumerate() {
        log::debug!("pipeline step {}/{}: {op}", step + 1, ops.len());
        op.apply(&mut working)?;
    }
    Ok(working)
}

/// The fixed demo sequence of the first neurolens command-line tool.
///
/// 1. Halve both dimensions
/// 2. Crop the quarter-size block starting one pixel before the center
/// 3. Rotate 45° clockwise
/// 4. Flip horizontally
///
/// Dimensions are floored at 1 and the crop origin at 0 so the sequence is
/// valid for every image size.
pub fn legacy_pipeline(width: i32, height: i32) -> Vec<TransformOp> {
    let half_w = (width / 2).max(1);
    let half_h = (height / 2).max(1);
    let quarter_w = (half_w / 2).max(1);
    let quarter_h = (half_h / 2).max(1);

    vec![
        TransformOp::Resize {
            width: half_w,
            height: half_h,
        },
        TransformOp::Crop {
            x: (half_w / 2 - 1).clamp(0, half_w - quarter_w),
            y: (half_h / 2 - 1).clamp(0, half_h - quarter_h),
            width: quarter_w,
            height: quarter_h,
        },
        TransformOp::Rotate {
            degrees: 45.0,
            mapping: RotationMapping::Scatter,
        },
        TransformOp::FlipHorizontal,
    ]
}
