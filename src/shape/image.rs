//! Pictures loaded from the local filesystem

use std::path::{Path, PathBuf};

use super::ShapeError;
use crate::backend::{Geometry, PicturePlan, Presentation, SlideId};
use crate::config::{Options, ShapeConfig};
use crate::spec::ContentValue;

const DEFAULT_LEFT: f64 = 1.0;
const DEFAULT_TOP: f64 = 1.0;
const DEFAULT_WIDTH: f64 = 4.0;
const DEFAULT_HEIGHT: f64 = 3.0;

/// Options of a picture shape
///
/// Pictures do not inherit slide-level `left`/`top`; an unset position falls
/// back to one inch from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageShape {
    pub geometry: Geometry,
}

impl ImageShape {
    pub fn from_config(config: &ShapeConfig) -> Self {
        Self {
            geometry: Geometry::new(
                config.f64("left").unwrap_or(DEFAULT_LEFT),
                config.f64("top").unwrap_or(DEFAULT_TOP),
                config.f64("width").unwrap_or(DEFAULT_WIDTH),
                config.f64("height").unwrap_or(DEFAULT_HEIGHT),
            ),
        }
    }

    /// Check the picture path and compute the placement
    pub fn plan(&self, path: &Path) -> Result<PicturePlan, ShapeError> {
        if path.as_os_str().is_empty() || !path.exists() {
            return Err(ShapeError::ImageMissing {
                path: path.to_path_buf(),
            });
        }
        Ok(PicturePlan {
            path: path.to_path_buf(),
            geometry: self.geometry,
        })
    }
}

/// Add the picture named by `content` to `slide`
pub fn add_picture<P: Presentation + ?Sized>(
    presentation: &mut P,
    slide: SlideId,
    name: &str,
    shape: &ImageShape,
    content: &ContentValue,
) -> Result<(), ShapeError> {
    let ContentValue::Scalar(path) = content else {
        return Err(ShapeError::unsupported(name, "a path", content));
    };
    let picture = shape.plan(&PathBuf::from(path))?;
    presentation.add_picture(slide, picture)?;
    Ok(())
}
