use serde::{Deserialize, Serialize};

use crate::assets::{FontOpts, UploadOpts};
use crate::foundation::error::{ShopError, ShopResult};
use crate::render::PreviewOpts;

/// Native window settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOpts {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowOpts {
    fn default() -> Self {
        Self {
            title: "SnapShop".to_owned(),
            width: 1000.0,
            height: 700.0,
        }
    }
}

/// Everything tunable about the application. Missing JSON fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowOpts,
    pub preview: PreviewOpts,
    pub font: FontOpts,
    pub upload: UploadOpts,
}

impl AppConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> ShopResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ShopError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ShopResult<()> {
        if !(self.window.width.is_finite() && self.window.width > 0.0)
            || !(self.window.height.is_finite() && self.window.height > 0.0)
        {
            return Err(ShopError::validation("window size must be positive"));
        }
        self.preview.validate()?;
        self.upload.validate()
    }
}
