//! Render configuration.
//!
//! One immutable snapshot per render pass. Field names match the camelCase JSON form, so a config
//! can be loaded straight from a file:
//!
//! ```
//! use qistyle::config::RenderConfig;
//! use qistyle::style::CodeStyle;
//!
//! let config = RenderConfig::from_json(r#"{ "size": 300, "codeStyle": "dot" }"#).unwrap();
//! assert_eq!(config.code_style, CodeStyle::Dot);
//! assert_eq!(config.padding, 1);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::qrcode::QrCodeEcc;
use crate::style::{CodeStyle, EyeStyle};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Text to encode.
    pub content: String,
    /// Canvas edge length in pixels.
    pub size: f64,
    /// Light border around the symbol, in modules.
    pub padding: u32,
    /// Fill for dark modules when no gradient or background image is set.
    pub color: String,
    /// Two stop colours; switches the fill to a linear gradient.
    pub linear_gradient: Option<Vec<String>>,
    /// Gradient vector `[x1, y1, x2, y2]` in canvas pixels.
    pub gradient_direction: [f64; 4],
    pub background_color: String,
    pub inner_eye_style: EyeStyle,
    pub outer_eye_style: EyeStyle,
    pub code_style: CodeStyle,
    /// Image drawn at the centre; modules under it are dropped.
    pub logo: Option<PathBuf>,
    /// Image shown through the dark modules.
    pub background_image: Option<PathBuf>,
    /// Logo edge length in pixels.
    pub logo_size: f64,
    pub ecl: QrCodeEcc,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            content: "No Content".to_string(),
            size: 250.0,
            padding: 1,
            color: "black".to_string(),
            linear_gradient: None,
            gradient_direction: [0.0, 0.0, 170.0, 0.0],
            background_color: "white".to_string(),
            inner_eye_style: EyeStyle::Square,
            outer_eye_style: EyeStyle::Square,
            code_style: CodeStyle::Square,
            logo: None,
            background_image: None,
            logo_size: 100.0,
            ecl: QrCodeEcc::High,
        }
    }
}

/// How the dark modules get their colour. Picked in this order: background image, gradient,
/// solid colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill<'a> {
    Solid(&'a str),
    LinearGradient {
        from: &'a str,
        to: &'a str,
        direction: [f64; 4],
    },
    BackgroundImage(&'a Path),
}

impl RenderConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        RenderConfig::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects configurations the renderer cannot draw sensibly.
    pub fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(Error::InvalidConfig(format!("size must be positive, got {}", self.size)));
        }
        if !(self.logo_size.is_finite() && self.logo_size >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "logoSize must not be negative, got {}",
                self.logo_size
            )));
        }
        if self.logo.is_some() && self.logo_size > self.size {
            return Err(Error::InvalidConfig(format!(
                "logoSize {} is larger than the canvas {}",
                self.logo_size, self.size
            )));
        }
        if self.color.trim().is_empty() {
            return Err(Error::InvalidConfig("color must not be empty".into()));
        }
        if let Some(stops) = &self.linear_gradient {
            if stops.len() != 2 || stops.iter().any(|s| s.trim().is_empty()) {
                return Err(Error::InvalidConfig(format!(
                    "linearGradient needs exactly two colours, got {:?}",
                    stops
                )));
            }
        }
        if self.gradient_direction.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfig("gradientDirection must be finite".into()));
        }
        Ok(())
    }

    pub fn fill(&self) -> Fill<'_> {
        if let Some(path) = &self.background_image {
            return Fill::BackgroundImage(path);
        }
        match self.linear_gradient.as_deref() {
            Some([from, to]) => Fill::LinearGradient {
                from,
                to,
                direction: self.gradient_direction,
            },
            _ => Fill::Solid(&self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::from_json("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.size, 250.0);
        assert_eq!(config.ecl, QrCodeEcc::High);
        assert_eq!(config.fill(), Fill::Solid("black"));
    }

    #[test]
    fn test_camel_case_fields() {
        let config = RenderConfig::from_json(
            r##"{
                "content": "https://example.com",
                "codeStyle": "sharp",
                "innerEyeStyle": "diamond",
                "outerEyeStyle": "circle",
                "linearGradient": ["#ff0000", "#0000ff"],
                "gradientDirection": [0, 0, 0, 250],
                "logoSize": 40,
                "ecl": "Q"
            }"##,
        )
        .unwrap();
        assert_eq!(config.code_style, CodeStyle::Sharp);
        assert_eq!(config.inner_eye_style, EyeStyle::Diamond);
        assert_eq!(config.outer_eye_style, EyeStyle::Circle);
        assert_eq!(config.ecl, QrCodeEcc::Quartile);
        assert_eq!(
            config.fill(),
            Fill::LinearGradient {
                from: "#ff0000",
                to: "#0000ff",
                direction: [0.0, 0.0, 0.0, 250.0],
            }
        );
    }

    #[test]
    fn test_unknown_eye_style_is_rejected() {
        let err = RenderConfig::from_json(r#"{ "innerEyeStyle": "ninja" }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_validation() {
        let bad_size = RenderConfig { size: 0.0, ..RenderConfig::default() };
        assert!(matches!(bad_size.validate(), Err(Error::InvalidConfig(_))));

        let big_logo = RenderConfig {
            logo: Some(PathBuf::from("logo.png")),
            logo_size: 300.0,
            ..RenderConfig::default()
        };
        assert!(big_logo.validate().is_err());

        let one_stop = RenderConfig {
            linear_gradient: Some(vec!["red".into()]),
            ..RenderConfig::default()
        };
        assert!(one_stop.validate().is_err());

        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_background_image_wins() {
        let config = RenderConfig {
            linear_gradient: Some(vec!["red".into(), "blue".into()]),
            background_image: Some(PathBuf::from("bg.png")),
            ..RenderConfig::default()
        };
        assert_eq!(config.fill(), Fill::BackgroundImage(Path::new("bg.png")));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("qistyle-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "size": 300, "codeStyle": "diamond", "ecl": "M" }"#).unwrap();
        let config = RenderConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.size, 300.0);
        assert_eq!(config.code_style, CodeStyle::Diamond);
        assert_eq!(config.ecl, QrCodeEcc::Medium);
        assert_eq!(config.padding, 1);

        assert!(matches!(RenderConfig::load(path.with_extension("missing")), Err(Error::Io(_))));
    }

    #[test]
    fn test_json_round_trip_keeps_styles() {
        let config = RenderConfig { code_style: CodeStyle::Dot, ..RenderConfig::default() };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"codeStyle\": \"dot\""));
        assert_eq!(RenderConfig::from_json(&json).unwrap(), config);
    }
}
