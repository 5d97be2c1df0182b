//! Tagged commands covering every store mutation.
//!
//! The overlay panel turns user gestures into [`PreferenceCommand`]s and the
//! app applies them to the store. Text keys (from tests, scripts or a URL
//! fragment) go through [`PreferenceCommand::parse`], which rejects unknown
//! names instead of touching arbitrary fields.

use std::str::FromStr;

use egui::Color32;

use super::color::{parse_hex_color, ColorTarget, Contrast, Saturation};
use super::content::{Alignment, ContentToggle, NumericField, DEFAULT_STEP};
use super::orientation::{OrientationToggle, UsefulLink};
use super::profiles::ProfileId;
use super::PreferenceError;

/// A field that can be restored to its default on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResettableField {
    Numeric(NumericField),
    Alignment,
    Contrast,
    Saturation,
    Color(ColorTarget),
    UsefulLink,
}

impl From<NumericField> for ResettableField {
    fn from(field: NumericField) -> Self {
        ResettableField::Numeric(field)
    }
}

impl From<ColorTarget> for ResettableField {
    fn from(target: ColorTarget) -> Self {
        ResettableField::Color(target)
    }
}

impl std::fmt::Display for ResettableField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResettableField::Numeric(field) => write!(f, "{}", field),
            ResettableField::Alignment => write!(f, "alignment"),
            ResettableField::Contrast => write!(f, "contrast"),
            ResettableField::Saturation => write!(f, "saturation"),
            ResettableField::Color(target) => write!(f, "{}-color", target),
            ResettableField::UsefulLink => write!(f, "useful-link"),
        }
    }
}

impl FromStr for ResettableField {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alignment" => Ok(ResettableField::Alignment),
            "contrast" => Ok(ResettableField::Contrast),
            "saturation" => Ok(ResettableField::Saturation),
            "useful-link" => Ok(ResettableField::UsefulLink),
            _ => {
                if let Some(target) = s.strip_suffix("-color") {
                    return target
                        .parse::<ColorTarget>()
                        .map(ResettableField::Color)
                        .map_err(|_| PreferenceError::UnknownField(s.to_string()));
                }
                s.parse::<NumericField>().map(ResettableField::Numeric)
            }
        }
    }
}

/// One mutation of the preferences store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceCommand {
    ToggleWidget,
    ToggleProfile(ProfileId),
    Adjust { field: NumericField, delta: i32 },
    Reset(ResettableField),
    ToggleContent(ContentToggle),
    SetAlignment(Alignment),
    SetContrast(Contrast),
    SetSaturation(Saturation),
    SetColor { target: ColorTarget, color: Color32 },
    ToggleOrientation(OrientationToggle),
    SetUsefulLink(Option<UsefulLink>),
    ResetAll,
}

impl PreferenceCommand {
    /// Build a command from a text key and its argument.
    ///
    /// `increase`/`decrease` use the default step of 10.
    pub fn parse(key: &str, value: &str) -> Result<Self, PreferenceError> {
        let value = value.trim();
        let command = match key.trim() {
            "widget" => PreferenceCommand::ToggleWidget,
            "profile" => PreferenceCommand::ToggleProfile(value.parse()?),
            "increase" => PreferenceCommand::Adjust {
                field: value.parse()?,
                delta: DEFAULT_STEP,
            },
            "decrease" => PreferenceCommand::Adjust {
                field: value.parse()?,
                delta: -DEFAULT_STEP,
            },
            "reset" => PreferenceCommand::Reset(value.parse()?),
            "toggle" => PreferenceCommand::ToggleContent(value.parse()?),
            "align" => PreferenceCommand::SetAlignment(value.parse()?),
            "contrast" => PreferenceCommand::SetContrast(value.parse()?),
            "saturation" => PreferenceCommand::SetSaturation(value.parse()?),
            "text-color" => PreferenceCommand::SetColor {
                target: ColorTarget::Text,
                color: parse_hex_color(value)?,
            },
            "title-color" => PreferenceCommand::SetColor {
                target: ColorTarget::Title,
                color: parse_hex_color(value)?,
            },
            "background-color" => PreferenceCommand::SetColor {
                target: ColorTarget::Background,
                color: parse_hex_color(value)?,
            },
            "orientation" => PreferenceCommand::ToggleOrientation(value.parse()?),
            "useful-link" => PreferenceCommand::SetUsefulLink(UsefulLink::parse_selection(value)?),
            "reset-all" => PreferenceCommand::ResetAll,
            other => return Err(PreferenceError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}
