//! Projector calibration - geometry and typography
//!
//! Four independently-merged sections. Every field has a default; merging a
//! partial or legacy document always yields a complete config. The on-disk
//! key casing (camelCase) matches the documents older installs produced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Window (the p5 canvas) placement and skew
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowCalibration {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub skew_x: i32,
    pub skew_y: i32,
    pub perspective: i32,
}

impl Default for WindowCalibration {
    fn default() -> Self {
        WindowCalibration {
            x: 0,
            y: 0,
            w: 800,
            h: 500,
            skew_x: 0,
            skew_y: 0,
            perspective: 800,
        }
    }
}

/// Seat-back screen placement and rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenCalibration {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub skew_x: i32,
    pub skew_y: i32,
    /// Fractional degrees; the only non-integer slider
    pub rotation: f32,
    pub rotate_x: i32,
    pub rotate_y: i32,
}

impl Default for ScreenCalibration {
    fn default() -> Self {
        ScreenCalibration {
            x: 0,
            y: 0,
            w: 180,
            h: 140,
            skew_x: 0,
            skew_y: 0,
            rotation: 0.0,
            rotate_x: 0,
            rotate_y: 0,
        }
    }
}

/// Cabin image framing (percentages)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CabinCalibration {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub obj_x: i32,
    pub obj_y: i32,
}

impl Default for CabinCalibration {
    fn default() -> Self {
        CabinCalibration {
            x: 0,
            y: 0,
            w: 100,
            h: 100,
            obj_x: 50,
            obj_y: 50,
        }
    }
}

/// Overlay text sizes in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSizes {
    pub logo: i32,
    pub status: i32,
    pub labels: i32,
    pub values: i32,
    pub icons: i32,
}

impl Default for TextSizes {
    fn default() -> Self {
        TextSizes {
            logo: 10,
            status: 8,
            labels: 9,
            values: 9,
            icons: 12,
        }
    }
}

/// Complete calibration: every section, every field populated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub window: WindowCalibration,
    pub screen: ScreenCalibration,
    pub cabin: CabinCalibration,
    pub text: TextSizes,
}

impl Calibration {
    /// Shallow per-section merge of an untrusted document over defaults
    ///
    /// Missing sections, missing fields and wrongly-typed values fall back
    /// field-by-field. Legacy documents stored cabin width/height as flat
    /// `cabinWidth`/`cabinHeight` keys; those are remapped when the cabin
    /// section itself is absent.
    pub fn merge(doc: &Value) -> Self {
        let mut cal = Calibration::default();

        if let Some(section) = doc.get("window") {
            read_i32(section, "x", &mut cal.window.x);
            read_i32(section, "y", &mut cal.window.y);
            read_i32(section, "w", &mut cal.window.w);
            read_i32(section, "h", &mut cal.window.h);
            read_i32(section, "skewX", &mut cal.window.skew_x);
            read_i32(section, "skewY", &mut cal.window.skew_y);
            read_i32(section, "perspective", &mut cal.window.perspective);
        }

        if let Some(section) = doc.get("screen") {
            read_i32(section, "x", &mut cal.screen.x);
            read_i32(section, "y", &mut cal.screen.y);
            read_i32(section, "w", &mut cal.screen.w);
            read_i32(section, "h", &mut cal.screen.h);
            read_i32(section, "skewX", &mut cal.screen.skew_x);
            read_i32(section, "skewY", &mut cal.screen.skew_y);
            read_f32(section, "rotation", &mut cal.screen.rotation);
            read_i32(section, "rotateX", &mut cal.screen.rotate_x);
            read_i32(section, "rotateY", &mut cal.screen.rotate_y);
        }

        match doc.get("cabin") {
            Some(section) => {
                read_i32(section, "x", &mut cal.cabin.x);
                read_i32(section, "y", &mut cal.cabin.y);
                read_i32(section, "w", &mut cal.cabin.w);
                read_i32(section, "h", &mut cal.cabin.h);
                read_i32(section, "objX", &mut cal.cabin.obj_x);
                read_i32(section, "objY", &mut cal.cabin.obj_y);
            }
            None => {
                read_i32(doc, "cabinWidth", &mut cal.cabin.w);
                read_i32(doc, "cabinHeight", &mut cal.cabin.h);
            }
        }

        if let Some(section) = doc.get("text") {
            read_i32(section, "logo", &mut cal.text.logo);
            read_i32(section, "status", &mut cal.text.status);
            read_i32(section, "labels", &mut cal.text.labels);
            read_i32(section, "values", &mut cal.text.values);
            read_i32(section, "icons", &mut cal.text.icons);
        }

        cal
    }
}

fn read_i32(section: &Value, key: &str, out: &mut i32) {
    if let Some(n) = section.get(key).and_then(Value::as_i64) {
        *out = n.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    }
}

fn read_f32(section: &Value, key: &str, out: &mut f32) {
    if let Some(n) = section.get(key).and_then(Value::as_f64) {
        *out = n as f32;
    }
}
