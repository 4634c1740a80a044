//! Camera tuning options with TOML preset support.
//!
//! Every tunable (mode, rotation, zoom, obstruction, follow smoothing) lives
//! here. Options serialize to/from TOML for presets stored in `presets/`,
//! and expose a JSON Schema plus by-name field access for property
//! inspectors.

mod follow;
mod mode;
mod obstruction;
mod rotation;
mod zoom;

use std::path::Path;

pub use follow::FollowOptions;
pub use mode::ModeOptions;
pub use obstruction::ObstructionOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
pub use zoom::{ZoomLaw, ZoomOptions};

use crate::camera::mode::CameraMode;
use crate::error::{ConfigError, VantageError};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera mode selection.
    pub mode: ModeOptions,
    /// Orbit rotation parameters.
    pub rotation: RotationOptions,
    /// Zoom and distance parameters.
    pub zoom: ZoomOptions,
    /// Line-of-sight correction parameters.
    pub obstruction: ObstructionOptions,
    /// Position smoothing and target coupling.
    pub follow: FollowOptions,
}

impl Options {
    /// Generate JSON Schema describing the inspector-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Resolved camera mode.
    #[must_use]
    pub fn camera_mode(&self) -> CameraMode {
        self.mode.mode()
    }

    /// Reject values that can never produce a sane camera.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.rotation;
        let z = &self.zoom;
        let checked = [
            ("rotation.rotate_speed", r.rotate_speed, true),
            ("rotation.vertical_min", r.vertical_min, false),
            ("rotation.vertical_max", r.vertical_max, false),
            ("rotation.return_damping", r.return_damping, true),
            ("zoom.zoom_speed", z.zoom_speed, true),
            ("zoom.zoom_rate", z.zoom_rate, true),
            ("zoom.zoom_dampening", z.zoom_dampening, true),
            ("zoom.speed_factor", z.speed_factor, true),
            ("zoom.min_distance", z.min_distance, true),
            ("zoom.max_distance", z.max_distance, true),
            ("obstruction.wall_offset", self.obstruction.wall_offset, true),
            ("follow.position_lerp", self.follow.position_lerp, false),
        ];
        for (field, value, non_negative) in checked {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if non_negative && value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        let offset_finite = self
            .mode
            .offset
            .is_none_or(|o| o.iter().all(|v| v.is_finite()));
        if !offset_finite {
            return Err(ConfigError::NotFinite {
                field: "mode.offset",
            });
        }
        if z.min_distance > z.max_distance {
            return Err(ConfigError::DistanceRange {
                min: z.min_distance,
                max: z.max_distance,
            });
        }
        if r.vertical_min > r.vertical_max {
            return Err(ConfigError::VerticalRange {
                min: r.vertical_min,
                max: r.vertical_max,
            });
        }
        let lerp = self.follow.position_lerp;
        if lerp <= 0.0 || lerp > 1.0 {
            return Err(ConfigError::PositionLerp(lerp));
        }
        Ok(())
    }

    /// Read one field by section and name, as an inspector would.
    #[must_use]
    pub fn field(&self, section: &str, field: &str) -> Option<Value> {
        let root = serde_json::to_value(self).ok()?;
        root.get(section)?.get(field).cloned()
    }

    /// Write one field by section and name.
    ///
    /// The result is validated before it replaces `self`; on any error the
    /// current options stay untouched.
    pub fn set_field(
        &mut self,
        section: &str,
        field: &str,
        value: Value,
    ) -> Result<(), VantageError> {
        let mut root = serde_json::to_value(&*self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        let slot = root
            .get_mut(section)
            .and_then(|s| s.get_mut(field))
            .ok_or_else(|| VantageError::UnknownField {
                section: section.to_owned(),
                field: field.to_owned(),
            })?;
        *slot = value;
        let updated: Self = serde_json::from_value(root)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content =
            std::fs::read_to_string(path).map_err(VantageError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::mode::{ModeKind, ThirdPersonMode};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[mode]
kind = "free_look"

[zoom]
law = "proportional"
max_distance = 12.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera_mode(), CameraMode::FreeLook);
        assert_eq!(opts.zoom.law, ZoomLaw::Proportional);
        assert_eq!(opts.zoom.max_distance, 12.0);
        // Everything else should be default
        assert_eq!(opts.zoom.min_distance, 2.0);
        assert_eq!(opts.mode.third_person, ThirdPersonMode::Interactive);
        assert_eq!(opts.follow.position_lerp, 0.1);
    }

    #[test]
    fn defaults_validate() {
        assert_eq!(Options::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_distance_range_rejected() {
        let mut opts = Options::default();
        opts.zoom.min_distance = 10.0;
        opts.zoom.max_distance = 4.0;
        assert_eq!(
            opts.validate(),
            Err(ConfigError::DistanceRange {
                min: 10.0,
                max: 4.0
            })
        );
    }

    #[test]
    fn inverted_vertical_range_rejected() {
        let mut opts = Options::default();
        opts.rotation.vertical_min = 40.0;
        opts.rotation.vertical_max = 10.0;
        assert!(matches!(
            opts.validate(),
            Err(ConfigError::VerticalRange { .. })
        ));
    }

    #[test]
    fn bad_scalars_rejected() {
        let mut opts = Options::default();
        opts.obstruction.wall_offset = -0.5;
        assert!(matches!(
            opts.validate(),
            Err(ConfigError::Negative {
                field: "obstruction.wall_offset",
                ..
            })
        ));

        let mut opts = Options::default();
        opts.rotation.rotate_speed = f32::NAN;
        assert!(matches!(
            opts.validate(),
            Err(ConfigError::NotFinite { .. })
        ));

        let mut opts = Options::default();
        opts.follow.position_lerp = 0.0;
        assert_eq!(opts.validate(), Err(ConfigError::PositionLerp(0.0)));
    }

    #[test]
    fn offset_override_parses_and_validates() {
        let toml_str = r#"
[mode]
kind = "third_person"
offset = [0.6, 1.7, -3.0]
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.mode.offset, Some([0.6, 1.7, -3.0]));
        assert_eq!(opts.validate(), Ok(()));
        let saved = toml::to_string_pretty(&opts).unwrap();
        assert_eq!(toml::from_str::<Options>(&saved).unwrap(), opts);

        let mut bad = opts;
        bad.mode.offset = Some([0.0, f32::INFINITY, -3.0]);
        assert_eq!(
            bad.validate(),
            Err(ConfigError::NotFinite {
                field: "mode.offset"
            })
        );
    }

    #[test]
    fn set_field_updates_and_reads_back() {
        let mut opts = Options::default();
        opts.set_field("zoom", "max_distance", Value::from(15.0))
            .unwrap();
        assert_eq!(opts.zoom.max_distance, 15.0);
        assert_eq!(
            opts.field("zoom", "max_distance").and_then(|v| v.as_f64()),
            Some(15.0)
        );

        opts.set_field("mode", "kind", Value::from("first_person"))
            .unwrap();
        assert_eq!(opts.mode.kind, ModeKind::FirstPerson);
    }

    #[test]
    fn set_field_rejects_invalid_and_keeps_old() {
        let mut opts = Options::default();
        let before = opts.clone();

        let err = opts
            .set_field("zoom", "min_distance", Value::from(50.0))
            .unwrap_err();
        assert!(matches!(err, VantageError::Config(_)));

        let err = opts
            .set_field("zoom", "warp_factor", Value::from(9.0))
            .unwrap_err();
        assert!(matches!(err, VantageError::UnknownField { .. }));

        let err = opts
            .set_field("mode", "kind", Value::from("orbital"))
            .unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));

        assert_eq!(opts, before);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        for section in ["mode", "rotation", "zoom", "obstruction", "follow"] {
            assert!(props.contains_key(section), "missing {section}");
        }

        // Inspector-hidden fields should be absent
        let obstruction = &props["obstruction"]["properties"];
        assert!(obstruction.get("wall_offset").is_some());
        assert!(obstruction.get("collision_mask").is_none());
    }

    #[test]
    fn shipped_presets_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("presets");
        let names = Options::list_presets(&dir);
        assert_eq!(names, ["free_look", "interactive", "over_shoulder"]);
        for name in names {
            let path = dir.join(format!("{name}.toml"));
            assert!(Options::load(&path).is_ok(), "{name}");
        }
        let free = Options::load(&dir.join("free_look.toml")).unwrap();
        assert_eq!(free.camera_mode(), CameraMode::FreeLook);
        let shoulder = Options::load(&dir.join("over_shoulder.toml")).unwrap();
        assert_eq!(shoulder.mode.offset, Some([0.6, 1.8, -3.5]));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("vantage-options-test");
        let path = dir.join("saved.toml");
        let mut opts = Options::default();
        opts.zoom.law = ZoomLaw::Proportional;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
