//! Supported BizHawk N64 cores and their sync-settings payloads.
//!
//! All three cores share the input-log key layout and the port-activation
//! contract, but each produces a structurally different `SyncSettings.json`
//! payload. The core is chosen once at session construction and never
//! re-dispatched per frame.

use std::fmt;
use std::str::FromStr;

use bk2prs_input::NUM_PORTS;
use serde_json::{json, Map, Value};

use crate::error::UnsupportedCore;
use crate::input_log::{InputLog, DEFAULT_PORT_SWAP};
use crate::keymap::{PORT_KEYS, POWER_KEYS};
use crate::layout::ControllerLayout;

mod ares64;
mod mupen64plus;

/// The closed set of supported emulation cores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Core {
    /// Ares64, accuracy profile.
    Ares64Accuracy,
    /// Ares64, performance profile.
    Ares64Performance,
    /// The legacy Mupen64Plus core.
    Mupen64Plus,
}

impl Core {
    pub const ALL: [Core; 3] = [Core::Ares64Accuracy, Core::Ares64Performance, Core::Mupen64Plus];

    /// The core name written to `Header.txt`.
    pub fn display_name(self) -> &'static str {
        match self {
            Core::Ares64Accuracy => "Ares64 (Accuracy)",
            Core::Ares64Performance => "Ares64 (Performance)",
            Core::Mupen64Plus => "Mupen64Plus",
        }
    }

    /// The partially-qualified sync-settings type of this core.
    fn type_name(self) -> &'static str {
        match self {
            Core::Ares64Accuracy => "Ares64.Accuracy.Ares64+Ares64SyncSettings",
            Core::Ares64Performance => "Ares64.Performance.Ares64+Ares64SyncSettings",
            Core::Mupen64Plus => "N64.N64sync_settings",
        }
    }

    /// The fully-qualified type tag embedded in the settings payload.
    pub fn type_tag(self) -> String {
        format!(
            "BizHawk.Emulation.Cores.Consoles.Nintendo.{}, BizHawk.Emulation.Cores",
            self.type_name()
        )
    }

    /// The static, core-specific settings merged after the `"o"` object.
    fn base_settings(self) -> Map<String, Value> {
        match self {
            Core::Ares64Accuracy | Core::Ares64Performance => ares64::sync_settings(),
            Core::Mupen64Plus => mupen64plus::sync_settings(),
        }
    }

    /// Writes this core's port-activation shape into `settings` and returns
    /// the result. Ares64 cores store an integer slot per port inside `"o"`;
    /// Mupen64Plus stores a list of per-port objects. The input map is
    /// consumed, so no shared state is mutated across calls.
    fn activate_ports(self, mut settings: Map<String, Value>, ports: &[bool; NUM_PORTS]) -> Map<String, Value> {
        let outer = settings
            .get_mut("o")
            .and_then(Value::as_object_mut)
            .expect("settings payload always carries the \"o\" object");
        match self {
            Core::Ares64Accuracy | Core::Ares64Performance => {
                for (port, &plugged) in ports.iter().enumerate() {
                    let slot = if plugged { 2 } else { 0 };
                    outer.insert(format!("P{}Controller", port + 1), json!(slot));
                }
            }
            Core::Mupen64Plus => {
                let controllers: Vec<Value> = ports
                    .iter()
                    .map(|&plugged| json!({"PakType": 1, "IsConnected": plugged}))
                    .collect();
                outer.insert("Controllers".to_owned(), Value::Array(controllers));
            }
        }
        settings
    }

    /// The default input log for this core: canonical power and per-port
    /// layouts with the standard attribute bindings, plugged according to
    /// `ports`, using the alternating axis-swap policy.
    ///
    /// The key set and order are identical across all supported cores; they
    /// belong to the `.bk2` format rather than to any one backend.
    pub fn default_input_log(self, ports: &[bool; NUM_PORTS]) -> InputLog {
        let port_layouts = ports.map(|plugged| plugged.then(|| ControllerLayout::from_defs(PORT_KEYS)));
        InputLog::new(
            ControllerLayout::from_defs(POWER_KEYS),
            port_layouts,
            DEFAULT_PORT_SWAP,
        )
    }
}

impl fmt::Display for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Core {
    type Err = UnsupportedCore;

    /// Parses a core identifier. Anything outside the closed set fails here,
    /// before any configuration is built.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accuracy" => Ok(Core::Ares64Accuracy),
            "performance" => Ok(Core::Ares64Performance),
            "legacy" | "mupen64plus" => Ok(Core::Mupen64Plus),
            other => Err(UnsupportedCore(other.to_owned())),
        }
    }
}

/// The `SyncSettings.json` member: a core plus its port-activation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSettings {
    core: Core,
    ports: [bool; NUM_PORTS],
}

impl SyncSettings {
    pub fn new(core: Core, ports: [bool; NUM_PORTS]) -> Self {
        Self { core, ports }
    }

    /// Builds the full settings payload. Each call assembles a fresh value:
    /// the `"o"` object with the type tag, the core's static base settings,
    /// then the port activation written in the core's own shape.
    pub fn build(&self) -> Value {
        let mut settings = Map::new();
        settings.insert("o".to_owned(), json!({"$type": self.core.type_tag()}));
        settings.extend(self.core.base_settings());
        Value::Object(self.core.activate_ports(settings, &self.ports))
    }

    /// Compact JSON with no embedded whitespace. Key order follows insertion
    /// order and is part of the byte-exact output contract.
    pub fn to_json(&self) -> String {
        self.build().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_ids_parse_and_unknown_ids_fail_fast() {
        assert_eq!("accuracy".parse::<Core>().unwrap(), Core::Ares64Accuracy);
        assert_eq!("performance".parse::<Core>().unwrap(), Core::Ares64Performance);
        assert_eq!("legacy".parse::<Core>().unwrap(), Core::Mupen64Plus);
        assert_eq!("mupen64plus".parse::<Core>().unwrap(), Core::Mupen64Plus);

        let err = "snes9x".parse::<Core>().unwrap_err();
        assert_eq!(err.0, "snes9x");
    }

    #[test]
    fn ares_activation_uses_integer_slots() {
        let settings = SyncSettings::new(Core::Ares64Performance, [true, false, false, false]);

        assert_eq!(
            settings.to_json(),
            "{\"o\":{\"$type\":\"BizHawk.Emulation.Cores.Consoles.Nintendo.\
             Ares64.Performance.Ares64+Ares64SyncSettings, BizHawk.Emulation.Cores\",\
             \"P1Controller\":2,\"P2Controller\":0,\"P3Controller\":0,\"P4Controller\":0},\
             \"RestrictAnalogRange\":false}"
        );
    }

    #[test]
    fn mupen_activation_uses_per_port_objects() {
        let settings = SyncSettings::new(Core::Mupen64Plus, [true, false, true, false]);
        let value = settings.build();

        let controllers = value["o"]["Controllers"].as_array().unwrap();
        assert_eq!(controllers.len(), 4);
        assert_eq!(controllers[0], json!({"PakType": 1, "IsConnected": true}));
        assert_eq!(controllers[1], json!({"PakType": 1, "IsConnected": false}));
        assert_eq!(controllers[2]["IsConnected"], json!(true));
    }

    #[test]
    fn mupen_payload_preserves_section_order() {
        let settings = SyncSettings::new(Core::Mupen64Plus, [true; 4]);
        let value = settings.build();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            [
                "o",
                "Core",
                "Rsp",
                "VideoPlugin",
                "DisableExpansionSlot",
                "RicePlugin",
                "GlidePlugin",
                "Glide64mk2Plugin",
                "GLideN64Plugin",
            ]
        );
        // The type tag always leads the "o" object.
        let outer_keys: Vec<&String> = value["o"].as_object().unwrap().keys().collect();
        assert_eq!(outer_keys[0], "$type");
    }

    #[test]
    fn build_is_pure_across_calls() {
        let settings = SyncSettings::new(Core::Ares64Accuracy, [true, true, false, false]);
        assert_eq!(settings.build(), settings.build());
        assert_eq!(settings.to_json(), settings.to_json());
    }

    #[test]
    fn accuracy_and_performance_share_shape_but_not_type_tag() {
        let acc = SyncSettings::new(Core::Ares64Accuracy, [true; 4]).to_json();
        let perf = SyncSettings::new(Core::Ares64Performance, [true; 4]).to_json();

        assert!(acc.contains("Ares64.Accuracy.Ares64+Ares64SyncSettings"));
        assert!(perf.contains("Ares64.Performance.Ares64+Ares64SyncSettings"));
        assert_eq!(
            acc.replace("Ares64.Accuracy", ""),
            perf.replace("Ares64.Performance", "")
        );
    }

    #[test]
    fn default_input_log_plugs_requested_ports() {
        let log = Core::Ares64Accuracy.default_input_log(&[true, false, true, false]);
        assert!(log.ports[0].is_some());
        assert!(log.ports[1].is_none());
        assert!(log.ports[2].is_some());
        assert_eq!(log.port_swap, DEFAULT_PORT_SWAP);
    }
}
