//! Source tables of the built-in grammars.
//!
//! Each grammar recognizes the dconf key paths of one program: one keyword
//! terminal per key, matching `<prefix>/<key-with-dashes>`, under a single
//! `source_file` root.

use dconf_artifact::{GrammarTables, SymbolInfo};

const DWL_KEYS: &[&str] = &[
    "accel_profile",
    "accel_speed",
    "border_color",
    "border_px",
    "button_map",
    "bypass_surface_visibility",
    "click_method",
    "disable_trackpad_while_typing",
    "drag_lock",
    "focus_color",
    "fullscreen_bg",
    "left_handed",
    "log_level",
    "middle_button_emulation",
    "modkey",
    "natural_scrolling",
    "repeat_delay",
    "repeat_rate",
    "scroll_method",
    "send_events_mode",
    "sloppy_focus",
    "tag_count",
    "tap_to_click",
    "tap_to_drag",
    "xkb_options",
    "root_color",
];

const SOMEBAR_KEYS: &[&str] = &[
    "font",
    "font_fallback",
    "time_block",
    "date_fmt",
    "browser_path",
    "browser",
    "time_fmt",
    "update_time_ntp",
    "brightness_block",
    "battery_block",
    "connman_block",
    "media_block",
    "wireplumber_block",
    "wireplumber_max_volume",
    "color_active",
    "color_inactive",
    "padding_x",
    "padding_y",
    "top_bar",
    "time_servers",
    "bar_show_time",
    "divider",
];

/// Keys of the dwl compositor settings schema.
pub fn dconfdwl() -> GrammarTables {
    key_path_grammar("dconfdwl", "/dotfiles/dwl", DWL_KEYS)
}

/// Keys of the somebar status bar settings schema.
pub fn dconfsomebar() -> GrammarTables {
    key_path_grammar("dconfsomebar", "/dotfiles/somebar", SOMEBAR_KEYS)
}

pub fn all() -> Vec<GrammarTables> {
    vec![dconfdwl(), dconfsomebar()]
}

fn key_path_grammar(name: &str, prefix: &str, keys: &[&str]) -> GrammarTables {
    let mut symbols = Vec::with_capacity(keys.len() + 2);
    symbols.push(SymbolInfo::end());
    symbols.extend(
        keys.iter()
            .map(|key| SymbolInfo::keyword(*key, format!("{prefix}/{}", key.replace('_', "-")))),
    );
    symbols.push(SymbolInfo::rule("source_file"));

    let token_count = (keys.len() + 1) as u16;

    GrammarTables {
        name: name.to_owned(),
        language_version: 14,
        symbols,
        token_count,
        external_token_count: 0,
        state_count: 4,
        large_state_count: 2,
        production_id_count: 1,
        max_alias_sequence_length: 1,
        fields: Vec::new(),
        root: token_count,
    }
}
