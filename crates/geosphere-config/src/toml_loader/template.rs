//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Geosphere Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[sphere]
radius = 1.0
subdivisions = 2        # 0-8; vertices = 10 * 4^n + 2

[weld]
# precision = 1e-5      # weld grid as a fraction of the radius

[normals]
# mode = "smooth"       # smooth, faceted

[collision]
# literal: far side of the sphere stretches the most, impact point collapses
# attenuated: dent is deepest at the impact point and fades to the antipode
# profile = "literal"

[output]
# format = "summary"    # summary, json
# interleaved = false   # json only: [pos.xyz, normal.xyz] per vertex

[logging]
# level = "INFO"        # DEBUG, INFO, WARNING, ERROR
"##
}
