//! Canvas validation: viewport bounds, chrome, and gutter.

use crate::schema::CasementConfig;

use super::helpers::check_range;

pub(crate) fn validate_canvas(errors: &mut Vec<String>, config: &CasementConfig) {
    let canvas = &config.canvas;
    check_range(errors, "canvas.viewport_width", canvas.viewport_width, 320, 7680);
    check_range(errors, "canvas.viewport_height", canvas.viewport_height, 240, 4320);
    check_range(errors, "canvas.sidebar_width", canvas.sidebar_width, 0, 600);
    check_range(errors, "canvas.header_height", canvas.header_height, 0, 200);
    check_range(errors, "canvas.outer_padding", canvas.outer_padding, 0, 40);
    check_range(errors, "canvas.gutter", canvas.gutter, 0, 40);

    if canvas.sidebar_width >= canvas.viewport_width {
        errors.push(format!(
            "canvas.sidebar_width = {} leaves no room in a {}px viewport",
            canvas.sidebar_width, canvas.viewport_width
        ));
    }
    if canvas.header_height >= canvas.viewport_height {
        errors.push(format!(
            "canvas.header_height = {} leaves no room in a {}px viewport",
            canvas.header_height, canvas.viewport_height
        ));
    }
}
