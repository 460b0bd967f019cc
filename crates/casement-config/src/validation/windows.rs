//! Window default and chrome validation.

use crate::schema::CasementConfig;

use super::helpers::check_range;

pub(crate) fn validate_windows(errors: &mut Vec<String>, config: &CasementConfig) {
    let windows = &config.windows;
    check_range(errors, "windows.max_visible", windows.max_visible, 1, 4);
    check_range(
        errors,
        "windows.default_min_width",
        windows.default_min_width,
        50,
        2000,
    );
    check_range(
        errors,
        "windows.default_min_height",
        windows.default_min_height,
        50,
        2000,
    );
    check_range(errors, "windows.cascade_offset", windows.cascade_offset, 0, 200);
    check_range(
        errors,
        "windows.cascade_width_ratio",
        windows.cascade_width_ratio,
        0.2,
        1.0,
    );
    check_range(
        errors,
        "windows.cascade_height_ratio",
        windows.cascade_height_ratio,
        0.2,
        1.0,
    );
}

pub(crate) fn validate_chrome(errors: &mut Vec<String>, config: &CasementConfig) {
    let chrome = &config.chrome;
    check_range(errors, "chrome.title_bar_height", chrome.title_bar_height, 20, 80);
    check_range(errors, "chrome.resize_handle", chrome.resize_handle, 2, 20);
    check_range(
        errors,
        "chrome.control_button_width",
        chrome.control_button_width,
        16,
        80,
    );
}
