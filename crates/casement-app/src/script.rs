//! JSON-lines command scripts.
//!
//! One step per line: a registry command such as
//! `{"op": "open", "title": "Notes", "content_key": "notes"}` or a pointer
//! step such as `{"op": "pointer_down", "id": 1, "x": 40, "y": 12}`.
//! Blank lines and lines starting with `#` are skipped.

use casement_common::{CasementError, WindowId};
use casement_tiling::WindowCommand;
use serde::{Deserialize, Serialize};

/// Pointer input routed through the window views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PointerStep {
    /// Press on a window's chrome, in container coordinates.
    PointerDown { id: WindowId, x: f64, y: f64 },
    /// Page-level move, delivered to windows holding a pointer capture.
    PointerMove { x: f64, y: f64 },
    /// Page-level release.
    PointerUp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Step {
    Window(WindowCommand),
    Pointer(PointerStep),
}

/// Parse a single script line.
pub fn parse_step(line: &str) -> Result<Step, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(line)?;
    let is_pointer = value
        .get("op")
        .and_then(serde_json::Value::as_str)
        .is_some_and(|op| op.starts_with("pointer_"));
    if is_pointer {
        serde_json::from_value(value).map(Step::Pointer)
    } else {
        serde_json::from_value(value).map(Step::Window)
    }
}

/// Parse a whole script, keeping 1-based line numbers for reporting.
pub fn parse_script(source: &str) -> Result<Vec<(usize, Step)>, CasementError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step = parse_step(line).map_err(|e| CasementError::Script {
            line: index + 1,
            message: e.to_string(),
        })?;
        steps.push((index + 1, step));
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_tiling::ArrangeMode;

    #[test]
    fn parses_window_commands() {
        let step = parse_step(r#"{"op": "open", "title": "Notes", "content_key": "notes"}"#).unwrap();
        assert_eq!(
            step,
            Step::Window(WindowCommand::Open {
                title: "Notes".into(),
                content_key: "notes".into(),
                props: None,
                min_size: None,
            })
        );

        let step = parse_step(r#"{"op": "arrange", "mode": "cascade"}"#).unwrap();
        assert_eq!(
            step,
            Step::Window(WindowCommand::Arrange {
                mode: ArrangeMode::Cascade
            })
        );
    }

    #[test]
    fn parses_pointer_steps() {
        let step = parse_step(r#"{"op": "pointer_down", "id": 2, "x": 10, "y": 5.5}"#).unwrap();
        assert_eq!(
            step,
            Step::Pointer(PointerStep::PointerDown {
                id: WindowId(2),
                x: 10.0,
                y: 5.5
            })
        );
        assert_eq!(
            parse_step(r#"{"op": "pointer_up"}"#).unwrap(),
            Step::Pointer(PointerStep::PointerUp)
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let source = "\n# set up\n{\"op\": \"close_all\"}\n   \n{\"op\": \"pointer_up\"}\n";
        let steps = parse_script(source).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].0, 3);
        assert_eq!(steps[1].0, 5);
    }

    #[test]
    fn reports_bad_line_number() {
        let source = "{\"op\": \"close_all\"}\n{\"op\": \"teleport\"}\n";
        match parse_script(source) {
            Err(CasementError::Script { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("teleport"), "{message}");
            }
            other => panic!("expected script error, got {other:?}"),
        }
    }

    #[test]
    fn reports_invalid_json() {
        let err = parse_script("{not json").unwrap_err();
        assert!(err.to_string().starts_with("script error at line 1"));
    }
}
