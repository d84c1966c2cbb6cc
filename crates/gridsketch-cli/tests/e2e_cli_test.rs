use std::fs;

use tempfile::tempdir;

use gridsketch::GridsketchError;
use gridsketch_cli::{Args, Command, execute};

fn args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

fn render_command(input: String, output: Option<String>) -> Command {
    Command::Render {
        input,
        output,
        width: None,
        height: None,
    }
}

fn run_to_string(args: &Args) -> Result<String, GridsketchError> {
    let mut out = Vec::new();
    execute(args, &mut out)?;
    Ok(String::from_utf8(out).expect("Output is UTF-8"))
}

#[test]
fn e2e_render_scene_to_stdout() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("scene.json");
    fs::write(
        &input,
        r#"[
            {"type": "rectangle", "x": 0, "y": 0, "width": 5, "height": 3},
            {"type": "line", "points": [{"x": 5, "y": 1}, {"x": 8, "y": 1}], "endAnchor": "A1"}
        ]"#,
    )
    .expect("Failed to write scene");

    let output = run_to_string(&args(render_command(
        input.to_string_lossy().to_string(),
        None,
    )))
    .expect("Render failed");
    assert_eq!(output, "┌───┐\n│   │───▶\n└───┘\n");
}

#[test]
fn e2e_render_scene_to_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("scene.json");
    let output = temp_dir.path().join("diagram.txt");
    fs::write(
        &input,
        r#"{"shapes": [{"type": "text", "content": "Hi", "width": 6, "height": 3,
                        "horizontalAlign": "left"}]}"#,
    )
    .expect("Failed to write scene");

    let printed = run_to_string(&args(render_command(
        input.to_string_lossy().to_string(),
        Some(output.to_string_lossy().to_string()),
    )))
    .expect("Render failed");

    assert!(printed.is_empty());
    let written = fs::read_to_string(&output).expect("Output file exists");
    assert_eq!(written, "┌────┐\n│Hi  │\n└────┘\n");
}

#[test]
fn e2e_viewport_flags_override_scene() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("scene.json");
    fs::write(
        &input,
        r#"{"shapes": [{"type": "rectangle", "width": 3, "height": 2}], "width": 10, "height": 10}"#,
    )
    .expect("Failed to write scene");

    let command = Command::Render {
        input: input.to_string_lossy().to_string(),
        output: None,
        width: Some(2),
        height: Some(2),
    };
    let output = run_to_string(&args(command)).expect("Render failed");
    assert_eq!(output, "┌─\n└─\n");
}

#[test]
fn e2e_config_sets_default_stroke() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("scene.json");
    let config = temp_dir.path().join("config.toml");
    fs::write(&input, r#"[{"type": "rectangle", "width": 4, "height": 2}]"#)
        .expect("Failed to write scene");
    fs::write(&config, "[style]\nstroke = \"S2\"\n").expect("Failed to write config");

    let mut args = args(render_command(input.to_string_lossy().to_string(), None));
    args.config = Some(config.to_string_lossy().to_string());
    let output = run_to_string(&args).expect("Render failed");
    assert_eq!(output, "┏━━┓\n┗━━┛\n");
}

#[test]
fn e2e_invalid_scene_reports_json_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.json");
    fs::write(&input, r#"[{"type": "rectangle", "width": }]"#).expect("Failed to write scene");

    let result = run_to_string(&args(render_command(
        input.to_string_lossy().to_string(),
        None,
    )));
    assert!(matches!(result, Err(GridsketchError::Json { .. })));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.json");

    let result = run_to_string(&args(render_command(
        input.to_string_lossy().to_string(),
        None,
    )));
    assert!(matches!(result, Err(GridsketchError::Io(_))));
}

#[test]
fn e2e_styles_listing() {
    let text = run_to_string(&args(Command::Styles { json: false })).expect("Styles failed");
    assert!(text.starts_with("Strokes:\n"));
    assert!(text.contains("Anchors:\n"));

    let json = run_to_string(&args(Command::Styles { json: true })).expect("Styles failed");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Valid JSON");
    assert_eq!(value["strokeStyles"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["strokeStyles"][3]["roundedOf"], "S1");
    assert_eq!(value["fillStyles"][1]["id"], "F2");
}

#[test]
fn e2e_measure_text() {
    let command = Command::Measure {
        text: "the quick brown fox".to_string(),
        max_width: 10,
        json: false,
    };
    let output = run_to_string(&args(command)).expect("Measure failed");
    assert_eq!(output, "9x2\nthe quick\nbrown fox\n");

    let command = Command::Measure {
        text: "abcdefg".to_string(),
        max_width: 3,
        json: true,
    };
    let output = run_to_string(&args(command)).expect("Measure failed");
    let value: serde_json::Value = serde_json::from_str(&output).expect("Valid JSON");
    assert_eq!(
        value,
        serde_json::json!({"lines": ["abc", "def", "g"], "width": 3, "height": 3})
    );
}
