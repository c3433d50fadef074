/// UI rendering: status bar and help overlay
use crate::config::{Action, HelpOverlayStyle, KeybindingsConfig, StatusBarStyle, StatusPosition};
use crate::input::InputState;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;
/// Gap between the color swatch and the text
const STATUS_DOT_GAP: f64 = 6.0;

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

/// Render status bar showing the current tool, color and stroke mode
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let selection = input_state.describe_state();
    let status_text = selection.to_string();

    let _ = ctx.save();
    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    // Measure text
    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            let _ = ctx.restore();
            return;
        }
    };
    let swatch_width = style.dot_radius * 2.0 + STATUS_DOT_GAP;
    let content_width = swatch_width + extents.width();
    let text_height = extents.height().max(style.dot_radius * 2.0);

    let padding = style.padding;
    let (x, y) = match position {
        StatusPosition::TopLeft => (padding, padding + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - content_width - padding,
            padding + text_height,
        ),
        StatusPosition::BottomLeft => (padding, screen_height as f64 - padding),
        StatusPosition::BottomRight => (
            screen_width as f64 - content_width - padding,
            screen_height as f64 - padding,
        ),
    };

    // Background
    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        content_width + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    // Color swatch with a thin outline so white stays visible
    let dot_x = x + style.dot_radius;
    let dot_y = y - text_height / 2.0;
    selection.color.apply_source(ctx);
    ctx.arc(
        dot_x,
        dot_y,
        style.dot_radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.fill_preserve();
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();

    // Text
    ctx.move_to(x + swatch_width, y);
    let _ = ctx.show_text(&status_text);
    let _ = ctx.restore();
}

/// Builds the help overlay lines from the configured keybindings.
pub fn help_lines(keybindings: &KeybindingsConfig) -> Vec<String> {
    let key = |action: Action| keybindings.label_for(action).unwrap_or("-").to_string();

    let mut lines = vec![
        "PAINTBRUSH CONTROLS".to_string(),
        String::new(),
        "  TOOLS".to_string(),
    ];
    for (action, label) in [
        (Action::SelectLine, "Line"),
        (Action::SelectRectangle, "Rectangle"),
        (Action::SelectOval, "Oval"),
        (Action::SelectPencil, "Pencil"),
        (Action::SelectEraser, "Eraser"),
        (Action::SetSolid, "Solid outlines"),
        (Action::SetDotted, "Dotted outlines"),
    ] {
        lines.push(format!("    {:<14}{}", key(action), label));
    }

    lines.push(String::new());
    lines.push("  COLORS".to_string());
    let colors = [
        (Action::SetColorBlack, "Black"),
        (Action::SetColorRed, "Red"),
        (Action::SetColorBlue, "Blue"),
        (Action::SetColorGreen, "Green"),
        (Action::SetColorYellow, "Yellow"),
        (Action::SetColorOrange, "Orange"),
        (Action::SetColorCyan, "Cyan"),
        (Action::SetColorMagenta, "Magenta"),
        (Action::SetColorPink, "Pink"),
        (Action::SetColorGray, "Gray"),
    ];
    for pair in colors.chunks(2) {
        let line = pair
            .iter()
            .map(|(action, label)| format!("{:<4}{:<10}", key(*action), label))
            .collect::<String>();
        lines.push(format!("    {}", line.trim_end()));
    }

    lines.push(String::new());
    lines.push("  ACTIONS".to_string());
    for (action, label) in [
        (Action::Undo, "Undo"),
        (Action::ClearCanvas, "Clear"),
        (Action::ToggleStatusBar, "Toggle status bar"),
        (Action::ToggleHelp, "Toggle help"),
        (Action::Exit, "Cancel shape / exit"),
    ] {
        lines.push(format!("    {:<14}{}", key(action), label));
    }
    lines
}

/// Render help overlay showing all keybindings
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    keybindings: &KeybindingsConfig,
    screen_width: u32,
    screen_height: u32,
) {
    let help_text = help_lines(keybindings);

    let _ = ctx.save();
    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    // Find longest line for width
    let mut max_width: f64 = 0.0;
    for line in &help_text {
        let width = match ctx.text_extents(line) {
            Ok(ext) => ext.width(),
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                line.len() as f64 * HELP_CHAR_WIDTH_ESTIMATE
            }
        };
        max_width = max_width.max(width);
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (help_text.len() as f64) * style.line_height + style.padding * 2.0;

    // Center the box
    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    // Draw semi-transparent background
    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    // Draw border
    let [r, g, b, a] = style.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    // Draw text
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in help_text.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
    let _ = ctx.restore();
}
