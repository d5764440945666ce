use super::app::App;
use crate::decision::{DecisionTable, Feature, FeatureSet};
use crate::session::{text, ImageSelection, Outcome, SessionView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

// --- Color Helpers ---
fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Cat => Color::Green,
        Outcome::NotCat => Color::Red,
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(*)"
    } else {
        "( )"
    }
}

/// Draws one frame. `app.view()` is taken fresh here, so every frame
/// reflects the latest state.
pub fn render(app: &App, frame: &mut Frame) {
    let view = app.view();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Key help
        ])
        .split(frame.size());

    render_title(frame, outer[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Step 1: image
            Constraint::Length(6), // Step 2: features
            Constraint::Length(6), // Step 3: weights
            Constraint::Min(0),
        ])
        .split(body[0]);

    render_image(frame, left[0], app, &view);
    render_features(frame, left[1], &view);
    render_weights(frame, left[2], app, &view);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(body[1]);

    render_decision(frame, right[0], &view);
    if app.show_table {
        render_table(frame, right[1], &app.decision_table(), &view.features);
    }

    render_key_help(frame, outer[2]);

    if app.show_help {
        render_explanation(frame, centered(frame.size(), 70, 60));
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        text::TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn render_image(frame: &mut Frame, area: Rect, app: &App, view: &SessionView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Step 1: Look at the Image ");

    let options: String = ImageSelection::ALL
        .iter()
        .map(|&image| format!("{} {}", radio(view.image == image), image.label()))
        .collect::<Vec<_>>()
        .join("   ");

    let asset = app.current_asset();
    let lines = vec![
        Line::from(text::IMAGE_PROMPT),
        Line::from(options),
        Line::from(Span::styled(
            format!("{} ({})", asset.caption, asset.path.display()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            text::FEATURES_HINT,
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_features(frame: &mut Frame, area: Rect, view: &SessionView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Step 2: Select Observed Features ");

    let lines: Vec<Line> = Feature::ALL
        .iter()
        .map(|&f| {
            Line::from(format!(
                "{} {} {}",
                f.index() + 1,
                checkbox(view.features.get(f)),
                f.label()
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_weights(frame: &mut Frame, area: Rect, app: &App, view: &SessionView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Step 3: Adjust Importance ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    for f in Feature::ALL {
        let weight = view.weights.get(f);
        let focused = f == app.focused_weight;
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };
        let marker = if focused { ">" } else { " " };
        let gauge = Gauge::default()
            .gauge_style(style)
            .ratio(weight.clamp(0.0, 1.0))
            .label(format!("{marker} {} {weight:.2}", f.weight_label()));
        frame.render_widget(gauge, rows[f.index()]);
    }

    let hint = Paragraph::new(Span::styled(
        text::WEIGHTS_HINT,
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(hint, rows[3]);
}

fn render_decision(frame: &mut Frame, area: Rect, view: &SessionView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Step 4: Neural Network Decision ");

    let color = outcome_color(view.outcome);
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Combined Score: "),
            Span::styled(
                view.score_text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (threshold {:.2})", view.threshold),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            view.outcome_message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(warning) = view.warning {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            warning,
            Style::default().fg(Color::Yellow),
        )));
    }
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_table(frame: &mut Frame, area: Rect, table: &DecisionTable, current: &FeatureSet) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        " All Combinations ({} of 8 predict cat) ",
        table.cat_count()
    ));

    let rows: Vec<Row> = table
        .rows()
        .iter()
        .map(|row| {
            let prediction = if row.evaluation.is_cat { "cat" } else { "not cat" };
            let style = if row.features == *current {
                Style::default().add_modifier(Modifier::REVERSED)
            } else if row.evaluation.is_cat {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Row::new(vec![
                checkbox(row.features.has_pointed_ears).to_string(),
                checkbox(row.features.has_cat_eyes).to_string(),
                checkbox(row.features.has_long_tail).to_string(),
                row.evaluation.score_text(),
                prediction.to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Min(8),
    ];
    let widget = Table::new(rows, widths)
        .header(
            Row::new(vec!["Ears", "Eyes", "Tail", "Score", "Prediction"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block);
    frame.render_widget(widget, area);
}

fn render_explanation(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", text::EXPLANATION_TITLE));

    let mut lines = vec![Line::from(text::INTRO), Line::from(""), Line::from("How to play:")];
    lines.extend(
        text::HOW_TO_PLAY
            .iter()
            .enumerate()
            .map(|(i, step)| Line::from(format!("  {}. {step}", i + 1))),
    );
    lines.push(Line::from(""));
    lines.extend(text::EXPLANATION.iter().map(|s| Line::from(format!("  - {s}"))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        text::SIMULATION_NOTE,
        Style::default().fg(Color::Cyan),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_key_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        "c image | 1-3 features | up/down select | left/right adjust | r reset | t table | ? help | q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
