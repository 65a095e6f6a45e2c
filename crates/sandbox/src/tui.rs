use glam::Vec2;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use movelab::{ControllerInput, InputButtons, Readout, Sandbox, Tunable, TuningParam};

pub struct TuiState {
    selected: usize,
    edit_buffer: Option<String>,
    status: Option<Status>,
    walking: bool,
    sprinting: bool,
    should_quit: bool,
}

enum Status {
    Info(String),
    Error(String),
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            edit_buffer: None,
            status: None,
            walking: false,
            sprinting: false,
            should_quit: false,
        }
    }

    pub fn selected_param(&self) -> TuningParam {
        TuningParam::ALL[self.selected]
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(TuningParam::ALL.len() - 1);
    }

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    pub fn begin_edit(&mut self, tunable: &impl Tunable) {
        let value = tunable.get(self.selected_param());
        self.edit_buffer = Some(format_value(value));
        self.status = None;
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(buffer) = &mut self.edit_buffer {
            if c.is_ascii_digit() || c == '.' || c == '-' {
                buffer.push(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(buffer) = &mut self.edit_buffer {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    pub fn commit_edit(&mut self, tunable: &mut impl Tunable) {
        let Some(text) = self.edit_buffer.take() else {
            return;
        };

        let param = self.selected_param();
        self.status = Some(match tunable.apply_text(param, &text) {
            Ok(()) => Status::Info(format!(
                "{} = {}",
                param.label(),
                format_value(tunable.get(param))
            )),
            Err(e) => Status::Error(e.to_string()),
        });
    }

    pub fn toggle_walk(&mut self) {
        self.walking = !self.walking;
    }

    pub fn toggle_sprint(&mut self) {
        self.sprinting = !self.sprinting;
    }

    pub fn movement_input(&self) -> ControllerInput {
        let movement = if self.walking { Vec2::Y } else { Vec2::ZERO };
        ControllerInput::idle()
            .with_movement(movement)
            .with_button(InputButtons::SPRINT, self.sprinting)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

pub fn render(frame: &mut Frame, state: &TuiState, sandbox: &Sandbox, readout: &Readout) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_header(frame, chunks[0], readout, sandbox.tick_rate());
    render_params(frame, body[0], state, sandbox);
    render_readout(frame, body[1], readout);
    render_status(frame, chunks[2], state);
    render_help(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, readout: &Readout, tick_rate: u32) {
    let block = Block::default()
        .title(" Movelab ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text = format!(
        "State: {}  |  Grounded: {}  |  Tick rate: {} Hz",
        readout.state.as_str(),
        readout.grounded,
        tick_rate
    );

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_params(frame: &mut Frame, area: Rect, state: &TuiState, sandbox: &Sandbox) {
    let items: Vec<ListItem> = TuningParam::ALL
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let value = match (&state.edit_buffer, i == state.selected) {
                (Some(buffer), true) => format!("{}_", buffer),
                _ => format_value(sandbox.get(*param)),
            };
            let item = ListItem::new(format!("  {:<18} {}", param.label(), value));

            if i == state.selected {
                item.style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item.style(Style::default().fg(Color::White))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Parameters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(list, area);
}

fn render_readout(frame: &mut Frame, area: Rect, readout: &Readout) {
    let block = Block::default()
        .title(" Readout ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        row(
            "Jumps left: ",
            format!("{}/{}", readout.remaining_jumps, readout.max_jumps),
        ),
        row("Next jump force: ", readout.next_force_label()),
        row("Flat speed: ", format!("{:.2}", readout.flat_speed)),
        row(
            "Position: ",
            format!(
                "{:.2}, {:.2}, {:.2}",
                readout.position.x, readout.position.y, readout.position.z
            ),
        ),
        row(
            "View: ",
            format!("yaw {:.1}, pitch {:.1}", readout.yaw, readout.pitch),
        ),
        row("Gravity: ", format!("{:.2}", readout.gravity)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &TuiState) {
    let (text, color) = match &state.status {
        Some(Status::Info(text)) => (text.as_str(), Color::Green),
        Some(Status::Error(text)) => (text.as_str(), Color::Red),
        None => ("", Color::White),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(color)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(
        "Up/Down select  Enter edit/apply  Esc cancel  Space jump  W walk  R sprint  Q quit",
    )
    .block(block)
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    );

    frame.render_widget(text, area);
}

fn format_value(value: f32) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}
