mod config;
mod script;
mod tui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use movelab::{InputButtons, Sandbox, Tunable, TuningParam};

use config::SandboxConfig;
use tui::TuiState;

#[derive(Parser)]
#[command(name = "movelab-sandbox")]
#[command(about = "Character controller tuning sandbox")]
struct Args {
    #[arg(short, long, default_value_t = movelab::DEFAULT_TICK_RATE)]
    tick_rate: u32,

    #[arg(long, help = "Run a scripted session and log readouts instead of the TUI")]
    headless: bool,

    #[arg(long, default_value_t = 5.0, help = "Length of the headless session")]
    seconds: f32,

    #[arg(long, help = "Gravity magnitude")]
    gravity: Option<f32>,

    #[arg(long)]
    jump_count: Option<i32>,

    #[arg(long)]
    jump_force: Option<f32>,

    #[arg(long)]
    jump_dampening: Option<f32>,
}

impl Args {
    fn into_config(self) -> SandboxConfig {
        let mut config = SandboxConfig {
            tick_rate: self.tick_rate,
            headless_seconds: self.seconds,
            gravity: self.gravity,
            ..Default::default()
        };

        let jump = &mut config.controller.jump;
        if let Some(count) = self.jump_count {
            jump.jump_count = count;
        }
        if let Some(force) = self.jump_force {
            jump.initial_force = force;
        }
        if let Some(dampening) = self.jump_dampening {
            jump.dampening_factor = dampening;
        }

        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let headless = args.headless;
    let config = args.into_config();

    let mut sandbox = Sandbox::new(config.controller, config.tick_rate);
    if let Some(gravity) = config.gravity {
        sandbox.set(TuningParam::Gravity, gravity)?;
    }

    if headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Sandbox started at {} Hz", sandbox.tick_rate());
        run_headless(&mut sandbox, &config);
        log::info!("Sandbox finished");
    } else {
        run_with_tui(&mut sandbox)?;
    }

    Ok(())
}

fn run_headless(sandbox: &mut Sandbox, config: &SandboxConfig) {
    let frame_dt = 1.0 / config.frame_rate.max(1) as f32;
    let frames = (config.headless_seconds / frame_dt).ceil() as u64;
    let mut last_state = sandbox.controller().state();

    for frame in 0..frames {
        let time = frame as f32 * frame_dt;
        let input = script::scripted_input(time, frame);
        sandbox.update(frame_dt, &input);

        let readout = sandbox.readout();
        if readout.state != last_state || input.jump_pressed() {
            log::info!(
                "t={:.2}s {} jumps={}/{} next={} flat_speed={:.2} y={:.2}",
                time,
                readout.state.as_str(),
                readout.remaining_jumps,
                readout.max_jumps,
                readout.next_force_label(),
                readout.flat_speed,
                readout.position.y
            );
            last_state = readout.state;
        }
    }
}

fn run_with_tui(sandbox: &mut Sandbox) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut tui_state = TuiState::new();
    let mut last_frame = Instant::now();

    while !tui_state.should_quit() {
        let mut jump_pressed = false;

        if event::poll(Duration::from_millis(8))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if tui_state.is_editing() {
                        match key.code {
                            KeyCode::Esc => tui_state.cancel_edit(),
                            KeyCode::Enter => tui_state.commit_edit(sandbox),
                            KeyCode::Backspace => tui_state.pop_char(),
                            KeyCode::Char(c) => tui_state.push_char(c),
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => tui_state.quit(),
                            KeyCode::Up => tui_state.select_prev(),
                            KeyCode::Down => tui_state.select_next(),
                            KeyCode::Enter => tui_state.begin_edit(&*sandbox),
                            KeyCode::Char(' ') => jump_pressed = true,
                            KeyCode::Char('w') => tui_state.toggle_walk(),
                            KeyCode::Char('r') => tui_state.toggle_sprint(),
                            _ => {}
                        }
                    }
                }
            }
        }

        let now = Instant::now();
        let frame_dt = (now - last_frame).as_secs_f32();
        last_frame = now;

        let input = tui_state
            .movement_input()
            .with_button(InputButtons::JUMP, jump_pressed);
        sandbox.update(frame_dt, &input);

        let readout = sandbox.readout();
        terminal.draw(|frame| {
            tui::render(frame, &tui_state, &*sandbox, &readout);
        })?;
    }

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    Ok(())
}
