use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};

use tedit::commands::Cmd;
use tedit::file_io;
use tedit::messages::{AppMsg, Msg};
use tedit::model::AppModel;
use tedit::update::update;

use super::input::{map_key, map_mouse, tick};
use crate::view::Renderer;

/// Poll interval of the event loop
const TICK: Duration = Duration::from_millis(50);

/// Restores the terminal when dropped, even on early return
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("tedit requires an interactive terminal")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
    }
}

pub struct App {
    model: AppModel,
    renderer: Renderer,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    needs_redraw: bool,
    should_quit: bool,
}

impl App {
    pub fn new(model: AppModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            renderer: Renderer::new(),
            msg_tx,
            msg_rx,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut stdout = io::stdout();
        let mut last_tick = Instant::now();

        tracing::info!("event loop started");
        while !self.should_quit {
            if self.needs_redraw {
                self.renderer.render(&mut stdout, &mut self.model)?;
                stdout.flush()?;
                self.needs_redraw = false;
            }

            let timeout = TICK.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                let event = event::read()?;
                self.handle_event(event);
            }

            // Results from file threads
            while let Ok(msg) = self.msg_rx.try_recv() {
                self.dispatch(msg);
            }

            if last_tick.elapsed() >= TICK {
                self.dispatch(tick());
                last_tick = Instant::now();
            }
        }
        tracing::info!("event loop finished");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let modal_open = self.model.ui.has_modal();
        match event {
            Event::Key(key) => {
                if let Some(msg) = map_key(key, modal_open) {
                    self.dispatch(msg);
                }
            }
            Event::Mouse(mouse) => {
                let text_rows = self.model.document.viewport.height;
                for msg in map_mouse(mouse, text_rows, modal_open) {
                    self.dispatch(msg);
                }
            }
            Event::Resize(cols, rows) => {
                self.renderer.invalidate();
                self.dispatch(Msg::resize(cols, rows));
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.needs_redraw = true,
            Cmd::SaveFile {
                path,
                content,
                overwrite,
                revision,
            } => {
                self.needs_redraw = true;
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result =
                        file_io::write_file(&path, &content, overwrite).map_err(|e| {
                            match e.kind() {
                                io::ErrorKind::AlreadyExists => "File already exists".to_string(),
                                _ => e.to_string(),
                            }
                        });
                    let _ = tx.send(Msg::App(AppMsg::SaveCompleted {
                        path,
                        revision,
                        result,
                    }));
                });
            }
            Cmd::LoadFile { path } => {
                self.needs_redraw = true;
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = std::fs::read(&path).map_err(|e| e.to_string());
                    let _ = tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Quit => self.should_quit = true,
        }
    }
}
