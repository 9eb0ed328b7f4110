use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure. File and clipboard failures are shown in
    /// the UI instead.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - spudpad requires an interactive terminal")?;
        let size = terminal.size()?;
        let mut model = self.initial_model((size.width, size.height));
        tracing::info!(
            width = size.width,
            height = size.height,
            file = ?model.session.file_path(),
            "editor started"
        );

        let result = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
            .context("Failed to enable mouse capture")
            .and_then(|()| self.event_loop(&mut terminal, &mut model));

        // Restore terminal
        let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
        ratatui::restore();

        result
    }

    /// Apply one message: pure update, then its side effects.
    pub(super) fn dispatch(&mut self, model: &mut Model, msg: Message) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        self.handle_message_side_effects(model, &side_msg);
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;
        let mut shown_title = String::new();

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let title = model.session.title();
            if title != shown_title {
                execute!(stdout(), SetTitle(&title))?;
                shown_title = title;
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    self.dispatch(model, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts and pastes into a single render.
                while !model.should_quit && event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        self.dispatch(model, msg);
                        needs_render = true;
                    }
                }
            }
        }
        tracing::info!("editor closed");
        Ok(())
    }
}
