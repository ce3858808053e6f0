use std::io::{Write, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use ratatui::DefaultTerminal;
use tracing::{debug, info, warn};

use crate::app::{App, Message, Model, update};
use crate::config::ModifierKey;

/// Poll interval while idle; bounds how late a toast disappears.
const IDLE_POLL: Duration = Duration::from_millis(250);

impl App {
    /// Run the main event loop.
    ///
    /// Notes are loaded before the terminal is taken over and every
    /// modified note is saved when the loop ends, including on `Ctrl+C`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or stops
    /// delivering events.
    pub fn run(&mut self) -> Result<()> {
        let wants_super = self.modifier == ModifierKey::Super;
        let enhanced = wants_super && keyboard_enhancement_supported();
        self.modifier = self.modifier.usable(enhanced);
        if wants_super && !enhanced {
            info!("terminal does not report the Super key, using Ctrl for shortcuts");
        }

        self.vault.ensure_root();
        let notes = self.vault.load_all(&self.limits, self.modifier);
        info!(
            vault = %self.vault.root().display(),
            notes = notes.len(),
            "loaded vault"
        );

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal, mdnotes requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.vault.clone(),
            notes,
            self.limits,
            (size.width, size.height),
        )
        .with_modifier(self.modifier);

        let result = execute!(stdout(), EnableMouseCapture)
            .and_then(|()| set_mouse_motion_tracking(true))
            .and_then(|()| {
                if enhanced {
                    execute!(
                        stdout(),
                        PushKeyboardEnhancementFlags(
                            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        )
                    )
                } else {
                    Ok(())
                }
            })
            .map_err(anyhow::Error::from)
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        // Restore terminal
        if enhanced {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = set_mouse_motion_tracking(false);
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        if result.is_err() {
            // The loop bailed before Quit could save
            let failures = model.notebook.save_all(&self.vault);
            if !failures.is_empty() {
                warn!(count = failures.len(), "notes left unsaved");
            }
        }
        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if !event::poll(IDLE_POLL)? {
                continue;
            }

            // Drain the whole burst (typed text, key repeat) before drawing.
            let mut handled = 0_u32;
            loop {
                let event = event::read()?;
                if let Some(msg) = Self::handle_event(&event, model) {
                    handled += 1;
                    Self::dispatch(model, msg);
                    needs_render = true;
                }
                if model.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
            if handled > 1 {
                debug!(handled, "drained input burst");
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply a message, then run its side effects.
    pub(super) fn dispatch(model: &mut Model, msg: Message) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }
}

fn keyboard_enhancement_supported() -> bool {
    match terminal::supports_keyboard_enhancement() {
        Ok(supported) => supported,
        Err(err) => {
            debug!(%err, "keyboard enhancement query failed");
            false
        }
    }
}

fn set_mouse_motion_tracking(enable: bool) -> std::io::Result<()> {
    // Request any-event mouse motion reporting (1003) with SGR encoding (1006)
    // so hovering the list works without a button held.
    let mut out = stdout();
    if enable {
        out.write_all(b"\x1b[?1003h\x1b[?1006h")?;
    } else {
        out.write_all(b"\x1b[?1003l\x1b[?1006l")?;
    }
    out.flush()
}
