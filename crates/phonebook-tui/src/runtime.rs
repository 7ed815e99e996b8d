use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tracing::{debug, info};

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// How often the load task is polled while no input arrives
const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                            if app.pending_quit {
                                app.quit();
                            } else {
                                app.pending_quit = true;
                            }
                        } else {
                            app.pending_quit = false;
                            handle_key(app, key);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => {
                        for c in text.chars().filter(|c| !c.is_control()) {
                            app.enter_char(c);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("terminal event stream closed");
                        app.quit();
                    }
                }
            }

            _ = tick_interval.tick() => {
                if app.tick() {
                    info!(label = %app.view().results_label(), "contact load settled");
                }
            }
        }
    }

    Ok(())
}
