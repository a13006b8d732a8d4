use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use tokio::runtime::Handle;

use crate::query::{QueryClient, QueryKey};
use crate::ui::app::{App, Effect};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::map_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive reader until the user quits.
///
/// Blocking: call from a thread that may block (e.g. `spawn_blocking`).
/// Fetches are spawned on `runtime` and report back through the event
/// channel, so the loop never waits on the network.
pub fn run(mut app: App, queries: QueryClient, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    dispatch(&runtime, &queries, app.sync(), events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let Some(action) = map_key(app.screen(), key) {
                    if app.apply(action) == Effect::Refresh {
                        queries.clear_cache();
                    }
                }
            }
            Ok(AppEvent::Fetched { key, result }) => {
                app.on_fetched(key, result);
            }
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        dispatch(&runtime, &queries, app.sync(), events.sender());
    }

    drop(guard);
    Ok(())
}

fn dispatch(runtime: &Handle, queries: &QueryClient, keys: Vec<QueryKey>, tx: Sender<AppEvent>) {
    for key in keys {
        let queries = queries.clone();
        let tx = tx.clone();
        tracing::debug!(query = %key, "Dispatching fetch");
        runtime.spawn(async move {
            let result = queries.fetch(&key).await;
            // The loop may already be gone when the user quits mid-fetch.
            let _ = tx.send(AppEvent::Fetched { key, result });
        });
    }
}
