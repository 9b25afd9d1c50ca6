//! Event Loop Module
//!
//! Contains the main TUI event loop.

use crate::app::{AppState, AppStateOptions, InputEvent, OutputEvent};
use crate::constants::INTERNAL_CHANNEL_CAPACITY;
use crate::services::handlers::{settle, update};
use crate::terminal::TerminalGuard;
use crate::view::view;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{execute, terminal::EnterAlternateScreen};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::{MissedTickBehavior, interval};

/// Run the carousel until the user quits or `input_rx` closes.
///
/// `input_rx` lets the caller drive the UI alongside the keyboard and
/// mouse. Every transition is published on `output_tx`.
pub async fn run_tui(
    mut input_rx: Receiver<InputEvent>,
    output_tx: Sender<OutputEvent>,
    shutdown_tx: tokio::sync::broadcast::Sender<()>,
    options: AppStateOptions,
) -> io::Result<()> {
    let _guard = TerminalGuard;

    crossterm::terminal::enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let mut state = AppState::new(options);
    log::info!("carousel started on panel {}", state.current_panel());

    let (internal_tx, mut internal_rx) =
        tokio::sync::mpsc::channel::<InputEvent>(INTERNAL_CHANNEL_CAPACITY);
    std::thread::spawn(move || {
        loop {
            if let Ok(event) = crossterm::event::read()
                && let Some(event) = crate::event::map_crossterm_event_to_input_event(event)
                && internal_tx.blocking_send(event).is_err()
            {
                break;
            }
        }
    });

    let mut frame_interval = interval(state.frame_interval);
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    terminal.draw(|f| view(f, &state))?;
    loop {
        let event = tokio::select! {
            event = input_rx.recv() => match event {
                Some(event) => event,
                None => break,
            },
            event = internal_rx.recv() => match event {
                Some(event) => event,
                None => break,
            },
            _ = frame_interval.tick(), if state.is_animating() => {
                settle(&mut state, Instant::now(), &output_tx);
                terminal.draw(|f| view(f, &state))?;
                continue;
            }
        };

        if let InputEvent::Quit = event {
            break;
        }
        if let InputEvent::Resized(..) = event {
            terminal.autoresize()?;
        }
        let was_animating = state.is_animating();
        update(&mut state, event, terminal.size()?, &output_tx);
        if state.is_animating() && !was_animating {
            frame_interval.reset();
        }
        settle(&mut state, Instant::now(), &output_tx);
        terminal.draw(|f| view(f, &state))?;
    }

    log::info!("carousel stopped on panel {}", state.current_panel());
    let _ = shutdown_tx.send(());
    crossterm::terminal::disable_raw_mode()?;
    execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    Ok(())
}
