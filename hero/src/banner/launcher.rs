// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{future::pending, io::stdout, time::Duration};

use crossterm::{event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
                        KeyModifiers},
                terminal::size};
use folio_typewriter::{CommonResult, CursorBlinker, Script, TracingConfig, Typewriter,
                       TypewriterError, ok};
use futures_util::StreamExt;
use miette::IntoDiagnostic;
use tokio::{sync::mpsc::{UnboundedSender, unbounded_channel},
            time::{Instant, sleep_until}};

use crate::{CLIArg, HeroContent, HeroDisplayState, HeroSignal, TerminalGuard, draw};

pub const LOG_FILE_NAME: &str = "log.txt";

/// Plays the banner until the user exits, or until the linger time runs out after the
/// headline is done.
///
/// Bad headline settings don't stop the banner from showing. The headline is left out,
/// and the reason is shown in its place.
///
/// # Errors
///
/// Returns an error if logging can't be set up, or the terminal can't be used.
pub async fn run_app(cli_arg: CLIArg) -> CommonResult<()> {
    if cli_arg.global_options.enable_logging {
        TracingConfig::new_file(LOG_FILE_NAME).install_global()?;
    }

    let content = cli_arg.hero_content();
    let mut state = HeroDisplayState::default();
    let (signal_sender, mut signal_receiver) = unbounded_channel::<HeroSignal>();

    let _guard = TerminalGuard::try_new()?;

    let maybe_script = cli_arg.script(&content);
    let full_text = maybe_script
        .as_ref()
        .map(Script::full_text)
        .unwrap_or_default();

    let maybe_typewriter =
        match start_typewriter(&cli_arg, maybe_script, signal_sender.clone()) {
            Ok(typewriter) => Some(typewriter),
            Err(error) => {
                tracing::error!(message = "Headline disabled", error = %error);
                state.maybe_typing_error = Some(error.to_string());
                None
            }
        };

    let maybe_blinker =
        match start_cursor_blinker(cli_arg.blink_half_period(), signal_sender) {
            Ok(blinker) => Some(blinker),
            Err(error) => {
                tracing::error!(message = "Cursor blinking disabled", error = %error);
                None
            }
        };

    let (mut width, _) = size().into_diagnostic()?;
    let mut maybe_exit_deadline = None;
    let mut event_stream = EventStream::new();

    loop {
        draw(&mut stdout(), &state.render_lines(&content, width)).into_diagnostic()?;

        if maybe_exit_deadline.is_none()
            && let Some(linger) = cli_arg.maybe_linger()
            && is_headline_settled(&state, &full_text)
        {
            tracing::debug!(message = "Headline settled, lingering", linger = ?linger);
            maybe_exit_deadline = Some(Instant::now() + linger);
        }

        tokio::select! {
            // This branch is cancel safe because recv is cancel safe.
            Some(signal) = signal_receiver.recv() => state.apply(signal),

            // This branch is cancel safe because next is cancel safe.
            maybe_event = event_stream.next() => match maybe_event {
                Some(Ok(event)) => match event {
                    Event::Resize(new_width, _) => width = new_width,
                    Event::Key(key_event) if is_exit_key(&key_event) => break,
                    _ => {}
                },
                Some(Err(error)) => {
                    tracing::error!(message = "Terminal input failed", error = %error);
                    break;
                }
                None => break,
            },

            // This branch is cancel safe because sleep_until is cancel safe.
            () = sleep_until_or_forever(maybe_exit_deadline) => break,
        }
    }

    if let Some(typewriter) = maybe_typewriter {
        typewriter.stop();
    }
    if let Some(blinker) = maybe_blinker {
        blinker.stop();
    }
    tracing::debug!(message = "Hero banner exited");

    ok!()
}

fn start_typewriter(
    cli_arg: &CLIArg,
    maybe_script: Result<Script, TypewriterError>,
    sender: UnboundedSender<HeroSignal>,
) -> Result<Typewriter, TypewriterError> {
    let config = cli_arg.reveal_config()?;
    Typewriter::try_start(maybe_script?, config, move |revealed: &str| {
        // We don't care about the result of this operation. It fails once the event
        // loop has exited.
        sender.send(HeroSignal::Revealed(revealed.to_string())).ok();
    })
}

fn start_cursor_blinker(
    half_period: Duration,
    sender: UnboundedSender<HeroSignal>,
) -> Result<CursorBlinker, TypewriterError> {
    CursorBlinker::try_start(half_period, move |visible: bool| {
        // We don't care about the result of this operation.
        sender.send(HeroSignal::CursorVisible(visible)).ok();
    })
}

async fn sleep_until_or_forever(maybe_deadline: Option<Instant>) {
    match maybe_deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => pending().await,
    }
}

/// The headline is fully typed, or it is never going to be.
#[must_use]
pub fn is_headline_settled(state: &HeroDisplayState, full_text: &str) -> bool {
    state.maybe_typing_error.is_some() || state.revealed == full_text
}

/// `q`, `Esc`, and `Ctrl+C` exit. Raw mode swallows the `SIGINT` that `Ctrl+C` would
/// normally send.
#[must_use]
pub fn is_exit_key(key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }
    match key_event.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') => key_event.modifiers.is_empty(),
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
