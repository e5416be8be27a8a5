//! Terminal clusterfall runner (default binary).
//!
//! This is the primary gameplay entrypoint: a fixed-timestep loop rendering
//! the board top-down with crossterm. Pass `--feed <path>` to mirror the
//! presentation events to a JSONL file, or use the `headless` subcommand to
//! autoplay without a terminal and stream the events to stdout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use clusterfall::core::observe::{BoardObserver, NullObserver};
use clusterfall::engine::Session;
use clusterfall::feed::JsonFeed;
use clusterfall::input::{handle_key_event, should_quit};
use clusterfall::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use clusterfall::types::{BoardAction, TICK_MS};

/// Fixed timestep in seconds, as the board core consumes it.
const TICK_SECS: f32 = TICK_MS as f32 / 1000.0;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    seed: u32,
    feed_path: Option<String>,
    headless: bool,
    /// Headless only: simulation length in ticks.
    ticks: u32,
    /// Headless only: drop a piece every N ticks (0 = never).
    spawn_every: u32,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;

    if opts.headless {
        return run_headless(&opts);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options {
        seed: default_seed(),
        feed_path: None,
        headless: false,
        ticks: 6000,
        spawn_every: 45,
    };

    let mut i = 0usize;
    if args.first().map(String::as_str) == Some("headless") {
        opts.headless = true;
        i = 1;
    }

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                opts.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--feed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --feed"))?;
                opts.feed_path = Some(v.clone());
            }
            "--ticks" if opts.headless => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --ticks"))?;
                opts.ticks = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --ticks value: {}", v))?;
            }
            "--spawn-every" if opts.headless => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --spawn-every"))?;
                opts.spawn_every = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --spawn-every value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(opts)
}

/// Wall-clock seed so each launch plays a different board; `--seed` pins it.
fn default_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
        .max(1)
}

fn observer<'a, W: Write>(
    feed: &'a mut Option<JsonFeed<W>>,
    fallback: &'a mut NullObserver,
) -> &'a mut dyn BoardObserver {
    match feed {
        Some(f) => f,
        None => fallback,
    }
}

fn run(term: &mut TerminalRenderer, opts: &Options) -> Result<()> {
    let mut feed = match &opts.feed_path {
        Some(path) => Some(JsonFeed::new(BufWriter::new(File::create(path)?))),
        None => None,
    };
    let mut fallback = NullObserver;

    let mut session = Session::new(opts.seed);
    session.start(observer(&mut feed, &mut fallback));

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(80, 24);
    let mut snap = session.snapshot();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action, observer(&mut feed, &mut fallback));
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.step(TICK_SECS, observer(&mut feed, &mut fallback));
        }
    }

    if let Some(f) = feed {
        f.into_inner().flush()?;
    }
    Ok(())
}

/// Autoplay without a terminal: drop a piece on a fixed cadence and stream
/// the presentation events to stdout until game over or the tick budget
/// runs out.
fn run_headless(opts: &Options) -> Result<()> {
    let stdout = std::io::stdout();
    let mut feed = JsonFeed::new(BufWriter::new(stdout.lock()));

    let mut session = Session::new(opts.seed);
    session.start(&mut feed);

    for tick in 0..opts.ticks {
        if session.board().is_game_over() {
            break;
        }
        if opts.spawn_every > 0 && tick % opts.spawn_every == 0 {
            session.apply(BoardAction::SpawnPiece, &mut feed);
        }
        session.step(TICK_SECS, &mut feed);
    }

    feed.into_inner().flush()?;
    Ok(())
}
