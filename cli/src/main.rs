use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::Result;
use clap::Parser;
use memfire_core::Session;
use web_time::Instant;

mod args;
mod command;
mod config;
mod render;

use args::Args;
use command::Command;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let catalog = config::load_catalog(args.symbols.as_deref())?;
    let game_config = config::load_game_config(&args)?;
    let mut session = Session::new(catalog, game_config)?;
    log::info!("Session started");

    let started = Instant::now();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}\n", render::render_board(&session.snapshot(), args.reveal));
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        session.advance_to(started.elapsed());

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                prompt(&mut stdout)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", command::HELP),
            Command::Sets => println!("{}", render::render_sets(&session)),
            Command::Json => println!("{}", serde_json::to_string_pretty(&session.snapshot())?),
            Command::Show => println!("{}", render::render_board(&session.snapshot(), args.reveal)),
            Command::Wait => {
                wait_until_settled(&mut session, started);
                println!("{}", render::render_board(&session.snapshot(), args.reveal));
            }
            Command::Click(key) => match session.submit_click(key) {
                Ok(outcome) if outcome.has_update() => {
                    println!("{}", render::render_board(&session.snapshot(), args.reveal))
                }
                Ok(_) => println!("Tile {key} cannot be flipped right now"),
                Err(err) => println!("{err}"),
            },
            Command::Select(name) => match session.select_symbol_set(&name) {
                Ok(()) => {
                    wait_until_settled(&mut session, started);
                    println!("{}", render::render_board(&session.snapshot(), args.reveal));
                }
                Err(err) => println!("{err}"),
            },
            Command::Reset => match session.request_reset() {
                Ok(()) => {
                    wait_until_settled(&mut session, started);
                    println!("{}", render::render_board(&session.snapshot(), args.reveal));
                }
                Err(err) => {
                    log::debug!("Reset rejected: {}", err);
                    println!("{err}");
                }
            },
        }
        prompt(&mut stdout)?;
    }

    log::info!("Bye");
    Ok(())
}

/// Sleeps through every pending delay so the board shown next is final.
fn wait_until_settled(session: &mut Session, started: Instant) {
    while let Some(deadline) = session.next_deadline() {
        let elapsed = started.elapsed();
        if let Some(remaining) = deadline.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
        session.advance_to(deadline.max(started.elapsed()));
    }
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    print!("> ");
    stdout.flush()
}
