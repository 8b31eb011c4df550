//! `snk shell`: line-oriented interactive ordering session.
//!
//! Every command error is printed and the loop continues; only IO errors on
//! the terminal itself end the session early.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use snk_client::ShopBackend;
use snk_config::ShopConfig;
use snk_schemas::{Floor, SnackId};
use snk_session::{ShopSession, SubmitOutcome};

use super::connect;

const HELP: &str = "\
commands:
  menu              list snacks
  rooms             list rooms by floor
  add <id>          add one unit of a snack
  remove <id>       remove one unit of a snack
  cart              show the cart
  floor <n|none>    choose the delivery floor (resets the room)
  room <r>          choose a room on the current floor
  status            show destination and totals
  submit            place the order
  help              this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Menu,
    Rooms,
    Add(SnackId),
    Remove(SnackId),
    Cart,
    Floor(Option<Floor>),
    Room(String),
    Status,
    Submit,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines are `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();
        if parts.next().is_some() {
            bail!("too many arguments for '{verb}'");
        }

        let cmd = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("menu", None) => ShellCommand::Menu,
            ("rooms", None) => ShellCommand::Rooms,
            ("add", Some(id)) => ShellCommand::Add(parse_id(id)?),
            ("remove", Some(id)) => ShellCommand::Remove(parse_id(id)?),
            ("cart", None) => ShellCommand::Cart,
            ("floor", Some(f)) if f.eq_ignore_ascii_case("none") => ShellCommand::Floor(None),
            ("floor", Some(f)) => ShellCommand::Floor(Some(
                f.parse()
                    .with_context(|| format!("floor must be a number or 'none', got '{f}'"))?,
            )),
            ("room", Some(r)) => ShellCommand::Room(r.to_string()),
            ("status", None) => ShellCommand::Status,
            ("submit", None) => ShellCommand::Submit,
            ("help", None) | ("?", None) => ShellCommand::Help,
            ("quit", None) | ("exit", None) => ShellCommand::Quit,
            ("add" | "remove" | "floor" | "room", None) => bail!("'{verb}' needs an argument"),
            (
                "menu" | "rooms" | "cart" | "status" | "submit" | "help" | "?" | "quit" | "exit",
                Some(_),
            ) => bail!("'{verb}' takes no argument"),
            _ => bail!("unknown command '{verb}' (try 'help')"),
        };
        Ok(Some(cmd))
    }
}

fn parse_id(raw: &str) -> Result<SnackId> {
    raw.parse()
        .with_context(|| format!("snack id must be a number, got '{raw}'"))
}

pub async fn run_stdio(cfg: &ShopConfig) -> Result<()> {
    let backend = connect(cfg)?;
    let mut session = ShopSession::load(&backend)
        .await
        .with_currency_symbol(cfg.display.currency_symbol.clone());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut session, &backend, stdin.lock(), &mut out).await
}

/// Drive `session` from `input` until `quit` or end of input.
pub async fn run<R: BufRead, W: Write>(
    session: &mut ShopSession,
    backend: &dyn ShopBackend,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    for notice in session.notices() {
        writeln!(out, "notice: {notice}")?;
    }
    writeln!(
        out,
        "{} snacks, {} rooms on {} floors. Type 'help' for commands.",
        session.catalog().len(),
        session.rooms().room_count(),
        session.rooms().floor_count()
    )?;

    let mut line = String::new();
    loop {
        write!(out, "snk> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let cmd = match ShellCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e:#}")?;
                continue;
            }
        };
        if cmd == ShellCommand::Quit {
            return Ok(());
        }
        execute(session, backend, cmd, out).await?;
    }
}

async fn execute<W: Write>(
    session: &mut ShopSession,
    backend: &dyn ShopBackend,
    cmd: ShellCommand,
    out: &mut W,
) -> Result<()> {
    let cur = session.currency_symbol().to_string();

    match cmd {
        ShellCommand::Menu => {
            if session.catalog().is_empty() {
                writeln!(out, "no snacks available")?;
            }
            for s in session.catalog().snacks() {
                writeln!(out, "  [{}] {} {cur}{}", s.id, s.name, s.price)?;
            }
        }

        ShellCommand::Rooms => {
            if session.rooms().is_empty() {
                writeln!(out, "no rooms available")?;
            }
            for g in session.rooms().groups() {
                writeln!(out, "  floor {}: {}", g.floor, g.rooms.join(" "))?;
            }
        }

        ShellCommand::Add(id) => match session.add_to_cart(id) {
            Ok(()) => writeln!(
                out,
                "added {id}; cart: {} items, {cur}{}",
                session.cart().total_items(),
                session.cart().total_price()
            )?,
            Err(e) => writeln!(out, "error: {e}")?,
        },

        ShellCommand::Remove(id) => {
            if session.remove_from_cart(id) {
                writeln!(
                    out,
                    "removed {id}; cart: {} items, {cur}{}",
                    session.cart().total_items(),
                    session.cart().total_price()
                )?;
            } else {
                writeln!(out, "snack {id} is not in the cart")?;
            }
        }

        ShellCommand::Cart => {
            let snap = session.cart().snapshot();
            if snap.is_empty() {
                writeln!(out, "cart is empty")?;
            } else {
                for line in &snap.lines {
                    writeln!(
                        out,
                        "  [{}] {} x{} = {cur}{}",
                        line.id(),
                        line.snack().name,
                        line.quantity(),
                        line.line_total()
                    )?;
                }
                writeln!(
                    out,
                    "total: {} items, {cur}{}",
                    snap.total_items, snap.total_price
                )?;
            }
        }

        ShellCommand::Floor(floor) => match session.choose_floor(floor) {
            Ok(()) => match floor {
                Some(f) => writeln!(out, "floor {f} selected; choose a room")?,
                None => writeln!(out, "floor cleared")?,
            },
            Err(e) => writeln!(out, "error: {e}")?,
        },

        ShellCommand::Room(room) => match session.choose_room(&room) {
            Ok(()) => writeln!(out, "delivering to room {room}")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },

        ShellCommand::Status => {
            let sel = session.selection();
            writeln!(
                out,
                "floor={} room={} items={} total={cur}{} can_submit={}",
                sel.floor().map(|f| f.to_string()).unwrap_or_else(|| "-".into()),
                sel.room().unwrap_or("-"),
                session.cart().total_items(),
                session.cart().total_price(),
                session.can_submit()
            )?;
        }

        ShellCommand::Submit => match session.submit(backend).await {
            Ok(SubmitOutcome::Confirmed { message, .. }) => writeln!(out, "{message}")?,
            Ok(SubmitOutcome::Failed { message, .. }) => {
                writeln!(out, "{message}")?;
                writeln!(out, "cart and room kept; 'submit' to retry")?;
            }
            Ok(SubmitOutcome::Stale { message, .. }) => writeln!(out, "{message}")?,
            Err(blocked) => writeln!(out, "cannot submit: {blocked}")?,
        },

        ShellCommand::Help => writeln!(out, "{HELP}")?,

        ShellCommand::Quit => {}
    }
    Ok(())
}
