//! Native session for the shopfront demo pages.
//!
//! Each invocation plays one page lifecycle: restore preference state from
//! the cookie file, apply the requested mutation, render the result, then
//! push the new state to the server best-effort. A failed push is logged
//! and dropped — local rendering never waits on, or fails because of, the
//! network. Only `Set-Cookie` values from a successful push flow back into
//! the cookie file, exactly as a browser would persist them; a lost push
//! therefore leaves the persisted state one step behind, which is the
//! documented at-most-once delivery guarantee.

mod client;
mod cookiefile;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tokio::time::{Duration, sleep};

use prefs::cart::Item;
use prefs::color::Rgb;
use prefs::store::PrefState;
use prefs::transition::Transition;

use crate::client::SyncClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cookie file error: {0}")]
    CookieFile(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shopfront", about = "Shopfront preference CLI")]
struct Cli {
    #[arg(long, env = "SHOPFRONT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// File standing in for the browser cookie store.
    #[arg(long, env = "SHOPFRONT_COOKIE_FILE", default_value = ".shopfront-cookies")]
    cookie_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current preference state.
    Show,
    /// Add one of an item to the cart.
    Add { item: Item },
    /// Remove one of an item from the cart (clamped at zero).
    Remove { item: Item },
    /// Set the color channels (clamped to 0..=255).
    Color { red: i64, green: i64, blue: i64 },
    /// Animate from the current color to a target, then save it.
    Fade { red: i64, green: i64, blue: i64 },
    /// Re-push the current state without mutating it.
    Push,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = SyncClient::new(cli.base_url.clone());

    let cookies = cookiefile::load(&cli.cookie_file)?;
    let mut state = PrefState::load(&cookies);

    let set_cookies = match cli.command {
        Command::Show => {
            render(&state);
            Vec::new()
        }
        Command::Add { item } => {
            state.add_one(item);
            render(&state);
            client.push_cart(state.cart).await
        }
        Command::Remove { item } => {
            state.remove_one(item);
            render(&state);
            client.push_cart(state.cart).await
        }
        Command::Color { red, green, blue } => {
            state.set_color(clamped(red, green, blue));
            render(&state);
            client.push_color(state.color).await
        }
        Command::Fade { red, green, blue } => {
            let target = clamped(red, green, blue);
            run_fade(&mut state, target).await;
            render(&state);
            client.push_color(state.color).await
        }
        Command::Push => {
            render(&state);
            let mut all = client.push_cart(state.cart).await;
            all.extend(client.push_color(state.color).await);
            all
        }
    };

    if !set_cookies.is_empty() {
        cookiefile::apply(&cli.cookie_file, &cookies, &set_cookies)?;
    }
    Ok(())
}

fn clamped(red: i64, green: i64, blue: i64) -> Rgb {
    Rgb::new(Rgb::clamp_channel(red), Rgb::clamp_channel(green), Rgb::clamp_channel(blue))
}

fn render(state: &PrefState) {
    for line in state.render() {
        println!("{line}");
    }
}

/// Animate the displayed color on a ~16ms frame clock. The loop samples the
/// transition with real elapsed time, so it always lands exactly on the
/// target within the configured duration and stops.
async fn run_fade(state: &mut PrefState, target: Rgb) {
    let transition = Transition::new(state.color, target);
    let began = Instant::now();
    loop {
        let elapsed = u32::try_from(began.elapsed().as_millis()).unwrap_or(u32::MAX);
        let color = transition.sample(elapsed);
        print!("{}", swatch(color));
        let _ = std::io::stdout().flush();
        if transition.is_done(elapsed) {
            break;
        }
        sleep(Duration::from_millis(16)).await;
    }
    println!();
    state.set_color(target);
}

/// A colored block using a 24-bit ANSI background escape.
fn swatch(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m \x1b[0m", color.red, color.green, color.blue)
}
