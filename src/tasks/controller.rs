use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::carousel::Carousel;
use crate::config::Configuration;
use crate::events::{Command, Frame};

/// Owns the carousel state and the autoplay timer.
///
/// Commands arrive from the input side; every state change is published as a
/// fresh [`Frame`] for the presentation side. The timer is held as an
/// `Option<Interval>` rebuilt from the autoplay flag, so rearming replaces
/// the previous registration and at most one timer is ever live.
pub async fn run(
    cfg: Configuration,
    mut commands: Receiver<Command>,
    frames: Sender<Frame>,
    cancel: CancellationToken,
) -> Result<()> {
    let mut deck = Carousel::new(cfg.slide_count, cfg.auto_scroll_interval);
    if cfg.auto_scroll {
        deck.start_autoplay();
    }
    let mut ticker = arm(&deck);

    // Publish the starting position so the presentation reflects slide zero
    // before any input arrives.
    if frames.send(deck.frame()).await.is_err() {
        return Ok(());
    }

    loop {
        select! {
            _ = cancel.cancelled() => break,

            _ = tick(&mut ticker), if ticker.is_some() => {
                deck.next();
                debug!(index = deck.current_index(), "autoplay advance");
                if frames.send(deck.frame()).await.is_err() {
                    break;
                }
            }

            maybe_cmd = commands.recv() => {
                let Some(cmd) = maybe_cmd else { break };
                debug!(?cmd, index = deck.current_index(), "command");
                let autoplay_cmd = matches!(
                    cmd,
                    Command::StartAutoplay | Command::StopAutoplay | Command::ToggleAutoplay
                );
                apply(&mut deck, cmd);
                if autoplay_cmd {
                    ticker = arm(&deck);
                }
                if frames.send(deck.frame()).await.is_err() {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn apply(deck: &mut Carousel, cmd: Command) {
    match cmd {
        Command::Next => deck.next(),
        Command::Previous => deck.previous(),
        Command::Goto(index) => {
            if index >= deck.slide_count() {
                warn!(
                    index,
                    slides = deck.slide_count(),
                    "goto outside slide range; rendering will be off-strip"
                );
            }
            deck.goto(index);
        }
        Command::StartAutoplay => deck.start_autoplay(),
        Command::StopAutoplay => deck.stop_autoplay(),
        Command::ToggleAutoplay => deck.toggle_autoplay(),
    }
}

/// First tick fires one full period after arming, matching a host interval
/// timer rather than tokio's fire-immediately default.
fn arm(deck: &Carousel) -> Option<Interval> {
    deck.autoplay_active().then(|| {
        let period = deck.autoplay_period();
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    })
}

async fn tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        // Branch is disabled when no timer is armed; never resolve.
        None => std::future::pending().await,
    }
}
