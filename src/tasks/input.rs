//! Demo input source: one stdin line per interaction.
//!
//! Button and key input map to single words; gestures are spelled as a
//! coordinate trail so the dispatcher sees the same start/move/end sequence
//! a host would deliver:
//!
//! ```text
//! next | n            click the next button
//! prev | p            click the previous button
//! dot <i>             click indicator i
//! left | right        arrow keys (needs keyboard-control)
//! play | stop | toggle autoplay control
//! touch <x0> <x1>...  touch swipe through the x positions
//! drag <x0> <x1>...   mouse drag through the x positions
//! quit | q            exit
//! ```

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::select;
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::events::{ArrowKey, Command, ControlClick, PointerEvent};
use crate::gesture::GestureDispatcher;

pub async fn run(
    mut dispatcher: GestureDispatcher,
    to_controller: Sender<Command>,
    cancel: CancellationToken,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        select! {
            _ = cancel.cancelled() => break,
            maybe_line = lines.next_line() => {
                let Some(line) = maybe_line? else {
                    // stdin closed; shut the whole demo down.
                    cancel.cancel();
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if matches!(line, "quit" | "q") {
                    cancel.cancel();
                    break;
                }
                for cmd in parse_line(&mut dispatcher, line) {
                    if to_controller.send(cmd).await.is_err() {
                        return Ok(());
                    }
                }
            }
        }
    }
    Ok(())
}

/// Translate one input line into commands via the dispatcher. A gesture line
/// can yield several commands (one per threshold crossed); an unrecognized
/// or sub-threshold line yields none.
fn parse_line(dispatcher: &mut GestureDispatcher, line: &str) -> Vec<Command> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Vec::new();
    };
    match head {
        "next" | "n" => vec![dispatcher.click(ControlClick::Next)],
        "prev" | "p" => vec![dispatcher.click(ControlClick::Previous)],
        "dot" => match words.next().and_then(|w| w.parse::<usize>().ok()) {
            Some(i) => vec![dispatcher.click(ControlClick::Indicator(i))],
            None => {
                warn!(line, "dot needs an indicator position");
                Vec::new()
            }
        },
        "left" => dispatcher.key(ArrowKey::Left).into_iter().collect(),
        "right" => dispatcher.key(ArrowKey::Right).into_iter().collect(),
        "play" => vec![Command::StartAutoplay],
        "stop" => vec![Command::StopAutoplay],
        "toggle" | "t" => vec![Command::ToggleAutoplay],
        "touch" | "drag" => {
            let xs: Vec<f64> = words.filter_map(|w| w.parse().ok()).collect();
            let Some((first, rest)) = xs.split_first() else {
                warn!(line, "gesture needs at least a start coordinate");
                return Vec::new();
            };
            let mut cmds = Vec::new();
            let touch = head == "touch";
            feed(dispatcher, start_event(touch, *first), &mut cmds);
            for x in rest {
                feed(dispatcher, move_event(touch, *x), &mut cmds);
            }
            feed(dispatcher, end_event(touch), &mut cmds);
            cmds
        }
        _ => {
            warn!(line, "unrecognized input");
            Vec::new()
        }
    }
}

fn feed(dispatcher: &mut GestureDispatcher, event: PointerEvent, out: &mut Vec<Command>) {
    if let Some(cmd) = dispatcher.pointer(event) {
        out.push(cmd);
    }
}

fn start_event(touch: bool, x: f64) -> PointerEvent {
    if touch {
        PointerEvent::TouchStart { x }
    } else {
        PointerEvent::MouseDown { x }
    }
}

fn move_event(touch: bool, x: f64) -> PointerEvent {
    if touch {
        PointerEvent::TouchMove { x }
    } else {
        PointerEvent::MouseMove { x }
    }
}

fn end_event(touch: bool) -> PointerEvent {
    if touch {
        PointerEvent::TouchEnd
    } else {
        PointerEvent::MouseUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_and_dots_route_directly() {
        let mut d = GestureDispatcher::new(false);
        assert_eq!(parse_line(&mut d, "next"), vec![Command::Next]);
        assert_eq!(parse_line(&mut d, "p"), vec![Command::Previous]);
        assert_eq!(parse_line(&mut d, "dot 2"), vec![Command::Goto(2)]);
    }

    #[test]
    fn swipe_line_commits_through_the_dispatcher() {
        let mut d = GestureDispatcher::new(false);
        assert_eq!(parse_line(&mut d, "touch 100 40"), vec![Command::Next]);
    }

    #[test]
    fn sub_threshold_swipe_yields_nothing() {
        let mut d = GestureDispatcher::new(false);
        assert_eq!(parse_line(&mut d, "touch 100 70"), Vec::new());
    }

    #[test]
    fn multi_move_drag_commits_one_step_per_crossing() {
        let mut d = GestureDispatcher::new(false);
        assert_eq!(
            parse_line(&mut d, "drag 300 120 60"),
            vec![Command::Next, Command::Next]
        );
    }

    #[test]
    fn arrow_keys_respect_keyboard_control() {
        let mut enabled = GestureDispatcher::new(true);
        assert_eq!(parse_line(&mut enabled, "right"), vec![Command::Next]);

        let mut disabled = GestureDispatcher::new(false);
        assert_eq!(parse_line(&mut disabled, "right"), Vec::new());
    }

    #[test]
    fn garbage_lines_yield_nothing() {
        let mut d = GestureDispatcher::new(true);
        assert_eq!(parse_line(&mut d, "frobnicate 12"), Vec::new());
        assert_eq!(parse_line(&mut d, "dot two"), Vec::new());
        assert_eq!(parse_line(&mut d, "touch"), Vec::new());
    }
}
