use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;

use crate::events::Frame;

/// Presentation collaborator for the demo binary: prints each frame as the
/// strip transform plus the indicator row.
pub async fn run(mut frames: Receiver<Frame>, cancel: CancellationToken) -> Result<()> {
    loop {
        select! {
            _ = cancel.cancelled() => break,
            maybe_frame = frames.recv() => {
                let Some(frame) = maybe_frame else { break };
                println!("{}", strip(&frame));
            }
        }
    }
    Ok(())
}

fn strip(frame: &Frame) -> String {
    let dots: Vec<&str> = frame
        .indicators
        .iter()
        .map(|active| if *active { "*" } else { "o" })
        .collect();
    format!(
        "translateX({:.0}%)  [{}]",
        frame.translate_percent,
        dots.join(" ")
    )
}
