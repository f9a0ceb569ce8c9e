use pager_layout::{Orientation, ReaderPreferences, ViewerEvent, ViewerSession};
use tokio::sync::mpsc;

use crate::{LayoutSnapshot, ReaderCommand, ReaderUpdate};

/// Async worker task that owns the viewer session and applies reader commands
pub async fn worker_task(
    preferences: ReaderPreferences,
    orientation: Orientation,
    mut command_rx: mpsc::UnboundedReceiver<ReaderCommand>,
    update_tx: mpsc::UnboundedSender<ReaderUpdate>,
) {
    let mut session = ViewerSession::new(preferences, orientation);

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut session, &mut command_rx, &update_tx).await;
    }

    log::debug!("Reader command channel closed, stopping worker");
}

async fn process_command(
    cmd: ReaderCommand,
    session: &mut ViewerSession,
    command_rx: &mut mpsc::UnboundedReceiver<ReaderCommand>,
    update_tx: &mpsc::UnboundedSender<ReaderUpdate>,
) {
    match cmd {
        ReaderCommand::LoadChapter {
            chapter,
            requested_page,
            restore,
        } => {
            log::info!(
                "Loading chapter {} ({} pages) at page {}",
                chapter.chapter_id,
                chapter.len(),
                requested_page
            );
            apply(
                session,
                ViewerEvent::ChapterLoaded {
                    chapter,
                    requested_page,
                    restore,
                },
                update_tx,
            );
        }
        ReaderCommand::OrientationChanged(mut orientation) => {
            // Drain queued rotations, keeping only the most recent
            let mut pending = None;
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let ReaderCommand::OrientationChanged(newer) = next_cmd {
                    log::debug!("Discarding queued orientation change, using newer one");
                    orientation = newer;
                } else {
                    pending = Some(next_cmd);
                    break;
                }
            }

            apply(session, ViewerEvent::OrientationChanged(orientation), update_tx);

            // The command that stopped the drain runs after the rotation
            if let Some(next_cmd) = pending {
                Box::pin(process_command(next_cmd, session, command_rx, update_tx)).await;
            }
        }
        ReaderCommand::PreferencesChanged(preferences) => {
            apply(session, ViewerEvent::PreferencesChanged(preferences), update_tx);
        }
        ReaderCommand::ToggleDoublePages => {
            if require_chapter(session, update_tx) {
                apply(session, ViewerEvent::ToggleDoublePages, update_tx);
            }
        }
        ReaderCommand::ToggleShift => {
            if require_chapter(session, update_tx) {
                apply(session, ViewerEvent::ToggleShift, update_tx);
            }
        }
        ReaderCommand::SelectSlot {
            mut slot,
            mut focus,
        } => {
            let mut pending = None;
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let ReaderCommand::SelectSlot {
                    slot: new_slot,
                    focus: new_focus,
                } = next_cmd
                {
                    log::debug!("Discarding queued slot selection, using newer one");
                    slot = new_slot;
                    focus = new_focus;
                } else {
                    pending = Some(next_cmd);
                    break;
                }
            }

            if require_chapter(session, update_tx) {
                apply(session, ViewerEvent::PageSelected { slot, focus }, update_tx);
            }

            if let Some(next_cmd) = pending {
                Box::pin(process_command(next_cmd, session, command_rx, update_tx)).await;
            }
        }
        ReaderCommand::SaveState => {
            let _ = update_tx.send(ReaderUpdate::StateSaved(session.save_state()));
        }
        ReaderCommand::Close => {
            *session = session.reduce(ViewerEvent::SessionEnded);
            let _ = update_tx.send(ReaderUpdate::Closed);
        }
    }
}

fn apply(
    session: &mut ViewerSession,
    event: ViewerEvent,
    update_tx: &mpsc::UnboundedSender<ReaderUpdate>,
) {
    *session = session.reduce(event);
    let _ = update_tx.send(ReaderUpdate::LayoutChanged(LayoutSnapshot::from_session(
        session,
    )));
}

fn require_chapter(
    session: &ViewerSession,
    update_tx: &mpsc::UnboundedSender<ReaderUpdate>,
) -> bool {
    if session.chapter().is_some() {
        return true;
    }
    log::warn!("Reader command received with no chapter loaded");
    let _ = update_tx.send(ReaderUpdate::Error {
        message: "No chapter loaded".to_string(),
    });
    false
}
