//! Drive list handlers: selection, reorder and delete

use drivebay_core::prelude::*;

use crate::delete::PendingDelete;
use crate::state::{AppState, UiMode};
use crate::store::DriveStore;

use super::{BusyTask, UpdateAction, UpdateResult};

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    let len = state.drive_count();
    state.drive_list.select_next(len);
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.drive_list.select_previous();
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    state.drive_list.select_first();
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    let len = state.drive_count();
    state.drive_list.select_last(len);
    UpdateResult::none()
}

pub fn handle_toggle_mark(state: &mut AppState) -> UpdateResult {
    let len = state.drive_count();
    state.drive_list.toggle_mark(len);
    UpdateResult::none()
}

/// Reorder runs inline: it is a single in-memory move and never waits on
/// the busy slot. A rejected move is logged and the list stays as it was.
pub fn handle_move_drive(state: &mut AppState, from: usize, to: usize) -> UpdateResult {
    match state.config.transact(|c| c.move_drive(from, to)) {
        Ok(()) => {
            state.sync_with_config();
            state.drive_list.selected = to;
        }
        Err(e) => warn!("Move {} -> {} rejected: {}", from, to, e),
    }
    UpdateResult::none()
}

/// Store the pending selection and ask for confirmation.
///
/// A second request replaces the first.
pub fn handle_request_delete(state: &mut AppState, indices: Vec<usize>) -> UpdateResult {
    let pending = match state
        .config
        .read(|c| PendingDelete::resolve(c, &indices))
    {
        Ok(pending) => pending,
        Err(e) => {
            warn!("Cannot resolve delete selection: {}", e);
            None
        }
    };

    match pending {
        Some(pending) => {
            debug!("Delete requested for indices {:?}", pending.indices);
            state.pending_delete = Some(pending);
            state.ui_mode = UiMode::ConfirmDelete;
        }
        None => debug!("Delete request for {:?} matched no drives", indices),
    }
    UpdateResult::none()
}

pub fn handle_confirm_delete(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    match state.pending_delete.take() {
        Some(pending) => run_busy(state, BusyTask::Delete { ids: pending.ids }),
        None => UpdateResult::none(),
    }
}

pub fn handle_cancel_delete(state: &mut AppState) -> UpdateResult {
    state.pending_delete = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

/// Claim the busy slot for `task` and hand it to the event loop
pub(super) fn run_busy(state: &mut AppState, task: BusyTask) -> UpdateResult {
    if !state.busy.begin(task.operation()) {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::RunBusy(task))
}
