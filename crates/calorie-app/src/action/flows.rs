use std::time::Duration;

use futures_channel::oneshot;

use crate::{
    action::{Action, CameraAction, ConfirmKind, ConfirmResult, ModalRequest, UiAction},
    flow_executor::{FlowExecutor, FlowHandle, FlowTaskHandle},
};

async fn show_confirm_dialog(handle: &FlowHandle, kind: ConfirmKind) -> ConfirmResult {
    let (responder, receiver) = oneshot::channel();
    handle.request_action(
        UiAction::OpenModal(ModalRequest::Confirm {
            kind,
            responder: Some(responder),
        })
        .into(),
    );
    match receiver.await {
        Ok(result) => result,
        Err(_) => ConfirmResult::Cancelled,
    }
}

/// Requests `action` once `delay` has elapsed, unless the returned handle is
/// aborted first.
pub(crate) fn spawn_dismiss_after(
    executor: &mut FlowExecutor,
    delay: Duration,
    action: Action,
) -> FlowTaskHandle {
    let handle = executor.handle();
    executor.spawn(async move {
        handle.sleep(delay).await;
        handle.request_action(action);
    })
}

pub(crate) fn spawn_exit_flow(executor: &mut FlowExecutor) -> FlowTaskHandle {
    let handle = executor.handle();
    executor.spawn(exit_flow(handle))
}

async fn exit_flow(handle: FlowHandle) {
    match show_confirm_dialog(&handle, ConfirmKind::ExitApp).await {
        ConfirmResult::Confirmed => handle.request_action(UiAction::RequestExit.into()),
        ConfirmResult::Cancelled => log::debug!("exit cancelled"),
    }
}

pub(crate) fn spawn_camera_access_flow(executor: &mut FlowExecutor) -> FlowTaskHandle {
    let handle = executor.handle();
    executor.spawn(camera_access_flow(handle))
}

/// Asks for camera access and reports the answer to the camera screen.
async fn camera_access_flow(handle: FlowHandle) {
    let action = match show_confirm_dialog(&handle, ConfirmKind::CameraAccess).await {
        ConfirmResult::Confirmed => CameraAction::AccessGranted,
        ConfirmResult::Cancelled => CameraAction::AccessDenied,
    };
    handle.request_action(action.into());
}
