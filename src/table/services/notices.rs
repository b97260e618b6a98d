//! Notification texts shown to users.

use crate::notification::domain::Notification;

pub(super) const NO_CHANGES: &str = "No changes to deploy";
pub(super) const DEPLOY_FAILED: &str = "Deployment failed";
pub(super) const DEPLOY_COMPLETED: &str = "Deployment Completed";
pub(super) const DEPLOY_FINISHED_WITH_ERRORS: &str = "Deployment Finished with Errors";
pub(super) const DEPLOY_TIMED_OUT: &str = "Deployment Timed Out";
pub(super) const DELETE_ENQUEUED: &str = "Delete enqueued";
pub(super) const DELETE_FAILED: &str = "Delete failed";
pub(super) const OBJECT_TYPE_FAILED: &str = "Failed to detect object type";
pub(super) const SCHEMA_FAILED: &str = "Failed to load object metadata";

const DEPLOYED_MESSAGE: &str = "CMDT records were successfully deployed";
const UNTRACKED_MESSAGE: &str = "Saved (test or delete-only path).";
const SEE_ERROR_LOGS: &str = "See Error Logs.";

pub(super) fn deployed(untracked: bool) -> Notification {
    let message = if untracked {
        UNTRACKED_MESSAGE
    } else {
        DEPLOYED_MESSAGE
    };
    Notification::success(DEPLOY_COMPLETED, message)
}

pub(super) fn finished_with_errors(detail: Option<&str>) -> Notification {
    Notification::error(DEPLOY_FINISHED_WITH_ERRORS, detail.unwrap_or(SEE_ERROR_LOGS))
}

pub(super) fn timed_out(status_checks: u32) -> Notification {
    Notification::error(
        DEPLOY_TIMED_OUT,
        format!("Stopped polling after {status_checks} status checks."),
    )
}

pub(super) fn delete_enqueued(count: usize) -> Notification {
    Notification::success(
        DELETE_ENQUEUED,
        format!("{count} record(s) scheduled for deletion"),
    )
}
