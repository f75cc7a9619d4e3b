//! Error/success banner state shared by every form.

use super::api_error::ApiError;

/// Outcome of the last user-initiated action.
///
/// Error and success are mutually exclusive; `begin` clears both so that a
/// new attempt never shows a stale message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionStatus {
    pub error: Option<String>,
    pub success: Option<String>,
    pub busy: bool,
}

impl ActionStatus {
    pub fn begin(&mut self) {
        self.error = None;
        self.success = None;
        self.busy = true;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
        self.busy = false;
    }

    pub fn fail_with(&mut self, err: &ApiError) {
        self.fail(err.user_message());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
        self.busy = false;
    }

    /// Finish without a message (plain reloads)
    pub fn idle(&mut self) {
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_clears_both_messages() {
        let mut status = ActionStatus::default();
        status.fail("boom");
        status.begin();
        assert_eq!(status.error, None);
        assert_eq!(status.success, None);
        assert!(status.busy);
    }

    #[test]
    fn test_success_and_error_are_exclusive() {
        let mut status = ActionStatus::default();
        status.succeed("ok");
        status.fail("later failure");
        assert_eq!(status.success, None);
        assert_eq!(status.error.as_deref(), Some("later failure"));

        status.succeed("ok again");
        assert_eq!(status.error, None);
        assert!(!status.busy);
    }
}
