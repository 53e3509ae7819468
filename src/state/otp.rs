//! One-time-code entry and the resend countdown.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use crate::config::{OTP_LENGTH, OTP_RESEND_SECS};

/// Code input, verification flag and resend countdown for the OTP view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpState {
    pub code: String,
    pub seconds_left: u32,
    pub verifying: bool,
    pub resending: bool,
}

impl Default for OtpState {
    fn default() -> Self {
        Self { code: String::new(), seconds_left: OTP_RESEND_SECS, verifying: false, resending: false }
    }
}

/// Keep ASCII alphanumerics, upper-case them, and cap at [`OTP_LENGTH`].
pub fn sanitize_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(OTP_LENGTH)
        .collect()
}

impl OtpState {
    pub fn is_complete(&self) -> bool {
        self.code.len() == OTP_LENGTH
    }

    /// Replace the code with the sanitized `raw` input.
    ///
    /// Returns the code to verify when this edit completed it; editing an
    /// already-complete code or typing during verification never re-triggers.
    pub fn input(&mut self, raw: &str) -> Option<String> {
        if self.verifying {
            return None;
        }
        let was_complete = self.is_complete();
        self.code = sanitize_code(raw);
        if was_complete { None } else { self.begin_verify() }
    }

    /// Start verifying the current code if it is complete and idle.
    pub fn begin_verify(&mut self) -> Option<String> {
        if !self.is_complete() || self.verifying {
            return None;
        }
        self.verifying = true;
        Some(self.code.clone())
    }

    /// Verification was rejected: clear the input for another try.
    pub fn verify_failed(&mut self) {
        self.verifying = false;
        self.code.clear();
    }

    /// Advance the countdown by one second, stopping at zero.
    pub fn tick(&mut self) {
        self.seconds_left = self.seconds_left.saturating_sub(1);
    }

    pub fn can_resend(&self) -> bool {
        self.seconds_left == 0 && !self.resending
    }

    /// Mark a resend in flight. Returns `false` while the countdown runs.
    pub fn begin_resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.resending = true;
        true
    }

    pub fn resend_succeeded(&mut self) {
        self.resending = false;
        self.seconds_left = OTP_RESEND_SECS;
        self.code.clear();
    }

    pub fn resend_failed(&mut self) {
        self.resending = false;
    }

    /// Countdown as `m:ss`.
    pub fn countdown_label(&self) -> String {
        format!("{}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }
}
