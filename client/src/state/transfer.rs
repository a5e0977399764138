//! Step machine for the transaction-signing wizard.
//!
//! DESIGN
//! ======
//! The wizard walks a fixed forward sequence; the only backward edge is the
//! failure path from the busy steps to `Sign`, so a failed signing or
//! execution returns the user to the confirmation screen with the prepared
//! transaction intact.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

/// Wizard position, in visit order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransferStep {
    /// Entering beneficiary, amount, and description.
    #[default]
    Form,
    /// Transaction created; awaiting the user's confirmation to sign.
    Sign,
    /// Digest preparation in progress.
    Hashing,
    /// Waiting for the backend signing call.
    Signing,
    /// Waiting for the backend execution call.
    Executing,
    /// Funds moved; receipt shown.
    Complete,
}

impl TransferStep {
    /// Progress bar percentage for this step.
    pub fn progress(self) -> u8 {
        match self {
            Self::Form => 0,
            Self::Sign => 10,
            Self::Hashing => 20,
            Self::Signing => 50,
            Self::Executing => 75,
            Self::Complete => 100,
        }
    }

    /// Whether a backend call (or staged delay) is in flight.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Hashing | Self::Signing | Self::Executing)
    }

    /// Step to land on when signing or execution fails.
    ///
    /// Busy steps regress to `Sign`; the rest stay put.
    pub fn on_failure(self) -> Self {
        if self.is_busy() { Self::Sign } else { self }
    }

    /// Heading shown above the wizard body.
    pub fn label(self) -> &'static str {
        match self {
            Self::Form => "Transaction Details",
            Self::Sign => "Ready to Sign",
            Self::Hashing => "Preparing Digest",
            Self::Signing => "Generating SDitH Signature",
            Self::Executing => "Executing Transfer",
            Self::Complete => "Transfer Complete",
        }
    }
}
