/// Single-flight gate for the comment form. The form may only have one
/// create request in the air; extra submit triggers while it is pending are
/// dropped outright, never queued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGate {
    in_flight: bool,
}

impl SubmitGate {
    /// Claims the gate. Returns `true` exactly when the caller may start a
    /// submission; the gate stays closed until `finish` is called.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Reopens the gate. Called on every outcome, success or failure.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_trigger_while_pending_is_dropped() {
        let mut gate = SubmitGate::default();
        assert!(gate.try_begin());
        // A double-click or repeated Enter lands here before the request
        // resolves; it must not start a second one.
        assert!(!gate.try_begin());
        assert!(!gate.try_begin());
        assert!(gate.is_pending());
    }

    #[test]
    fn gate_reopens_after_completion() {
        let mut gate = SubmitGate::default();
        assert!(gate.try_begin());
        gate.finish();
        assert!(!gate.is_pending());
        assert!(gate.try_begin());
    }

    #[test]
    fn failed_submission_still_reopens_the_gate() {
        let mut gate = SubmitGate::default();
        assert!(gate.try_begin());
        // Error paths call finish too; the user has to be able to retry.
        gate.finish();
        assert!(gate.try_begin());
    }
}
