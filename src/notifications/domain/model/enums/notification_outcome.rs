#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationOutcome {
    Sent,
    /// Notifications only leave production services.
    SkippedOutsideProduction,
}
