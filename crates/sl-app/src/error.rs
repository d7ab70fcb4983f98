/// Errors that stop a reactive gate loop.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GateError {
    #[error("session store closed")]
    SessionStoreClosed,
    #[error("subscription store closed")]
    SubscriptionStoreClosed,
}
