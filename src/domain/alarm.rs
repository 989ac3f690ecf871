//! Error reporters that share one inherited message

pub const ALARM_MESSAGE: &str = "Error! Error!";

/// Anything that can announce an error.
pub trait Alarm {
    fn display_error(&self) -> String {
        ALARM_MESSAGE.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationError;

impl Alarm for ApplicationError {}

/// Adds nothing to `ApplicationError`; the message comes from the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuperBadError;

impl Alarm for SuperBadError {}
