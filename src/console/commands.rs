//! Console input parsing

use std::str::FromStr;

use crate::{
    error::ConsoleError,
    lifecycle::LifecycleSignal,
    tasks::{Command, SessionEvent},
};

/// One line typed on the host console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    Event(SessionEvent),
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands: toggle | dismiss | end | duration <secs> | status | help | quit
signals:  resign-active | enter-background | scene-background | become-active | lock | unlock";

impl FromStr for ConsoleInput {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ConsoleError::Empty);
        };

        let command = |c: Command| -> Result<ConsoleInput, ConsoleError> {
            Ok(ConsoleInput::Event(SessionEvent::Command(c)))
        };
        match head.to_ascii_lowercase().as_str() {
            "toggle" => command(Command::ToggleResting),
            "dismiss" => command(Command::DismissAlarm),
            "end" => command(Command::EndWorkout),
            "duration" => {
                let value = words.next().ok_or(ConsoleError::MissingArgument("duration"))?;
                let seconds = value
                    .parse()
                    .map_err(|_| ConsoleError::InvalidNumber(value.to_string()))?;
                command(Command::SetDuration(seconds))
            }
            "status" => Ok(ConsoleInput::Status),
            "help" => Ok(ConsoleInput::Help),
            "quit" | "exit" => Ok(ConsoleInput::Quit),
            _ => head
                .parse::<LifecycleSignal>()
                .map(|signal| ConsoleInput::Event(SessionEvent::Signal(signal))),
        }
    }
}
