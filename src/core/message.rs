use std::fmt;

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Coach,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Coach => "coach",
        }
    }

    pub fn is_user(self) -> bool {
        self == Sender::User
    }

    pub fn is_coach(self) -> bool {
        self == Sender::Coach
    }
}

impl AsRef<str> for Sender {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for Sender {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Sender::User),
            "coach" => Ok(Sender::Coach),
            _ => Err(format!("invalid sender: {value}")),
        }
    }
}

/// Per-session message identifier, strictly increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    pub fn first() -> Self {
        MessageId(1)
    }

    pub fn next(self) -> Self {
        MessageId(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, Sender::User, text)
    }

    pub fn coach(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, Sender::Coach, text)
    }

    pub fn is_user(&self) -> bool {
        self.sender.is_user()
    }

    pub fn is_coach(&self) -> bool {
        self.sender.is_coach()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ids_render_as_decimal_strings() {
        let id = MessageId::first();
        assert_eq!(id.to_string(), "1");
        assert_eq!(id.next().next().to_string(), "3");
        assert!(id < id.next());
    }

    #[test]
    fn constructors_set_sender() {
        let user = Message::user(MessageId::first(), "hi");
        let coach = Message::coach(MessageId::first().next(), "hello");
        assert!(user.is_user());
        assert!(coach.is_coach());
        assert_eq!(coach.sender.as_str(), "coach");
    }

    #[test]
    fn invalid_sender_strings_are_rejected() {
        assert_eq!(Sender::try_from("user"), Ok(Sender::User));
        assert!(Sender::try_from("assistant").is_err());
    }
}
