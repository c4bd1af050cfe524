//! A collection of newtypes defining type-strong IDs.

use std::fmt;

/// The Telegram id of a user, used as the owner of a sticker set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Retrieves the inner id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> UserId {
        UserId(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> i64 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::UserId;

    #[test]
    fn test_formatters() {
        assert_eq!(UserId(1).to_string(), "1");
        assert_eq!(UserId(-100_123).to_string(), "-100123");
    }
}
