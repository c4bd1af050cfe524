use std::sync::Arc;

/// A cheaply clonable String whose [`Debug`] output is redacted.
///
/// This is a simple newtype of `Arc<str>` used for the bot token, so the token never ends up in
/// logs or panic messages.
#[derive(Clone)]
pub struct SecretString(Arc<str>);

impl SecretString {
    #[must_use]
    pub fn new(inner: Arc<str>) -> Self {
        Self(inner)
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_tuple(std::any::type_name::<Self>()).field(&"<secret>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SecretString;

    #[test]
    fn debug_is_redacted() {
        let token = SecretString::from("123456:ABC-DEF");

        assert_eq!(token.expose_secret(), "123456:ABC-DEF");
        assert!(!format!("{token:?}").contains("ABC-DEF"));
    }
}
