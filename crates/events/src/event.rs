use chrono::{DateTime, Utc};

/// A fact recorded against a cart.
///
/// Events are never edited after they are emitted. Replaying them in order
/// against an empty aggregate rebuilds its state.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted event name, e.g. `cart.entry.added`.
    fn event_type(&self) -> &'static str;

    /// Payload schema version.
    fn version(&self) -> u32;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// `event_type@vN`, used as the structured log label.
    fn label(&self) -> String {
        format!("{}@v{}", self.event_type(), self.version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Ping(DateTime<Utc>);

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "test.ping"
        }

        fn version(&self) -> u32 {
            2
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn label_combines_type_and_version() {
        assert_eq!(Ping(Utc::now()).label(), "test.ping@v2");
    }
}
