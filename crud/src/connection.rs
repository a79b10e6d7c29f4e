use crate::labels::Locale;
use std::fmt;

/// Lifecycle of the realtime channel as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Connected,
    ConnectionLost {
        attempt: u32,
        retry_in_ms: u64,
        reason: String,
    },
    Disconnected,
}

impl ConnectionState {
    pub fn lost(attempt: u32, retry_in_ms: u64, reason: impl Into<String>) -> Self {
        ConnectionState::ConnectionLost {
            attempt,
            retry_in_ms,
            reason: reason.into(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    /// Whether the operator can ask for a new connection.
    pub fn can_reconnect(&self) -> bool {
        matches!(
            self,
            ConnectionState::ConnectionLost { .. } | ConnectionState::Disconnected
        )
    }

    /// Status text in the given language.
    pub fn describe(&self, locale: Locale) -> String {
        match (self, locale) {
            (ConnectionState::Connecting, Locale::ZhCn) => "正在连接...".to_string(),
            (ConnectionState::Connecting, Locale::En) => "Connecting...".to_string(),
            (ConnectionState::Connected, Locale::ZhCn) => "已连接".to_string(),
            (ConnectionState::Connected, Locale::En) => "Connected".to_string(),
            (
                ConnectionState::ConnectionLost {
                    attempt,
                    retry_in_ms,
                    reason,
                },
                locale,
            ) => {
                let seconds = *retry_in_ms as f64 / 1000.0;
                match locale {
                    Locale::ZhCn => {
                        format!("连接中断（{reason}），{seconds:.1} 秒后第 {attempt} 次重试")
                    }
                    Locale::En => {
                        format!("Connection lost ({reason}), retry #{attempt} in {seconds:.1}s")
                    }
                }
            }
            (ConnectionState::Disconnected, Locale::ZhCn) => "已断开".to_string(),
            (ConnectionState::Disconnected, Locale::En) => "Disconnected".to_string(),
        }
    }

    /// CSS modifier for the status dot.
    pub fn dot_class(&self) -> &'static str {
        match self {
            ConnectionState::Connected => "status-dot healthy",
            ConnectionState::Connecting => "status-dot loading",
            ConnectionState::ConnectionLost { .. } | ConnectionState::Disconnected => {
                "status-dot error"
            }
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Locale::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_state_display() {
        let state = ConnectionState::lost(3, 2_500, "socket closed");
        assert_eq!(
            state.to_string(),
            "Connection lost (socket closed), retry #3 in 2.5s"
        );
        assert_eq!(state.dot_class(), "status-dot error");
        assert!(!state.is_connected());
    }

    #[test]
    fn test_default_is_connecting() {
        let state = ConnectionState::default();
        assert_eq!(state, ConnectionState::Connecting);
        assert_eq!(state.dot_class(), "status-dot loading");
    }

    #[test]
    fn test_connected_is_healthy() {
        assert!(ConnectionState::Connected.is_connected());
        assert_eq!(ConnectionState::Connected.dot_class(), "status-dot healthy");
    }

    #[test]
    fn test_zh_descriptions() {
        assert_eq!(ConnectionState::Connecting.describe(Locale::ZhCn), "正在连接...");
        assert_eq!(ConnectionState::Connected.describe(Locale::ZhCn), "已连接");
        assert_eq!(ConnectionState::Disconnected.describe(Locale::ZhCn), "已断开");
        assert_eq!(
            ConnectionState::lost(2, 1_000, "超时").describe(Locale::ZhCn),
            "连接中断（超时），1.0 秒后第 2 次重试"
        );
    }

    #[test]
    fn test_reconnect_offered_only_when_down() {
        assert!(!ConnectionState::Connecting.can_reconnect());
        assert!(!ConnectionState::Connected.can_reconnect());
        assert!(ConnectionState::Disconnected.can_reconnect());
        assert!(ConnectionState::lost(1, 500, "closed").can_reconnect());
    }
}
