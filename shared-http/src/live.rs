//! Channel-side state of the live user list, independent of any UI toolkit.

use crate::api::{CONNECT_EVENT, ConnectEvent, InboundEvent, decode_inbound, encode_outbound};
use crate::error::ProtocolError;
use crud::{ChannelLog, Locale, UserRecord};
use futures::{Sink, SinkExt};
use std::fmt::Display;
use tracing::debug;

/// What a frame changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    LogLine,
    Users(usize),
    Ignored,
}

/// Latest user list and acknowledgment log.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveModel {
    users: Vec<UserRecord>,
    log: ChannelLog,
    locale: Locale,
}

impl LiveModel {
    pub fn new(locale: Locale, log_capacity: usize) -> Self {
        Self {
            users: Vec::new(),
            log: ChannelLog::with_capacity(log_capacity),
            locale,
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn log(&self) -> &ChannelLog {
        &self.log
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Decode one text frame and apply it. On error nothing changes.
    pub fn apply_frame(&mut self, frame: &str) -> Result<Applied, ProtocolError> {
        match decode_inbound(frame) {
            Ok(event) => self.apply(event),
            Err(ProtocolError::UnknownEvent(name)) => {
                debug!("Ignoring event '{}'", name);
                Ok(Applied::Ignored)
            }
            Err(e) => Err(e),
        }
    }

    pub fn apply(&mut self, event: InboundEvent) -> Result<Applied, ProtocolError> {
        match event {
            InboundEvent::ServerResponse(response) => {
                self.log.push_received(self.locale, &response.data);
                Ok(Applied::LogLine)
            }
            InboundEvent::UserResponse(response) => {
                let records = response.records()?;
                debug!("Received {} users", records.len());
                self.users = records;
                Ok(Applied::Users(self.users.len()))
            }
        }
    }
}

/// Connect step of a session: send the `connect_event` greeting once.
///
/// `wrap` turns the text frame into the sink's message type.
pub async fn greet<S, M>(sink: &mut S, wrap: impl FnOnce(String) -> M) -> crud::Result<()>
where
    S: Sink<M> + Unpin,
    S::Error: Display,
{
    let frame = encode_outbound(CONNECT_EVENT, &ConnectEvent::greeting())?;
    sink.send(wrap(frame))
        .await
        .map_err(|e| crud::Error::ConnectionLost(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use serde_json::json;

    fn user_frame(users: serde_json::Value) -> String {
        json!({ "event": "user_response", "data": { "data": [users] } }).to_string()
    }

    fn user(id: i64, name: &str) -> serde_json::Value {
        json!({ "id": id, "username": name, "email": format!("{name}@x.com"), "role": false, "status": true })
    }

    #[test]
    fn test_user_list_is_replaced_wholesale() {
        let mut model = LiveModel::new(Locale::En, 10);

        let first = user_frame(json!([user(1, "alice"), user(2, "bob"), user(3, "carol")]));
        assert_eq!(model.apply_frame(&first).unwrap(), Applied::Users(3));

        let second = user_frame(json!([user(9, "zoe")]));
        assert_eq!(model.apply_frame(&second).unwrap(), Applied::Users(1));

        assert_eq!(model.users().len(), 1);
        assert_eq!(model.users()[0].username, "zoe");
    }

    #[test]
    fn test_empty_list_clears_table() {
        let mut model = LiveModel::new(Locale::En, 10);
        model.apply_frame(&user_frame(json!([user(1, "alice")]))).unwrap();
        model.apply_frame(&user_frame(json!([]))).unwrap();
        assert!(model.users().is_empty());
    }

    #[test]
    fn test_malformed_list_keeps_previous_users() {
        let mut model = LiveModel::new(Locale::En, 10);
        model.apply_frame(&user_frame(json!([user(1, "alice")]))).unwrap();

        let broken = user_frame(json!([{ "id": 2, "username": "bob" }]));
        let err = model.apply_frame(&broken).unwrap_err();

        assert!(matches!(err, ProtocolError::MalformedPayload { event: "user_response", .. }));
        assert_eq!(model.users().len(), 1);
        assert_eq!(model.users()[0].username, "alice");
    }

    #[test]
    fn test_server_response_adds_one_log_line() {
        let mut model = LiveModel::new(Locale::ZhCn, 10);
        let frame = r#"{"event": "server_response", "data": {"data": "hello"}}"#;

        assert_eq!(model.apply_frame(frame).unwrap(), Applied::LogLine);
        assert_eq!(model.log().len(), 1);
        assert_eq!(model.log().lines().next(), Some("接收 : hello"));
        assert!(model.users().is_empty());
    }

    #[test]
    fn test_unknown_event_is_ignored() {
        let mut model = LiveModel::new(Locale::En, 10);
        let applied = model.apply_frame(r#"{"event": "ping", "data": {}}"#).unwrap();

        assert_eq!(applied, Applied::Ignored);
        assert!(model.log().is_empty());
        assert!(model.users().is_empty());
    }

    #[test]
    fn test_garbage_frame_changes_nothing() {
        let mut model = LiveModel::new(Locale::En, 10);
        assert!(matches!(
            model.apply_frame("not json"),
            Err(ProtocolError::MalformedEnvelope(_))
        ));
        assert!(model.log().is_empty());
    }

    #[test]
    fn test_greet_sends_exactly_one_frame() {
        let (mut tx, mut rx) = mpsc::unbounded::<String>();

        block_on(greet(&mut tx, |text| text)).unwrap();

        let frame = rx.try_next().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(
            value,
            json!({ "event": "connect_event", "data": { "data": "我已连接上服务端！" } })
        );
        assert!(rx.try_next().is_err());
    }

    #[test]
    fn test_each_connection_is_greeted_once() {
        for _ in 0..3 {
            let (mut tx, mut rx) = mpsc::unbounded::<String>();
            block_on(greet(&mut tx, |text| text)).unwrap();
            drop(tx);

            let frames: Vec<String> = block_on(futures::StreamExt::collect(&mut rx));
            assert_eq!(frames.len(), 1);
        }
    }

    #[test]
    fn test_greet_on_closed_socket_is_connection_lost() {
        let (mut tx, rx) = mpsc::unbounded::<String>();
        drop(rx);

        let err = block_on(greet(&mut tx, |text| text)).unwrap_err();
        assert!(matches!(err, crud::Error::ConnectionLost(_)));
    }
}
