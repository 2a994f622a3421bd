//! Adapters from axum's WebSocket halves to the text frames a
//! [`Session`](livetab_core::Session) reads and writes.

use axum::extract::ws::Message;
use futures::{future, Sink, SinkExt, Stream, StreamExt};

/// Inbound text frames. Ends at the client's close frame; binary frames
/// are read as lossy UTF-8 and control frames are skipped.
pub fn reader<S>(stream: S) -> impl Stream<Item = Result<String, axum::Error>> + Send + 'static
where
    S: Stream<Item = Result<Message, axum::Error>> + Send + 'static,
{
    stream
        .take_while(|message| future::ready(!matches!(message, Ok(Message::Close(_)))))
        .filter_map(|message| {
            future::ready(match message {
                Ok(Message::Text(text)) => Some(Ok(text.as_str().to_owned())),
                Ok(Message::Binary(bytes)) => Some(Ok(String::from_utf8_lossy(&bytes).into_owned())),
                Ok(_) => None,
                Err(err) => Some(Err(err)),
            })
        })
}

/// Outbound text frames.
pub fn writer<S>(sink: S) -> impl Sink<String, Error = axum::Error> + Send + 'static
where
    S: Sink<Message, Error = axum::Error> + Send + 'static,
{
    sink.with(|text: String| future::ready(Ok::<_, axum::Error>(Message::Text(text.into()))))
}
