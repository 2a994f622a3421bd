//! Integration tests for the session loops, driven over in-memory channels

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::channel::mpsc;
use futures::{Sink, StreamExt};
use livetab_core::{
    observe, Attach, CloseReason, Identity, Interaction, NodeCore, NodeId, Render, Session,
    SessionHandle, SessionState, Shutdown, StrState, Ui,
};

const GRACE: Duration = Duration::from_millis(200);
const WAIT: Duration = Duration::from_secs(2);

struct Label {
    core: NodeCore,
    text: Arc<StrState>,
}

impl Identity for Label {
    fn id(&self) -> NodeId {
        self.core.id()
    }
}

impl Render for Label {
    fn render(&self) -> String {
        format!(r#"<span id="{}">{}</span>"#, self.core.tag(), self.text.get())
    }
}

impl Attach for Label {
    fn attach(&self, session: &SessionHandle) {
        self.core.attach(session);
    }

    fn detach(&self) {
        self.core.detach();
    }

    fn session(&self) -> Option<SessionHandle> {
        self.core.session()
    }
}

fn label(ui: &Ui, text: &Arc<StrState>) -> Arc<Label> {
    let node = Arc::new(Label {
        core: NodeCore::new(ui),
        text: text.clone(),
    });
    observe(&**text, &node);
    node
}

type Reader = futures::stream::Map<
    mpsc::UnboundedReceiver<String>,
    fn(String) -> Result<String, std::io::Error>,
>;

/// Client side of an in-memory connection.
fn connection() -> (
    mpsc::UnboundedSender<String>,
    Reader,
    mpsc::UnboundedSender<String>,
    mpsc::UnboundedReceiver<String>,
) {
    let (client_tx, server_rx) = mpsc::unbounded::<String>();
    let (server_tx, client_rx) = mpsc::unbounded::<String>();
    let ok: fn(String) -> Result<String, std::io::Error> = Ok;
    (client_tx, server_rx.map(ok), server_tx, client_rx)
}

#[tokio::test]
async fn test_model_change_becomes_one_patch() {
    let ui = Ui::new();
    let text = StrState::new("initial");
    let node = label(&ui, &text);

    let session = Session::new(ui.router().clone(), GRACE);
    node.attach(&session.handle());
    let mut state = session.state();

    let (client_tx, reader, writer, mut client_rx) = connection();
    let shutdown = Shutdown::new();
    let run = tokio::spawn(session.run(reader, writer, shutdown.listener()));

    text.set("hello");
    let frame = tokio::time::timeout(WAIT, client_rx.next())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        frame,
        format!(
            r#"<turbo-stream action="replace" target="{tag}"><template><span id="{tag}">hello</span></template></turbo-stream>"#,
            tag = node.id().tag()
        )
    );

    drop(client_tx);
    let outcome = tokio::time::timeout(WAIT, run).await.unwrap().unwrap();
    assert_eq!(outcome.reason, CloseReason::Disconnected);
    assert!(!outcome.forced);
    assert_eq!(*state.borrow_and_update(), SessionState::Closed);

    // The writer was closed by the outbound loop: exactly one frame was sent.
    assert_eq!(client_rx.next().await, None);
}

#[tokio::test]
async fn test_click_routes_to_handler_and_back() {
    let ui = Ui::new();
    let text = StrState::new("idle");
    let node = label(&ui, &text);
    let t = text.clone();
    node.core.on(Interaction::Click, move |ev| {
        t.set(format!("clicked {}", ev.target));
    });

    let session = Session::new(ui.router().clone(), GRACE);
    node.attach(&session.handle());

    let (client_tx, reader, writer, mut client_rx) = connection();
    let shutdown = Shutdown::new();
    let run = tokio::spawn(session.run(reader, writer, shutdown.listener()));

    let id = node.id();
    client_tx
        .unbounded_send(format!(
            r#"{{"target": "{}", "event": "click", "props": {{}}}}"#,
            id.tag()
        ))
        .unwrap();

    let frame = tokio::time::timeout(WAIT, client_rx.next())
        .await
        .unwrap()
        .unwrap();
    assert!(frame.contains(&format!("clicked {}", id)));

    shutdown.trigger();
    let outcome = tokio::time::timeout(WAIT, run).await.unwrap().unwrap();
    assert_eq!(outcome.reason, CloseReason::Shutdown);
}

#[tokio::test]
async fn test_event_for_unknown_node_is_dropped() {
    let ui = Ui::new();
    let session = Session::new(ui.router().clone(), GRACE);
    let mut state = session.state();

    let (client_tx, reader, writer, _client_rx) = connection();
    let shutdown = Shutdown::new();
    let run = tokio::spawn(session.run(reader, writer, shutdown.listener()));

    client_tx
        .unbounded_send(r#"{"target": "99", "event": "click", "props": {}}"#.to_string())
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(*state.borrow_and_update(), SessionState::Open);

    drop(client_tx);
    let outcome = tokio::time::timeout(WAIT, run).await.unwrap().unwrap();
    assert_eq!(outcome.reason, CloseReason::Disconnected);
}

#[tokio::test]
async fn test_non_object_props_keep_session_open() {
    let ui = Ui::new();
    let text = StrState::new("0");
    let node = label(&ui, &text);
    let t = text.clone();
    node.core.on(Interaction::Click, move |_| {
        let n: u32 = t.get().parse().unwrap_or(0);
        t.set((n + 1).to_string());
    });

    let session = Session::new(ui.router().clone(), GRACE);
    node.attach(&session.handle());
    let mut state = session.state();

    let (client_tx, reader, writer, mut client_rx) = connection();
    let shutdown = Shutdown::new();
    let run = tokio::spawn(session.run(reader, writer, shutdown.listener()));

    let tag = node.id().tag();
    for props in ["null", r#""x""#] {
        client_tx
            .unbounded_send(format!(
                r#"{{"target":"{tag}","event":"click","props":{props}}}"#
            ))
            .unwrap();
    }

    for expected in ["1", "2"] {
        let frame = tokio::time::timeout(WAIT, client_rx.next())
            .await
            .unwrap()
            .unwrap();
        assert!(frame.contains(&format!(">{expected}</span>")), "{frame}");
    }
    assert_eq!(*state.borrow_and_update(), SessionState::Open);

    shutdown.trigger();
    let outcome = tokio::time::timeout(WAIT, run).await.unwrap().unwrap();
    assert_eq!(outcome.reason, CloseReason::Shutdown);
}

#[tokio::test]
async fn test_malformed_message_closes_only_the_session() {
    let ui = Ui::new();
    let session = Session::new(ui.router().clone(), GRACE);

    let (client_tx, reader, writer, _client_rx) = connection();
    let shutdown = Shutdown::new();
    let run = tokio::spawn(session.run(reader, writer, shutdown.listener()));

    client_tx.unbounded_send("{not json".to_string()).unwrap();
    let outcome = tokio::time::timeout(WAIT, run).await.unwrap().unwrap();
    assert!(matches!(outcome.reason, CloseReason::Protocol(_)));
    assert!(!outcome.forced);
    assert!(!shutdown.is_triggered());
}

#[tokio::test]
async fn test_write_failure_terminates_session() {
    let ui = Ui::new();
    let text = StrState::new("a");
    let node = label(&ui, &text);
    let session = Session::new(ui.router().clone(), GRACE);
    node.attach(&session.handle());

    let (_client_tx, reader, writer, client_rx) = connection();
    drop(client_rx);
    let shutdown = Shutdown::new();
    let run = tokio::spawn(session.run(reader, writer, shutdown.listener()));

    text.set("b");
    let outcome = tokio::time::timeout(WAIT, run).await.unwrap().unwrap();
    assert!(matches!(outcome.reason, CloseReason::Transport(_)));

    // Further updates are discarded without error.
    text.set("c");
    assert!(node.session().unwrap().is_closed());
}

#[tokio::test]
async fn test_patches_keep_enqueue_order() {
    let ui = Ui::new();
    let texts: Vec<_> = (0..3).map(|i| StrState::new(format!("{i}"))).collect();
    let nodes: Vec<_> = texts.iter().map(|t| label(&ui, t)).collect();
    let session = Session::new(ui.router().clone(), GRACE);
    for node in &nodes {
        node.attach(&session.handle());
    }

    let (client_tx, reader, writer, mut client_rx) = connection();
    let shutdown = Shutdown::new();
    let run = tokio::spawn(session.run(reader, writer, shutdown.listener()));

    texts[2].set("third");
    texts[0].set("first");
    texts[1].set("second");

    let mut frames = Vec::new();
    for _ in 0..3 {
        frames.push(
            tokio::time::timeout(WAIT, client_rx.next())
                .await
                .unwrap()
                .unwrap(),
        );
    }
    assert!(frames[0].contains(&nodes[2].id().tag()));
    assert!(frames[1].contains(&nodes[0].id().tag()));
    assert!(frames[2].contains(&nodes[1].id().tag()));

    drop(client_tx);
    tokio::time::timeout(WAIT, run).await.unwrap().unwrap();
}

/// A writer that never makes progress.
struct StuckSink;

impl Sink<String> for StuckSink {
    type Error = std::io::Error;

    fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Pending
    }

    fn start_send(self: Pin<&mut Self>, _item: String) -> Result<(), Self::Error> {
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Pending
    }

    fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Pending
    }
}

#[tokio::test]
async fn test_stuck_writer_is_aborted_after_grace() {
    let ui = Ui::new();
    let session = Session::new(ui.router().clone(), GRACE);
    let mut state = session.state();

    let (client_tx, reader, _writer, _client_rx) = connection();
    let shutdown = Shutdown::new();
    let run = tokio::spawn(session.run(reader, StuckSink, shutdown.listener()));

    drop(client_tx);
    let started = std::time::Instant::now();
    let outcome = tokio::time::timeout(WAIT, run).await.unwrap().unwrap();
    assert_eq!(outcome.reason, CloseReason::Disconnected);
    assert!(outcome.forced);
    assert!(started.elapsed() < WAIT);
    assert_eq!(*state.borrow_and_update(), SessionState::Closed);
}
