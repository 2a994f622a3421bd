//! Sessions: one live duplex connection to one browser tab
//!
//! A [`Session`] runs two loops over a transport-neutral connection, a
//! `Stream` of inbound text frames and a `Sink` of outbound ones:
//!
//! - the inbound loop decodes each frame into an [`InboundEvent`] and routes
//!   it through the [`EventRouter`], running handlers on its own task;
//! - the outbound loop drains the patch queue fed by [`SessionHandle::post_update`]
//!   and writes each patch, in enqueue order.
//!
//! The queue is unbounded, so a handler that triggers re-renders never waits
//! on the network. Whichever loop finishes first (or an external shutdown)
//! moves the session to `Closing`; the other loop then has a bounded grace
//! period to exit before it is aborted and the session is `Closed`.

use std::sync::Arc;
use std::time::Duration;

use futures::{Sink, SinkExt, Stream, StreamExt};
use livetab_types::{InboundEvent, NodeId, Patch};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinError;
use tracing::{debug, info, trace, warn};

use crate::error::{Result, SessionError};
use crate::router::EventRouter;
use crate::shutdown::{Shutdown, ShutdownListener};

/// Receiving end of a session's outbound queue.
pub type PatchReceiver = mpsc::UnboundedReceiver<Patch>;

/// Create an outbound queue: the handle nodes push into and its receiver.
pub fn outbound_queue() -> (SessionHandle, PatchReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SessionHandle { tx }, rx)
}

/// What attached nodes hold to reach their session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Patch>,
}

impl SessionHandle {
    /// Enqueue a replacement of `node`'s markup. Never blocks.
    ///
    /// Once the session is gone the patch is dropped.
    pub fn post_update(&self, node: NodeId, markup: String) {
        if self.tx.send(Patch::replace(node, markup)).is_err() {
            debug!(node = %node, "session closed, patch dropped");
        } else {
            trace!(node = %node, "patch enqueued");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closing,
    Closed,
}

/// Why a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    /// The client closed the connection
    Disconnected,
    /// The host asked every session to stop
    Shutdown,
    /// The client sent a malformed message
    Protocol(String),
    /// Reading or writing failed
    Transport(String),
    /// A loop was cancelled because the other one ended
    Cancelled,
    /// A loop task panicked
    Internal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub reason: CloseReason,
    /// True if a loop had to be aborted after the grace period.
    pub forced: bool,
}

pub struct Session {
    router: Arc<EventRouter>,
    handle: SessionHandle,
    outbound: PatchReceiver,
    grace: Duration,
    state: watch::Sender<SessionState>,
}

impl Session {
    pub fn new(router: Arc<EventRouter>, grace: Duration) -> Self {
        let (handle, outbound) = outbound_queue();
        let (state, _) = watch::channel(SessionState::Open);
        Self {
            router,
            handle,
            outbound,
            grace,
            state,
        }
    }

    /// A handle for attaching the node tree to this session.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Run both loops until the connection ends or `shutdown` fires.
    pub async fn run<R, W, E>(self, reader: R, writer: W, mut shutdown: ShutdownListener) -> SessionOutcome
    where
        R: Stream<Item = std::result::Result<String, E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        W: Sink<String> + Send + 'static,
        W::Error: std::error::Error + Send + Sync + 'static,
    {
        let Session {
            router,
            handle,
            outbound,
            grace,
            state,
        } = self;
        // Attached nodes hold their own clones; this one would keep the
        // queue open forever.
        drop(handle);

        let done = Shutdown::new();
        let mut inbound = tokio::spawn(inbound_loop(reader, router, done.listener()));
        let mut outbound = tokio::spawn(outbound_loop(writer, outbound, done.listener()));
        let mut inbound_done = false;
        let mut outbound_done = false;
        info!("session open");

        let reason = tokio::select! {
            res = &mut inbound => {
                inbound_done = true;
                loop_exit("inbound", res)
            }
            res = &mut outbound => {
                outbound_done = true;
                loop_exit("outbound", res)
            }
            _ = shutdown.wait() => CloseReason::Shutdown,
        };

        state.send_replace(SessionState::Closing);
        info!(reason = ?reason, "session closing");
        done.trigger();

        let drain = async {
            if !inbound_done {
                let _ = (&mut inbound).await;
            }
            if !outbound_done {
                let _ = (&mut outbound).await;
            }
        };
        let forced = tokio::time::timeout(grace, drain).await.is_err();
        if forced {
            let grace_ms = grace.as_millis() as u64;
            warn!(grace_ms, "session loops did not exit in time, aborting");
            inbound.abort();
            outbound.abort();
        }

        state.send_replace(SessionState::Closed);
        info!("session closed");
        SessionOutcome { reason, forced }
    }
}

fn loop_exit(which: &str, res: std::result::Result<Result<CloseReason>, JoinError>) -> CloseReason {
    match res {
        Ok(Ok(reason)) => reason,
        Ok(Err(SessionError::Protocol(err))) => {
            warn!(task = which, %err, "malformed client message");
            CloseReason::Protocol(err.to_string())
        }
        Ok(Err(err @ SessionError::Transport(_))) => {
            warn!(task = which, %err, "connection failed");
            CloseReason::Transport(err.to_string())
        }
        Err(err) => {
            warn!(task = which, %err, "session loop panicked");
            CloseReason::Internal(err.to_string())
        }
    }
}

async fn inbound_loop<R, E>(reader: R, router: Arc<EventRouter>, mut done: ShutdownListener) -> Result<CloseReason>
where
    R: Stream<Item = std::result::Result<String, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    tokio::pin!(reader);
    loop {
        let message = tokio::select! {
            biased;
            _ = done.wait() => return Ok(CloseReason::Cancelled),
            message = reader.next() => message,
        };

        let text = match message {
            None => {
                info!("client disconnected");
                return Ok(CloseReason::Disconnected);
            }
            Some(Err(err)) => return Err(SessionError::transport(err)),
            Some(Ok(text)) => text,
        };

        let event = InboundEvent::decode(&text)?;
        let key = event.routing_key();
        match router.publish(&key, &event) {
            0 => debug!(key = %key, "no handler for event"),
            n => trace!(key = %key, handlers = n, "event delivered"),
        }
    }
}

async fn outbound_loop<W>(writer: W, mut queue: PatchReceiver, mut done: ShutdownListener) -> Result<CloseReason>
where
    W: Sink<String>,
    W::Error: std::error::Error + Send + Sync + 'static,
{
    tokio::pin!(writer);
    let reason = loop {
        let patch = tokio::select! {
            biased;
            _ = done.wait() => break CloseReason::Cancelled,
            patch = queue.recv() => patch,
        };

        match patch {
            Some(patch) => {
                let target = patch.target;
                writer
                    .send(patch.to_wire())
                    .await
                    .map_err(SessionError::transport)?;
                trace!(node = %target, "patch sent");
            }
            // Nothing can post any more; keep the connection until told otherwise.
            None => {
                done.wait().await;
                break CloseReason::Cancelled;
            }
        }
    };

    if let Err(err) = writer.close().await {
        debug!(%err, "closing writer failed");
    }
    Ok(reason)
}
