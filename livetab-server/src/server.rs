//! The HTTP front door and the top-level run routine.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{ws::WebSocket, State, WebSocketUpgrade},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use futures::StreamExt;
use livetab_core::{refresh, Node, Session, SessionOutcome, Shutdown, Ui};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{DeployMode, ServerConfig};
use crate::error::{Result, ServeError};
use crate::page::{IndexPage, WS_PATH};
use crate::{assets, origin, transport};

#[derive(Clone)]
struct AppState {
    ui: Ui,
    root: Arc<dyn Node>,
    config: Arc<ServerConfig>,
    active: Arc<AtomicBool>,
    shutdown: Shutdown,
}

/// Releases the single session slot when dropped.
struct SessionClaim(Arc<AtomicBool>);

impl SessionClaim {
    fn acquire(slot: &Arc<AtomicBool>) -> Option<Self> {
        slot.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(slot.clone()))
    }
}

impl Drop for SessionClaim {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A UI tree served to one browser tab.
pub struct App {
    ui: Ui,
    root: Arc<dyn Node>,
    config: ServerConfig,
}

impl App {
    pub fn new(ui: Ui, root: Arc<dyn Node>, config: ServerConfig) -> Self {
        Self { ui, root, config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The HTTP routes. `shutdown` ends open sessions and, in
    /// [`DeployMode::Exit`], is triggered when the session ends.
    pub fn router(&self, shutdown: &Shutdown) -> Router {
        let state = AppState {
            ui: self.ui.clone(),
            root: self.root.clone(),
            config: Arc::new(self.config.clone()),
            active: Arc::new(AtomicBool::new(false)),
            shutdown: shutdown.clone(),
        };

        Router::new()
            .route("/", get(index))
            .route(WS_PATH, get(ws_upgrade))
            .route("/assets/{*path}", get(assets::serve_asset))
            .route("/healthz", get(healthz))
            .layer(middleware::from_fn(origin::local_only))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind the configured address and serve until shutdown.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.listen_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind { addr, source })?;
        self.serve(listener, Shutdown::new()).await
    }

    /// Serve on `listener` until Ctrl-C, `shutdown`, or (in exit mode) the
    /// end of the first session.
    ///
    /// Once shutdown starts, the server and any open session get the
    /// configured grace period to close; exceeding it is an error.
    pub async fn serve(self, listener: TcpListener, shutdown: Shutdown) -> Result<()> {
        let local = listener.local_addr()?;
        let url = format!("http://{local}/");
        info!(%url, mode = ?self.config.mode, "livetab listening");

        if self.config.open_browser {
            if let Err(err) = open::that(&url) {
                warn!(%err, "failed to open browser");
            }
        }

        let app = self.router(&shutdown);
        let mut graceful = shutdown.listener();
        let mut server = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
                .with_graceful_shutdown(async move { graceful.wait().await })
                .await
        });

        let mut stop = shutdown.listener();
        tokio::select! {
            res = &mut server => {
                warn!("server exited before shutdown was requested");
                return Ok(res??);
            }
            _ = interrupted() => info!("interrupt received, shutting down"),
            _ = stop.wait() => info!("shutting down"),
        }
        shutdown.trigger();

        let grace = self.config.grace;
        match tokio::time::timeout(grace, &mut server).await {
            Ok(res) => {
                res??;
                info!("server stopped");
                Ok(())
            }
            Err(_) => {
                server.abort();
                Err(ServeError::ShutdownTimeout(grace))
            }
        }
    }
}

async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "cannot listen for interrupts");
        std::future::pending::<()>().await;
    }
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn index(State(state): State<AppState>) -> Response {
    match IndexPage::new(&state.config, &*state.root).render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            warn!(%err, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let Some(claim) = SessionClaim::acquire(&state.active) else {
        warn!("refusing a second concurrent session");
        return (StatusCode::CONFLICT, "a session is already active").into_response();
    };

    ws.on_upgrade(move |socket| async move {
        let outcome = run_session(socket, &state).await;
        drop(claim);
        info!(reason = ?outcome.reason, forced = outcome.forced, "session ended");
        if state.config.mode == DeployMode::Exit {
            state.shutdown.trigger();
        }
    })
}

async fn run_session(socket: WebSocket, state: &AppState) -> SessionOutcome {
    let session = Session::new(state.ui.router().clone(), state.config.grace);
    state.root.attach(&session.handle());
    // The page may be stale by the time the socket opens.
    refresh(&*state.root);

    let (sink, stream) = socket.split();
    let outcome = session
        .run(
            transport::reader(stream),
            transport::writer(sink),
            state.shutdown.listener(),
        )
        .await;

    state.root.detach();
    outcome
}
