//! Same-host filtering
//!
//! Every endpoint is refused unless the peer is a loopback address. Browser
//! requests also carry an `Origin` header, which must name a loopback host
//! so that other sites open in the same browser cannot reach the app.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    RemotePeer,
    ForeignOrigin,
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let body = match self {
            Rejection::RemotePeer => "only local connections are accepted",
            Rejection::ForeignOrigin => "origin not allowed",
        };
        (StatusCode::FORBIDDEN, body).into_response()
    }
}

pub fn is_loopback_peer(peer: &SocketAddr) -> bool {
    peer.ip().to_canonical().is_loopback()
}

/// True if there is no `Origin` header or it names a loopback host.
pub fn origin_is_local(headers: &HeaderMap) -> bool {
    let Some(origin) = headers.get(header::ORIGIN) else {
        return true;
    };
    origin
        .to_str()
        .ok()
        .and_then(origin_host)
        .is_some_and(is_local_host)
}

pub fn check(peer: &SocketAddr, headers: &HeaderMap) -> Result<(), Rejection> {
    if !is_loopback_peer(peer) {
        return Err(Rejection::RemotePeer);
    }
    if !origin_is_local(headers) {
        return Err(Rejection::ForeignOrigin);
    }
    Ok(())
}

/// Middleware applying [`check`] to every request.
pub async fn local_only(ConnectInfo(peer): ConnectInfo<SocketAddr>, request: Request, next: Next) -> Response {
    if let Err(rejection) = check(&peer, request.headers()) {
        warn!(%peer, path = %request.uri().path(), ?rejection, "request refused");
        return rejection.into_response();
    }
    next.run(request).await
}

fn origin_host(origin: &str) -> Option<&str> {
    let (_, rest) = origin.split_once("://")?;
    if let Some(bracketed) = rest.strip_prefix('[') {
        return bracketed.split_once(']').map(|(host, _)| host);
    }
    rest.split([':', '/']).next()
}

fn is_local_host(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost")
        || host
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.to_canonical().is_loopback())
}
