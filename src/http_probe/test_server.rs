use std::convert::Infallible;
use std::net::SocketAddr;

use hyper::body::Incoming;
use hyper::header::LOCATION;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

async fn route(request: Request<Incoming>) -> Result<Response<String>, Infallible> {
    let (status, location) = match request.uri().path() {
        "/ok" => (StatusCode::OK, None),
        "/no-content" => (StatusCode::NO_CONTENT, None),
        "/not-found" => (StatusCode::NOT_FOUND, None),
        "/unavailable" => (StatusCode::SERVICE_UNAVAILABLE, None),
        "/found" => (StatusCode::FOUND, Some("/ok")),
        "/found-unavailable" => (StatusCode::FOUND, Some("/unavailable")),
        "/moved-nowhere" => (StatusCode::MOVED_PERMANENTLY, None),
        "/loop" => (StatusCode::FOUND, Some("/loop")),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, None),
    };

    let mut builder = Response::builder().status(status);
    if let Some(location) = location {
        builder = builder.header(LOCATION, location);
    }
    Ok(builder
        .body(status.to_string())
        .expect("fixture response is valid"))
}

/// Serves the fixture routes on an ephemeral local port until the test runtime shuts down.
pub async fn spawn_test_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = listener.local_addr().expect("test server address");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service_fn(route))
                    .await;
            });
        }
    });

    addr
}

/// A local address with nothing listening on it.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    listener.local_addr().expect("throwaway address")
}
