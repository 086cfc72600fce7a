use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use segrouter::{BoxHandler, Config, OverwritePolicy, RequestExt, RouteTable, Router};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

type Handler = BoxHandler<Incoming, Full<Bytes>>;

fn text(body: String) -> Response<Full<Bytes>> {
    Response::new(Full::new(Bytes::from(body)))
}

// GET /
fn root(_req: Request<Incoming>) -> Response<Full<Bytes>> {
    text("get, /".into())
}

// GET /test
fn test(_req: Request<Incoming>) -> Response<Full<Bytes>> {
    text("get, /test".into())
}

// GET /#id, GET /#id/val, POST /#id
fn id(req: Request<Incoming>) -> Response<Full<Bytes>> {
    match req.path_param("id") {
        Some(id) => text(format!("{}, /{}", req.method(), id)),
        None => text("missing id".into()),
    }
}

// GET /other/val
fn other(_req: Request<Incoming>) -> Response<Full<Bytes>> {
    text("get, /other/val".into())
}

fn routes() -> Result<RouteTable<Handler>, segrouter::InsertError> {
    // `/#id` and `/#id/val` share their parameter, which the default
    // policy would replace.
    let mut router = Router::with_config(Config {
        overwrite: OverwritePolicy::Reject,
        ..Config::default()
    });

    router.post("/#id", BoxHandler::new(id))?;
    router.get("/", BoxHandler::new(root))?;
    router.get("/test", BoxHandler::new(test))?;
    router.get("/#id", BoxHandler::new(id))?;
    router.get("/#id/val", BoxHandler::new(id))?;
    router.get("/other/val", BoxHandler::new(other))?;

    Ok(router.freeze())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let table = Arc::new(routes()?);

    let addr = SocketAddr::from(([127, 0, 0, 1], 9999));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    loop {
        let table = Arc::clone(&table);
        let (tcp, peer) = listener.accept().await?;
        tokio::task::spawn(async move {
            let service = hyper::service::service_fn(move |request: Request<Incoming>| {
                let table = Arc::clone(&table);
                async move { Ok::<_, std::convert::Infallible>(table.dispatch(request)) }
            });

            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(TokioIo::new(tcp), service)
                .await
            {
                tracing::warn!(%peer, %err, "error serving connection");
            }
        });
    }
}
