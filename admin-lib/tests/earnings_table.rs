//! Earnings table round trips, including server-side sort parameters.

use std::convert::Infallible;
use std::net::SocketAddr;

use http_body_util::Full;
use hyper::Request;
use hyper::Response;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use admin_lib::AdminClient;
use admin_lib::api::EarningsSource;
use admin_lib::api::query::Direction;
use admin_lib::api::query::EarningsFilter;
use admin_lib::auth::StaticTokenProvider;
use admin_lib::model::PaymentStatus;
use admin_lib::table::TableController;
use admin_lib::table::earning_columns;

fn earning_json(grower: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "0b8e0ddd-3f13-4e66-a697-64296a1dad21",
        "grower": grower,
        "funder": "Green Fund",
        "amount": "12.50",
        "calculated_at": "2021-12-01T00:00:00Z",
        "consolidation_period_start": "2021-11-01T00:00:00Z",
        "consolidation_period_end": "2021-11-30T00:00:00Z",
        "status": "calculated"
    })
}

async fn handle(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let query = req.uri().query().unwrap_or("").to_string();

    // The server applies sorting; the client only forwards the parameters.
    let grower = if query.contains("sort_by=grower") && query.contains("order=desc") {
        "Zeke"
    } else {
        "Abe"
    };
    let total = if query.contains("status=paid") { 3 } else { 120 };

    let body = serde_json::json!({
        "earnings": [earning_json(grower)],
        "totalCount": total
    });

    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap())
}

async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let io = TokioIo::new(stream);
            tokio::spawn(async move {
                let _ = http1::Builder::new()
                    .serve_connection(io, service_fn(handle))
                    .await;
            });
        }
    });

    addr
}

#[tokio::test]
async fn sort_and_filter_are_delegated_to_the_server() {
    let addr = start_server().await;

    let client = AdminClient::builder()
        .url(format!("http://{addr}"))
        .token_provider(StaticTokenProvider::new("session-token"))
        .build();
    let source = EarningsSource::new(client);

    let mut table = TableController::new(EarningsFilter::default());
    table.refresh(&source).await.unwrap();
    assert_eq!(table.rows()[0].grower, "Abe");
    assert_eq!(table.total_count(), 120);

    // Two header clicks: ascending, then descending.
    let columns = earning_columns();
    let grower = columns.iter().find(|column| column.attr == "grower").unwrap();
    assert!(table.toggle_sort(grower));
    assert!(table.toggle_sort(grower));
    assert_eq!(table.state().sort().unwrap().direction, Direction::Desc);

    table.refresh(&source).await.unwrap();
    assert_eq!(table.rows()[0].grower, "Zeke");

    table.set_filter(EarningsFilter {
        status: Some(PaymentStatus::Paid),
        ..Default::default()
    });
    table.refresh(&source).await.unwrap();
    assert_eq!(table.total_count(), 3);
}
