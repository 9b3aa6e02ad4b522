use anyhow::Result;
use compare_client::utils::logger;
use compare_client::{to_money_view, CompareClient, CompareError, ProductComparer};
use httpmock::prelude::*;

fn catalog_body() -> serde_json::Value {
    serde_json::json!({
        "products": [
            {
                "id": "OLJCESPC7Z",
                "name": "Vintage Typewriter",
                "description": "This typewriter looks good in your living room.",
                "price": {"currency_code": "USD", "units": 67, "nanos": 990000000}
            },
            {
                "id": "66VCHSJNUP",
                "name": "Vintage Camera Lens",
                "description": "You won't have a camera to use it and it probably doesn't work anyway.",
                "price": {"currency_code": "USD", "units": 12, "nanos": 490000000}
            }
        ],
        "summary": "2 of 2 products found"
    })
}

#[tokio::test]
async fn test_full_compare_exchange() -> Result<()> {
    logger::init_logger(true);

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/compare")
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "product_ids": ["OLJCESPC7Z", "66VCHSJNUP"]
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_body());
    });

    let client = CompareClient::new(server.address().to_string());
    let response = client
        .compare_products(&["OLJCESPC7Z".to_string(), "66VCHSJNUP".to_string()])
        .await?;

    api_mock.assert();
    assert_eq!(response.products.len(), 2);
    assert_eq!(response.summary, "2 of 2 products found");

    // Prices survive the wire exactly and map into the view shape unchanged.
    let view = to_money_view(&response.products[0].price);
    assert_eq!(view.currency_code, "USD");
    assert_eq!(view.units, 67);
    assert_eq!(view.nanos, 990_000_000);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_body());
    });

    let client = CompareClient::new(server.address().to_string());
    let ids = vec!["OLJCESPC7Z".to_string()];

    let (first, second, third) = tokio::join!(
        client.compare_products(&ids),
        client.compare_products(&ids),
        client.compare_products(&ids),
    );

    assert_eq!(first?.summary, "2 of 2 products found");
    assert_eq!(second?.summary, "2 of 2 products found");
    assert_eq!(third?.summary, "2 of 2 products found");
    assert_eq!(api_mock.hits(), 3);

    Ok(())
}

#[tokio::test]
async fn test_remote_error_surfaces_to_callers_through_the_port() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/compare");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "at least two product IDs required"}));
    });

    // Callers hold the client behind the port trait; the error taxonomy must
    // survive the indirection.
    let comparer: Box<dyn ProductComparer> =
        Box::new(CompareClient::new(server.address().to_string()));

    let err = comparer
        .compare_products(&["OLJCESPC7Z".to_string()])
        .await
        .unwrap_err();

    match err {
        CompareError::RemoteError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message.as_deref(), Some("at least two product IDs required"));
        }
        other => panic!("expected RemoteError, got: {other}"),
    }
}
