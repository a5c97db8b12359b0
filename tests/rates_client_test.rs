use anyhow::Result;
use httpmock::prelude::*;
use serde_json::{json, Value};
use ship_rates::{
    ErrorKind, MailClassKey, PackageType, RatesClient, RatesError, ShippingOptions, RATES_QUERY,
};

fn sample_rate() -> Value {
    json!({
        "title": "Priority Mail",
        "deliveryDescription": "1-3 business days",
        "trackingDescription": "USPS Tracking Included",
        "serviceDescription": "Priority Mail",
        "pricingDescription": "Cubic Price",
        "cubicTier": "0.3",
        "mailClassKey": "Priority",
        "mailClass": {"accuracy": null, "international": false, "__typename": "MailClass"},
        "packageTypeKey": "Parcel",
        "zone": "8",
        "surcharges": [
            {"title": "Nonstandard Fee", "price": 4.5, "__typename": "Surcharge"}
        ],
        "carrier": {"carrierKey": "usps", "title": "USPS", "__typename": "Carrier"},
        "totalPrice": 11.25,
        "priceBaseTypeKey": "commercial",
        "basePrice": 6.75,
        "crossedTotalPrice": 17.55,
        "pricingType": "Commercial",
        "pricingSubType": "Cubic",
        "ratePeriodId": 1234,
        "learnMoreUrl": "https://example.com/priority",
        "cheapest": true,
        "fastest": false,
        "__typename": "Rate"
    })
}

fn parcel_options() -> ShippingOptions {
    ShippingOptions {
        destination_zip: Some("10001".to_string()),
        weight: Some(16.0),
        dimension_x: Some(10.0),
        dimension_y: Some(6.0),
        dimension_z: Some(4.0),
        ..ShippingOptions::new("90210", vec![MailClassKey::Priority], vec![PackageType::Parcel])
    }
}

fn client_for(server: &MockServer) -> RatesClient {
    RatesClient::with_endpoint(&server.url("/api/graphql")).unwrap()
}

#[tokio::test]
async fn test_successful_lookup_returns_rates_untouched() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/graphql")
            .query_param("opname", "RatesQuery")
            .header("content-type", "application/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"data": {"rates": [sample_rate()]}}));
    });

    let rates = client_for(&server).fetch_rates(&parcel_options()).await?;

    api_mock.assert();
    assert_eq!(rates.len(), 1);
    assert_eq!(serde_json::to_value(&rates[0])?, sample_rate());
    assert_eq!(rates[0].mail_class_key, "Priority");
    assert_eq!(rates[0].surcharges[0].price, 4.5);
    assert!(rates[0].cheapest);
    Ok(())
}

#[tokio::test]
async fn test_request_body_carries_only_provided_variables() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/graphql")
            .json_body(json!({
                "operationName": "RatesQuery",
                "variables": {
                    "originZip": "90210",
                    "destinationZip": "10001",
                    "isResidential": false,
                    "mailClassKeys": ["Priority", "GroundAdvantage"],
                    "packageTypeKeys": ["SoftEnvelope"],
                    "dimensionX": 10.0,
                    "dimensionY": 6.0,
                    "dimensionZ": 0.0
                },
                "query": RATES_QUERY
            }));
        then.status(200).json_body(json!({"data": {"rates": []}}));
    });

    let options = ShippingOptions {
        destination_zip: Some("10001".to_string()),
        is_residential: Some(false),
        dimension_x: Some(10.0),
        dimension_y: Some(6.0),
        dimension_z: Some(0.0),
        ..ShippingOptions::new(
            "90210",
            vec![MailClassKey::Priority, MailClassKey::GroundAdvantage],
            vec![PackageType::SoftEnvelope],
        )
    };

    let rates = client_for(&server).fetch_rates(&options).await?;

    api_mock.assert();
    assert!(rates.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_http_failure_is_transport_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(json!({"data": {"rates": [sample_rate()]}}));
    });

    let err = client_for(&server)
        .fetch_rates(&parcel_options())
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, RatesError::Transport { status: 500 }));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_non_json_error_body_is_not_parsed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(503).body("<html>maintenance</html>");
    });

    let err = client_for(&server)
        .fetch_rates(&parcel_options())
        .await
        .unwrap_err();

    assert!(matches!(err, RatesError::Transport { status: 503 }));
}

#[tokio::test]
async fn test_graphql_error_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).json_body(json!({
            "errors": [{
                "message": "Invalid zip",
                "locations": [{"line": 3, "column": 9}],
                "path": ["rates"],
                "extensions": {
                    "code": 400,
                    "title": "Bad Request",
                    "mailClassKey": "Priority",
                    "packageTypeKey": "Parcel"
                }
            }],
            "data": null
        }));
    });

    let err = client_for(&server)
        .fetch_rates(&parcel_options())
        .await
        .unwrap_err();

    match err {
        RatesError::Application { message } => assert_eq!(message, "Invalid zip"),
        other => panic!("expected application error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_minimal_graphql_error_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200)
            .body(r#"{"errors":[{"message":"Invalid zip"}],"data":null}"#);
    });

    let err = client_for(&server)
        .fetch_rates(&parcel_options())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid zip");
    assert_eq!(err.kind(), ErrorKind::Application);
}

#[tokio::test]
async fn test_missing_data_is_application_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).body(r#"{"errors":[],"data":null}"#);
    });

    let err = client_for(&server)
        .fetch_rates(&parcel_options())
        .await
        .unwrap_err();

    match err {
        RatesError::Application { message } => assert_eq!(message, "no data in response"),
        other => panic!("expected application error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).body("not json");
    });

    let err = client_for(&server)
        .fetch_rates(&parcel_options())
        .await
        .unwrap_err();

    assert!(matches!(err, RatesError::Decode(_)));
}

#[tokio::test]
async fn test_validation_failure_skips_network() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).json_body(json!({"data": {"rates": []}}));
    });

    let options = ShippingOptions {
        dimension_x: Some(2.0),
        ..parcel_options()
    };

    let err = client_for(&server).fetch_rates(&options).await.unwrap_err();

    api_mock.assert_hits(0);
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("dimensionX"));
    assert!(err.to_string().contains("Parcel"));
}

#[tokio::test]
async fn test_flat_rate_box_ignores_dimensions() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).json_body(json!({"data": {"rates": [sample_rate()]}}));
    });

    let options = ShippingOptions {
        dimension_x: Some(-1.0),
        dimension_y: Some(0.0),
        dimension_z: Some(0.0),
        ..ShippingOptions::new(
            "90210",
            vec![MailClassKey::Priority],
            vec![PackageType::MediumFlatRateBox],
        )
    };

    let rates = client_for(&server).fetch_rates(&options).await?;

    api_mock.assert();
    assert_eq!(rates.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_lookups_are_independent() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).json_body(json!({"data": {"rates": [sample_rate()]}}));
    });

    let client = client_for(&server);
    let options = parcel_options();
    let (first, second) = tokio::join!(client.fetch_rates(&options), client.fetch_rates(&options));

    api_mock.assert_hits(2);
    assert_eq!(first?, second?);
    Ok(())
}

#[tokio::test]
async fn test_unlisted_mail_class_passes_through() -> Result<()> {
    let mut ups_rate = sample_rate();
    ups_rate["title"] = json!("UPS Ground");
    ups_rate["mailClassKey"] = json!("UpsGround");
    ups_rate["packageTypeKey"] = json!("UpsParcel");
    ups_rate["carrier"] = json!({"carrierKey": "ups", "title": "UPS", "__typename": "Carrier"});

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200)
            .json_body(json!({"data": {"rates": [sample_rate(), ups_rate.clone()]}}));
    });

    let options = ShippingOptions {
        show_ups_rates_when_2x7_selected: Some(true),
        ..parcel_options()
    };
    let rates = client_for(&server).fetch_rates(&options).await?;

    api_mock.assert();
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[1].mail_class_key, "UpsGround");
    assert_eq!(rates[1].package_type_key, "UpsParcel");
    assert_eq!(serde_json::to_value(&rates[1])?, ups_rate);
    Ok(())
}

#[tokio::test]
async fn test_graphql_error_with_index_path_and_string_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/graphql");
        then.status(200).json_body(json!({
            "errors": [{
                "message": "Invalid zip",
                "path": ["rates", 0, "title"],
                "extensions": {"code": "BAD_USER_INPUT"}
            }],
            "data": null
        }));
    });

    let err = client_for(&server)
        .fetch_rates(&parcel_options())
        .await
        .unwrap_err();

    assert!(matches!(err, RatesError::Application { ref message } if message == "Invalid zip"));
}
