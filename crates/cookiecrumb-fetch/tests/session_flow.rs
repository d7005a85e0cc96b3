//! End-to-end authentication flow against an in-memory transport.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cookiecrumb_fetch::url::{COOKIE_URL, CRUMB_URL};
use cookiecrumb_fetch::{
    ClientConfig, FetchError, MarketClient, RequestOptions, Transport, TransportError,
    TransportResponse,
};

/// Serves fixed responses by URL prefix and logs the cookie header of every
/// request.
#[derive(Debug, Default)]
struct FakeYahoo {
    routes: HashMap<&'static str, TransportResponse>,
    seen: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeYahoo {
    fn route(mut self, prefix: &'static str, response: TransportResponse) -> Self {
        self.routes.insert(prefix, response);
        self
    }

    fn seen(&self) -> Vec<(String, Option<String>)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeYahoo {
    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        self.seen
            .lock()
            .unwrap()
            .push((url.to_string(), options.header("cookie").map(str::to_string)));
        self.routes
            .iter()
            .filter(|(prefix, _)| url.starts_with(*prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response.clone())
            .ok_or_else(|| TransportError::Failed(format!("no route for {url}")))
    }
}

fn fake_yahoo() -> FakeYahoo {
    FakeYahoo::default()
        .route(
            COOKIE_URL,
            TransportResponse::new(404, "<html>not found</html>")
                .with_header("set-cookie", "A3=d=AQABBK; Domain=.yahoo.com; Path=/"),
        )
        .route(CRUMB_URL, TransportResponse::new(200, "Xb3/kPq9.aB"))
        .route(
            "https://query1.finance.yahoo.com/v7/finance/quote",
            TransportResponse::new(
                200,
                r#"{"quoteResponse":{"result":[
                    {"symbol":"AAPL","shortName":"Apple Inc.","regularMarketPrice":185.92},
                    {"symbol":"MSFT","shortName":"Microsoft Corporation","regularMarketPrice":367.75}
                ],"error":null}}"#,
            ),
        )
}

#[tokio::test]
async fn full_flow_reaches_data_endpoint_with_cookie_and_crumb() {
    let client = MarketClient::connect(fake_yahoo(), ClientConfig::default())
        .await
        .expect("session");

    assert_eq!(
        client.session().cookie(),
        Some("A3=d=AQABBK; Domain=.yahoo.com; Path=/")
    );
    assert_eq!(client.session().crumb(), Some("Xb3/kPq9.aB"));

    let quotes = client.quotes(&["aapl", "msft"]).await.expect("quotes");
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[1].display_name(), "Microsoft Corporation");

    let seen = client.into_transport().seen();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], (COOKIE_URL.to_string(), None));
    assert_eq!(seen[1].0, CRUMB_URL);
    assert_eq!(seen[1].1, seen[2].1);
    assert!(seen[2].0.ends_with("symbols=AAPL%2CMSFT&crumb=Xb3%2FkPq9.aB"));
}

#[tokio::test]
async fn challenge_page_halts_before_data_requests() {
    let transport = fake_yahoo().route(
        CRUMB_URL,
        TransportResponse::new(200, "<!DOCTYPE html><html lang=\"en\"><body>Verify</body></html>"),
    );

    let err = MarketClient::connect(transport, ClientConfig::default())
        .await
        .expect_err("crumb must be rejected");
    match err {
        FetchError::Session(session) => assert!(session.is_validation()),
        other => panic!("unexpected error: {other}"),
    }
}
