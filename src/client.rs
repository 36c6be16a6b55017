use std::time::Duration;

use crate::{
    request::{
        Credentials, GetModifiedOrdersRequest, GetOrderByPartnerOrderIdRequest,
        ModifyOrderRequest, Payload, QuickOrderRequest, RequestEnvelope,
        ValidateOrderParametersRequest,
    },
    response::OrderResponse,
};

const PRODUCTION_URL: &str = "https://api.geotrust.com/webtrust/partner";
const TEST_URL: &str = "https://test-api.geotrust.com/webtrust/partner";

/// Enumeration of known partner API endpoints.
#[derive(Debug, Clone)]
pub enum Endpoint<'a> {
    /// The production partner API. Orders placed here are billed.
    Production,

    /// The partner test API.
    ///
    /// Use for testing and development. Issued certificates are not trusted.
    Test,

    /// Provide an arbitrary endpoint URL to connect to.
    Other(&'a str),
}

impl<'a> Endpoint<'a> {
    fn to_url(&self) -> &str {
        match self {
            Endpoint::Production => PRODUCTION_URL,
            Endpoint::Test => TEST_URL,
            Endpoint::Other(url) => url,
        }
    }
}

/// Entry point for calling the partner API.
///
/// Stamps the configured [`Credentials`] into every request, posts it and decodes the reply.
/// There are no retries; a failed call is returned as is.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    url: String,
    credentials: Credentials,
}

impl Client {
    pub fn new(endpoint: Endpoint<'_>, credentials: Credentials) -> eyre::Result<Client> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Client {
            http,
            url: endpoint.to_url().to_owned(),
            credentials,
        })
    }

    /// Endpoint URL requests are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends `payload` and returns the raw response document.
    pub async fn submit<P: Payload>(&self, mut payload: P) -> eyre::Result<Vec<u8>> {
        payload.set_credentials(&self.credentials);
        let envelope = RequestEnvelope::new(payload);
        let body = envelope.to_xml()?;

        log::debug!("Call endpoint: {} ({})", self.url, P::KIND.root_tag());

        let res = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/xml")
            .body(body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            // best effort, the body only goes into the report
            let body = res.text().await.unwrap_or_default();
            return Err(eyre::eyre!("{status} body: {body}"));
        }

        let body = res.bytes().await?;
        log::trace!("{}", String::from_utf8_lossy(&body));

        Ok(body.to_vec())
    }

    /// Sends `payload` and decodes the reply with the matching response operation.
    pub async fn send<P: Payload>(&self, payload: P) -> eyre::Result<P::Output> {
        let body = self.submit(payload).await?;
        P::parse_response(&body)
    }

    /// Places a new certificate order.
    pub async fn quick_order(&self, request: QuickOrderRequest) -> eyre::Result<OrderResponse> {
        self.send(request).await
    }

    pub async fn validate_order_parameters(
        &self,
        request: ValidateOrderParametersRequest,
    ) -> eyre::Result<OrderResponse> {
        self.send(request).await
    }

    pub async fn modify_order(&self, request: ModifyOrderRequest) -> eyre::Result<()> {
        self.send(request).await
    }

    pub async fn get_order_by_partner_order_id(
        &self,
        request: GetOrderByPartnerOrderIdRequest,
    ) -> eyre::Result<OrderResponse> {
        self.send(request).await
    }

    pub async fn get_modified_orders(
        &self,
        request: GetModifiedOrdersRequest,
    ) -> eyre::Result<Vec<OrderResponse>> {
        self.send(request).await
    }
}
