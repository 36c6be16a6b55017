//! Ordering SSL certificates through the Symantec/GeoTrust partner API.
//!
//! The partner API speaks XML over HTTP. Every call posts one request document and gets back one
//! response document whose header carries a `SuccessCode`; `0` means success, anything else comes
//! with an `Errors` block.
//!
//! # Usage
//!
//! Build a request from [`request`], send it with a [`Client`], and get back either the decoded
//! fields or a [`SymantecError`]:
//!
//! ```no_run
//! use symantecssl::{
//!     request::{Credentials, OrderParameters, QuickOrderRequest},
//!     Client, Endpoint,
//! };
//!
//! async fn order(csr: String) -> eyre::Result<()> {
//!     let creds = Credentials::new("PARTNER", "user", "secret");
//!     let client = Client::new(Endpoint::Test, creds)?;
//!
//!     let mut req = QuickOrderRequest::default();
//!     req.request_header.set_request_header("SSL123", "my-order-1");
//!     req.approver_email.set_approver_email("admin@example.com");
//!     req.set_order_parameters(OrderParameters {
//!         csr: Some(csr),
//!         domain_name: Some("example.com".to_owned()),
//!         valid_period: Some("12".to_owned()),
//!         ..Default::default()
//!     });
//!
//!     let res = client.quick_order(req).await?;
//!     println!("GeoTrust order ID: {:?}", res.text("GeoTrustOrderID"));
//!     Ok(())
//! }
//! ```
//!
//! Requests and responses can also be used without the client: [`RequestEnvelope::to_xml`]
//! produces the document to send and the operations in [`order`] decode a reply obtained by any
//! other means.
//!
//! # Errors
//!
//! Everything fallible returns [`eyre::Result`]. A failure reported by the API is a
//! [`SymantecError`] inside the report:
//!
//! ```
//! use symantecssl::{order::ModifyOrder, SymantecError};
//!
//! let xml = br#"<ModifyOrder><OrderResponseHeader><Errors><Error>
//!     <ErrorMessage>Order not found</ErrorMessage>
//! </Error></Errors><SuccessCode>-1</SuccessCode></OrderResponseHeader></ModifyOrder>"#;
//!
//! let report = ModifyOrder.response(xml).unwrap_err();
//! let err = report.downcast_ref::<SymantecError>().unwrap();
//! assert_eq!(err.to_string(), "There was an error modifying the order: 'Order not found'");
//! assert_eq!(err.errors()[0].message(), Some("Order not found"));
//! ```
//!
//! Malformed documents and transport failures are reported as-is.
//!
//! [`RequestEnvelope::to_xml`]: crate::request::RequestEnvelope::to_xml()

#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]

mod client;
mod error;
mod response;
mod util;

pub mod order;
pub mod request;


pub use crate::{
    client::{Client, Endpoint},
    error::{ErrorEntry, SymantecError},
    response::{FieldValue, OrderResponse},
};
