use std::{env, fs};

use symantecssl::{
    request::{
        ContactInfo, Credentials, GetOrderByPartnerOrderIdRequest, OrderParameters,
        OrderQueryOptions, QuickOrderRequest,
    },
    Client, Endpoint, SymantecError,
};

const PRODUCT_CODE: &str = "SSL123";
const DOMAIN_NAME: &str = "example.org";
const APPROVER_EMAIL: &str = "admin@example.org";

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Use `Endpoint::Production` to place real orders.
    let creds = Credentials::new(
        env::var("PARTNER_CODE")?,
        env::var("PARTNER_USERNAME")?,
        env::var("PARTNER_PASSWORD")?,
    );
    let client = Client::new(Endpoint::Test, creds)?;

    log::info!("reading CSR from ./example.org.csr");
    let csr = fs::read_to_string("example.org.csr")?;

    let partner_order_id = format!("demo-{}", std::process::id());

    let contact = ContactInfo {
        first_name: Some("Tiny".to_owned()),
        last_name: Some("Tina".to_owned()),
        email: Some(APPROVER_EMAIL.to_owned()),
        phone: Some("210-555-5555".to_owned()),
        country: Some("US".to_owned()),
        ..Default::default()
    };

    let mut req = QuickOrderRequest {
        admin_contact: Some(contact.clone()),
        tech_contact: Some(contact),
        ..Default::default()
    };
    req.request_header
        .set_request_header(PRODUCT_CODE, &partner_order_id);
    req.approver_email.set_approver_email(APPROVER_EMAIL);
    req.set_order_parameters(OrderParameters {
        csr: Some(csr),
        domain_name: Some(DOMAIN_NAME.to_owned()),
        valid_period: Some("12".to_owned()),
        server_count: Some("1".to_owned()),
        web_server_type: Some("apacheopenssl".to_owned()),
        ..Default::default()
    });

    log::info!("placing order {partner_order_id}");
    match client.quick_order(req).await {
        Ok(res) => log::info!("order placed: {}", serde_json::to_string_pretty(&res)?),

        Err(report) => {
            // list every error the API reported before bailing out
            if let Some(err) = report.downcast_ref::<SymantecError>() {
                for entry in err.errors() {
                    log::error!("{}", serde_json::to_string(entry)?);
                }
            }
            return Err(report);
        }
    }

    let mut lookup = GetOrderByPartnerOrderIdRequest::new(&partner_order_id);
    lookup.set_query_options(OrderQueryOptions {
        vulnerability_scan_details: false,
        trust_services_details: false,
        ..Default::default()
    });

    let order = client.get_order_by_partner_order_id(lookup).await?;
    log::info!(
        "order status: {}",
        order.text("OrderStatusMajor").unwrap_or("unknown")
    );

    Ok(())
}
