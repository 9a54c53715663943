//! Smoke-test binary: sign in against a running backend and list products.

use anyhow::Context as _;

use stockdesk_client::{AppContext, EDIT_STOCK, ProductQuery, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let base_url =
        std::env::var("STOCKDESK_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let app = AppContext::connect(&base_url).context("building transport")?;

    match (
        std::env::var("STOCKDESK_USERNAME"),
        std::env::var("STOCKDESK_PASSWORD"),
    ) {
        (Ok(username), Ok(password)) => {
            app.session()
                .login(&username, &password)
                .await
                .context("login rejected")?;
        }
        _ => {
            // Cookie may already be present from a prior run of the host app.
            app.session().refresh().await;
        }
    }

    let state = app.session().state();
    match state.snapshot() {
        Some(snap) => {
            tracing::info!(
                username = snap.username().unwrap_or("<unknown>"),
                can_edit_stock = snap.grants(&EDIT_STOCK),
                "session resolved"
            );
        }
        None => {
            tracing::warn!("not authenticated; listing will likely be refused");
        }
    }

    let page = app
        .list_products(&ProductQuery::default())
        .await
        .context("listing products")?;

    println!("{} product(s) total", page.total);
    for product in &page.items {
        println!(
            "#{:<6} {:<10} stock={:<6} {}",
            product.product_id, product.sku, product.stock, product.name
        );
    }

    Ok(())
}
