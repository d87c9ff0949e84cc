use tracing::{error, info, Instrument};

use storefront::catalog::{ColorFilter, ProductFilter};
use storefront::error::StorefrontError;
use storefront::palette::PALETTE_FILE_NAME;
use storefront::{setup_tracing, AppConfig, Catalog, ProductId, Section, StorefrontSystem};

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    // Setup tracing once for the entire application
    setup_tracing();

    if let Err(e) = run().await {
        error!(error = %e, "Storefront run failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), StorefrontError> {
    let config = AppConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).await?,
        None => {
            info!("No catalog file configured, using the built-in catalog");
            Catalog::sample()
        }
    };

    let system = StorefrontSystem::new(&config, catalog);
    let client = system.session_client.clone();
    let session_id = system.open_session().await?;
    info!(session_id = %session_id, "Session opened");

    // Browse: dyes from BBcos, then a search across the whole catalog.
    let span = tracing::info_span!("browsing", session_id = %session_id);
    async {
        client
            .set_product_filter(session_id.clone(), ProductFilter::new().brand("BBcos").category("Окрашивание"))
            .await?;
        for product in client.visible_products(session_id.clone()).await? {
            info!(id = %product.id, name = %product.name, price = product.effective_price(), "Listed");
        }

        client
            .set_product_filter(session_id.clone(), ProductFilter::new().search("пудра"))
            .await?;
        let found = client.visible_products(session_id.clone()).await?;
        info!(results = found.len(), "Search finished");
        Ok::<_, StorefrontError>(())
    }
    .instrument(span)
    .await?;

    // Shop: one cream, three powders on sale, then change our mind about one.
    let span = tracing::info_span!("shopping", session_id = %session_id);
    let cart = async {
        client.add_item(session_id.clone(), ProductId(2)).await?;
        client.open_product_detail(session_id.clone(), ProductId(3)).await?;
        client.add_detail_to_cart(session_id.clone()).await?;
        client.adjust_quantity(session_id.clone(), ProductId(3), 3).await?;
        client.adjust_quantity(session_id.clone(), ProductId(3), -1).await?;
        Ok::<_, StorefrontError>(client.cart(session_id.clone()).await?)
    }
    .instrument(span)
    .await?;

    for item in &cart.items {
        info!(
            product = %item.name,
            quantity = item.quantity,
            unit_price = item.unit_price,
            line_total = item.line_total,
            "Cart line"
        );
    }
    info!(items = cart.total_item_count, total = cart.total_amount, "Cart total");

    // Palette: export the copper shades.
    client.set_section(session_id.clone(), Section::Palettes).await?;
    client
        .set_color_filter(session_id.clone(), ColorFilter::new().category("Медные"))
        .await?;
    let document = client.export_palette(session_id.clone()).await?;
    tokio::fs::create_dir_all(&config.export_dir).await?;
    let export_path = config.export_dir.join(PALETTE_FILE_NAME);
    tokio::fs::write(&export_path, document).await?;
    info!(path = %export_path.display(), "Palette exported");

    client.close_session(session_id).await?;
    drop(client);

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Storefront run completed");
    Ok(())
}
