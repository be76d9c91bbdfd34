use anyhow::Context;

use pm_shop::ShopConfig;

fn main() -> anyhow::Result<()> {
    pm_observability::init();

    let config = ShopConfig::from_env().context("failed to load shop configuration")?;
    let product = config.product();

    tracing::info!(
        id = product.id(),
        name = product.name(),
        price = %product.price(),
        discount = %product.discount(),
        stars = product.rating().star_count(),
        "product ready"
    );

    println!("{product}");
    Ok(())
}
