use checkout_app::domain::pricing::price_basket;
use clap::Args;

use crate::cli::ConnectionArgs;

#[derive(Debug, Args)]
pub(crate) struct CheckoutBasketArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Customer whose open basket to check out
    #[arg(long)]
    customer: String,
}

pub(crate) async fn run(args: CheckoutBasketArgs) -> Result<(), String> {
    let context = args.connection.context().await?;

    let basket = context
        .baskets
        .checkout(&args.customer)
        .await
        .map_err(|error| format!("failed to check out basket: {error}"))?;

    let priced = price_basket(context.catalog.as_ref(), &basket)
        .await
        .map_err(|error| format!("failed to price basket: {error}"))?;

    println!("basket_uuid: {}", basket.uuid);

    if let Some(checked_out_at) = basket.checked_out_at {
        println!("checked_out_at: {checked_out_at}");
    }

    super::print_basket(&priced);

    Ok(())
}
