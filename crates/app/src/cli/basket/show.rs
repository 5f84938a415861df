use checkout_app::domain::pricing::price_basket;
use clap::Args;

use crate::cli::ConnectionArgs;

#[derive(Debug, Args)]
pub(crate) struct ShowBasketArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Customer whose open basket to show
    #[arg(long)]
    customer: String,
}

pub(crate) async fn run(args: ShowBasketArgs) -> Result<(), String> {
    let context = args.connection.context().await?;

    let basket = context
        .baskets
        .get_open_basket(&args.customer)
        .await
        .map_err(|error| format!("failed to load basket: {error}"))?;

    let priced = price_basket(context.catalog.as_ref(), &basket)
        .await
        .map_err(|error| format!("failed to price basket: {error}"))?;

    println!("basket_uuid: {}", basket.uuid);
    super::print_basket(&priced);

    Ok(())
}
