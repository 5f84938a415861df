use bigdecimal::num_bigint::BigInt;
use checkout_app::domain::promotions::models::NewPromotion;
use clap::Args;

use crate::cli::ConnectionArgs;

#[derive(Debug, Args)]
pub(crate) struct CreatePromotionArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Catalog product identifier
    #[arg(long)]
    product_id: String,

    /// Minimum quantity for the discount to apply
    #[arg(long)]
    min_amount: BigInt,

    /// Discount per unit, in minor currency units
    #[arg(long)]
    unit_discount: BigInt,
}

pub(crate) async fn run(args: CreatePromotionArgs) -> Result<(), String> {
    let context = args.connection.context().await?;

    let promotion = context
        .promotions
        .create_promotion(NewPromotion {
            product_id: args.product_id,
            min_amount: Some(args.min_amount),
            unit_discount: Some(args.unit_discount),
        })
        .await
        .map_err(|error| format!("failed to create promotion: {error}"))?;

    super::print_promotion(&promotion);

    Ok(())
}
