use clap::Args;

use crate::cli::ConnectionArgs;

#[derive(Debug, Args)]
pub(crate) struct ListPromotionsArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

pub(crate) async fn run(args: ListPromotionsArgs) -> Result<(), String> {
    let context = args.connection.context().await?;

    let promotions = context
        .promotions
        .list_promotions()
        .await
        .map_err(|error| format!("failed to list promotions: {error}"))?;

    if promotions.is_empty() {
        println!("no promotions");

        return Ok(());
    }

    for (index, promotion) in promotions.iter().enumerate() {
        if index > 0 {
            println!();
        }

        super::print_promotion(promotion);
    }

    Ok(())
}
