use clap::Args;

use crate::cli::ConnectionArgs;

#[derive(Debug, Args)]
pub(crate) struct ExamplePromotionsArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

pub(crate) async fn run(args: ExamplePromotionsArgs) -> Result<(), String> {
    let context = args.connection.context().await?;

    let created = context
        .promotions
        .create_example_promotions()
        .await
        .map_err(|error| format!("failed to create example promotions: {error}"))?;

    println!("created: {}", created.len());

    for promotion in &created {
        println!();
        super::print_promotion(promotion);
    }

    Ok(())
}
