use checkout_app::domain::promotions::models::Promotion;
use clap::{Args, Subcommand};

mod create;
mod examples;
mod list;

#[derive(Debug, Args)]
pub(crate) struct PromotionCommand {
    #[command(subcommand)]
    command: PromotionSubcommand,
}

#[derive(Debug, Subcommand)]
enum PromotionSubcommand {
    /// Create a volume promotion for a product
    Create(create::CreatePromotionArgs),

    /// List all promotions
    List(list::ListPromotionsArgs),

    /// Create example promotions for every product without one
    Examples(examples::ExamplePromotionsArgs),
}

pub(crate) async fn run(command: PromotionCommand) -> Result<(), String> {
    match command.command {
        PromotionSubcommand::Create(args) => create::run(args).await,
        PromotionSubcommand::List(args) => list::run(args).await,
        PromotionSubcommand::Examples(args) => examples::run(args).await,
    }
}

fn print_promotion(promotion: &Promotion) {
    println!("promotion_uuid: {}", promotion.uuid);
    println!("product_id: {}", promotion.product_id);
    println!("min_amount: {}", promotion.min_amount);
    println!("unit_discount: {}", promotion.unit_discount);
}
