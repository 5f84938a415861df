use checkout_app::domain::pricing::PricedBasket;
use clap::{Args, Subcommand};

mod checkout;
mod show;

#[derive(Debug, Args)]
pub(crate) struct BasketCommand {
    #[command(subcommand)]
    command: BasketSubcommand,
}

#[derive(Debug, Subcommand)]
enum BasketSubcommand {
    /// Show a customer's open basket
    Show(show::ShowBasketArgs),

    /// Check out a customer's open basket
    Checkout(checkout::CheckoutBasketArgs),
}

pub(crate) async fn run(command: BasketCommand) -> Result<(), String> {
    match command.command {
        BasketSubcommand::Show(args) => show::run(args).await,
        BasketSubcommand::Checkout(args) => checkout::run(args).await,
    }
}

fn print_basket(basket: &PricedBasket) {
    println!("customer_id: {}", basket.customer_id);

    for item in &basket.items {
        println!(
            "item: {} ({}) x{} @ {} = {} - {} = {}",
            item.product_id,
            item.product_name,
            item.amount,
            item.unit_price,
            item.raw_value,
            item.discount,
            item.item_total
        );
    }

    println!("raw_value: {}", basket.raw_value);
    println!("discount: {}", basket.discount);
    println!("total: {}", basket.total);
}
