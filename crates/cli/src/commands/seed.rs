//! Seed the store with demo data.
//!
//! Inserts two customers and three products, then builds a cart, checks it
//! out, and persists the resulting order - the same cart-to-order flow a
//! client runs at checkout. Seeding is not idempotent: re-running against an
//! already-seeded store fails on the unique customer email.

use rust_decimal::Decimal;
use tracing::info;

use storeroom_core::{Cart, Email};
use storeroom_server::db::{CustomerRepository, MIGRATOR, OrderRepository, ProductRepository};
use storeroom_server::models::{NewCustomer, NewOrder, NewProduct};

use super::migrate;

/// Demo product rows: (name, price, category, model, description).
const PRODUCTS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Mechanical Keyboard",
        "79.99",
        "Peripherals",
        "MK-87",
        "87-key tenkeyless with hot-swappable switches",
    ),
    (
        "Wireless Mouse",
        "29.50",
        "Peripherals",
        "WM-2",
        "Low-latency wireless mouse",
    ),
    (
        "USB-C Dock",
        "149.00",
        "Accessories",
        "DK-11",
        "Dual-display dock with 100W passthrough",
    ),
];

/// Migrate, then populate demo customers, products, and one order.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = migrate::connect().await?;
    MIGRATOR.run(&pool).await?;

    let customers = CustomerRepository::new(&pool);
    let products = ProductRepository::new(&pool);
    let orders = OrderRepository::new(&pool);

    let jane = customers
        .insert(NewCustomer {
            name: "Jane Doe".to_owned(),
            email: Email::parse("jane@example.com")?,
            address: "1 Main St".to_owned(),
            phone_number: "555-0100".to_owned(),
        })
        .await?;
    customers
        .insert(NewCustomer {
            name: "John Roe".to_owned(),
            email: Email::parse("john@example.com")?,
            address: "2 Side St".to_owned(),
            phone_number: "555-0101".to_owned(),
        })
        .await?;
    info!("Seeded 2 customers");

    let mut cart = Cart::new();
    for (name, price, category, model, description) in PRODUCTS {
        let price: Decimal = price.parse()?;
        let product = products
            .insert(NewProduct {
                name: (*name).to_owned(),
                price,
                category: (*category).to_owned(),
                model: (*model).to_owned(),
                description: (*description).to_owned(),
                image: format!("https://cdn.example.com/{}.jpg", model.to_lowercase()),
            })
            .await?;
        cart.add_item(product.id, product.name, product.price, 1);
    }
    info!("Seeded {} products", PRODUCTS.len());

    // Flush the cart into an order, exactly as a client checkout would.
    let draft = cart.checkout(jane.id, "ORDER-1");
    let order = orders
        .insert(NewOrder {
            customer_id: draft.customer_id,
            items: draft.items,
            total: draft.total,
            display_id: draft.display_id,
        })
        .await?;
    info!(order = %order.id, total = %order.total, "Seeded 1 order");

    Ok(())
}
