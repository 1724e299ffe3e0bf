//! Seed the database with a small demo catalog.
//!
//! Creates one store with a couple of billboards and a category, enough to
//! click through the admin pages and to exercise the delete restrictions
//! (the category blocks deleting both its billboard and its store).

use secrecy::SecretString;
use tracing::info;

use marquee_admin::db::{self, BillboardRepository, StoreRepository};
use marquee_core::{BillboardDraft, StoreSettings};

/// Insert a demo store, billboards, and a category.
///
/// # Errors
///
/// Returns an error if environment variables are missing or database
/// operations fail.
pub async fn demo_catalog() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MARQUEE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "MARQUEE_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let stores = StoreRepository::new(&pool);
    let store = stores
        .create(&StoreSettings {
            name: "Demo Store".to_string(),
        })
        .await?;
    info!(store_id = %store.id, "Created store");

    let billboards = BillboardRepository::new(&pool);
    let hero = billboards
        .create(
            store.id,
            &BillboardDraft {
                label: "Summer collection".to_string(),
                image_url: "https://cdn.example.com/billboards/summer.png".to_string(),
            },
        )
        .await?;
    info!(billboard_id = %hero.id, "Created billboard");

    let clearance = billboards
        .create(
            store.id,
            &BillboardDraft {
                label: "Clearance".to_string(),
                image_url: "https://cdn.example.com/billboards/clearance.png".to_string(),
            },
        )
        .await?;
    info!(billboard_id = %clearance.id, "Created billboard");

    // A category referencing the hero billboard, so deletes of the
    // billboard and the store hit the restriction path.
    sqlx::query(
        r"
        INSERT INTO categories (store_id, billboard_id, name)
        VALUES ($1, $2, $3)
        ",
    )
    .bind(store.id)
    .bind(hero.id)
    .bind("Shirts")
    .execute(&pool)
    .await?;
    info!("Created category");

    info!("Seeding complete!");
    info!("  Store: {} (id {})", store.name, store.id);
    info!("  Billboards: 2, Categories: 1");

    Ok(())
}
