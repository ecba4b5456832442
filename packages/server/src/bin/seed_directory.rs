//! Seed the directory with the reference dataset. Idempotent: does nothing
//! when organizations already exist.

use anyhow::{Context, Result};
use server_core::config::Config;
use sqlx::{PgPool, Postgres, Transaction};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    println!("✓ Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let organization_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM organizations")
        .fetch_one(&pool)
        .await?;
    if organization_count > 0 {
        println!("✓ Directory already seeded ({organization_count} organizations), nothing to do");
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    seed(&mut tx).await?;
    tx.commit().await?;

    println!("✓ Seeded reference dataset");
    Ok(())
}

async fn seed(tx: &mut Transaction<'_, Postgres>) -> Result<()> {
    // Buildings
    let buildings = [
        ("г. Москва, ул. Тверская 1, офис 101", 55.7600, 37.6175),
        ("г. Москва, ул. Арбат 25", 55.7500, 37.5914),
        ("г. Санкт-Петербург, Невский пр. 28", 59.9358, 30.3259),
        ("г. Екатеринбург, ул. Блюхера 32/1", 56.8389, 60.6057),
        ("г. Казань, ул. Баумана 35", 55.7961, 49.1064),
    ];

    let mut building_ids = Vec::new();
    for (address, latitude, longitude) in buildings {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO buildings (address, latitude, longitude) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(address)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(tx.as_mut())
        .await?;
        building_ids.push(id);
    }

    // Activity tree: five roots, three levels under "Еда"
    let food = insert_activity(tx, "Еда", None).await?;
    let cars = insert_activity(tx, "Автомобили", None).await?;
    let it = insert_activity(tx, "IT", None).await?;
    let retail = insert_activity(tx, "Розничная торговля", None).await?;
    let services = insert_activity(tx, "Услуги", None).await?;

    let meat = insert_activity(tx, "Мясная продукция", Some(food)).await?;
    let dairy = insert_activity(tx, "Молочная продукция", Some(food)).await?;
    let bakery = insert_activity(tx, "Хлебобулочные изделия", Some(food)).await?;

    insert_activity(tx, "Говядина", Some(meat)).await?;
    insert_activity(tx, "Свинина", Some(meat)).await?;
    insert_activity(tx, "Сыры", Some(dairy)).await?;
    insert_activity(tx, "Йогурты", Some(dairy)).await?;
    insert_activity(tx, "Хлеб", Some(bakery)).await?;
    insert_activity(tx, "Торты", Some(bakery)).await?;

    // Organizations
    let organizations = [
        ("ООО \"Рога и Копыта\"", building_ids[0]),
        ("ИП \"АвтоМир\"", building_ids[1]),
        ("ЗАО \"IT-Технологии\"", building_ids[2]),
        ("ОАО \"ВкусВилл\"", building_ids[3]),
        ("ТОО \"Уютный Дом\"", building_ids[4]),
    ];

    let mut organization_ids = Vec::new();
    for (name, building_id) in organizations {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO organizations (name, building_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(building_id)
        .fetch_one(tx.as_mut())
        .await?;
        organization_ids.push(id);
    }

    // Organization-activity links
    let links = [
        (organization_ids[0], meat),
        (organization_ids[0], dairy),
        (organization_ids[1], cars),
        (organization_ids[2], it),
        (organization_ids[3], food),
        (organization_ids[3], bakery),
        (organization_ids[4], retail),
        (organization_ids[4], services),
    ];

    for (organization_id, activity_id) in links {
        sqlx::query(
            "INSERT INTO organization_activities (organization_id, activity_id) VALUES ($1, $2)",
        )
        .bind(organization_id)
        .bind(activity_id)
        .execute(tx.as_mut())
        .await?;
    }

    // Phones
    let phones = [
        (organization_ids[0], "8-495-111-22-33"),
        (organization_ids[0], "8-495-222-33-44"),
        (organization_ids[1], "8-812-333-44-55"),
        (organization_ids[2], "8-343-444-55-66"),
        (organization_ids[2], "8-343-555-66-77"),
        (organization_ids[3], "8-843-666-77-88"),
        (organization_ids[4], "8-495-777-88-99"),
        (organization_ids[4], "8-495-888-99-00"),
        (organization_ids[4], "8-800-123-45-67"),
    ];

    for (organization_id, phone_number) in phones {
        sqlx::query("INSERT INTO phones (organization_id, phone_number) VALUES ($1, $2)")
            .bind(organization_id)
            .bind(phone_number)
            .execute(tx.as_mut())
            .await?;
    }

    Ok(())
}

async fn insert_activity(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    parent_id: Option<i32>,
) -> Result<i32> {
    let id = sqlx::query_scalar(
        "INSERT INTO activities (name, parent_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(parent_id)
    .fetch_one(tx.as_mut())
    .await?;
    Ok(id)
}
