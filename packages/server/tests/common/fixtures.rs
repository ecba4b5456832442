//! Test fixtures: the reference dataset and lookup helpers.
//!
//! The dataset mirrors the one loaded by the `seed_directory` binary: five
//! buildings in different cities, five organizations, a three-level
//! activity tree under "Еда", and a spread of phone numbers.

use anyhow::Result;
use sqlx::{PgPool, Postgres, Transaction};

/// Seed the reference dataset. Idempotent: does nothing when organizations
/// already exist.
pub async fn seed_reference_dataset(pool: &PgPool) -> Result<()> {
    let organization_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM organizations")
        .fetch_one(pool)
        .await?;
    if organization_count > 0 {
        return Ok(());
    }

    let mut tx = pool.begin().await?;

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

    let food = insert_activity(&mut tx, "Еда", None).await?;
    let cars = insert_activity(&mut tx, "Автомобили", None).await?;
    let it = insert_activity(&mut tx, "IT", None).await?;
    let retail = insert_activity(&mut tx, "Розничная торговля", None).await?;
    let services = insert_activity(&mut tx, "Услуги", None).await?;

    let meat = insert_activity(&mut tx, "Мясная продукция", Some(food)).await?;
    let dairy = insert_activity(&mut tx, "Молочная продукция", Some(food)).await?;
    let bakery = insert_activity(&mut tx, "Хлебобулочные изделия", Some(food)).await?;

    insert_activity(&mut tx, "Говядина", Some(meat)).await?;
    insert_activity(&mut tx, "Свинина", Some(meat)).await?;
    insert_activity(&mut tx, "Сыры", Some(dairy)).await?;
    insert_activity(&mut tx, "Йогурты", Some(dairy)).await?;
    insert_activity(&mut tx, "Хлеб", Some(bakery)).await?;
    insert_activity(&mut tx, "Торты", Some(bakery)).await?;

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

    tx.commit().await?;
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

/// Look up an organization id by exact name.
pub async fn organization_id_by_name(pool: &PgPool, name: &str) -> Result<i32> {
    let id = sqlx::query_scalar("SELECT id FROM organizations WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

/// Look up an activity id by exact name.
pub async fn activity_id_by_name(pool: &PgPool, name: &str) -> Result<i32> {
    let id = sqlx::query_scalar("SELECT id FROM activities WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

/// Look up a building id by address substring.
pub async fn building_id_by_address(pool: &PgPool, fragment: &str) -> Result<i32> {
    let id = sqlx::query_scalar("SELECT id FROM buildings WHERE address LIKE $1")
        .bind(format!("%{}%", fragment))
        .fetch_one(pool)
        .await?;
    Ok(id)
}
