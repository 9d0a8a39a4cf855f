//! Menu and testimonial tests

use bistro_shared::menu::MenuItem;
use bistro_shared::results::{DeleteResult, InsertResult, UpdateResult};
use bistro_shared::testimonial::Testimonial;
use mongodb::bson::{doc, oid::ObjectId, Document};
use reqwest::StatusCode;

use super::{E2EInfra, E2EResult};

fn body(name: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": "dessert",
        "price": price,
        "recipe": "Chocolate, butter, eggs",
        "image": "https://img.example/cake.jpg",
    })
}

#[tokio::test]
async fn test_featured_menu_is_public_and_limited() -> E2EResult<()> {
    let infra = E2EInfra::init().await?;
    for i in 0..8 {
        infra.seed_menu_item(&format!("Dish{i}"), "popular", 10.0 + i as f64).await?;
    }

    let resp = infra.get("/featured-menu", None).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let featured: Vec<MenuItem> = resp.json().await?;
    assert_eq!(featured.len(), 6);

    let admin = infra.admin_cookie().await?;
    let all: Vec<MenuItem> = infra.get("/menu", Some(&admin)).send().await?.json().await?;
    assert_eq!(all.len(), 8);
    Ok(())
}

#[tokio::test]
async fn test_create_and_fetch_menu_item() -> E2EResult<()> {
    let infra = E2EInfra::init().await?;
    let admin = infra.admin_cookie().await?;

    let res: InsertResult = infra
        .post("/menu", Some(&admin))
        .json(&body("Chocolate Cake", 8.5))
        .send()
        .await?
        .json()
        .await?;
    assert!(res.acknowledged);

    let item: MenuItem = infra
        .get(&format!("/menu/{}", res.inserted_id), Some(&admin))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(item.id, res.inserted_id);
    assert_eq!(item.name, "Chocolate Cake");
    assert_eq!(item.price, 8.5);
    Ok(())
}

#[tokio::test]
async fn test_menu_body_rejects_unknown_fields() -> E2EResult<()> {
    let infra = E2EInfra::init().await?;
    let admin = infra.admin_cookie().await?;

    let mut payload = body("Chocolate Cake", 8.5);
    payload["discount"] = serde_json::json!(50);
    let resp = infra.post("/menu", Some(&admin)).json(&payload).send().await?;
    assert!(resp.status().is_client_error());

    let count = infra
        .db
        .collection::<Document>("menuItems")
        .count_documents(doc! {})
        .await?;
    assert_eq!(count, 0);
    Ok(())
}

#[tokio::test]
async fn test_put_updates_existing_and_inserts_missing() -> E2EResult<()> {
    let infra = E2EInfra::init().await?;
    let admin = infra.admin_cookie().await?;
    let id = infra.seed_menu_item("Caesar Salad", "salad", 9.0).await?;

    let res: UpdateResult = infra
        .put(&format!("/menu/{}", id.to_hex()), Some(&admin))
        .json(&body("Caesar Salad XL", 12.0))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(res.matched_count, 1);
    assert_eq!(res.modified_count, 1);
    assert_eq!(res.upserted_id, None);

    let item: MenuItem = infra
        .get(&format!("/menu/{}", id.to_hex()), Some(&admin))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(item.name, "Caesar Salad XL");
    assert_eq!(item.category, "dessert");

    let fresh = ObjectId::new();
    let res: UpdateResult = infra
        .put(&format!("/menu/{}", fresh.to_hex()), Some(&admin))
        .json(&body("Tiramisu", 7.0))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(res.matched_count, 0);
    assert_eq!(res.upserted_id, Some(fresh.to_hex()));
    Ok(())
}

#[tokio::test]
async fn test_delete_unknown_menu_item_reports_zero() -> E2EResult<()> {
    let infra = E2EInfra::init().await?;
    let admin = infra.admin_cookie().await?;
    let id = infra.seed_menu_item("Pizza", "pizza", 11.0).await?;

    let resp = infra
        .delete(&format!("/menu/{}", ObjectId::new().to_hex()), Some(&admin))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let res: DeleteResult = resp.json().await?;
    assert_eq!(res.deleted_count, 0);

    let res: DeleteResult = infra
        .delete(&format!("/menu/{}", id.to_hex()), Some(&admin))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(res.deleted_count, 1);
    Ok(())
}

#[tokio::test]
async fn test_missing_menu_item_is_null() -> E2EResult<()> {
    let infra = E2EInfra::init().await?;
    let admin = infra.admin_cookie().await?;
    let item: Option<MenuItem> = infra
        .get(&format!("/menu/{}", ObjectId::new().to_hex()), Some(&admin))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(item, None);
    Ok(())
}

#[tokio::test]
async fn test_testimonials_are_public() -> E2EResult<()> {
    let infra = E2EInfra::init().await?;
    infra
        .db
        .collection::<Document>("testimonials")
        .insert_many([
            doc! { "name": "Jane", "details": "Lovely soup", "rating": 5 },
            doc! { "name": "Omar", "details": "Slow service", "rating": 3.5 },
        ])
        .await?;

    let testimonials: Vec<Testimonial> = infra.get("/testimonials", None).send().await?.json().await?;
    assert_eq!(testimonials.len(), 2);
    assert!(testimonials.iter().any(|t| t.name == "Jane" && t.rating == 5.0));
    Ok(())
}
