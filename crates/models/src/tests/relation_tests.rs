use anyhow::Result;

use super::setup_test_db;
use crate::{pizza, restaurant, restaurant_pizza};

#[tokio::test]
async fn test_derived_views_follow_associations() -> Result<()> {
    let db = setup_test_db().await?;
    let dominion = restaurant::create(&db, "Dominion", "Main St").await?;
    let sottocasa = restaurant::create(&db, "Sottocasa", "Court St").await?;
    let margherita = pizza::create(&db, "Margherita", "Cheese, Tomato").await?;
    let pepperoni = pizza::create(&db, "Pepperoni", "Cheese, Pepperoni").await?;

    restaurant_pizza::create(&db, 10, margherita.id, dominion.id).await?;
    restaurant_pizza::create(&db, 12, pepperoni.id, dominion.id).await?;
    restaurant_pizza::create(&db, 9, margherita.id, sottocasa.id).await?;

    let offered = restaurant::pizzas(&db, &dominion).await?;
    let names: Vec<_> = offered.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Margherita", "Pepperoni"]);

    let sellers = pizza::restaurants(&db, &margherita).await?;
    let names: Vec<_> = sellers.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Dominion", "Sottocasa"]);

    assert!(pizza::restaurants(&db, &pepperoni).await?.iter().all(|r| r.id == dominion.id));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_pairs_allowed() -> Result<()> {
    let db = setup_test_db().await?;
    let r = restaurant::create(&db, "Dominion", "Main St").await?;
    let p = pizza::create(&db, "Margherita", "Cheese, Tomato").await?;

    restaurant_pizza::create(&db, 10, p.id, r.id).await?;
    restaurant_pizza::create(&db, 11, p.id, r.id).await?;

    let entries = restaurant_pizza::for_restaurant(&db, r.id).await?;
    let prices: Vec<_> = entries.iter().map(|(rp, _)| rp.price).collect();
    assert_eq!(prices, [10, 11]);
    assert!(entries.iter().all(|(_, pizza)| pizza.id == p.id));
    assert_eq!(restaurant::pizzas(&db, &r).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_delete_associations_by_parent() -> Result<()> {
    let db = setup_test_db().await?;
    let a = restaurant::create(&db, "Dominion", "Main St").await?;
    let b = restaurant::create(&db, "Sottocasa", "Court St").await?;
    let p = pizza::create(&db, "Margherita", "Cheese, Tomato").await?;
    let q = pizza::create(&db, "Pepperoni", "Cheese, Pepperoni").await?;

    restaurant_pizza::create(&db, 10, p.id, a.id).await?;
    restaurant_pizza::create(&db, 11, q.id, a.id).await?;
    let kept = restaurant_pizza::create(&db, 12, p.id, b.id).await?;

    assert_eq!(restaurant_pizza::delete_for_restaurant(&db, a.id).await?, 2);
    assert_eq!(restaurant_pizza::count(&db).await?, 1);

    assert_eq!(restaurant_pizza::delete_for_pizza(&db, q.id).await?, 0);
    assert_eq!(restaurant_pizza::delete_for_pizza(&db, p.id).await?, 1);

    assert!(!restaurant_pizza::delete(&db, kept.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_single_association_delete() -> Result<()> {
    let db = setup_test_db().await?;
    let r = restaurant::create(&db, "Dominion", "Main St").await?;
    let p = pizza::create(&db, "Margherita", "Cheese, Tomato").await?;
    let rp = restaurant_pizza::create(&db, 10, p.id, r.id).await?;

    assert!(restaurant_pizza::delete(&db, rp.id).await?);
    assert!(restaurant_pizza::for_restaurant(&db, r.id).await?.is_empty());
    assert!(restaurant::find(&db, r.id).await?.is_some());
    assert!(pizza::find(&db, p.id).await?.is_some());
    Ok(())
}
