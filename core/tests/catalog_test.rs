mod common;

use chrono::NaiveDate;
use common::setup_service;
use quarry_core::{
    application::QuarryService,
    domain::{
        catalog::{
            entities::{OrderStatus, Product},
            ports::CatalogService,
            value_objects::{
                CreateOrderInput, CreateProductInput, OrderStatusSummary, OrderSummary,
            },
        },
        common::{entities::app_errors::CoreError, pagination::PageRequest},
    },
};

async fn create_product(service: &QuarryService, name: &str, price: i64) -> Product {
    service
        .create_product(CreateProductInput {
            name: name.to_string(),
            price,
            category: "Books".to_string(),
        })
        .await
        .unwrap()
}

async fn create_order(
    service: &QuarryService,
    product_id: i64,
    quantity: i64,
    total_price: i64,
    status: OrderStatus,
) {
    service
        .create_order(CreateOrderInput {
            product_id,
            quantity,
            total_price: Some(total_price),
            status,
            order_date: NaiveDate::from_ymd_opt(2025, 3, 1),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_order_statistics_by_status() {
    let service = setup_service().await;
    let product = create_product(&service, "Books 0", 1000).await;
    create_order(&service, product.id, 1, 10, OrderStatus::Shipped).await;
    create_order(&service, product.id, 2, 20, OrderStatus::Shipped).await;
    create_order(&service, product.id, 1, 5, OrderStatus::Cancelled).await;

    let summary = service.get_order_statistics_by_status().await.unwrap();

    assert_eq!(summary.len(), 2);
    assert_eq!(
        summary.get("SHIPPED"),
        Some(&OrderStatusSummary {
            order_count: 2,
            total_amount: 30,
        })
    );
    assert_eq!(
        summary.get("CANCELLED"),
        Some(&OrderStatusSummary {
            order_count: 1,
            total_amount: 5,
        })
    );
    assert!(!summary.contains_key("PROCESSING"));
}

#[tokio::test]
async fn test_order_summary() {
    let service = setup_service().await;
    let product = create_product(&service, "Books 0", 1000).await;
    let other = create_product(&service, "Books 1", 1050).await;
    create_order(&service, product.id, 2, 2000, OrderStatus::Shipped).await;
    create_order(&service, product.id, 4, 4000, OrderStatus::Shipped).await;
    create_order(&service, product.id, 1, 1000, OrderStatus::Cancelled).await;

    let shipped = service
        .get_order_summary(product.id, Some("SHIPPED".to_string()))
        .await
        .unwrap();
    assert_eq!(
        shipped,
        Some(OrderSummary {
            product_id: product.id,
            quantity: 6,
            sum: 6000,
        })
    );

    let all = service.get_order_summary(product.id, None).await.unwrap();
    assert_eq!(all.map(|s| s.sum), Some(7000));

    let none = service
        .get_order_summary(product.id, Some("PROCESSING".to_string()))
        .await
        .unwrap();
    assert_eq!(none, None);

    assert_eq!(service.get_order_summary(other.id, None).await.unwrap(), None);
}

#[tokio::test]
async fn test_product_price_range() {
    let service = setup_service().await;
    for (i, price) in [500, 1000, 1500, 2000, 2500].into_iter().enumerate() {
        create_product(&service, &format!("Books {i}"), price).await;
    }

    let products = service.get_product_price_range(1000, 2000).await.unwrap();
    let prices: Vec<i64> = products.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![1000, 1500, 2000]);

    assert!(matches!(
        service.get_product_price_range(2000, 1000).await,
        Err(CoreError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_products_by_min_price_are_paged() {
    let service = setup_service().await;
    for i in 0..5 {
        create_product(&service, &format!("Books {i}"), 1000 + i * 50).await;
    }

    let all = service
        .get_products(None, PageRequest::new(1, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(all.len(), 5);

    let page = service
        .get_products(Some(1100), PageRequest::new(2, 2).unwrap())
        .await
        .unwrap();
    let prices: Vec<i64> = page.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![1200]);
}

#[tokio::test]
async fn test_order_products_page() {
    let service = setup_service().await;
    let product = create_product(&service, "Books 0", 1000).await;
    for quantity in 1..=5 {
        create_order(&service, product.id, quantity, quantity * 1000, OrderStatus::Processing)
            .await;
    }

    let page = service
        .get_order_products(product.id, PageRequest::new(2, 2).unwrap())
        .await
        .unwrap();

    assert_eq!(page.product_id, product.id);
    let quantities: Vec<i64> = page.order_responses.iter().map(|o| o.quantity).collect();
    assert_eq!(quantities, vec![3, 4]);
    assert!(page.order_responses.iter().all(|o| o.status == "PROCESSING"));
}

#[tokio::test]
async fn test_product_order_count() {
    let service = setup_service().await;
    let product = create_product(&service, "Books 0", 1000).await;
    let idle = create_product(&service, "Books 1", 1050).await;
    for _ in 0..3 {
        create_order(&service, product.id, 1, 1000, OrderStatus::Shipped).await;
    }

    let count = service
        .get_product_order_count(product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(count.product_name, "Books 0");
    assert_eq!(count.order_count, 3);

    assert_eq!(service.get_product_order_count(idle.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_create_order_derives_total_price() {
    let service = setup_service().await;
    let product = create_product(&service, "Books 0", 1000).await;

    let order = service
        .create_order(CreateOrderInput {
            product_id: product.id,
            quantity: 3,
            total_price: None,
            status: OrderStatus::Shipped,
            order_date: None,
        })
        .await
        .unwrap();

    assert_eq!(order.total_price, 3000);
    assert_eq!(order.status, "SHIPPED");

    assert!(matches!(
        service
            .create_order(CreateOrderInput {
                product_id: product.id + 1,
                quantity: 1,
                total_price: None,
                status: OrderStatus::Shipped,
                order_date: None,
            })
            .await,
        Err(CoreError::InvalidInput(_))
    ));
}
