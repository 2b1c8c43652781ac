use chrono::{Days, Utc};
use tracing::{info, instrument};

use crate::domain::{
    catalog::{
        entities::{NewOrder, NewProduct, OrderStatus},
        ports::{OrderRepository, ProductRepository},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    member::{entities::NewMember, ports::MemberRepository},
    seed::{
        DEMO_CATEGORIES, DEMO_MEMBER_COUNT, DEMO_ORDERS_PER_PRODUCT, DEMO_PRODUCTS_PER_CATEGORY,
        DemoDataReport, ports::DemoDataService,
    },
    team::ports::TeamRepository,
};

impl<M, T, P, O, HC> DemoDataService for Service<M, T, P, O, HC>
where
    M: MemberRepository,
    T: TeamRepository,
    P: ProductRepository,
    O: OrderRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn seed_demo_data(&self) -> Result<DemoDataReport, CoreError> {
        let foo = self.team_repository.create("foo".to_string()).await?;
        let bar = self.team_repository.create("bar".to_string()).await?;

        let members = (0..DEMO_MEMBER_COUNT)
            .map(|i| {
                let team = if i % 2 == 0 { &foo } else { &bar };
                NewMember::new(format!("baz{i}"), i, Some(team.id))
            })
            .collect();
        let members = self.member_repository.create_many(members).await?;

        let mut products = Vec::new();
        for (category, base_price, step) in DEMO_CATEGORIES {
            for i in 0..DEMO_PRODUCTS_PER_CATEGORY {
                let product = self
                    .product_repository
                    .create(NewProduct {
                        name: format!("{category} {i}"),
                        price: base_price + i * step,
                        category: category.to_string(),
                    })
                    .await?;
                products.push(product);
            }
        }

        let today = Utc::now().date_naive();
        let mut orders = Vec::new();
        for (i, product) in products.iter().enumerate() {
            for j in 1..=DEMO_ORDERS_PER_PRODUCT {
                let quantity = j * 2;
                let days_ago = i as u64 + j as u64;
                orders.push(NewOrder {
                    order_date: today.checked_sub_days(Days::new(days_ago)).unwrap_or(today),
                    quantity,
                    total_price: product.price * quantity,
                    status: OrderStatus::for_demo_index(j as usize),
                    product_id: product.id,
                });
            }
        }
        let orders = self.order_repository.create_many(orders).await?;

        let report = DemoDataReport {
            teams: 2,
            members,
            products: products.len() as u64,
            orders,
        };
        info!(?report, "demo data seeded");

        Ok(report)
    }

    #[instrument(skip(self))]
    async fn clear_demo_data(&self) -> Result<DemoDataReport, CoreError> {
        let members = self.member_repository.delete_all().await?;
        let teams = self.team_repository.delete_all().await?;
        let orders = self.order_repository.delete_all().await?;
        let products = self.product_repository.delete_all().await?;

        let report = DemoDataReport {
            teams,
            members,
            products,
            orders,
        };
        info!(?report, "demo data cleared");

        Ok(report)
    }
}
