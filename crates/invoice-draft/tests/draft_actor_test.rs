use chrono::NaiveDate;
use invoice_draft::clients::{CatalogClient, DraftClient, InvoiceClient, ProductClient, ServiceClient};
use invoice_draft::draft_actor::{DraftContext, DraftError};
use invoice_draft::invoice_actor::InvoiceError;
use invoice_draft::model::{
    CustomerId, InvoiceHeader, Invoice, InvoiceId, ItemKey, Product, ProductId, RowChange, Service,
    ServiceId,
};
use resource_actor::mock::MockClient;
use resource_actor::{ActorClient, FrameworkError};
use rust_decimal_macros::dec;

struct Mocks {
    products: MockClient<Product>,
    services: MockClient<Service>,
    invoices: MockClient<Invoice>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            products: MockClient::new(),
            services: MockClient::new(),
            invoices: MockClient::new(),
        }
    }

    fn context(&self) -> DraftContext {
        DraftContext {
            catalog: CatalogClient::new(
                ProductClient::new(self.products.client()),
                ServiceClient::new(self.services.client()),
            ),
            invoices: InvoiceClient::new(self.invoices.client()),
        }
    }

    fn verify(&self) {
        self.products.verify();
        self.services.verify();
        self.invoices.verify();
    }
}

fn ring(stock: u32) -> Product {
    Product::new(ProductId(1), "Gold Ring", dec!(100), stock)
}

fn engraving() -> Service {
    Service {
        id: ServiceId(1),
        name: "Engraving".into(),
        price: dec!(50),
        service_type: "customization".into(),
        duration: None,
        requires_deposit: false,
    }
}

fn header() -> InvoiceHeader {
    InvoiceHeader {
        customer_id: CustomerId(1),
        issue_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        due_date: None,
        notes: String::new(),
    }
}

/// Real Draft actor, mocked catalog and invoice store.
#[tokio::test]
async fn test_draft_actor_with_mocked_dependencies() {
    let mut mocks = Mocks::new();
    // Every AddItem looks the entry up again
    mocks.products.expect_get(ProductId(1)).return_ok(Some(ring(10)));
    mocks.services.expect_get(ServiceId(1)).return_ok(Some(engraving()));
    mocks.products.expect_get(ProductId(1)).return_ok(Some(ring(10)));
    mocks.invoices.expect_create().return_ok(InvoiceId(7));

    let (draft_actor, generic_client) = invoice_draft::draft_actor::new(8);
    let drafts = DraftClient::new(generic_client);
    let actor_handle = tokio::spawn(draft_actor.run(mocks.context()));

    let draft = drafts.create_draft().await.unwrap();
    let p1 = ItemKey::product(ProductId(1));

    let view = drafts.add_item(draft, p1, 2).await.unwrap();
    assert_eq!(view.change, RowChange::Appended(p1));
    assert_eq!(view.subtotal(), dec!(200));

    drafts
        .add_item(draft, ItemKey::service(ServiceId(1)), 1)
        .await
        .unwrap();
    let view = drafts.add_item(draft, p1, 1).await.unwrap();
    assert_eq!(view.change, RowChange::Updated(p1));
    assert_eq!(view.line(p1).unwrap().quantity, 3);
    assert_eq!(view.subtotal(), dec!(350));

    let invoice_id = drafts.submit(draft, header()).await.unwrap();
    assert_eq!(invoice_id, InvoiceId(7));

    // submitted drafts are gone
    assert!(!drafts.exists(draft).await.unwrap());
    mocks.verify();

    drop(drafts);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_lookup_failures_leave_draft_unchanged() {
    let mut mocks = Mocks::new();
    mocks.products.expect_get(ProductId(1)).return_ok(Some(ring(3)));
    mocks.products.expect_get(ProductId(2)).return_ok(None);
    mocks
        .services
        .expect_get(ServiceId(1))
        .return_err(FrameworkError::ActorClosed);

    let (draft_actor, generic_client) = invoice_draft::draft_actor::new(8);
    let drafts = DraftClient::new(generic_client);
    tokio::spawn(draft_actor.run(mocks.context()));

    let draft = drafts.create_draft().await.unwrap();

    let err = drafts
        .add_item(draft, ItemKey::product(ProductId(1)), 5)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DraftError::InsufficientStock {
            key: ItemKey::product(ProductId(1)),
            requested: 5,
            available: 3
        }
    );

    let err = drafts
        .add_item(draft, ItemKey::product(ProductId(2)), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, DraftError::Lookup(_)));

    let err = drafts
        .add_item(draft, ItemKey::service(ServiceId(1)), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, DraftError::Lookup(_)));

    // zero quantity is rejected before any lookup
    let err = drafts
        .add_item(draft, ItemKey::product(ProductId(1)), 0)
        .await
        .unwrap_err();
    assert!(matches!(err, DraftError::Validation(_)));

    let view = drafts.view(draft).await.unwrap();
    assert!(view.items.is_empty());
    assert_eq!(view.total_amount(), dec!(0));
    mocks.verify();
}

#[tokio::test]
async fn test_store_rejection_becomes_submission_error() {
    let mut mocks = Mocks::new();
    mocks.services.expect_get(ServiceId(1)).return_ok(Some(engraving()));
    mocks
        .invoices
        .expect_create()
        .return_err(FrameworkError::entity(InvoiceError::UnknownCustomer(
            "customer_1".into(),
        )));

    let (draft_actor, generic_client) = invoice_draft::draft_actor::new(8);
    let drafts = DraftClient::new(generic_client);
    tokio::spawn(draft_actor.run(mocks.context()));

    let draft = drafts.create_draft().await.unwrap();
    drafts
        .add_item(draft, ItemKey::service(ServiceId(1)), 1)
        .await
        .unwrap();

    let err = drafts.submit(draft, header()).await.unwrap_err();
    assert_eq!(
        err,
        DraftError::Submission("Customer not found: customer_1".into())
    );
    // abandoned even though the save failed
    assert!(!drafts.exists(draft).await.unwrap());
    mocks.verify();
}
