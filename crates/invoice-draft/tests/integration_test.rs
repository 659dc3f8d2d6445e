use chrono::NaiveDate;
use invoice_draft::config::AppConfig;
use invoice_draft::draft_actor::DraftError;
use invoice_draft::lifecycle::InvoicingSystem;
use invoice_draft::model::{
    CustomerCreate, CustomerCreateResponse, CustomerId, InvoiceHeader, InvoiceStatus, ItemKey,
    ProductCreate, ProductId, ProductUpdate, RowChange, ServiceCreate, ServiceId,
};
use invoice_draft::presentation::{RowOp, RowRegistry};
use resource_actor::ActorClient;
use rust_decimal_macros::dec;

struct Seeded {
    system: InvoicingSystem,
    ring: ProductId,
    engraving: ServiceId,
    customer: CustomerId,
}

async fn seeded(stock: u32) -> Seeded {
    let system = InvoicingSystem::new();
    let ring = system
        .product_client
        .create_product(ProductCreate {
            name: "Gold Ring".into(),
            price: dec!(100),
            quantity: stock,
        })
        .await
        .unwrap();
    let engraving = system
        .service_client
        .create_service(ServiceCreate {
            name: "Engraving".into(),
            price: dec!(50),
            service_type: "customization".into(),
            duration: Some(1),
            requires_deposit: false,
        })
        .await
        .unwrap();
    let customer = system
        .customer_client
        .create_customer(CustomerCreate::named("Asha Rao"))
        .await
        .unwrap();
    Seeded {
        system,
        ring,
        engraving,
        customer,
    }
}

fn header(customer_id: CustomerId) -> InvoiceHeader {
    InvoiceHeader {
        customer_id,
        issue_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2024, 8, 15),
        notes: "Gift wrap".into(),
    }
}

#[tokio::test]
async fn test_worked_example_through_the_actors() {
    let Seeded {
        system,
        ring,
        engraving,
        ..
    } = seeded(10).await;
    let drafts = &system.draft_client;
    let draft = drafts.create_draft().await.unwrap();
    let p1 = ItemKey::product(ring);
    let s1 = ItemKey::service(engraving);

    let view = drafts.add_item(draft, p1, 2).await.unwrap();
    assert_eq!(view.subtotal(), dec!(200));

    let view = drafts.add_item(draft, s1, 1).await.unwrap();
    assert_eq!(view.subtotal(), dec!(250));

    let view = drafts.set_discount(draft, "50").await.unwrap();
    assert_eq!(view.tax_amount(), dec!(20));
    assert_eq!(view.total_amount(), dec!(220));

    let view = drafts.remove_item(draft, p1).await.unwrap();
    assert_eq!(
        view.change,
        RowChange::Removed {
            key: p1,
            now_empty: false
        }
    );
    assert_eq!(view.subtotal(), dec!(50));
    assert_eq!(view.tax_amount(), dec!(0));
    assert_eq!(view.total_amount(), dec!(0));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_over_stock_add_is_rejected() {
    let Seeded { system, ring, .. } = seeded(3).await;
    let drafts = &system.draft_client;
    let draft = drafts.create_draft().await.unwrap();

    let err = drafts
        .add_item_input(draft, ItemKey::product(ring), "5")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DraftError::InsufficientStock {
            requested: 5,
            available: 3,
            ..
        }
    ));
    assert!(drafts.view(draft).await.unwrap().items.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_adds_on_one_draft_are_serialized() {
    let Seeded { system, ring, .. } = seeded(3).await;
    let draft = system.draft_client.create_draft().await.unwrap();
    let key = ItemKey::product(ring);

    let mut handles = Vec::new();
    for _ in 0..5 {
        let drafts = system.draft_client.clone();
        handles.push(tokio::spawn(
            async move { drafts.add_item(draft, key, 1).await },
        ));
    }

    let mut added = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => added += 1,
            Err(DraftError::InsufficientStock { .. }) => rejected += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!((added, rejected), (3, 2));

    let view = system.draft_client.view(draft).await.unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.line(key).unwrap().quantity, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_merge_keeps_first_picked_price() {
    let Seeded { system, ring, .. } = seeded(10).await;
    let drafts = &system.draft_client;
    let draft = drafts.create_draft().await.unwrap();
    let key = ItemKey::product(ring);

    drafts.add_item(draft, key, 1).await.unwrap();
    system
        .product_client
        .update_product(
            ring,
            ProductUpdate {
                price: Some(dec!(120)),
                quantity: None,
            },
        )
        .await
        .unwrap();
    let view = drafts.add_item(draft, key, 1).await.unwrap();

    assert_eq!(view.line(key).unwrap().unit_price, dec!(100));
    assert_eq!(view.subtotal(), dec!(200));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_submission_reserves_stock_and_closes_draft() {
    let Seeded {
        system,
        ring,
        engraving,
        customer,
    } = seeded(10).await;
    let drafts = &system.draft_client;
    let draft = drafts.create_draft().await.unwrap();

    drafts.add_item(draft, ItemKey::product(ring), 4).await.unwrap();
    drafts
        .add_item(draft, ItemKey::service(engraving), 1)
        .await
        .unwrap();
    drafts.set_discount(draft, dec!(50)).await.unwrap();

    let payload = drafts.payload(draft).await.unwrap();
    assert_eq!(payload.len(), 2);
    assert!(!payload[0].is_service);
    assert!(payload[1].is_service);

    let invoice_id = drafts.submit(draft, header(customer)).await.unwrap();

    let invoice = system.invoice_client.get(invoice_id).await.unwrap().unwrap();
    assert_eq!(invoice.invoice_number, "INV-20240715-0001");
    assert_eq!(invoice.status, InvoiceStatus::Pending);
    assert_eq!(invoice.total_amount, dec!(450));
    assert_eq!(invoice.discount, dec!(50));
    assert_eq!(invoice.tax_amount, dec!(40));
    assert_eq!(invoice.final_amount, dec!(440));

    assert_eq!(system.product_client.check_stock(ring).await.unwrap(), 6);
    assert!(!drafts.exists(draft).await.unwrap());

    let paid = system
        .invoice_client
        .set_status(invoice_id, InvoiceStatus::Paid)
        .await
        .unwrap();
    assert_eq!(paid.status, InvoiceStatus::Paid);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_submission_still_closes_draft() {
    let Seeded { system, ring, .. } = seeded(10).await;
    let drafts = &system.draft_client;
    let draft = drafts.create_draft().await.unwrap();
    drafts.add_item(draft, ItemKey::product(ring), 2).await.unwrap();

    let err = drafts
        .submit(draft, header(CustomerId(99)))
        .await
        .unwrap_err();
    assert!(matches!(err, DraftError::Submission(ref msg) if msg.contains("customer_99")));

    // nothing reserved, draft abandoned
    assert_eq!(system.product_client.check_stock(ring).await.unwrap(), 10);
    assert!(!drafts.exists(draft).await.unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stock_sold_elsewhere_fails_the_save_and_releases() {
    let Seeded {
        system,
        ring,
        customer,
        ..
    } = seeded(5).await;
    let second = system
        .product_client
        .create_product(ProductCreate {
            name: "Silver Chain".into(),
            price: dec!(40),
            quantity: 2,
        })
        .await
        .unwrap();

    let drafts = &system.draft_client;
    let draft = drafts.create_draft().await.unwrap();
    drafts.add_item(draft, ItemKey::product(ring), 3).await.unwrap();
    drafts.add_item(draft, ItemKey::product(second), 2).await.unwrap();

    // another counter sells the last chains before this invoice is saved
    system.product_client.reserve_stock(second, 1).await.unwrap();

    let err = drafts.submit(draft, header(customer)).await.unwrap_err();
    assert!(matches!(err, DraftError::Submission(_)));
    assert_eq!(system.product_client.check_stock(ring).await.unwrap(), 5);
    assert_eq!(system.product_client.check_stock(second).await.unwrap(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_draft_cannot_be_submitted_and_stays_open() {
    let Seeded {
        system, customer, ..
    } = seeded(1).await;
    let drafts = &system.draft_client;
    let draft = drafts.create_draft().await.unwrap();

    let err = drafts.submit(draft, header(customer)).await.unwrap_err();
    assert!(matches!(err, DraftError::Validation(_)));
    assert!(drafts.exists(draft).await.unwrap());

    drafts.discard(draft).await.unwrap();
    assert!(!drafts.exists(draft).await.unwrap());
    assert!(matches!(
        drafts.view(draft).await,
        Err(DraftError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rows_follow_the_draft() {
    let Seeded {
        system,
        ring,
        engraving,
        ..
    } = seeded(10).await;
    let drafts = &system.draft_client;
    let draft = drafts.create_draft().await.unwrap();
    let mut rows = RowRegistry::with_dom_ids();

    let ops = rows.apply(&drafts.add_item(draft, ItemKey::product(ring), 1).await.unwrap());
    assert_eq!(ops[0], RowOp::Reveal);

    let ops = rows.apply(
        &drafts
            .add_item(draft, ItemKey::service(engraving), 1)
            .await
            .unwrap(),
    );
    assert!(matches!(&ops[..], [RowOp::Append { handle, .. }] if handle == "row-service-1"));

    rows.apply(&drafts.remove_item(draft, ItemKey::product(ring)).await.unwrap());
    let ops = rows.apply(
        &drafts
            .remove_item(draft, ItemKey::service(engraving))
            .await
            .unwrap(),
    );
    assert_eq!(ops.last(), Some(&RowOp::Collapse));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_form_responses() {
    let system = InvoicingSystem::with_config(&AppConfig {
        channel_buffer: 4,
        ..AppConfig::default()
    });

    let ok = system
        .customer_client
        .submit_form(CustomerCreate {
            name: "Meera".into(),
            email: Some("".into()),
            phone: Some("98450 00000".into()),
            ..CustomerCreate::default()
        })
        .await;
    let id = match ok {
        CustomerCreateResponse::Success { customer, .. } => customer.id,
        other => panic!("expected success, got {other:?}"),
    };
    let stored = system.customer_client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.email, None);

    let rejected = system
        .customer_client
        .submit_form(CustomerCreate::named(""))
        .await;
    assert_eq!(
        rejected,
        CustomerCreateResponse::Error {
            message: "Customer name is required".into()
        }
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_huge_discount_leaves_every_draft_usable() {
    let Seeded {
        system, engraving, ..
    } = seeded(5).await;
    let drafts = &system.draft_client;
    let first = drafts.create_draft().await.unwrap();
    let second = drafts.create_draft().await.unwrap();
    drafts
        .add_item(second, ItemKey::service(engraving), 1)
        .await
        .unwrap();

    let view = drafts
        .set_discount(first, "79228162514264337593543950335")
        .await
        .unwrap();
    assert_eq!(view.totals.discount, dec!(0));
    assert_eq!(view.total_amount(), dec!(0));

    let appraisal = system
        .service_client
        .create_service(ServiceCreate {
            name: "Estate appraisal".into(),
            price: dec!(79228162514264337593543950335),
            service_type: "appraisal".into(),
            duration: None,
            requires_deposit: false,
        })
        .await
        .unwrap();
    let err = drafts
        .add_item_input(first, ItemKey::service(appraisal), "2")
        .await
        .unwrap_err();
    assert!(matches!(err, DraftError::Validation(_)));
    assert!(drafts.view(first).await.unwrap().items.is_empty());

    let other = drafts.view(second).await.unwrap();
    assert_eq!(other.total_amount(), dec!(55));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_channel_buffer_still_starts() {
    let system = InvoicingSystem::with_config(&AppConfig {
        channel_buffer: 0,
        ..AppConfig::default()
    });
    let draft = system.draft_client.create_draft().await.unwrap();
    assert!(system.draft_client.view(draft).await.unwrap().items.is_empty());

    system.shutdown().await.unwrap();
}
