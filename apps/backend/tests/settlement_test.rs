use backend::entities::payments::{self, IdList};
use backend::services::settlement::{record_settlement, NewSettlement};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use time::macros::datetime;

fn ledger_row(id: i64, cart_ids: Vec<i64>, total: f64) -> payments::Model {
    payments::Model {
        id,
        email: "ada@example.com".to_string(),
        total,
        cart_ids: IdList(cart_ids),
        menu_item_ids: IdList(vec![7, 8]),
        created_at: datetime!(2026-01-01 0:00 UTC),
    }
}

#[actix_web::test]
async fn settlement_inserts_ledger_row_and_clears_cart() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![ledger_row(1, vec![10, 11], 42.5)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 2,
        }])
        .into_connection();

    let outcome = record_settlement(
        &db,
        NewSettlement {
            email: "ada@example.com".to_string(),
            total: 42.5,
            cart_ids: vec![10, 11],
            menu_item_ids: vec![7, 8],
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome.payment.total, 42.5);
    assert_eq!(outcome.removed_cart_count, 2);
}

#[actix_web::test]
async fn ledger_keeps_requested_cart_ids_when_delete_is_partial() {
    // Three ids referenced, only two rows still exist at delete time
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![ledger_row(2, vec![10, 11, 12], 30.0)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 2,
        }])
        .into_connection();

    let outcome = record_settlement(
        &db,
        NewSettlement {
            email: "ada@example.com".to_string(),
            total: 30.0,
            cart_ids: vec![10, 11, 12],
            menu_item_ids: vec![7, 8],
        },
    )
    .await
    .unwrap();

    // The ledger is not rewritten to reflect what was actually deleted
    assert_eq!(outcome.payment.cart_ids, vec![10, 11, 12]);
    assert_eq!(outcome.removed_cart_count, 2);
}

#[actix_web::test]
async fn settlement_with_empty_cart_list_deletes_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![ledger_row(3, vec![], 5.0)]])
        .into_connection();

    let outcome = record_settlement(
        &db,
        NewSettlement {
            email: "ada@example.com".to_string(),
            total: 5.0,
            cart_ids: Vec::new(),
            menu_item_ids: vec![7],
        },
    )
    .await
    .unwrap();

    // delete_by_ids short-circuits, no exec reaches the database
    assert_eq!(outcome.removed_cart_count, 0);
}
