use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use std::env;
use walletdesk_primitives::models::enum_types::{SettlementState, TransactionKind};
use walletdesk_primitives::models::pending_transaction::NewPendingTransaction;
use walletdesk_primitives::models::user::NewUser;
use walletdesk_primitives::schema::{pending_transactions, users};

fn establish_connection() -> PgConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}

fn main() {
    dotenv().ok();
    println!("Seeding database...");

    let mut conn = establish_connection();

    clean_db(&mut conn);

    seed_user(&mut conn, "alice", Some("pw1"), 10_000);
    seed_user(&mut conn, "bob", Some("pw2"), 0);
    // no gateway credential: approvals for this user must fail fast
    seed_user(&mut conn, "carol", None, 2_500);

    seed_pending(&mut conn, "alice", "DEMO-REF-1", 5_000);
    seed_pending(&mut conn, "alice", "DEMO-REF-2", 1_250);
    seed_pending(&mut conn, "bob", "DEMO-REF-3", 9_900);

    println!("Database seeded successfully");
}

fn clean_db(conn: &mut PgConnection) {
    use diesel::sql_query;
    println!("Cleaning database...");
    sql_query("TRUNCATE users, pending_transactions, deposits, audit_logs CASCADE")
        .execute(conn)
        .expect("Error truncating tables");
}

fn seed_user(conn: &mut PgConnection, name: &str, credential: Option<&str>, balance: i64) {
    let new_user = NewUser {
        username: name,
        gateway_password: credential,
        wallet_balance: balance,
    };

    diesel::insert_into(users::table)
        .values(&new_user)
        .execute(conn)
        .expect("Error inserting user");

    println!("Created user: {} (balance {})", name, balance);
}

fn seed_pending(conn: &mut PgConnection, name: &str, reference: &str, amount: i64) {
    diesel::insert_into(pending_transactions::table)
        .values(NewPendingTransaction {
            username: name,
            reference,
            kind: TransactionKind::Deposit,
            amount,
            txn_state: SettlementState::Pending,
        })
        .execute(conn)
        .expect("Error inserting pending transaction");

    println!("Created pending deposit {} for {}", reference, name);
}
