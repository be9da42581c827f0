//! # Roster - User Management by Single-Purpose Collaborators
//!
//! This is the demo entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                           │
//! │    ├── Creates: InMemoryUserRepository   (adapter)             │
//! │    ├── Creates: RuleBasedUserValidator   (adapter)             │
//! │    ├── Creates: StandardUserPresenter    (adapter)             │
//! │    └── Runs: a fixed create / format / activate sequence       │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sequence below is scaffolding: it exercises the service against
//! literal sample data and prints the results. The contract lives in the
//! domain crate, not here.

use roster_adapter::{InMemoryUserRepository, RuleBasedUserValidator, StandardUserPresenter};
use roster_domain::model::user::UserId;
use roster_domain::service::user_service::UserService;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("📇 Roster - user management demo");
    info!("");

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    // Adapters (could be swapped for SQLite, a web template, etc.)
    let repository = InMemoryUserRepository::new();
    let validator = RuleBasedUserValidator::new();
    let presenter = StandardUserPresenter::new();

    let mut service = UserService::new(repository, validator, presenter);

    // ========================================
    // Create users
    // ========================================

    info!("Creating users...");

    let alice = service
        .create_user("u123", "Alice Wonderland", "alice@example.com")
        .unwrap();
    info!("   ✓ Created: {}", alice.name());

    let bob = service
        .create_user("u124", "Bob The Builder", "bob@example.net")
        .unwrap();
    info!("   ✓ Created: {}", bob.name());

    // ========================================
    // Render them
    // ========================================

    info!("");
    info!("Formatted for console:");
    let console = service
        .get_formatted_user_details(&UserId::new("u123"), "console")
        .unwrap();
    for line in console.lines() {
        info!("   {}", line);
    }

    info!("");
    info!("Formatted for JSON:");
    let json = service
        .get_formatted_user_details(&UserId::new("u124"), "json")
        .unwrap();
    for line in json.lines() {
        info!("   {}", line);
    }

    // ========================================
    // A validation failure has no effect
    // ========================================

    info!("");
    match service.create_user("u125", "", "invalid") {
        Ok(user) => info!("   Created: {}", user.name()),
        Err(err) => warn!("   ✗ Error creating user: {}", err),
    }

    // ========================================
    // Activation round-trips through the store
    // ========================================

    info!("");
    let updated_bob = service.activate_user(&UserId::new("u124")).unwrap();
    info!(
        "   ✓ Updated {}: active = {}",
        updated_bob.name(),
        updated_bob.is_active()
    );

    info!("");
    info!("📇 Roster demo complete!");
}
