//! Prism Console
//!
//! Design-system demo with an admin-style record management view.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════╗");
    println!("║                                               ║");
    println!("║   ◆ Prism Console                             ║");
    println!("║   Design System + Record Management Demo      ║");
    println!("║                                               ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!();

    // Launch the Dioxus desktop application
    prism_ui::launch();
}
