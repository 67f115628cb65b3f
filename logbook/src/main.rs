//! Parking logbook demo binary
//!
//! Walks the whole flow: register two vehicles, render the list, attach an
//! exit time through the edit flow, queue and price a ticket, print, and
//! shut down.

use parklog::app::App;
use parklog::reducer::LogbookEnvironment;
use parklog::tickets::TicketEnvironment;
use parklog::types::{CATEGORIES, VAN};
use parklog_core::environment::{SystemPrinter, UuidIds};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parklog=debug,parklog_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Parking Logbook ===\n");

    print!("Vehicle types:");
    for category in CATEGORIES {
        print!("  {} {}", category.id, category.name);
    }
    println!("\n");

    let mut app = App::new(
        LogbookEnvironment::new(Arc::new(UuidIds)),
        TicketEnvironment::new(Arc::new(SystemPrinter)),
    );

    // Register a car
    println!(">>> Registering a car in slot 3");
    app.form_mut().set_entry_time("08:00");
    app.form_mut().set_plate("PRA-42-46");
    app.form_mut().set_color("Red");
    app.select_slot(3).await;
    println!("    [{}]", app.form().submit_label());
    app.submit_form().await?;

    // Register a van
    println!(">>> Registering a van in slot 7");
    app.form_mut().set_category(VAN);
    app.form_mut().set_entry_time("08:30");
    app.form_mut().set_plate("XKT-10-99");
    app.form_mut().set_color("White");
    app.select_slot(7).await;
    println!("    [{}]", app.form().submit_label());
    app.submit_form().await?;

    println!("\nVehicle registry:");
    for row in app.rows().await {
        println!("  {row}");
    }

    // The car leaves: load it for editing and record the exit time
    println!("\n>>> Recording the car's exit at 09:15");
    let rows = app.rows().await;
    let Some(car_row) = rows.first() else {
        return Ok(());
    };
    let car_id = car_row.id;
    app.dispatch(car_row.edit_action()).await?;
    app.form_mut().set_exit_time("09:15");
    app.submit_form().await?;

    println!("\nVehicle registry:");
    for row in app.rows().await {
        println!("  {row}");
    }

    // Ticket flow: queue, preview with price, print, back
    println!("\n>>> Printing the car's ticket");
    app.handle_print_ticket(car_id).await?;
    println!("    view: {:?}", app.view().await);

    println!("\nParking tickets:");
    for ticket in app.ticket_views().await {
        println!("  {ticket}");
    }

    app.print_all().await?;
    app.handle_back().await?;
    println!("    view: {:?}", app.view().await);

    app.shutdown(Duration::from_secs(5)).await?;

    println!("\n=== Demo Complete ===");
    Ok(())
}
