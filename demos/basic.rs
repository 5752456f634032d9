//! This is an example of how planner-larder can be used.
//! It records a few events and tasks, toggles a task, and prints what is stored.

use std::path::PathBuf;

use chrono::{Duration, Local, Timelike};

use planner_larder::{Coordinator, Palette, TodoFilter};
use planner_larder::config;
use planner_larder::utils::{pause, print_appointments, print_todo_items};

const DATA_FOLDER: &str = "example_data";


fn main() {
    env_logger::init();

    println!("This example stores its files in {:?}.", DATA_FOLDER);
    println!("You can set the RUST_LOG environment variable to display more info.");
    pause();

    let data_dir = PathBuf::from(DATA_FOLDER);
    if let Err(err) = std::fs::create_dir_all(&data_dir) {
        log::error!("Unable to create {:?}: {}", data_dir, err);
        return;
    }
    config::set_data_dir(&data_dir);

    if let Err(err) = run() {
        log::error!("Example failed: {}", err);
    }
}

fn run() -> planner_larder::Result<()> {
    let mut coord = Coordinator::open_default()?;
    let mut changes = coord.subscribe();

    let start = Local::now().naive_local()
        .with_minute(0).and_then(|t| t.with_second(0)).and_then(|t| t.with_nanosecond(0))
        .unwrap_or_else(|| Local::now().naive_local());
    coord.add_new_event(start, start + Duration::hours(1), "Standup".to_string(), Palette::Blue.into(), false, true, true)?;
    let milk = coord.add_task_without_date("Buy milk".to_string())?;
    coord.add_new_event(start + Duration::days(1), start + Duration::days(1) + Duration::minutes(30),
                        "Pay the rent".to_string(), Palette::Pink.into(), false, true, false)?;

    if let Err(err) = coord.add_task_without_date("   ".to_string()) {
        println!("Rejected as expected: {}", err);
    }

    coord.toggle_completion(&milk)?;

    println!("---- Appointments -----");
    print_appointments(coord.store());
    println!("---- Active todo items -----");
    print_todo_items(&coord.get_todo_items(TodoFilter::Active));
    println!("---- Completed todo items -----");
    print_todo_items(&coord.get_todo_items(TodoFilter::Completed));

    let mut n_changes = 0;
    while let Ok(change) = changes.try_recv() {
        log::info!("{}", change);
        n_changes += 1;
    }
    println!("{} changes were notified.", n_changes);

    Ok(())
}
