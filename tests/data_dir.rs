//! Tests of the process-wide data directory.
//!
//! `config::DATA_DIR` is shared by the whole test binary, so everything that touches it lives in a single test

use planner_larder::Coordinator;
use planner_larder::config;

#[test]
fn default_coordinator_follows_the_data_dir() {
    let _ = env_logger::builder().is_test(true).try_init();
    let from_env = tempfile::tempdir().unwrap();
    let overridden = tempfile::tempdir().unwrap();

    // The environment variable seeds the directory the first time it is read
    std::env::set_var(config::DATA_DIR_ENV_VAR, from_env.path());
    assert_eq!(config::data_dir(), from_env.path());

    config::set_data_dir(overridden.path());
    assert_eq!(config::data_dir(), overridden.path());

    let mut coord = Coordinator::open_default().unwrap();
    let id = coord.add_task_without_date("Buy milk".to_string()).unwrap();

    assert!(config::events_file(overridden.path()).exists());
    assert!(config::todos_file(overridden.path()).exists());
    assert!(config::events_file(from_env.path()).exists() == false);
    assert!(config::todos_file(from_env.path()).exists() == false);

    let reopened = Coordinator::open_default().unwrap();
    assert_eq!(reopened.get_event(&id).map(|appt| appt.subject()), Some("Buy milk"));
    assert_eq!(reopened.load_mirrored_todo_items()[0].appointment_id, id);
}
