// Global installation lives in its own test binary: the process-wide
// dispatcher can only be set once.
use runlog::{active_log_path, initialize_logging, LoggingError};
use std::env;
use std::fs;
use tracing::{debug, info};

#[test]
fn test_initialize_logging_twice_keeps_first_sink() {
    let tmp = tempfile::TempDir::new().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    let cwd = env::current_dir().unwrap();

    let session = initialize_logging().expect("Первая инициализация должна пройти успешно");
    assert_eq!(session.dir(), cwd.join("logs"));
    assert!(session.dir().is_dir(), "Директория logs должна существовать после инициализации");
    assert_eq!(active_log_path().as_deref(), Some(session.path()));

    info!("Logging has started");
    debug!("suppressed at info");

    match initialize_logging() {
        Err(LoggingError::AlreadyInitialized { active }) => {
            assert_eq!(active.as_deref(), Some(session.path()));
        }
        other => panic!("Повторная инициализация должна вернуть AlreadyInitialized, получено: {:?}", other),
    }

    info!("still the first file");
    log::info!("via log");
    log::debug!("log debug suppressed");

    let files: Vec<_> = fs::read_dir(session.dir()).unwrap().collect();
    assert_eq!(files.len(), 1, "Повторный вызов не должен создавать новый файл");

    let contents = fs::read_to_string(session.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "Содержимое лога: {:?}", lines);
    assert!(lines[0].ends_with(" global_init - INFO - Logging has started"), "Строка: {}", lines[0]);
    assert!(lines[1].ends_with(" - INFO - still the first file"), "Строка: {}", lines[1]);
    assert!(lines[2].ends_with(" global_init - INFO - via log"), "Запись из log должна попасть в файл: {}", lines[2]);
    assert!(!contents.contains("suppressed at info"));
    assert!(!contents.contains("log debug suppressed"));
}
