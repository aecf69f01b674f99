use std::sync::mpsc::channel;

use linelog::{Severity, logger_config};

fn main() {
    // main thread logs to stderr with timestamps
    linelog::info!("Hello, world!");
    let path = std::env::temp_dir().join("linelog_threads.log");
    std::fs::remove_file(&path).ok();
    // worker lines go to a shared file until the guard is dropped
    let guard = logger_config()
        .with_log_file(&path)
        .unwrap()
        .with_threshold(Severity::Debug)
        .init_global();
    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            (
                std::thread::spawn(move || {
                    for message in receiver {
                        linelog::warn!("thread {} received: {}", i, message);
                    }
                }),
                sender,
            )
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    drop(guard);
    let content = std::fs::read_to_string(&path).unwrap();
    linelog::info!(
        "{} lines in {}, last one is:\n\t{}",
        content.lines().count(),
        path.display(),
        content.lines().last().unwrap_or_default()
    );
}
