//! Debug-build file logging
//!
//! Release builds compile this to a no-op. Debug builds append to
//! `redline-debug.log` in the working directory, keeping log output off the
//! terminal the UI owns. Filter with the usual `RUST_LOG` variable.

#[cfg(debug_assertions)]
pub fn init() {
    use std::io::Write;

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("redline-debug.log")
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("debug"),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format(|buf, record| {
        writeln!(
            buf,
            "[{} {} {}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    })
    .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
