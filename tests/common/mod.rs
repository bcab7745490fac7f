use std::sync::{LazyLock, Mutex};

use articulation::Graph;
use flexi_logger::{Logger, LoggerHandle};
use scopeguard::{OnUnwind, ScopeGuard};

pub mod slow_cut;

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Logs the graph if the test panics while holding it.
#[allow(dead_code)]
pub fn guard(g: Graph) -> ScopeGuard<Graph, impl FnOnce(Graph), OnUnwind> {
    scopeguard::guard_on_unwind(g, |g| log::error!("Crash with {g:?}"))
}

/// Graph from edges written as "u v".
#[allow(dead_code)]
pub fn from_edges(edges: &[&str]) -> Graph {
    edges
        .iter()
        .map(|e| e.split_once(' ').expect("edge needs two labels"))
        .collect()
}
