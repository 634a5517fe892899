use ghfoliod::GhfoliodDaemon;

use xecute::{DaemonProcess, ProcessInfo};

fn main() {
    let info = ProcessInfo {
        name: "ghfoliod",
        version: env!("CARGO_PKG_VERSION"),
        about: "GitHub portfolio backend",
    };

    DaemonProcess::start(info, GhfoliodDaemon::new())
}
