use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Arg, Command};
use tokio::runtime;

use crate::logging;

const MINIMUM_WORKER_THREAD_COUNT: usize = 6;

#[async_trait]
pub trait Daemon {
    type Config;

    fn load_config(&self, path_maybe: &Option<PathBuf>) -> Result<Self::Config>;

    async fn start(&mut self, cfg: Self::Config) -> Result<()>;
    async fn stop(&mut self) -> Result<()>;
}

/// Describes the process on the command line.
#[derive(Clone, Copy, Debug)]
pub struct ProcessInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub about: &'static str,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Arguments {
    config: Option<PathBuf>,
    log_config: Option<PathBuf>,
}

impl Arguments {
    fn command(info: ProcessInfo) -> Command<'static> {
        Command::new(info.name)
            .version(info.version)
            .about(info.about)
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("cfg")
                    .value_name("FILE")
                    .help("Sets a config file")
                    .takes_value(true),
            )
            .arg(
                Arg::new("log_config")
                    .short('l')
                    .long("log")
                    .value_name("FILE")
                    .help("Sets the log config file")
                    .takes_value(true),
            )
    }

    fn parse_from<I, T>(info: ProcessInfo, args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command(info).try_get_matches_from(args)?;
        Ok(Self {
            config: matches.value_of("config").map(PathBuf::from),
            log_config: matches.value_of("log_config").map(PathBuf::from),
        })
    }
}

fn worker_thread_count() -> usize {
    num_cpus::get().max(MINIMUM_WORKER_THREAD_COUNT)
}

fn init_runtime() -> Result<runtime::Runtime> {
    let threads = worker_thread_count();
    let rt = runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(threads)
        .build()?;
    tracing::debug!(threads = threads, "initialized tokio runtime");
    Ok(rt)
}

fn main_loop<D: Daemon>(args: Arguments, mut daemon: D) -> Result<()> {
    logging::init_logger(&args.log_config)?;
    let cfg = daemon.load_config(&args.config)?;

    let rt = init_runtime()?;
    rt.block_on(async move {
        daemon.start(cfg).await?;
        tokio::signal::ctrl_c().await?;
        tracing::info!("interrupt received, stopping");
        daemon.stop().await?;

        Ok(())
    })
}

pub struct DaemonProcess {}

impl DaemonProcess {
    /// Parses the command line, then runs the daemon until Ctrl-C.
    ///
    /// Exits the process with a non-zero code if the daemon fails to load, start or stop.
    pub fn start<D: Daemon>(info: ProcessInfo, daemon: D) {
        let args = match Arguments::parse_from(info, std::env::args_os()) {
            Ok(args) => args,
            Err(e) => e.exit(),
        };

        if let Err(e) = main_loop(args, daemon) {
            tracing::error!("fatal: {}", e);
            eprintln!("fatal: {}", e);
            std::process::exit(1);
        }
    }
}
