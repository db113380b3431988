//! # Greeter
//!
//! Interactive command line greeter written in Rust.
//!
//! Enter a name to be greeted, press enter to greet the world.
//!
//! # Leave:
//!
//! - exit, quit, q (any letter case)
//! - 退出

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::error;

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    Builder::from_env(env).init();
}

fn run_greeter() -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    hello_greeter::run(stdin, stdout).context("Greeter session failed!")?;
    Ok(())
}

fn main() -> ExitCode {
    logger_init();
    match run_greeter() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err_msg) => {
            error!("Error: {:#}", err_msg);
            ExitCode::FAILURE
        }
    }
}
