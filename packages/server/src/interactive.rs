//! Interactive mode for the server.
//!
//! Prompts the user for the dataset path, bind address and port before
//! starting the server.

use std::path::PathBuf;

use dialoguer::{Confirm, Input};

use crate::ServerConfig;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Each prompt defaults to the corresponding value of `defaults`, which
/// is also used if a prompt cannot be shown. Delegates to
/// [`super::run_server`] once confirmed.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run(defaults: ServerConfig) -> std::io::Result<()> {
    println!("Sentencing Dashboard Server");
    println!();

    let default_path = defaults.data_path.display().to_string();
    let data_path: String = Input::new()
        .with_prompt("Cases CSV")
        .default(default_path.clone())
        .interact_text()
        .unwrap_or(default_path);

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or_else(|_| defaults.bind_addr.clone());

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(defaults.port);

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server(ServerConfig {
        data_path: PathBuf::from(data_path),
        bind_addr,
        port,
        ..defaults
    })
    .await
}
