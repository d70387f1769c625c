// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builds a small chain of records and inspects it.

use std::fs;

use errtrail::{ErrorRecord, as_decorated, chain_as_list, record, root_cause};

fn read_settings(path: &str) -> Result<String, ErrorRecord> {
    fs::read_to_string(path).map_err(|e| {
        ErrorRecord::new("failed to read settings")
            .with_parent(e)
            .with_argument("path", path)
    })
}

fn start(profile: &str) -> Result<(), ErrorRecord> {
    let path = format!("/nonexistent/{profile}.toml");
    let _settings = read_settings(&path).map_err(|e| {
        record!("cannot start profile {profile}")
            .with_parent(e)
            .with_argument("profile", profile)
    })?;
    Ok(())
}

fn main() {
    let Err(err) = start("default") else {
        println!("started");
        return;
    };

    println!("error: {err}");
    println!("root cause: {}", root_cause(&err));

    for link in chain_as_list(&err) {
        match as_decorated(link) {
            Some(record) => {
                println!("- {} (at {})", record.message(), record.origin());
                for (key, value) in record.arguments() {
                    println!("    {key} = {value}");
                }
            }
            None => println!("- {link}"),
        }
    }
}
