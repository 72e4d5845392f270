// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pharos CLI entrypoint.
//!
//! Runs the interactive TUI over a schema loaded from an introspection-result
//! JSON file, over the built-in demo schema (`--demo`), or over no schema at
//! all (the browser then shows its placeholder view).

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<schema.json>]\n  {program} --demo\n\n<schema.json> is a GraphQL introspection result (bare or data-wrapped).\nWithout arguments the browser starts without a schema.\n--demo uses a built-in demo schema and cannot be combined with a file."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    schema_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.schema_path.is_some() {
                    return Err(());
                }
                options.schema_path = Some(arg);
            }
        }
    }

    if options.demo && options.schema_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "pharos".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let schema = if options.demo {
            Some(pharos::tui::demo_schema())
        } else {
            match options.schema_path {
                Some(path) => {
                    let json = std::fs::read_to_string(&path)?;
                    Some(pharos::format::schema_from_introspection_json(&json)?)
                }
                None => None,
            }
        };

        pharos::tui::run(schema)
    })();

    if let Err(err) = result {
        eprintln!("pharos: {err}");
        std::process::exit(1);
    }
}
