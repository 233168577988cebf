// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tillbook::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = store::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", store::db_path()?.display());
        }
        Some(("session", sub)) => commands::session::handle(&conn, sub)?,
        Some(("record", sub)) => commands::records::handle(&conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
