// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Session;
use crate::store;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => login(conn, sub)?,
        Some(("logout", _)) => logout(conn)?,
        Some(("whoami", _)) => whoami(conn)?,
        _ => {}
    }
    Ok(())
}

fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let session = Session {
        username: sub.get_one::<String>("username").unwrap().to_string(),
        role: sub.get_one::<String>("role").unwrap().to_string(),
    };
    store::save_session(conn, &session)?;
    println!("Logged in as {} ({})", session.username, session.role);
    Ok(())
}

fn logout(conn: &Connection) -> Result<()> {
    store::clear_session(conn)?;
    println!("Logged out");
    Ok(())
}

fn whoami(conn: &Connection) -> Result<()> {
    match store::load_session(conn)? {
        Some(s) => println!("{} ({})", s.username, s.role),
        None => println!("Not logged in"),
    }
    Ok(())
}
