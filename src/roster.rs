// src/roster.rs

use std::error::Error;

use crate::config::consts::ROSTER_PATH;
use crate::config::options::ServerOptions;
use crate::data::Roster;
use crate::net;

/// Fetch the roster CSV from the server and parse it.
/// An empty body counts as a failed load; there is nothing to render from it.
pub fn fetch(server: &ServerOptions) -> Result<Roster, Box<dyn Error>> {
    let text = net::http_get(&server.host, server.port, ROSTER_PATH)?;
    if text.trim().is_empty() {
        return Err("roster body is empty".into());
    }
    let roster = Roster::parse(&text);
    logf!("Roster: Loaded {} member(s) from {}:{}{}",
        roster.len(), server.host, server.port, ROSTER_PATH);
    Ok(roster)
}
