// src/cli.rs
use std::env;

use crate::config::options::AppOptions;
use crate::data::{Filter, RosterView};
use crate::{export, roster};

pub struct Params {
    pub list: bool,
    pub search: String,
    pub role: String,
    pub codes: Option<Vec<String>>,
    pub all: bool,
    pub exam: Option<String>,
    pub options: AppOptions,
}

impl Params {
    fn new() -> Self {
        Self {
            list: false,
            search: s!(),
            role: s!(),
            codes: None,
            all: false,
            exam: None,
            options: AppOptions::default(),
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let roster = roster::fetch(&params.options.server)?;
    let filter = Filter { query: params.search.clone(), role: params.role.clone() };
    let view = RosterView::filtered(&roster, &filter);

    if params.list {
        for i in 0..view.len() {
            if let Some(m) = view.member(&roster, i) {
                println!("{},{},{}", m.code, m.name, m.role);
            }
        }
        eprintln!("{} member(s)", view.len());
        return Ok(());
    }

    // Export mode: an explicit code list, or every member in the view.
    let selected: Vec<String> = if params.all {
        view.codes(&roster)
    } else {
        let codes = params.codes.clone()
            .ok_or("Specify --list, --codes <c1,c2,…> or --all")?;
        for c in &codes {
            if !roster.has_code(c) {
                return Err(format!("Unknown member code: {}", c).into());
            }
        }
        codes
    };

    let exam = params.exam.clone().ok_or("Missing --exam <code>")?;

    let path = export::export_selection(
        &params.options.server,
        &params.options.export,
        &selected,
        &exam,
    )?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--list" | "-l" => params.list = true,
            "-s" | "--search" => {
                params.search = args.next().ok_or("Missing value for --search")?; }
            "-r" | "--role" => {
                params.role = args.next().ok_or("Missing value for --role")?; }
            "--codes" => {
                let v = args.next().ok_or("Missing value for --codes")?;
                params.codes = Some(parse_code_list(&v));
                params.all = false; }            // override
            "--all" | "-a" => params.all = true,
            "-e" | "--exam" => {
                params.exam = Some(args.next().ok_or("Missing value for --exam")?); }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output directory")?;
                params.options.export.set_dir(&v); }
            "-H" | "--host" => {
                params.options.server.host = args.next().ok_or("Missing value for --host")?; }
            "-p" | "--port" => {
                let v: u16 = args.next().ok_or("Missing value for --port")?.parse()?;
                params.options.server.port = v; }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_code_list(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if out.iter().any(|c| c == part) { continue; }
        out.push(s!(part));
    }
    out
}
